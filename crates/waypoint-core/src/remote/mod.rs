//! Remote generative-model capability.
//!
//! The planner and step solver only ever talk to a [`GenerativeModel`]: one
//! blocking request/response exchange per call, with the answer either a
//! schema-conformant JSON document or free text. [`GeminiClient`] is the
//! production implementation; tests substitute scripted models.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{Result, WaypointError};

pub mod gemini;

pub use gemini::{GeminiClient, GeminiConfig};

/// A single structured-generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Provider model identifier
    pub model: String,

    /// Persona and output rules
    pub system_instruction: String,

    /// The user-facing prompt
    pub user_prompt: String,

    /// When present, the response must be JSON conforming to this schema
    pub response_schema: Option<Value>,
}

/// A generative-AI service able to answer [`GenerationRequest`]s.
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Runs the request to completion.
    ///
    /// `Ok(None)` means the service answered without any usable text.
    /// Transport failures are reported as
    /// [`WaypointError::Request`](crate::WaypointError::Request).
    async fn generate(&self, request: &GenerationRequest) -> Result<Option<String>>;
}

/// Stand-in used when no credentials are configured.
///
/// Everything that does not talk to the model keeps working; every request
/// fails with the configuration problem.
#[derive(Debug, Clone)]
pub struct UnconfiguredModel {
    reason: String,
}

impl UnconfiguredModel {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl GenerativeModel for UnconfiguredModel {
    async fn generate(&self, _request: &GenerationRequest) -> Result<Option<String>> {
        Err(WaypointError::configuration(self.reason.clone()))
    }
}
