//! User settings: model tier, output language and persona text.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which model the remote capability should use.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum ModelTier {
    /// Quick, inexpensive responses
    #[default]
    #[serde(rename = "gemini-3-flash-preview")]
    Fast,

    /// Slower, more thorough responses
    #[serde(rename = "gemini-3-pro-preview")]
    Complex,
}

impl ModelTier {
    /// Provider model identifier sent with every request.
    pub fn model_id(&self) -> &'static str {
        match self {
            ModelTier::Fast => "gemini-3-flash-preview",
            ModelTier::Complex => "gemini-3-pro-preview",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModelTier::Fast => "Flash (Fast)",
            ModelTier::Complex => "Pro (Complex)",
        }
    }
}

impl FromStr for ModelTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fast" | "flash" | "gemini-3-flash-preview" => Ok(ModelTier::Fast),
            "complex" | "pro" | "gemini-3-pro-preview" => Ok(ModelTier::Complex),
            _ => Err(format!("Invalid model tier: {s}")),
        }
    }
}

/// Language every generated answer must be written in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
    Japanese,
    Spanish,
    French,
}

impl Language {
    /// All supported languages, in menu order.
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Chinese,
        Language::Japanese,
        Language::Spanish,
        Language::French,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "Chinese",
            Language::Japanese => "Japanese",
            Language::Spanish => "Spanish",
            Language::French => "French",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|language| language.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unsupported language: {s}"))
    }
}

/// Settings applied to every remote request.
///
/// A copy is taken when a goal is submitted, so changing settings never
/// affects a request that is already in flight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Model tier used for plan and step requests
    pub model: ModelTier,

    /// Output language
    pub language: Language,

    /// Free-text persona instructions appended to every system instruction
    #[serde(default)]
    pub custom_instructions: String,
}
