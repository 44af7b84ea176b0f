//! Step solutions: detailed guidance for a single plan step.

use std::sync::Arc;

use log::debug;

use crate::{
    error::{Result, WaypointError},
    models::{GoalStep, Settings},
    remote::{GenerationRequest, GenerativeModel},
};

/// Requests free-text guidance for one step of a plan.
#[derive(Clone)]
pub struct StepSolver {
    model: Arc<dyn GenerativeModel>,
}

impl StepSolver {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Requests a detailed, actionable solution for `step`.
    ///
    /// `goal_context` describes the overall goal, usually the plan's short
    /// description.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::Request` if the model returns nothing (or only
    /// whitespace) or the call fails.
    pub async fn request_step_solution(
        &self,
        goal_context: &str,
        step: &GoalStep,
        settings: &Settings,
    ) -> Result<String> {
        let request = Self::build_request(goal_context, step, settings);
        debug!("Requesting solution for step '{}'", step.title);

        self.model
            .generate(&request)
            .await?
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| WaypointError::request("Could not generate solution for this step"))
    }

    pub fn build_request(goal_context: &str, step: &GoalStep, settings: &Settings) -> GenerationRequest {
        let system_instruction = format!(
            "You are an expert tactical advisor. \
             Your task is to provide clear, practical 'how-to' instructions for a specific step. \
             IMPORTANT: You MUST provide all output in {}. {}",
            settings.language.as_str(),
            settings.custom_instructions
        )
        .trim_end()
        .to_string();

        GenerationRequest {
            model: settings.model.model_id().to_string(),
            system_instruction,
            user_prompt: format!(
                "The overall goal is: \"{goal_context}\". I am at the following step: \"{}\". \
                 Please provide a detailed, actionable solution.",
                step.summary()
            ),
            response_schema: None,
        }
    }
}
