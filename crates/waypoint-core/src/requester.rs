//! Plan requests: turn a raw goal into a structured [`Plan`].

use std::sync::Arc;

use log::{debug, warn};
use serde_json::{json, Value};

use crate::{
    error::{Result, WaypointError},
    models::{Plan, Settings},
    remote::{GenerationRequest, GenerativeModel},
};

/// Range of step counts the model is asked to produce.
pub const STEP_COUNT_RANGE: std::ops::RangeInclusive<usize> = 3..=5;

/// Builds plan requests and validates the model's answers.
#[derive(Clone)]
pub struct PlanRequester {
    model: Arc<dyn GenerativeModel>,
}

impl PlanRequester {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Requests a full plan for `goal`.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::Request` if the model gives no usable payload
    /// (or the call fails) and `WaypointError::Parse` if the payload is not
    /// a complete plan. Nothing is retried.
    pub async fn request_plan(&self, goal: &str, settings: &Settings) -> Result<Plan> {
        let request = Self::build_request(goal, settings);
        debug!("Requesting plan from {}", request.model);

        let text = self
            .model
            .generate(&request)
            .await?
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| WaypointError::request("No response from the model"))?;

        parse_plan(&text)
    }

    /// The request sent for a goal.
    pub fn build_request(goal: &str, settings: &Settings) -> GenerationRequest {
        GenerationRequest {
            model: settings.model.model_id().to_string(),
            system_instruction: system_instruction(settings),
            user_prompt: format!(
                "Please refine this goal: \"{goal}\". Provide a polished description, a \
                 motivational insight, and decompose it into specific, actionable steps."
            ),
            response_schema: Some(plan_schema()),
        }
    }
}

fn system_instruction(settings: &Settings) -> String {
    format!(
        "You are a professional life coach and strategic planner. \
         Your task is to turn raw goals into structured, inspiring descriptions and a clear \
         roadmap of {}-{} specific steps. \
         IMPORTANT: You MUST provide all output in {}. \
         Output must be in JSON format. {}",
        STEP_COUNT_RANGE.start(),
        STEP_COUNT_RANGE.end(),
        settings.language.as_str(),
        settings.custom_instructions
    )
    .trim_end()
    .to_string()
}

/// Response schema in the provider's OpenAPI dialect.
pub fn plan_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "shortDescription": {
                "type": "STRING",
                "description": "A concise, professional description of the goal."
            },
            "motivation": {
                "type": "STRING",
                "description": "A one-sentence motivational insight."
            },
            "steps": {
                "type": "ARRAY",
                "description": "A list of actionable steps to achieve the goal.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": {
                            "type": "STRING",
                            "description": "A short, punchy title for the step."
                        },
                        "description": {
                            "type": "STRING",
                            "description": "A brief explanation of how to execute this step."
                        }
                    },
                    "required": ["title", "description"]
                }
            }
        },
        "required": ["shortDescription", "motivation", "steps"]
    })
}

/// Parses the model's JSON answer into a plan.
///
/// All fields are required and the step list must not be empty. Step counts
/// outside [`STEP_COUNT_RANGE`] are accepted but reported.
pub fn parse_plan(text: &str) -> Result<Plan> {
    let plan: Plan = serde_json::from_str(text)
        .map_err(|e| WaypointError::parse(format!("not a plan: {e}")))?;

    if plan.steps.is_empty() {
        return Err(WaypointError::parse("plan has no steps"));
    }
    if !STEP_COUNT_RANGE.contains(&plan.steps.len()) {
        warn!(
            "Model returned {} steps, expected {}-{}",
            plan.steps.len(),
            STEP_COUNT_RANGE.start(),
            STEP_COUNT_RANGE.end()
        );
    }

    Ok(plan)
}
