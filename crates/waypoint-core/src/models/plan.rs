//! Plan model definition and related functionality.

use serde::{Deserialize, Serialize};

/// One actionable step of a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalStep {
    /// Short, punchy title of the step
    pub title: String,

    /// Brief explanation of how to execute the step
    pub description: String,
}

impl GoalStep {
    /// The `title: description` form sent to the step solver.
    pub fn summary(&self) -> String {
        format!("{}: {}", self.title, self.description)
    }
}

/// Structured plan for a goal, as returned by the remote model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// Concise, professional description of the goal
    pub short_description: String,

    /// One-sentence motivational insight
    pub motivation: String,

    /// Steps in execution order
    pub steps: Vec<GoalStep>,
}

impl Plan {
    /// Step at a 0-based index, if any.
    pub fn step(&self, index: usize) -> Option<&GoalStep> {
        self.steps.get(index)
    }

    /// Context handed to the step solver: the short description, or the raw
    /// goal when the description is blank.
    pub fn goal_context<'a>(&'a self, goal: &'a str) -> &'a str {
        if self.short_description.trim().is_empty() {
            goal
        } else {
            &self.short_description
        }
    }
}
