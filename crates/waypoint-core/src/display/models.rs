//! Display implementations for domain models.
//!
//! All output is markdown so the CLI can render it richly or print it as
//! plain text.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{GoalStep, HistoryRecord, Language, ModelTier, Plan, Settings, ViewStatus};

impl fmt::Display for ModelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.model_id())
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ViewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewStatus::Error(message) => write!(f, "error: {message}"),
            other => f.write_str(other.as_str()),
        }
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Settings")?;
        writeln!(f)?;
        writeln!(f, "- Model: {}", self.model)?;
        writeln!(f, "- Language: {}", self.language)?;
        if self.custom_instructions.trim().is_empty() {
            writeln!(f, "- Persona: (none)")?;
        } else {
            writeln!(f, "- Persona: {}", self.custom_instructions)?;
        }
        Ok(())
    }
}

impl GoalStep {
    /// Writes the step as a numbered section. `number` is 1-based.
    pub(crate) fn fmt_numbered(&self, f: &mut fmt::Formatter<'_>, number: usize) -> fmt::Result {
        writeln!(f, "### {number}. {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)
    }
}

impl fmt::Display for GoalStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "**{}**: {}", self.title, self.description)
    }
}

impl Plan {
    fn fmt_body(&self, f: &mut fmt::Formatter<'_>, solutions: Option<&HistoryRecord>) -> fmt::Result {
        writeln!(f, "{}", self.short_description)?;
        writeln!(f)?;
        writeln!(f, "> {}", self.motivation)?;
        writeln!(f)?;
        writeln!(f, "## Steps")?;
        writeln!(f)?;

        for (index, step) in self.steps.iter().enumerate() {
            step.fmt_numbered(f, index + 1)?;
            if let Some(solution) = solutions.and_then(|r| r.step_solutions.get(&index)) {
                writeln!(f, "#### Guide")?;
                writeln!(f)?;
                writeln!(f, "{solution}")?;
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Plan")?;
        writeln!(f)?;
        self.fmt_body(f, None)
    }
}

impl fmt::Display for HistoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {} (ID: {})", self.goal, self.id)?;
        writeln!(f)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Model: {}", self.settings.model)?;
        writeln!(f, "- Language: {}", self.settings.language)?;
        writeln!(
            f,
            "- Solved steps: {}/{}",
            self.step_solutions.len(),
            self.plan.steps.len()
        )?;
        writeln!(f)?;
        self.plan.fmt_body(f, Some(self))
    }
}
