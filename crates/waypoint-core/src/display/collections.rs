//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::HistoryRecord;

/// Newtype wrapper for displaying history records as a summary list.
///
/// Each record is shown with its id, creation time and how many of its steps
/// have been solved. Handles empty collections gracefully.
pub struct HistoryList<'a>(pub &'a [HistoryRecord]);

impl fmt::Display for HistoryList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No history yet.");
        }

        for record in self.0 {
            writeln!(f, "## {} (ID: {})", record.goal, record.id)?;
            writeln!(f)?;
            writeln!(f, "- **Plan**: {}", record.plan.short_description)?;
            writeln!(f, "- **Created**: {}", LocalDateTime(&record.created_at))?;
            writeln!(
                f,
                "- **Progress**: {}/{} steps solved",
                record.step_solutions.len(),
                record.plan.steps.len()
            )?;
            writeln!(f)?;
        }
        Ok(())
    }
}
