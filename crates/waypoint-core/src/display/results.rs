//! Result wrapper types for displaying operation outcomes.

use std::{fmt, path::PathBuf};

use crate::models::{GoalStep, HistoryRecord};

/// The outcome of a goal submission: the new history record and its plan.
///
/// # Examples
///
/// ```rust
/// use jiff::Timestamp;
/// use waypoint_core::{display::PlanResult, GoalStep, HistoryRecord, Plan, Settings};
///
/// let record = HistoryRecord::new(
///     "Run a marathon".to_string(),
///     Plan {
///         short_description: "Finish a marathon".to_string(),
///         motivation: "One kilometre at a time.".to_string(),
///         steps: vec![GoalStep {
///             title: "Buy shoes".to_string(),
///             description: "Get fitted at a running store".to_string(),
///         }],
///     },
///     Settings::default(),
///     Timestamp::from_millisecond(1_700_000_000_000).unwrap(),
/// );
///
/// let output = PlanResult::new(&record).to_string();
/// assert!(output.contains("Saved plan to history with ID: 1700000000000"));
/// ```
pub struct PlanResult<'a> {
    pub record: &'a HistoryRecord,
}

impl<'a> PlanResult<'a> {
    pub fn new(record: &'a HistoryRecord) -> Self {
        Self { record }
    }
}

impl fmt::Display for PlanResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Saved plan to history with ID: {}", self.record.id)?;
        writeln!(f)?;
        write!(f, "{}", self.record.plan)
    }
}

/// A solved step, ready for display. `index` is 0-based.
pub struct StepGuide<'a> {
    pub index: usize,
    pub step: &'a GoalStep,
    pub solution: &'a str,
}

impl<'a> StepGuide<'a> {
    pub fn new(index: usize, step: &'a GoalStep, solution: &'a str) -> Self {
        Self {
            index,
            step,
            solution,
        }
    }
}

impl fmt::Display for StepGuide<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Step {}: {}", self.index + 1, self.step.title)?;
        writeln!(f)?;
        writeln!(f, "> {}", self.step.description)?;
        writeln!(f)?;
        writeln!(f, "{}", self.solution)
    }
}

/// Outcome of writing the history export file.
pub struct ExportResult {
    pub path: PathBuf,
    pub count: usize,
}

impl fmt::Display for ExportResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Exported {} history records to {}",
            self.count,
            self.path.display()
        )
    }
}

/// Outcome of importing a history file.
pub struct ImportResult {
    pub count: usize,
    pub total: usize,
}

impl fmt::Display for ImportResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Imported {} history records ({} in total)",
            self.count, self.total
        )
    }
}
