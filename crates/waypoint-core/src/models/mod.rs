//! Data models for settings, plans and history records.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping data structures apart from
//! presentation.
//!
//! All models serialize with camelCase keys so that history files exported by
//! the browser version of the planner import unchanged:
//!
//! ```rust
//! use waypoint_core::models::{GoalStep, Plan};
//!
//! let plan: Plan = serde_json::from_str(
//!     r#"{"shortDescription":"Play piano","motivation":"Go!",
//!         "steps":[{"title":"Scales","description":"Daily practice"}]}"#,
//! )
//! .unwrap();
//! assert_eq!(plan.steps[0], GoalStep {
//!     title: "Scales".to_string(),
//!     description: "Daily practice".to_string(),
//! });
//! ```

pub mod plan;
pub mod record;
pub mod settings;
pub mod status;


pub use plan::{GoalStep, Plan};
pub use record::{HistoryRecord, MatchKey, RecordId};
pub use settings::{Language, ModelTier, Settings};
pub use status::{StepSlot, ViewStatus};
