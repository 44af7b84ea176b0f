//! Core library for the Waypoint goal planner.
//!
//! Waypoint turns a free-text goal into a short motivational plan of three to
//! five steps using a generative model, and can then produce a detailed guide
//! for any single step. Plans are cached per goal and settings, every
//! submission is kept in a local history, and solved steps are folded back
//! into that history.
//!
//! # Layout
//!
//! - [`assistant`]: the view-state controller tying everything together
//! - [`requester`] and [`solver`]: prompt construction and response parsing
//! - [`remote`]: the generative-model seam and its Gemini implementation
//! - [`cache`] and [`history`]: persisted plans and past submissions
//! - [`store`]: the SQLite-backed key-value store underneath
//! - [`display`]: markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```no_run
//! use waypoint_core::AssistantBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut assistant = AssistantBuilder::new()
//!     .with_database_path(Some("waypoint.db"))
//!     .build()
//!     .await?;
//!
//! let record = assistant.submit_goal("Learn to play the piano").await?;
//! println!("{}", record.plan);
//!
//! if let Some(guide) = assistant.select_step(0).await? {
//!     println!("{guide}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod assistant;
pub mod cache;
pub mod display;
pub mod error;
pub mod history;
pub mod models;
pub mod remote;
pub mod requester;
pub mod solver;
pub mod store;

// Re-export commonly used types
pub use assistant::{
    Assistant, AssistantBuilder, PlanTicket, StepSelection, StepTicket, Submission,
};
pub use display::{
    ExportResult, HistoryList, ImportResult, LocalDateTime, OperationStatus, PlanResult,
    StepGuide,
};
pub use error::{Result, WaypointError};
pub use history::{export_file_name, HistoryLedger};
pub use models::{
    GoalStep, HistoryRecord, Language, MatchKey, ModelTier, Plan, RecordId, Settings, StepSlot,
    ViewStatus,
};
pub use remote::{GeminiClient, GeminiConfig, GenerationRequest, GenerativeModel};
pub use requester::PlanRequester;
pub use solver::StepSolver;
pub use store::{Database, KeyValueStore};
