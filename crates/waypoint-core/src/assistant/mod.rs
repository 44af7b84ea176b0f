//! High-level assistant API: the view-state controller.
//!
//! [`Assistant`] owns the settings, the history ledger and the current
//! session, and is the only component that writes them to the store.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Assistant    │    │ PlanRequester / │    │ GenerativeModel │
//! │  (session,      │───▶│ StepSolver      │───▶│   (remote)      │
//! │   history)      │    │                 │    │                 │
//! └────────┬────────┘    └─────────────────┘    └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  KeyValueStore  │  settings, history, cached plans
//! └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Assistant`] instances
//! - [`submission`]: Goal submission and plan tickets
//! - [`steps`]: Step selection and step tickets
//! - [`history_ops`]: History loading, import/export and settings
//!
//! ## Two-phase operations
//!
//! Remote calls are split into a `begin_*` step that updates the view and
//! hands out a ticket, the ticket's `run`, which only borrows the requester
//! or solver, and a `finish_*`/`complete_*` step that applies the result.
//! Several step tickets can therefore be awaited at once and completed in
//! any order. [`Assistant::submit_goal`] and [`Assistant::select_step`] run
//! all three phases for callers that don't need that.
//!
//! ```rust,no_run
//! use waypoint_core::AssistantBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut assistant = AssistantBuilder::new().build().await?;
//!
//! let record = assistant.submit_goal("Learn piano").await?;
//! println!("{}", record.plan);
//!
//! if let Some(guide) = assistant.select_step(0).await? {
//!     println!("{guide}");
//! }
//! # Ok(())
//! # }
//! ```

use std::{collections::BTreeMap, sync::Arc};

use crate::{
    error::Result,
    history::HistoryLedger,
    models::{HistoryRecord, Plan, RecordId, Settings, StepSlot, ViewStatus},
    remote::GenerativeModel,
    requester::PlanRequester,
    solver::StepSolver,
    store::{load_settings, save_settings, KeyValueStore},
};

pub mod builder;
pub mod history_ops;
pub mod steps;
pub mod submission;


pub use builder::AssistantBuilder;
pub use steps::{StepSelection, StepTicket};
pub use submission::{PlanTicket, Submission};

/// What the user is currently looking at.
#[derive(Debug, Default)]
pub(crate) struct Session {
    /// Bumped whenever the session is replaced, so late plan results can
    /// tell they are no longer wanted
    generation: u64,
    goal: String,
    plan: Option<Plan>,
    record_id: Option<RecordId>,
    steps: BTreeMap<usize, StepSlot>,
    active_step: Option<usize>,
    status: ViewStatus,
}

impl Session {
    /// Discards everything and returns to `Idle`.
    fn replace(&mut self) {
        let generation = self.generation + 1;
        *self = Session {
            generation,
            ..Session::default()
        };
    }

    /// Shows a record, including any steps it already has solutions for.
    fn show(&mut self, record: &HistoryRecord) {
        self.goal = record.goal.clone();
        self.plan = Some(record.plan.clone());
        self.record_id = Some(record.id.clone());
        self.steps = record
            .step_solutions
            .iter()
            .map(|(index, text)| (*index, StepSlot::Present(text.clone())))
            .collect();
        self.active_step = None;
        self.status = ViewStatus::Success;
    }
}

/// Goal-planning assistant: settings, history and the current session.
pub struct Assistant {
    store: Box<dyn KeyValueStore>,
    requester: PlanRequester,
    solver: StepSolver,
    settings: Settings,
    history: HistoryLedger,
    session: Session,
}

impl Assistant {
    /// Creates an assistant over `store`, loading stored settings and
    /// history (or their defaults).
    pub fn new(store: Box<dyn KeyValueStore>, model: Arc<dyn GenerativeModel>) -> Result<Self> {
        let settings = load_settings(store.as_ref())?;
        let history = HistoryLedger::load(store.as_ref())?;

        Ok(Self {
            store,
            requester: PlanRequester::new(Arc::clone(&model)),
            solver: StepSolver::new(model),
            settings,
            history,
            session: Session::default(),
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }

    pub fn status(&self) -> &ViewStatus {
        &self.session.status
    }

    /// Goal of the current session (empty when idle).
    pub fn goal(&self) -> &str {
        &self.session.goal
    }

    pub fn plan(&self) -> Option<&Plan> {
        self.session.plan.as_ref()
    }

    /// Id of the record the current plan belongs to.
    pub fn record_id(&self) -> Option<&RecordId> {
        self.session.record_id.as_ref()
    }

    pub fn step_slot(&self, index: usize) -> Option<&StepSlot> {
        self.session.steps.get(&index)
    }

    /// Most recently selected step.
    pub fn active_step(&self) -> Option<usize> {
        self.session.active_step
    }

    pub fn requester(&self) -> &PlanRequester {
        &self.requester
    }

    pub fn solver(&self) -> &StepSolver {
        &self.solver
    }

    /// Returns to the idle view. Requests still in flight are not
    /// cancelled; their results no longer reach the view.
    pub fn reset(&mut self) {
        self.session.replace();
    }

    /// Writes settings and history to the store.
    pub fn flush(&mut self) -> Result<()> {
        save_settings(self.store.as_mut(), &self.settings)?;
        self.history.save(self.store.as_mut())
    }

    fn save_history(&mut self) -> Result<()> {
        self.history.save(self.store.as_mut())
    }
}
