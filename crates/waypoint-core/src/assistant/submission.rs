//! Goal submission for the Assistant.

use log::info;

use super::Assistant;
use crate::{
    cache,
    error::{Result, WaypointError},
    models::{HistoryRecord, Plan, Settings, ViewStatus},
    requester::PlanRequester,
};

/// Outcome of [`Assistant::begin_submission`].
#[derive(Debug)]
pub enum Submission {
    /// Served from the cache; the record is already in the history.
    Ready(HistoryRecord),

    /// A remote plan request is needed.
    Pending(PlanTicket),
}

/// A plan request waiting to be run.
#[derive(Debug, Clone)]
pub struct PlanTicket {
    generation: u64,
    goal: String,
    settings: Settings,
}

impl PlanTicket {
    pub fn goal(&self) -> &str {
        &self.goal
    }

    /// Settings snapshot taken at submission time.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Performs the remote call.
    pub async fn run(&self, requester: &PlanRequester) -> Result<Plan> {
        requester.request_plan(&self.goal, &self.settings).await
    }
}

impl Assistant {
    /// Submits a goal and waits for its plan.
    ///
    /// A cached plan is returned without any remote call; either way a new
    /// history record is created.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::InvalidState` while another submission is
    /// loading, `WaypointError::InvalidInput` for a blank goal, and the
    /// requester's or the store's error if the plan cannot be obtained or
    /// saved (the view then shows the error).
    pub async fn submit_goal(&mut self, goal: &str) -> Result<HistoryRecord> {
        match self.begin_submission(goal)? {
            Submission::Ready(record) => Ok(record),
            Submission::Pending(ticket) => {
                let result = ticket.run(&self.requester).await;
                self.finish_submission(ticket, result)
            }
        }
    }

    /// First phase of a submission: validate, consult the cache, and either
    /// finish immediately or enter `Loading`.
    pub fn begin_submission(&mut self, goal: &str) -> Result<Submission> {
        if self.session.status.is_loading() {
            return Err(WaypointError::InvalidState(
                "a plan request is already in progress".to_string(),
            ));
        }
        if goal.trim().is_empty() {
            return Err(WaypointError::invalid_input("goal").with_reason("goal must not be empty"));
        }

        let settings = self.settings.clone();
        info!("Submitting goal '{}'", goal.trim());

        if let Some(plan) = cache::lookup(self.store.as_ref(), goal, &settings)? {
            let record = self.record_plan(goal, plan, settings)?;
            self.session.replace();
            self.session.show(&record);
            return Ok(Submission::Ready(record));
        }

        self.session.replace();
        self.session.goal = goal.to_string();
        self.session.status = ViewStatus::Loading;

        Ok(Submission::Pending(PlanTicket {
            generation: self.session.generation,
            goal: goal.to_string(),
            settings,
        }))
    }

    /// Last phase of a submission: cache and record the plan, or show the
    /// error. A plan that cannot be persisted is shown as an error too.
    ///
    /// A ticket whose session was replaced in the meantime (by a reset or a
    /// history load) still caches and records its plan, but leaves the view
    /// alone.
    pub fn finish_submission(
        &mut self,
        ticket: PlanTicket,
        result: Result<Plan>,
    ) -> Result<HistoryRecord> {
        let current = self.session.generation == ticket.generation;

        let outcome = result.and_then(|plan| {
            cache::store(self.store.as_mut(), &ticket.goal, &ticket.settings, &plan)?;
            self.record_plan(&ticket.goal, plan, ticket.settings.clone())
        });

        match outcome {
            Ok(record) => {
                if current {
                    self.session.show(&record);
                } else {
                    info!("Plan for '{}' arrived after the view moved on", ticket.goal);
                }
                Ok(record)
            }
            Err(e) => {
                if current {
                    self.session.status = ViewStatus::Error(e.to_string());
                }
                Err(e)
            }
        }
    }

    /// Creates, prepends and persists a record for a freshly obtained plan.
    fn record_plan(&mut self, goal: &str, plan: Plan, settings: Settings) -> Result<HistoryRecord> {
        let created_at = self.history.mint_timestamp();
        let record = HistoryRecord::new(goal.to_string(), plan, settings, created_at);
        self.history.append(record.clone());
        self.save_history()?;
        Ok(record)
    }
}
