//! Step selection for the Assistant.

use log::{debug, error};

use super::Assistant;
use crate::{
    error::{Result, WaypointError},
    models::{GoalStep, MatchKey, RecordId, Settings, StepSlot},
    solver::StepSolver,
};

/// Outcome of [`Assistant::begin_step`].
#[derive(Debug)]
pub enum StepSelection {
    /// The step was solved before; no remote call needed.
    Resolved(String),

    /// A request for this step is already in flight.
    InFlight,

    /// A remote request is needed.
    Pending(StepTicket),
}

/// A step-solution request waiting to be run.
///
/// The ticket remembers which record and which step it belongs to; its
/// result only reaches the view if that record is still on screen.
#[derive(Debug, Clone)]
pub struct StepTicket {
    record_id: RecordId,
    index: usize,
    goal_context: String,
    step: GoalStep,
    settings: Settings,
    match_key: MatchKey,
}

impl StepTicket {
    /// 0-based step index.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn record_id(&self) -> &RecordId {
        &self.record_id
    }

    pub fn step(&self) -> &GoalStep {
        &self.step
    }

    /// Performs the remote call.
    pub async fn run(&self, solver: &StepSolver) -> Result<String> {
        solver
            .request_step_solution(&self.goal_context, &self.step, &self.settings)
            .await
    }
}

impl Assistant {
    /// Selects a step and returns its solution, fetching it if needed.
    ///
    /// Returns `Ok(None)` when the request failed (the failure is logged and
    /// the step can be selected again) or when another request for the same
    /// step is still in flight.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::InvalidState` when no plan is shown and
    /// `WaypointError::InvalidInput` for an index outside the plan. A failure
    /// to save the history is returned after the step slot is filled.
    pub async fn select_step(&mut self, index: usize) -> Result<Option<String>> {
        match self.begin_step(index)? {
            StepSelection::Resolved(solution) => Ok(Some(solution)),
            StepSelection::InFlight => Ok(None),
            StepSelection::Pending(ticket) => {
                let result = ticket.run(&self.solver).await;
                self.complete_step(ticket, result)
            }
        }
    }

    /// First phase of a step selection. Marks the step as loading unless it
    /// is already solved or loading.
    pub fn begin_step(&mut self, index: usize) -> Result<StepSelection> {
        let session = &mut self.session;
        let (Some(plan), Some(record_id)) = (&session.plan, &session.record_id) else {
            return Err(WaypointError::InvalidState(
                "no plan is shown; submit a goal or load one from history".to_string(),
            ));
        };

        let step = plan.step(index).ok_or_else(|| {
            WaypointError::invalid_input("step").with_reason(format!(
                "step {} does not exist; the plan has {} steps",
                index + 1,
                plan.steps.len()
            ))
        })?;

        session.active_step = Some(index);
        match session.steps.get(&index) {
            Some(StepSlot::Present(solution)) => {
                return Ok(StepSelection::Resolved(solution.clone()));
            }
            Some(StepSlot::Loading) => return Ok(StepSelection::InFlight),
            None => {}
        }

        let ticket = StepTicket {
            record_id: record_id.clone(),
            index,
            goal_context: plan.goal_context(&session.goal).to_string(),
            step: step.clone(),
            settings: self.settings.clone(),
            match_key: MatchKey {
                goal: session.goal.clone(),
                short_description: plan.short_description.clone(),
            },
        };
        session.steps.insert(index, StepSlot::Loading);

        Ok(StepSelection::Pending(ticket))
    }

    /// Last phase of a step selection.
    ///
    /// A solution is merged into every matching history record and, if the
    /// ticket's record is still shown, into its step slot. A failure is
    /// logged and the slot goes back to unresolved. Only the ticket's own
    /// step is touched. The slot is settled before the history is saved, so
    /// a storage error never leaves it loading.
    pub fn complete_step(
        &mut self,
        ticket: StepTicket,
        result: Result<String>,
    ) -> Result<Option<String>> {
        let relevant = self.session.record_id.as_ref() == Some(&ticket.record_id);

        let solution = match result {
            Ok(solution) => solution,
            Err(e) => {
                error!("Failed to fetch solution for step {}: {e}", ticket.index + 1);
                if relevant && self.session.steps.get(&ticket.index) == Some(&StepSlot::Loading) {
                    self.session.steps.remove(&ticket.index);
                }
                return Ok(None);
            }
        };

        if relevant {
            if let Some(StepSlot::Present(existing)) = self.session.steps.get(&ticket.index) {
                return Ok(Some(existing.clone()));
            }
        }

        let updated =
            self.history
                .merge_step_solution(&ticket.match_key, ticket.index, &solution);
        debug!(
            "Merged solution for step {} into {updated} history records",
            ticket.index + 1
        );

        if relevant {
            self.session
                .steps
                .insert(ticket.index, StepSlot::Present(solution.clone()));
        } else {
            debug!(
                "Solution for step {} of record {} arrived after the view moved on",
                ticket.index + 1,
                ticket.record_id
            );
        }
        self.save_history()?;

        Ok(relevant.then_some(solution))
    }
}
