//! Status enumerations for the view and for individual step slots.

/// Overall status of the current goal submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewStatus {
    /// Nothing submitted, or the view was reset
    #[default]
    Idle,

    /// A plan request is in flight
    Loading,

    /// A plan is available
    Success,

    /// The last plan request failed with the given message
    Error(String),
}

impl ViewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewStatus::Idle => "idle",
            ViewStatus::Loading => "loading",
            ViewStatus::Success => "success",
            ViewStatus::Error(_) => "error",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewStatus::Loading)
    }
}

/// State of one step's solution slot. An absent slot has no entry at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepSlot {
    /// A solution request is in flight
    Loading,

    /// The solution has arrived
    Present(String),
}

impl StepSlot {
    pub fn solution(&self) -> Option<&str> {
        match self {
            StepSlot::Loading => None,
            StepSlot::Present(text) => Some(text),
        }
    }
}
