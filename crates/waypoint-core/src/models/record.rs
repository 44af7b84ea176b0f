//! History record model definition.

use std::{collections::BTreeMap, fmt};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Plan, Settings};

/// Opaque, time-derived identifier of a history record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    /// Derive an id from the record's creation time (epoch milliseconds).
    pub fn from_timestamp(timestamp: Timestamp) -> Self {
        Self(timestamp.as_millisecond().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A persisted snapshot of one goal submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub id: RecordId,

    /// Goal text exactly as the user submitted it
    pub goal: String,

    /// The plan produced for the goal
    #[serde(rename = "result")]
    pub plan: Plan,

    /// Solved steps, keyed by 0-based step index
    #[serde(default)]
    pub step_solutions: BTreeMap<usize, String>,

    /// Settings in effect when the goal was submitted
    pub settings: Settings,

    /// Creation time (UTC), stored as epoch milliseconds
    #[serde(with = "jiff::fmt::serde::timestamp::millisecond::required")]
    pub created_at: Timestamp,
}

impl HistoryRecord {
    pub fn new(goal: String, plan: Plan, settings: Settings, created_at: Timestamp) -> Self {
        Self {
            id: RecordId::from_timestamp(created_at),
            goal,
            plan,
            step_solutions: BTreeMap::new(),
            settings,
            created_at,
        }
    }

    /// The key step solutions are merged under.
    pub fn match_key(&self) -> MatchKey {
        MatchKey {
            goal: self.goal.clone(),
            short_description: self.plan.short_description.clone(),
        }
    }

    pub fn matches(&self, key: &MatchKey) -> bool {
        self.goal == key.goal && self.plan.short_description == key.short_description
    }
}

/// Identifies the records a solved step belongs to.
///
/// Records match on goal text plus the plan's short description. Two
/// submissions of the same goal that produced the same description (a cache
/// hit, for instance) therefore share solved steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchKey {
    pub goal: String,
    pub short_description: String,
}
