//! History ledger: past submissions, most recent first.
//!
//! Records are only ever prepended, and only ever changed by merging in
//! solved steps. Export and import use the JSON array format of
//! [`HistoryRecord`].

use jiff::{civil::Date, Timestamp};
use log::{info, warn};
use serde_json::Value;

use crate::{
    error::{Result, WaypointError},
    models::{HistoryRecord, MatchKey, RecordId},
    store::{KeyValueStore, HISTORY_KEY},
};

/// File name offered for a history export made on `date`.
pub fn export_file_name(date: Date) -> String {
    format!("goal_crafter_history_{date}.json")
}

/// Append-only log of history records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryLedger {
    records: Vec<HistoryRecord>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<HistoryRecord>) -> Self {
        Self { records }
    }

    /// Loads the ledger from the store. A missing entry yields an empty
    /// ledger; an unreadable one is reported and replaced by an empty ledger.
    pub fn load(store: &dyn KeyValueStore) -> Result<Self> {
        let Some(raw) = store.get(HISTORY_KEY)? else {
            return Ok(Self::new());
        };

        match serde_json::from_str::<Vec<HistoryRecord>>(&raw) {
            Ok(records) => Ok(Self { records }),
            Err(e) => {
                warn!("Stored history is unreadable, starting empty: {e}");
                Ok(Self::new())
            }
        }
    }

    /// Writes the whole ledger to the store.
    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        let value = serde_json::to_string(&self.records)?;
        store.set(HISTORY_KEY, &value)
    }

    /// Records, most recent first.
    pub fn records(&self) -> &[HistoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &RecordId) -> Option<&HistoryRecord> {
        self.records.iter().find(|record| &record.id == id)
    }

    /// Most recently added record.
    pub fn latest(&self) -> Option<&HistoryRecord> {
        self.records.first()
    }

    /// A creation time, in whole milliseconds, strictly later than the
    /// newest record's.
    ///
    /// Record ids derive from creation times, so this keeps ids unique even
    /// when two records are created within the same millisecond.
    pub fn mint_timestamp(&self) -> Timestamp {
        let now = Timestamp::now().as_millisecond();
        let next = self
            .records
            .iter()
            .map(|record| record.created_at.as_millisecond())
            .max()
            .map_or(now, |newest| now.max(newest + 1));

        Timestamp::from_millisecond(next).unwrap_or_else(|_| Timestamp::now())
    }

    /// Prepends a record.
    pub fn append(&mut self, record: HistoryRecord) {
        self.records.insert(0, record);
    }

    /// Adds a solved step to every record matching `key`.
    ///
    /// Returns the number of records updated.
    pub fn merge_step_solution(&mut self, key: &MatchKey, index: usize, solution: &str) -> usize {
        let mut updated = 0;
        for record in self.records.iter_mut().filter(|record| record.matches(key)) {
            record.step_solutions.insert(index, solution.to_string());
            updated += 1;
        }
        updated
    }

    /// Serializes every record as an indented JSON array.
    pub fn export_all(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(&self.records)?)
    }

    /// Prepends the records in `bytes`, keeping their order.
    ///
    /// The input must be a JSON array of records. Nothing is changed unless
    /// every element decodes. Records are not de-duplicated.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::Import` if the input is not a JSON array or an
    /// element is not a valid record.
    pub fn import_all(&mut self, bytes: &[u8]) -> Result<usize> {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|e| WaypointError::import(format!("file is not valid JSON: {e}")))?;

        let Value::Array(items) = value else {
            return Err(WaypointError::import("expected a JSON array of records"));
        };

        let imported = items
            .into_iter()
            .enumerate()
            .map(|(position, item)| {
                serde_json::from_value::<HistoryRecord>(item).map_err(|e| {
                    WaypointError::import(format!("entry {position} is not a record: {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let count = imported.len();
        let mut merged = imported;
        merged.append(&mut self.records);
        self.records = merged;
        info!("Imported {count} history records");
        Ok(count)
    }
}
