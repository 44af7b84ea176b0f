//! History and settings operations for the Assistant.

use log::info;

use super::Assistant;
use crate::{
    error::{Result, WaypointError},
    models::{RecordId, Settings},
    store::save_settings,
};

impl Assistant {
    /// Shows a past record, replacing the current goal, plan, step solutions
    /// and settings. Step requests still in flight for the previous view no
    /// longer reach it.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::InvalidInput` if no record has this id.
    pub fn load_history(&mut self, id: &RecordId) -> Result<()> {
        let record = self.history.get(id).cloned().ok_or_else(|| {
            WaypointError::invalid_input("id").with_reason(format!("no history record with id {id}"))
        })?;

        self.settings = record.settings.clone();
        save_settings(self.store.as_mut(), &self.settings)?;

        self.session.replace();
        self.session.show(&record);
        Ok(())
    }

    /// Shows the most recent record, if there is one.
    pub fn load_latest(&mut self) -> Result<Option<RecordId>> {
        let Some(id) = self.history.latest().map(|record| record.id.clone()) else {
            return Ok(None);
        };
        self.load_history(&id)?;
        Ok(Some(id))
    }

    /// Replaces the settings used for future requests.
    pub fn update_settings(&mut self, settings: Settings) -> Result<()> {
        self.settings = settings;
        save_settings(self.store.as_mut(), &self.settings)
    }

    /// The whole history as indented JSON.
    pub fn export_history(&self) -> Result<Vec<u8>> {
        self.history.export_all()
    }

    /// Imports records exported earlier and returns how many were added.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::Import` if `bytes` is not a JSON array of
    /// records; the history is then unchanged.
    pub fn import_history(&mut self, bytes: &[u8]) -> Result<usize> {
        let count = self.history.import_all(bytes)?;
        self.save_history()?;
        info!("History now holds {} records", self.history.len());
        Ok(count)
    }
}
