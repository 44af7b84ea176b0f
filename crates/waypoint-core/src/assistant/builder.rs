//! Builder for creating and configuring Assistant instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;
use tokio::task;

use super::Assistant;
use crate::{
    error::{Result, WaypointError},
    remote::{GeminiClient, GeminiConfig, GenerativeModel, UnconfiguredModel},
    store::Database,
};

/// Builder for creating and configuring Assistant instances.
#[derive(Clone, Default)]
pub struct AssistantBuilder {
    database_path: Option<PathBuf>,
    model: Option<Arc<dyn GenerativeModel>>,
}

impl AssistantBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/waypoint/waypoint.db` or
    /// `~/.local/share/waypoint/waypoint.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the model used for plan and step requests.
    ///
    /// If not specified, a [`GeminiClient`] is configured from the
    /// environment. Without credentials the assistant still opens, but every
    /// remote request fails with a configuration error.
    pub fn with_model(mut self, model: Arc<dyn GenerativeModel>) -> Self {
        self.model = Some(model);
        self
    }

    /// Builds the configured assistant, loading stored settings and history.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::FileSystem` if the database directory cannot
    /// be created and `WaypointError::Database` if database initialization
    /// fails.
    pub async fn build(self) -> Result<Assistant> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| WaypointError::FileSystem {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let model = match self.model {
            Some(model) => model,
            None => Self::default_model()?,
        };

        debug!("Opening database at {}", db_path.display());
        let database = task::spawn_blocking(move || Database::new(&db_path))
            .await
            .map_err(|e| WaypointError::Configuration {
                message: format!("Task join error: {e}"),
            })??;

        Assistant::new(Box::new(database), model)
    }

    fn default_model() -> Result<Arc<dyn GenerativeModel>> {
        match GeminiConfig::from_env() {
            Ok(config) => Ok(Arc::new(GeminiClient::new(config)?)),
            Err(e) => {
                debug!("Remote model unavailable: {e}");
                Ok(Arc::new(UnconfiguredModel::new(e.to_string())))
            }
        }
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("waypoint")
            .place_data_file("waypoint.db")
            .map_err(|e| WaypointError::XdgDirectory(e.to_string()))
    }
}
