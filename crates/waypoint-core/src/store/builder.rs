//! Builder for creating and configuring DecisionStore instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::DecisionStore;
use crate::{
    db::Database,
    error::{Result, WaypointError},
};

/// File name of the decision database.
pub const DATABASE_FILE_NAME: &str = "agent_decisions.db";

/// Builder for creating and configuring DecisionStore instances.
#[derive(Debug, Clone, Default)]
pub struct DecisionStoreBuilder {
    database_path: Option<PathBuf>,
}

impl DecisionStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/waypoint/agent_decisions.db` or
    /// `~/.local/share/waypoint/agent_decisions.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured store, creating the database file and schema
    /// if needed.
    ///
    /// # Errors
    ///
    /// Returns `WaypointError::FileSystem` if the parent directory cannot be
    /// created and `WaypointError::Database` if initialization fails.
    pub async fn build(self) -> Result<DecisionStore> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| WaypointError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening decision store at {}", db_path.display());

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), WaypointError>(())
        })
        .await
        .map_err(|e| WaypointError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(DecisionStore::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("waypoint")
            .place_data_file(DATABASE_FILE_NAME)
            .map_err(|e| WaypointError::XdgDirectory(e.to_string()))
    }
}
