//! Builder for creating and configuring Tracker instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Tracker;
use crate::{
    db::Database,
    error::{ChallengeError, Result},
};

/// Ledger category used when none is configured.
pub const DEFAULT_LEDGER_CATEGORY: &str = "Savings";

/// Builder for creating and configuring Tracker instances.
#[derive(Debug, Clone)]
pub struct TrackerBuilder {
    database_path: Option<PathBuf>,
    ledger_category: String,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            ledger_category: DEFAULT_LEDGER_CATEGORY.to_string(),
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/planor/planor.db` or `~/.local/share/planor/planor.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the category attached to ledger entries mirrored from deposits.
    pub fn with_ledger_category(mut self, category: impl Into<String>) -> Self {
        self.ledger_category = category.into();
        self
    }

    /// Builds the configured tracker instance.
    ///
    /// # Errors
    ///
    /// Returns `ChallengeError::InvalidInput` if the ledger category is blank
    /// Returns `ChallengeError::FileSystem` if the database path is invalid
    /// Returns `ChallengeError::Database` if database initialization fails
    pub async fn build(self) -> Result<Tracker> {
        if self.ledger_category.trim().is_empty() {
            return Err(
                ChallengeError::invalid_input("ledger_category").with_reason("must not be empty")
            );
        }

        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ChallengeError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), ChallengeError>(())
        })
        .await
        .map_err(ChallengeError::join)??;

        Ok(Tracker::new(db_path, self.ledger_category))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("planor")
            .place_data_file("planor.db")
            .map_err(|e| ChallengeError::XdgDirectory(e.to_string()))
    }
}

impl Default for TrackerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
