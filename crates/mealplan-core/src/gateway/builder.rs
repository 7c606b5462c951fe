//! Builder for creating and configuring SQLite gateway instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::SqliteGateway;
use crate::{
    db::Database,
    error::{Result, WizardError},
};

/// Builder for creating and configuring [`SqliteGateway`] instances.
#[derive(Debug, Clone, Default)]
pub struct GatewayBuilder {
    database_path: Option<PathBuf>,
}

impl GatewayBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/mealplan/mealplan.db` or
    /// `~/.local/share/mealplan/mealplan.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the gateway, creating the database file and schema if needed.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::FileSystem` if the database directory cannot be
    /// created and `WizardError::Database` if schema initialization fails.
    pub async fn build(self) -> Result<SqliteGateway> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| WizardError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || Database::new(&db_path_clone).map(drop))
            .await
            .map_err(WizardError::join)??;

        Ok(SqliteGateway::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("mealplan")
            .place_data_file("mealplan.db")
            .map_err(|e| WizardError::XdgDirectory(e.to_string()))
    }
}
