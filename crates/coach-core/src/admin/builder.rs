//! Builder for creating and configuring Admin instances.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task;

use super::Admin;
use crate::client::{ApiClient, DEFAULT_BASE_URL};
use crate::db::Database;
use crate::decode::DecodeMode;
use crate::error::{AdminError, Result};
use crate::notify::{LogNotifier, Notifier};

/// Builder for creating and configuring Admin instances.
#[derive(Clone)]
pub struct AdminBuilder {
    base_url: Option<String>,
    database_path: Option<PathBuf>,
    decode_mode: Option<DecodeMode>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl AdminBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: None,
            database_path: None,
            decode_mode: None,
            notifier: None,
        }
    }

    /// Sets the backend base URL. Defaults to `http://localhost:3000`.
    pub fn with_base_url<S: Into<String>>(mut self, base_url: Option<S>) -> Self {
        if let Some(base_url) = base_url {
            self.base_url = Some(base_url.into());
        }
        self
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/coach/coach.db` or `~/.local/share/coach/coach.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Overrides the build-dependent decode mode.
    pub fn with_decode_mode(mut self, decode_mode: Option<DecodeMode>) -> Self {
        if decode_mode.is_some() {
            self.decode_mode = decode_mode;
        }
        self
    }

    /// Routes notifications somewhere other than the log.
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Builds the configured admin instance.
    ///
    /// # Errors
    ///
    /// Returns `AdminError::FileSystem` if the database directory cannot be
    /// created.
    /// Returns `AdminError::Database` if database initialization fails.
    pub async fn build(self) -> Result<Admin> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| AdminError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), AdminError>(())
        })
        .await
        .map_err(|e| AdminError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        let mut client = ApiClient::new(self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()));
        if let Some(decode_mode) = self.decode_mode {
            client = client.with_decode_mode(decode_mode);
        }
        let notifier = self.notifier.unwrap_or_else(|| Arc::new(LogNotifier));

        Ok(Admin::new(client, db_path, notifier))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("coach")
            .place_data_file("coach.db")
            .map_err(|e| AdminError::XdgDirectory(e.to_string()))
    }
}

impl Default for AdminBuilder {
    fn default() -> Self {
        Self::new()
    }
}
