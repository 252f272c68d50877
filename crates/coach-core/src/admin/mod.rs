//! High-level admin API.
//!
//! [`Admin`] ties the fetch wrapper, the notifier and the local draft store
//! together. Backend operations go straight through the [`ApiClient`];
//! draft store operations open the SQLite file inside
//! `tokio::task::spawn_blocking` so async callers never block on disk.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  catalog_ops    │    │   ApiClient     │    │  REST backend   │
//! │  plan_ops       │───▶│ (client/)       │───▶│                 │
//! ├─────────────────┤    └─────────────────┘    └─────────────────┘
//! │  draft_ops      │───▶ Database (db/) ───▶ coach.db
//! └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use coach_core::AdminBuilder;
//!
//! # async fn example() -> coach_core::Result<()> {
//! let admin = AdminBuilder::new()
//!     .with_base_url(Some("http://localhost:3000"))
//!     .build()
//!     .await?;
//!
//! for category in admin.list_categories().await? {
//!     println!("{}", category.name);
//! }
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::task;

pub mod builder;
pub mod catalog_ops;
pub mod draft_ops;
pub mod plan_ops;

#[cfg(test)]
mod tests;

pub use builder::AdminBuilder;

use crate::client::ApiClient;
use crate::db::Database;
use crate::error::{AdminError, Result};
use crate::notify::Notifier;
use crate::views::{ListView, Resource};

/// Entry point for every admin operation.
pub struct Admin {
    pub(crate) client: ApiClient,
    pub(crate) db_path: PathBuf,
    pub(crate) notifier: Arc<dyn Notifier>,
}

impl Admin {
    pub(crate) fn new(client: ApiClient, db_path: PathBuf, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            db_path,
            notifier,
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn notifier(&self) -> Arc<dyn Notifier> {
        Arc::clone(&self.notifier)
    }

    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// An empty list view over `R`; call [`ListView::refresh`] to load it.
    pub fn view<R: Resource>(&self) -> ListView<R> {
        ListView::new(self.client.clone(), self.notifier())
    }

    /// Runs `operation` against a freshly opened draft store on the blocking
    /// pool.
    pub(crate) async fn with_database<T, F>(&self, operation: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            operation(&mut db)
        })
        .await
        .map_err(|e| AdminError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
