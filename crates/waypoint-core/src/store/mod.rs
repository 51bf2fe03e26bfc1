//! Async Decision Store API.
//!
//! [`DecisionStore`] is the entry point the rest of the application uses for
//! persistence. Every call opens its own [`Database`] connection on a
//! blocking thread, so the store itself is cheap to clone and share across
//! request handlers.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Workflow     │    │  DecisionStore  │    │    Database     │
//! │  (handlers)     │───▶│  (async, this)  │───▶│ (rusqlite, db/) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use waypoint_core::{params::Id, DecisionStoreBuilder, Plan};
//!
//! # async fn example() -> waypoint_core::Result<()> {
//! let store = DecisionStoreBuilder::new()
//!     .with_database_path(Some("agent_decisions.db"))
//!     .build()
//!     .await?;
//!
//! let plan = Plan::new(["Pick date", "Book venue", "Send invites"])?;
//! let decision = store.create("Plan a team offsite", plan).await?;
//!
//! for decision in store.list_all().await? {
//!     println!("{}: {}", decision.id, decision.task_description);
//! }
//!
//! store.delete(&Id { id: decision.id }).await?;
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{Result, WaypointError},
    models::{Decision, DecisionFilter, Plan},
    params::{Id, ListDecisions},
};

pub mod builder;


pub use builder::DecisionStoreBuilder;

/// Async persistence layer for decisions.
#[derive(Debug, Clone)]
pub struct DecisionStore {
    db_path: PathBuf,
}

impl DecisionStore {
    /// Creates a new store backed by the given database file.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the database file backing this store.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Runs `op` against a fresh connection on a blocking thread.
    async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(|e| WaypointError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Persists a new decision for `task_description` and returns it.
    pub async fn create(&self, task_description: &str, plan: Plan) -> Result<Decision> {
        let task_description = task_description.to_string();
        self.with_database(move |db| db.create_decision(&task_description, &plan))
            .await
    }

    /// Retrieves a decision by its ID.
    pub async fn get(&self, params: &Id) -> Result<Option<Decision>> {
        let id = params.id;
        self.with_database(move |db| db.get_decision(id)).await
    }

    /// Returns every decision, most recent first.
    pub async fn list_all(&self) -> Result<Vec<Decision>> {
        self.with_database(|db| db.list_all_decisions()).await
    }

    /// Returns decisions matching `params`, most recent first.
    pub async fn list(&self, params: &ListDecisions) -> Result<Vec<Decision>> {
        let filter = DecisionFilter::from(params);
        self.with_database(move |db| db.list_decisions(Some(&filter)))
            .await
    }

    /// Deletes a decision. Returns whether anything was removed; an unknown
    /// ID is a silent no-op.
    pub async fn delete(&self, params: &Id) -> Result<bool> {
        let id = params.id;
        self.with_database(move |db| db.delete_decision(id)).await
    }
}
