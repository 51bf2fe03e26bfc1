//! Parameter structures for Waypoint operations.
//!
//! These structures are shared by every caller of the store (the workflow,
//! the web UI, library users) and carry no framework-specific derives.
//! Interface layers keep their own request types (e.g. axum form structs)
//! and convert into these.

use serde::{Deserialize, Serialize};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the decision to operate on
    pub id: u64,
}

/// Parameters for listing decisions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListDecisions {
    /// Maximum number of decisions to return
    #[serde(default)]
    pub limit: Option<usize>,
    /// Only return decisions whose task contains this text
    #[serde(default)]
    pub task_contains: Option<String>,
}
