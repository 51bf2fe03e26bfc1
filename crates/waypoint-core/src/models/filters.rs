//! Filter criteria for decision queries.

use crate::params::ListDecisions;

/// Criteria applied when listing decisions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecisionFilter {
    /// Only decisions whose task description contains this text
    pub task_contains: Option<String>,
    /// Maximum number of decisions to return, most recent first
    pub limit: Option<usize>,
}

impl DecisionFilter {
    /// A filter returning at most `limit` decisions.
    pub fn recent(limit: usize) -> Self {
        Self {
            task_contains: None,
            limit: Some(limit),
        }
    }
}

impl From<&ListDecisions> for DecisionFilter {
    fn from(params: &ListDecisions) -> Self {
        Self {
            task_contains: params
                .task_contains
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from),
            limit: params.limit,
        }
    }
}
