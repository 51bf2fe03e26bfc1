//! Error types for the Waypoint library.

use std::path::PathBuf;

use thiserror::Error;

use crate::llm::LlmError;

/// Error type for every Waypoint operation.
///
/// Failures fall into two user-visible groups: planning failures (the LLM
/// call failed or its answer could not be turned into a plan) and storage
/// failures (everything touching the database or the filesystem). See
/// [`WaypointError::is_planning_failure`].
#[derive(Error, Debug)]
pub enum WaypointError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// The model answered, but not with a usable plan
    #[error("Planning failed: {reason}")]
    PlanningFailed { reason: String },
    /// The LLM call itself failed
    #[error("LLM request failed: {0}")]
    Llm(#[from] LlmError),
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> WaypointError {
        WaypointError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WaypointError {
        WaypointError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl WaypointError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a planning failure with the given reason.
    pub fn planning_failed(reason: impl Into<String>) -> Self {
        Self::PlanningFailed {
            reason: reason.into(),
        }
    }

    /// Whether this error came from the planning step rather than storage.
    pub fn is_planning_failure(&self) -> bool {
        matches!(self, Self::PlanningFailed { .. } | Self::Llm(_))
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| WaypointError::database(message).with_source(e))
    }
}

/// Result type alias for Waypoint operations
pub type Result<T> = std::result::Result<T, WaypointError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planning_failures_are_classified() {
        assert!(WaypointError::planning_failed("no steps").is_planning_failure());
        assert!(WaypointError::Llm(LlmError::InvalidResponse("empty".into())).is_planning_failure());

        let storage = WaypointError::database("Failed to insert decision")
            .with_source(rusqlite::Error::InvalidQuery);
        assert!(!storage.is_planning_failure());
        assert!(!WaypointError::XdgDirectory("no home".into()).is_planning_failure());
    }

    #[test]
    fn test_invalid_input_message() {
        let err = WaypointError::invalid_input("task_description").with_reason("must not be empty");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'task_description': must not be empty"
        );
    }
}
