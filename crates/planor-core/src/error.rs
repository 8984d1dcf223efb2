//! Error types for the challenge engine.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all challenge operations.
#[derive(Error, Debug)]
pub enum ChallengeError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Challenge not found for the given ID
    #[error("Challenge with ID {id} not found")]
    ChallengeNotFound { id: u64 },
    /// The stored record changed since it was read
    #[error("Challenge {id} was modified concurrently (expected version {expected}, found {found})")]
    Conflict { id: u64, expected: u64, found: u64 },
    /// Pause/resume requested on a finished challenge
    #[error("Challenge {id} is already completed")]
    AlreadyCompleted { id: u64 },
    /// Schedule shape violations (week range, total weeks, custom amounts)
    #[error("Invalid schedule for field '{field}': {reason}")]
    InvalidSchedule { field: String, reason: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Ledger sink failures
    #[error("Ledger write failed: {message}")]
    LedgerWrite { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
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
    pub fn with_source(self, source: rusqlite::Error) -> ChallengeError {
        ChallengeError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for field-scoped validation errors.
///
/// The same builder produces both [`ChallengeError::InvalidInput`] and
/// [`ChallengeError::InvalidSchedule`]; only the terminal method differs.
pub struct InvalidFieldBuilder {
    field: String,
}

impl InvalidFieldBuilder {
    /// Create a new builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build an input validation error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ChallengeError {
        ChallengeError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }

    /// Build a schedule validation error with the given reason.
    pub fn schedule(self, reason: impl Into<String>) -> ChallengeError {
        ChallengeError::InvalidSchedule {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ChallengeError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidFieldBuilder {
        InvalidFieldBuilder::new(field)
    }

    /// Shorthand for a schedule validation error.
    pub fn invalid_schedule(field: impl Into<String>, reason: impl Into<String>) -> Self {
        InvalidFieldBuilder::new(field).schedule(reason)
    }

    /// Wraps a `spawn_blocking` join failure.
    pub(crate) fn join(err: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {err}"),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| ChallengeError::database(message).with_source(e))
    }
}

/// Result type alias for challenge operations
pub type Result<T> = std::result::Result<T, ChallengeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_field_builder_variants() {
        let input = ChallengeError::invalid_input("amount").with_reason("must not be negative");
        assert!(matches!(input, ChallengeError::InvalidInput { ref field, .. } if field == "amount"));
        assert_eq!(
            input.to_string(),
            "Invalid input for field 'amount': must not be negative"
        );

        let schedule = ChallengeError::invalid_schedule("week", "out of range");
        assert!(matches!(schedule, ChallengeError::InvalidSchedule { .. }));
        assert_eq!(
            schedule.to_string(),
            "Invalid schedule for field 'week': out of range"
        );
    }

    #[test]
    fn test_conflict_message() {
        let err = ChallengeError::Conflict {
            id: 7,
            expected: 2,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "Challenge 7 was modified concurrently (expected version 2, found 3)"
        );
    }
}
