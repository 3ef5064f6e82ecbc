//! Error types for sqlmock

use thiserror::Error;

/// Result type alias for mock database operations
pub type MockResult<T> = Result<T, MockError>;

/// Errors raised by the mock database handle.
#[derive(Debug, Error)]
pub enum MockError {
    /// Error injected by the test via `will_return_error`
    #[error("{0}")]
    Injected(String),

    /// A statement arrived that no pending expectation accepts
    #[error("unexpected {kind} '{sql}': {reason}")]
    Unexpected {
        kind: &'static str,
        sql: String,
        reason: String,
    },

    /// An expectation pattern failed to compile
    #[error("invalid expectation pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// An exec expectation matched but had no result or error configured
    #[error("exec '{0}' matched an expectation with no result configured")]
    MissingResult(String),

    /// Expectations still pending when the test asked for them to be met
    #[error("there are remaining expectations which were not met:\n{0}")]
    Unfulfilled(String),

    /// Value decode/mapping error
    #[error("Decode error on column '{column}': {message}")]
    Decode { column: String, message: String },

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl MockError {
    /// Create an error to be handed back by a matched expectation
    pub fn injected(message: impl Into<String>) -> Self {
        Self::Injected(message.into())
    }

    /// Create a decode error for a specific column
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }

    pub(crate) fn unexpected(
        kind: &'static str,
        sql: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Unexpected {
            kind,
            sql: sql.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error was injected by an expectation
    pub fn is_injected(&self) -> bool {
        matches!(self, Self::Injected(_))
    }

    /// Check if this is an unexpected-statement error
    pub fn is_unexpected(&self) -> bool {
        matches!(self, Self::Unexpected { .. })
    }

    /// Check if this is a decode error
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}
