//! Error types for Outcome Core
//!
//! Domain failures never show up here: they travel in-band as failing
//! [`Outcome`](crate::Outcome) values. This module only covers the two places
//! where an error is actually returned: a construction that would break an
//! outcome invariant, and the boundary operations that convert a failing
//! outcome into an `Err` for callers that have not adopted the combinator style.

use thiserror::Error;

/// Result type alias for Outcome Core operations
pub type Result<T> = std::result::Result<T, OutcomeError>;

/// Main error type for Outcome Core
#[derive(Error, Debug)]
pub enum OutcomeError {
    /// An outcome was built with a status/error combination that is not allowed
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Boundary error raised from a failing outcome.
    ///
    /// Displays the outcome's error message verbatim.
    #[error("{0}")]
    Failed(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        /// What the caller was doing
        context: String,
        /// Underlying error
        source: Box<OutcomeError>,
    },
}

impl OutcomeError {
    /// Add context to an error
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Message carried by a boundary error, if this is one.
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            Self::WithContext { source, .. } => source.failure_message(),
            _ => None,
        }
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to a Result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add lazy context to a Result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.context(f()))
    }
}
