//! Error types for the store subsystem.

use thiserror::Error;

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors emitted by configuration stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Strict creation targeted a name that already exists.
    #[error("agent `{name}` already exists")]
    Conflict {
        /// The contested agent name.
        name: String,
    },

    /// A read, update, or delete referenced an unknown name.
    #[error("agent `{name}` not found")]
    NotFound {
        /// The missing agent name.
        name: String,
    },

    /// The backing store could not complete the operation.
    ///
    /// The reason describes the failure class without exposing connection
    /// parameters or credentials.
    #[error("storage backend error: {reason}")]
    Backend {
        /// Human-readable failure description.
        reason: String,
    },
}

impl StoreError {
    /// Convenience constructor for conflict errors.
    #[must_use]
    pub fn conflict(name: impl Into<String>) -> Self {
        Self::Conflict { name: name.into() }
    }

    /// Convenience constructor for not-found errors.
    #[must_use]
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Convenience constructor for backend errors.
    #[must_use]
    pub fn backend(reason: impl Into<String>) -> Self {
        Self::Backend {
            reason: reason.into(),
        }
    }
}
