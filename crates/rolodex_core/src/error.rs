//! Error types for Rolodex core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in Rolodex core operations.
///
/// No error is fatal to the process; every failure is surfaced to the
/// caller as a value. A failed store write aborts the operation before
/// the in-memory index is touched, so the two never diverge.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The record store cannot be read or written.
    #[error("store error: {0}")]
    Store(#[from] rolodex_store::StoreError),

    /// Insert targeted a name already present in the index.
    #[error("contact already exists: {name}")]
    DuplicateKey {
        /// The name that collided.
        name: String,
    },

    /// Search, update, or delete targeted an absent name.
    #[error("contact not found: {name}")]
    NotFound {
        /// The name that was looked up.
        name: String,
    },
}

impl CoreError {
    /// Creates a duplicate-key error.
    pub fn duplicate_key(name: impl Into<String>) -> Self {
        Self::DuplicateKey { name: name.into() }
    }

    /// Creates a not-found error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }
}
