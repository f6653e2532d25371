//! Store error types.

use thiserror::Error;

/// Store operation errors.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    /// Quote text was empty
    #[error("Quote text must be a non-empty string")]
    EmptyText,

    /// No quote with the requested id
    #[error("Quote {id} not found")]
    QuoteNotFound { id: u64 },

    /// Lock poisoned (RwLock poisoned)
    #[error("Lock poisoned")]
    LockPoisoned,
}
