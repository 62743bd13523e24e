//! Errors reported by treap operations.

use thiserror::Error;

/// The error type for operations on a `TreapSet<T>`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum TreapError {
    /// The key does not exist in the treap.
    #[error("key not found")]
    KeyNotFound,
    /// The key already exists in the treap. Insertions of existing keys are rejected.
    #[error("duplicate key")]
    DuplicateKey,
}

/// A specialized `Result` type for treap operations.
pub type Result<T> = std::result::Result<T, TreapError>;
