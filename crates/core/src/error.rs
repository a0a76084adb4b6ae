//! Error model shared by the ledger getters.

use thiserror::Error;

/// Result type used across the getters.
pub type GetterResult<T> = Result<T, GetterError>;

/// Getter-level error.
///
/// Every variant is a precondition violation on the input handed over by the
/// upstream parser; none of them are transient, so callers fix the input
/// rather than retrying.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GetterError {
    /// The operation needs at least one (matching) entry.
    #[error("{operation} requires at least one entry")]
    EmptyInput { operation: &'static str },

    /// An account name could not be split into valid components.
    #[error("malformed account name {name:?}: {reason}")]
    MalformedAccount { name: String, reason: String },
}

impl GetterError {
    pub fn empty_input(operation: &'static str) -> Self {
        Self::EmptyInput { operation }
    }

    pub fn malformed_account(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedAccount {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
