//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while interpreting references.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The default operator is neither `-` nor `:-`.
    #[error("invalid default operator: {0:?}")]
    InvalidOperator(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
