//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Cart operations never fail; this type only surfaces at the edges where
/// untrusted input is turned into domain values (catalog loading, output
/// format selection).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_renders_message() {
        let err = DomainError::validation("price must not be negative");
        assert_eq!(err.to_string(), "validation failed: price must not be negative");
    }

    #[test]
    fn invariant_error_renders_message() {
        let err = DomainError::invariant("receipt could not be encoded");
        assert_eq!(
            err.to_string(),
            "invariant violated: receipt could not be encoded"
        );
    }
}
