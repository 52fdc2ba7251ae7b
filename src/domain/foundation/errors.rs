//! Error types for the domain layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Well-known validation error codes shared across value objects.
pub mod codes {
    /// Input was null, empty, or whitespace-only.
    pub const REQUIRED: &str = "Validation.Required";
    /// Input is not a member of the expected closed set.
    pub const INVALID_INFORMATION: &str = "Validation.InvalidInformation";
    /// Numeric input is outside its allowed range.
    pub const INVALID_NUMBER: &str = "Validation.InvalidNumber";
}

/// Classification of a domain error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Caller-supplied data violates a value object's invariant.
    Validation,
    /// A referenced entity does not exist.
    NotFound,
    /// An insertion collides with an existing uniquely-constrained entity.
    DuplicatedConflict,
    /// An optimistic-concurrency check failed; retry with fresh state.
    ConcurrencyConflict,
    /// Catch-all for unexpected conditions.
    Failure,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::Validation => "VALIDATION",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::DuplicatedConflict => "DUPLICATED_CONFLICT",
            ErrorKind::ConcurrencyConflict => "CONCURRENCY_CONFLICT",
            ErrorKind::Failure => "FAILURE",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with a machine-readable code, a human message,
/// and a kind tag. Immutable and compared by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[error("[{kind}] {code}: {message}")]
pub struct DomainError {
    pub code: String,
    pub message: String,
    pub kind: ErrorKind,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(kind: ErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            kind,
        }
    }

    /// Creates a validation error.
    pub fn validation(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, code, message)
    }

    /// Creates a not-found error.
    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, code, message)
    }

    /// Creates a duplicated-conflict error.
    pub fn duplicated(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicatedConflict, code, message)
    }

    /// Creates a concurrency-conflict error.
    pub fn concurrency(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConcurrencyConflict, code, message)
    }

    /// Creates a catch-all failure error.
    pub fn failure(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Failure, code, message)
    }
}

/// A non-empty collection of domain errors.
///
/// Used where an operation validates several inputs at once and must report
/// every violation, not just the first (e.g. aggregate construction).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainErrors(Vec<DomainError>);

impl DomainErrors {
    /// Wraps a single error.
    pub fn single(error: DomainError) -> Self {
        Self(vec![error])
    }

    /// Wraps a list of errors. Returns `None` if the list is empty.
    pub fn from_vec(errors: Vec<DomainError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    /// Returns the collected errors.
    pub fn errors(&self) -> &[DomainError] {
        &self.0
    }

    /// Returns the first error.
    pub fn first(&self) -> &DomainError {
        // Construction guarantees at least one element.
        &self.0[0]
    }

    /// Returns the number of collected errors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: the collection is non-empty by construction.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for DomainErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for DomainErrors {}

impl From<DomainError> for DomainErrors {
    fn from(error: DomainError) -> Self {
        Self::single(error)
    }
}

/// Result alias for fallible domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
