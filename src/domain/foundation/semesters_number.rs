//! SemestersNumber value object (exclusive 0..200 range).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::{codes, DomainError, DomainResult};

/// Number of semesters a career spans: strictly between 0 and 200.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SemestersNumber(i32);

impl SemestersNumber {
    /// Exclusive lower bound.
    pub const MIN_EXCLUSIVE: i32 = 0;

    /// Exclusive upper bound.
    pub const MAX_EXCLUSIVE: i32 = 200;

    /// Validates and creates a SemestersNumber from externally supplied input.
    pub fn create(raw: i32) -> DomainResult<Self> {
        if raw <= Self::MIN_EXCLUSIVE || raw >= Self::MAX_EXCLUSIVE {
            return Err(DomainError::validation(
                codes::INVALID_NUMBER,
                format!(
                    "Semesters number must be between {} and {} exclusive, got {}",
                    Self::MIN_EXCLUSIVE,
                    Self::MAX_EXCLUSIVE,
                    raw
                ),
            ));
        }
        Ok(Self(raw))
    }

    /// Rehydrates a SemestersNumber from trusted, already-validated storage.
    ///
    /// # Panics
    ///
    /// Panics if the stored value no longer satisfies the invariant.
    pub fn from_database(raw: i32) -> Self {
        match Self::create(raw) {
            Ok(n) => n,
            Err(e) => panic!("corrupted persisted SemestersNumber: {}", e.message),
        }
    }

    /// Returns the wrapped number.
    pub fn number(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for SemestersNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
