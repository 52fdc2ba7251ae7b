//! Workers value object (non-negative head count).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::{codes, DomainError, DomainResult};

/// A worker head count: non-negative and strictly below `i32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Workers(i32);

impl Workers {
    /// Validates and creates a Workers count from externally supplied input.
    pub fn create(raw: i32) -> DomainResult<Self> {
        if raw < 0 || raw == i32::MAX {
            return Err(DomainError::validation(
                codes::INVALID_NUMBER,
                format!("Workers count must be in [0, {}), got {}", i32::MAX, raw),
            ));
        }
        Ok(Self(raw))
    }

    /// Rehydrates a Workers count from trusted, already-validated storage.
    ///
    /// # Panics
    ///
    /// Panics if the stored value no longer satisfies the invariant.
    pub fn from_database(raw: i32) -> Self {
        match Self::create(raw) {
            Ok(w) => w,
            Err(e) => panic!("corrupted persisted Workers: {}", e.message),
        }
    }

    /// Returns the wrapped count.
    pub fn count(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Workers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
