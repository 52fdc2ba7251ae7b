//! Description value object (trimmed, non-empty, bounded free text).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::{codes, DomainError, DomainResult};

/// Validated free-text description: non-empty after trimming, at most 700 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Description(String);

impl Description {
    /// Maximum accepted length in characters, applied after trimming.
    pub const MAX_LENGTH: usize = 700;

    const MAX_LENGTH_CODE: &'static str = "Description.MaxLength";

    /// Validates and creates a Description from externally supplied input.
    pub fn create(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation(
                codes::REQUIRED,
                "Description cannot be empty",
            ));
        }
        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(DomainError::validation(
                Self::MAX_LENGTH_CODE,
                format!("Description cannot exceed {} characters", Self::MAX_LENGTH),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Rehydrates a Description from trusted, already-validated storage.
    ///
    /// # Panics
    ///
    /// Panics if the stored value no longer satisfies the invariant.
    pub fn from_database(raw: &str) -> Self {
        match Self::create(raw) {
            Ok(description) => description,
            Err(e) => panic!("corrupted persisted Description: {}", e.message),
        }
    }

    /// Returns the wrapped text.
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
