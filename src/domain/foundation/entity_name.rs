//! EntityName value object (trimmed, non-empty, bounded text).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::{codes, DomainError, DomainResult};

/// A validated entity name: non-empty after trimming, at most 100 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityName(String);

impl EntityName {
    /// Maximum accepted length in characters, applied after trimming.
    pub const MAX_LENGTH: usize = 100;

    const MAX_LENGTH_CODE: &'static str = "EntityName.MaxLength";

    /// Validates and creates an EntityName from externally supplied input.
    ///
    /// The stored value is the trimmed input.
    pub fn create(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation(
                codes::REQUIRED,
                "Entity name cannot be empty",
            ));
        }
        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(DomainError::validation(
                Self::MAX_LENGTH_CODE,
                format!("Entity name cannot exceed {} characters", Self::MAX_LENGTH),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Rehydrates an EntityName from trusted, already-validated storage.
    ///
    /// # Panics
    ///
    /// Panics if the stored value no longer satisfies the invariant. This path
    /// must never be used on user input.
    pub fn from_database(raw: &str) -> Self {
        match Self::create(raw) {
            Ok(name) => name,
            Err(e) => panic!("corrupted persisted EntityName: {}", e.message),
        }
    }

    /// Returns the wrapped name.
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
