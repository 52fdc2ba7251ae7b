//! Modality value object (teaching modality closed set).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::{codes, DomainError, DomainResult};

/// How a career is taught.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    Presential,
    Virtual,
    Hybrid,
}

impl Modality {
    /// Returns all modalities.
    pub fn all() -> &'static [Modality] {
        &[Modality::Presential, Modality::Virtual, Modality::Hybrid]
    }

    /// Validates and creates a Modality from externally supplied input.
    ///
    /// Matching is case-insensitive; surrounding whitespace is ignored.
    pub fn create(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation(
                codes::REQUIRED,
                "Modality cannot be empty",
            ));
        }
        Self::all()
            .iter()
            .find(|m| m.name().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| {
                DomainError::validation(
                    codes::INVALID_INFORMATION,
                    format!("'{}' is not a valid modality", trimmed),
                )
            })
    }

    /// Rehydrates a Modality from trusted, already-validated storage.
    ///
    /// # Panics
    ///
    /// Panics if the stored value no longer satisfies the invariant.
    pub fn from_database(raw: &str) -> Self {
        match Self::create(raw) {
            Ok(m) => m,
            Err(e) => panic!("corrupted persisted Modality: {}", e.message),
        }
    }

    /// Returns the canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            Modality::Presential => "Presential",
            Modality::Virtual => "Virtual",
            Modality::Hybrid => "Hybrid",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
