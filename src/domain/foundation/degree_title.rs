//! DegreeTitle value object (academic degree closed set).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::{codes, DomainError, DomainResult};

/// The degree a career awards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DegreeTitle {
    Bachelor,
    Licentiate,
    Master,
    Doctorate,
    PhD,
    Associate,
    Diploma,
    Technical,
}

impl DegreeTitle {
    /// Returns all degree titles.
    pub fn all() -> &'static [DegreeTitle] {
        &[
            DegreeTitle::Bachelor,
            DegreeTitle::Licentiate,
            DegreeTitle::Master,
            DegreeTitle::Doctorate,
            DegreeTitle::PhD,
            DegreeTitle::Associate,
            DegreeTitle::Diploma,
            DegreeTitle::Technical,
        ]
    }

    /// Validates and creates a DegreeTitle from externally supplied input.
    ///
    /// Matching is case-insensitive; surrounding whitespace is ignored.
    pub fn create(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation(
                codes::REQUIRED,
                "Degree title cannot be empty",
            ));
        }
        Self::all()
            .iter()
            .find(|d| d.name().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| {
                DomainError::validation(
                    codes::INVALID_INFORMATION,
                    format!("'{}' is not a valid degree title", trimmed),
                )
            })
    }

    /// Rehydrates a DegreeTitle from trusted, already-validated storage.
    ///
    /// # Panics
    ///
    /// Panics if the stored value no longer satisfies the invariant.
    pub fn from_database(raw: &str) -> Self {
        match Self::create(raw) {
            Ok(d) => d,
            Err(e) => panic!("corrupted persisted DegreeTitle: {}", e.message),
        }
    }

    /// Returns the canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            DegreeTitle::Bachelor => "Bachelor",
            DegreeTitle::Licentiate => "Licentiate",
            DegreeTitle::Master => "Master",
            DegreeTitle::Doctorate => "Doctorate",
            DegreeTitle::PhD => "PhD",
            DegreeTitle::Associate => "Associate",
            DegreeTitle::Diploma => "Diploma",
            DegreeTitle::Technical => "Technical",
        }
    }
}

impl fmt::Display for DegreeTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
