//! LanguageName value object (fixed canonical language-name table).

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::errors::{codes, DomainError, DomainResult};

/// Canonical language names accepted by [`LanguageName::create`].
pub const LANGUAGE_NAMES: &[&str] = &[
    "Arabic",
    "Bengali",
    "Chinese",
    "Czech",
    "Danish",
    "Dutch",
    "English",
    "Finnish",
    "French",
    "German",
    "Greek",
    "Hebrew",
    "Hindi",
    "Hungarian",
    "Indonesian",
    "Italian",
    "Japanese",
    "Korean",
    "Malay",
    "Norwegian",
    "Persian",
    "Polish",
    "Portuguese",
    "Romanian",
    "Russian",
    "Spanish",
    "Swahili",
    "Swedish",
    "Thai",
    "Turkish",
    "Ukrainian",
    "Urdu",
    "Vietnamese",
];

// Lowercased name -> canonical casing.
static LANGUAGE_INDEX: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    LANGUAGE_NAMES
        .iter()
        .map(|name| (name.to_lowercase(), *name))
        .collect()
});

/// A validated language name, stored with its canonical casing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageName(String);

impl LanguageName {
    /// Validates and creates a LanguageName from externally supplied input.
    ///
    /// Matching is case-insensitive; the canonical casing from the table is
    /// what gets stored.
    pub fn create(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation(
                codes::REQUIRED,
                "Language cannot be empty",
            ));
        }
        LANGUAGE_INDEX
            .get(&trimmed.to_lowercase())
            .map(|canonical| Self((*canonical).to_string()))
            .ok_or_else(|| {
                DomainError::validation(
                    codes::INVALID_INFORMATION,
                    format!("'{}' is not a recognized language", trimmed),
                )
            })
    }

    /// Rehydrates a LanguageName from trusted, already-validated storage.
    ///
    /// # Panics
    ///
    /// Panics if the stored value no longer satisfies the invariant.
    pub fn from_database(raw: &str) -> Self {
        match Self::create(raw) {
            Ok(l) => l,
            Err(e) => panic!("corrupted persisted LanguageName: {}", e.message),
        }
    }

    /// Returns the canonical language name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
