//! Recruitment work information and its owned language requirements.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Description, DomainError, DomainResult, LanguageName};

/// A language requested by a recruitment process.
///
/// Owned exclusively by [`Recruitment`]; the [`LanguageName`] value object
/// carries the validation, this entity carries identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    internal_id: i32,
    name: LanguageName,
}

impl Language {
    /// Creates a Language entity from a validated language name.
    pub fn new(internal_id: i32, name: LanguageName) -> Self {
        Self { internal_id, name }
    }

    /// Returns the internal identifier.
    pub fn internal_id(&self) -> i32 {
        self.internal_id
    }

    /// Returns the validated language name.
    pub fn name(&self) -> &LanguageName {
        &self.name
    }
}

/// A career's recruitment process: steps, requisites, and requested languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recruitment {
    internal_id: i32,
    description: Option<Description>,
    steps: Option<Description>,
    requisites: Option<Description>,
    languages_requested: Vec<Language>,
}

impl Recruitment {
    const DUPLICATED_LANGUAGE_CODE: &'static str = "Recruitment.DuplicatedLanguage";

    /// Creates a Recruitment from validated value objects, with no requested
    /// languages.
    pub fn new(
        internal_id: i32,
        description: Option<Description>,
        steps: Option<Description>,
        requisites: Option<Description>,
    ) -> Self {
        Self {
            internal_id,
            description,
            steps,
            requisites,
            languages_requested: Vec::new(),
        }
    }

    /// Returns the internal identifier.
    pub fn internal_id(&self) -> i32 {
        self.internal_id
    }

    /// Returns the description, if any.
    pub fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    /// Returns the process steps, if any.
    pub fn steps(&self) -> Option<&Description> {
        self.steps.as_ref()
    }

    /// Returns the requisites, if any.
    pub fn requisites(&self) -> Option<&Description> {
        self.requisites.as_ref()
    }

    /// Returns the requested languages in insertion order.
    pub fn languages_requested(&self) -> &[Language] {
        &self.languages_requested
    }

    /// Appends a requested language.
    ///
    /// Rejects a language whose canonical name is already present and leaves
    /// the collection unchanged. Insertion order is preserved and observable
    /// to callers.
    pub fn request_language(&mut self, language: Language) -> DomainResult<()> {
        let duplicate = self
            .languages_requested
            .iter()
            .any(|existing| existing.name() == language.name());
        if duplicate {
            return Err(DomainError::duplicated(
                Self::DUPLICATED_LANGUAGE_CODE,
                format!("Language '{}' is already requested", language.name()),
            ));
        }
        self.languages_requested.push(language);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn language(id: i32, name: &str) -> Language {
        Language::new(id, LanguageName::create(name).unwrap())
    }

    #[test]
    fn new_recruitment_has_no_languages() {
        let recruitment = Recruitment::new(1, None, None, None);
        assert!(recruitment.languages_requested().is_empty());
    }

    #[test]
    fn request_language_preserves_insertion_order() {
        let mut recruitment = Recruitment::new(1, None, None, None);
        recruitment.request_language(language(1, "Spanish")).unwrap();
        recruitment.request_language(language(2, "English")).unwrap();
        recruitment.request_language(language(3, "German")).unwrap();

        let names: Vec<&str> = recruitment
            .languages_requested()
            .iter()
            .map(|l| l.name().name())
            .collect();
        assert_eq!(names, vec!["Spanish", "English", "German"]);
    }

    #[test]
    fn request_language_rejects_duplicate_canonical_value() {
        let mut recruitment = Recruitment::new(1, None, None, None);
        recruitment.request_language(language(1, "English")).unwrap();

        // Same canonical value even though the raw casing differs.
        let err = recruitment
            .request_language(language(2, "english"))
            .unwrap_err();

        assert_eq!(err.kind, crate::domain::foundation::ErrorKind::DuplicatedConflict);
        assert_eq!(err.code, "Recruitment.DuplicatedLanguage");
    }

    #[test]
    fn rejected_add_leaves_collection_unchanged() {
        let mut recruitment = Recruitment::new(1, None, None, None);
        recruitment.request_language(language(1, "French")).unwrap();
        recruitment.request_language(language(2, "Italian")).unwrap();

        let before = recruitment.languages_requested().len();
        let _ = recruitment.request_language(language(3, "French"));
        assert_eq!(recruitment.languages_requested().len(), before);
    }

    #[test]
    fn steps_and_requisites_are_kept() {
        let recruitment = Recruitment::new(
            2,
            Some(Description::create("Hiring pipeline").unwrap()),
            Some(Description::create("Interview then test").unwrap()),
            Some(Description::create("Degree required").unwrap()),
        );

        assert_eq!(recruitment.steps().unwrap().value(), "Interview then test");
        assert_eq!(recruitment.requisites().unwrap().value(), "Degree required");
    }
}
