//! Integration tests for the career persistence contract.
//!
//! These tests verify the end-to-end flow:
//! 1. A career is created from raw input and saved through the repository port
//! 2. Lookups return the aggregate with its work informations populated
//! 3. Duplicate names and stale version tokens surface the documented conflicts
//! 4. A reloaded career recomputes its scholarship from its work informations
//!
//! Uses in-memory implementations to test the contract without external
//! dependencies.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use rust_decimal::Decimal;

use career_catalog::config::AppConfig;
use career_catalog::domain::career::Career;
use career_catalog::domain::foundation::{
    Country, Description, DomainError, EntityName, ErrorKind, LanguageName,
};
use career_catalog::domain::work_information::{
    Enterprise, Industry, Language, Recruitment, WorkInformation,
};
use career_catalog::ports::{CareerRepository, WorkInformationReader};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// In-memory career store for testing.
struct InMemoryCareerStore {
    careers: Mutex<HashMap<i32, (Career, u64)>>,
}

impl InMemoryCareerStore {
    fn new() -> Self {
        Self {
            careers: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl CareerRepository for InMemoryCareerStore {
    async fn save(&self, career: &Career) -> Result<(), DomainError> {
        let mut careers = self.careers.lock().unwrap();
        let duplicate = careers
            .values()
            .any(|(existing, _)| existing.name() == career.name());
        if duplicate {
            return Err(DomainError::duplicated(
                "Career.Duplicated",
                "A career with this name already exists",
            ));
        }
        careers.insert(career.internal_id(), (career.clone(), 0));
        Ok(())
    }

    async fn update(&self, career: &Career, expected_version: u64) -> Result<u64, DomainError> {
        let mut careers = self.careers.lock().unwrap();
        match careers.get_mut(&career.internal_id()) {
            None => Err(DomainError::not_found(
                "Career.NotFound",
                "Career does not exist",
            )),
            Some((_, version)) if *version != expected_version => Err(DomainError::concurrency(
                "Career.ConcurrencyConflict",
                "Career was modified by another request",
            )),
            Some(entry) => {
                entry.0 = career.clone();
                entry.1 += 1;
                Ok(entry.1)
            }
        }
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Career>, DomainError> {
        let careers = self.careers.lock().unwrap();
        Ok(careers.get(&id).map(|(career, _)| career.clone()))
    }

    async fn find_by_name(&self, name: &EntityName) -> Result<Option<Career>, DomainError> {
        let careers = self.careers.lock().unwrap();
        Ok(careers
            .values()
            .find(|(career, _)| career.name() == Some(name))
            .map(|(career, _)| career.clone()))
    }
}

#[async_trait]
impl WorkInformationReader for InMemoryCareerStore {
    async fn find_by_career_id(&self, career_id: i32) -> Result<Vec<WorkInformation>, DomainError> {
        let careers = self.careers.lock().unwrap();
        Ok(careers
            .get(&career_id)
            .map(|(career, _)| career.work_informations().to_vec())
            .unwrap_or_default())
    }
}

fn sample_career() -> Career {
    let mut career = Career::create(
        1,
        "Software Engineering",
        "Teaches how to build software systems",
        10,
        "Hybrid",
        "Bachelor",
        true,
    )
    .unwrap();

    career.add_work_information(WorkInformation::Enterprise(Enterprise::new(
        1,
        Some(Description::create("Hires juniors every year").unwrap()),
        Some(EntityName::create("Acme Software").unwrap()),
        Some(Country::create("Germany").unwrap()),
    )));
    career.add_work_information(WorkInformation::Industry(Industry::new(
        2,
        None,
        Some(EntityName::create("Fintech").unwrap()),
        true,
    )));

    let mut recruitment = Recruitment::new(
        3,
        None,
        Some(Description::create("Screening, interview, offer").unwrap()),
        None,
    );
    recruitment
        .request_language(Language::new(1, LanguageName::create("English").unwrap()))
        .unwrap();
    career.add_work_information(WorkInformation::Recruitment(recruitment));

    career
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn saved_career_is_found_with_work_informations() {
    let store = InMemoryCareerStore::new();
    store.save(&sample_career()).await.unwrap();

    let found = store.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(found.name().unwrap().value(), "Software Engineering");
    assert_eq!(found.work_informations().len(), 3);

    let by_name = store
        .find_by_name(&EntityName::create("Software Engineering").unwrap())
        .await
        .unwrap();
    assert!(by_name.is_some());
}

#[tokio::test]
async fn missing_career_lookup_returns_none() {
    let store = InMemoryCareerStore::new();
    assert!(store.find_by_id(99).await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_name_save_is_a_duplicated_conflict() {
    let store = InMemoryCareerStore::new();
    store.save(&sample_career()).await.unwrap();

    // Different id, same name.
    let original = sample_career();
    let twin = Career::from_database(
        2,
        original.name().cloned(),
        original.description().cloned(),
        original.semesters().cloned(),
        original.modality(),
        original.degree(),
        original.is_steam(),
        original.scholarship(),
        original.work_informations().to_vec(),
    );

    let err = store.save(&twin).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::DuplicatedConflict);
}

#[tokio::test]
async fn stale_version_update_is_a_concurrency_conflict() {
    let store = InMemoryCareerStore::new();
    let career = sample_career();
    store.save(&career).await.unwrap();

    let new_version = store.update(&career, 0).await.unwrap();
    assert_eq!(new_version, 1);

    // Retrying with the consumed token must conflict.
    let err = store.update(&career, 0).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::ConcurrencyConflict);
}

#[tokio::test]
async fn update_of_unknown_career_is_not_found() {
    let store = InMemoryCareerStore::new();
    let err = store.update(&sample_career(), 0).await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
}

#[tokio::test]
async fn reloaded_career_recomputes_scholarship_from_its_work_informations() {
    let store = InMemoryCareerStore::new();
    store.save(&sample_career()).await.unwrap();

    let policy = AppConfig::default().scholarship.policy();
    let mut reloaded = store.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(reloaded.scholarship(), Decimal::ZERO);

    reloaded.recompute_scholarship(&policy);
    assert!(reloaded.scholarship() > Decimal::ZERO);

    store.update(&reloaded, 0).await.unwrap();
    let persisted = store.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(persisted.scholarship(), reloaded.scholarship());
}

#[tokio::test]
async fn work_information_reader_returns_owned_subset_in_order() {
    let store = InMemoryCareerStore::new();
    store.save(&sample_career()).await.unwrap();

    let infos = store.find_by_career_id(1).await.unwrap();
    let ids: Vec<i32> = infos.iter().map(|w| w.internal_id()).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    assert!(store.find_by_career_id(42).await.unwrap().is_empty());
}
