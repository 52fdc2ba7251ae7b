//! Career repository port.
//!
//! Defines the contract the domain core expects from a persistence adapter.
//! Lookups return aggregates whose value objects were rebuilt through the
//! trusted `from_database` paths, never raw primitives.

use async_trait::async_trait;

use crate::domain::career::Career;
use crate::domain::foundation::{DomainError, EntityName};

/// Repository port for Career aggregate persistence.
///
/// Callers own the serialization of concurrent access to a single aggregate;
/// the optimistic version token surfaced here is the external guarantee the
/// core relies on.
#[async_trait]
pub trait CareerRepository: Send + Sync {
    /// Save a new career.
    ///
    /// # Errors
    ///
    /// - `DuplicatedConflict` if a career with the same name already exists
    /// - `Failure` on storage failure
    async fn save(&self, career: &Career) -> Result<(), DomainError>;

    /// Update an existing career, checking the optimistic version token.
    ///
    /// Returns the new version on success.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the career doesn't exist
    /// - `ConcurrencyConflict` if `expected_version` is stale; retry with
    ///   fresh state
    /// - `Failure` on storage failure
    async fn update(&self, career: &Career, expected_version: u64) -> Result<u64, DomainError>;

    /// Find a career by its internal id, with its work informations populated.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: i32) -> Result<Option<Career>, DomainError>;

    /// Find a career by its validated name, with its work informations
    /// populated.
    ///
    /// Returns `None` if not found.
    async fn find_by_name(&self, name: &EntityName) -> Result<Option<Career>, DomainError>;
}
