//! Work-information reader port (read side).

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::work_information::WorkInformation;

/// Read port for the work informations belonging to a career.
#[async_trait]
pub trait WorkInformationReader: Send + Sync {
    /// Find the work informations owned by the given career id, in insertion
    /// order.
    ///
    /// Returns an empty list for an unknown career id.
    async fn find_by_career_id(&self, career_id: i32) -> Result<Vec<WorkInformation>, DomainError>;
}
