//! Career aggregate root.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DegreeTitle, Description, DomainError, DomainErrors, EntityName, Modality, SemestersNumber,
};
use crate::domain::scholarship::{ScholarshipCalculator, ScholarshipPolicy};
use crate::domain::work_information::WorkInformation;

/// An academic career with its work informations and derived scholarship.
///
/// The value-object fields are immutable once constructed. The only mutable
/// aspects are the `work_informations` collection (appended through
/// [`add_work_information`](Self::add_work_information)) and the derived
/// `scholarship` amount (overwritten by
/// [`recompute_scholarship`](Self::recompute_scholarship)). The scholarship is
/// never hand-edited; it reflects the work informations as of the last
/// recomputation, and staleness between a mutation and the next recomputation
/// is explicit and allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Career {
    internal_id: i32,
    name: Option<EntityName>,
    description: Option<Description>,
    semesters: Option<SemestersNumber>,
    modality: Option<Modality>,
    degree: Option<DegreeTitle>,
    is_steam: bool,
    scholarship: Decimal,
    work_informations: Vec<WorkInformation>,
}

impl Career {
    /// Validates every field of a new Career and collects all violations.
    ///
    /// Returns a [`DomainErrors`] carrying every failed field's error, not
    /// just the first one encountered. A freshly created career has no work
    /// informations and a zero scholarship.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        internal_id: i32,
        name: &str,
        description: &str,
        semesters: i32,
        modality: &str,
        degree: &str,
        is_steam: bool,
    ) -> Result<Self, DomainErrors> {
        let mut errors: Vec<DomainError> = Vec::new();

        let name = EntityName::create(name).map_err(|e| errors.push(e)).ok();
        let description = Description::create(description)
            .map_err(|e| errors.push(e))
            .ok();
        let semesters = SemestersNumber::create(semesters)
            .map_err(|e| errors.push(e))
            .ok();
        let modality = Modality::create(modality).map_err(|e| errors.push(e)).ok();
        let degree = DegreeTitle::create(degree).map_err(|e| errors.push(e)).ok();

        if let Some(errors) = DomainErrors::from_vec(errors) {
            return Err(errors);
        }

        Ok(Self {
            internal_id,
            name,
            description,
            semesters,
            modality,
            degree,
            is_steam,
            scholarship: Decimal::ZERO,
            work_informations: Vec::new(),
        })
    }

    /// Rehydrates a Career from trusted, already-validated storage.
    ///
    /// Fields may be absent when the persisted row was partially projected;
    /// the value objects themselves are assumed to have been rebuilt through
    /// their own `from_database` paths.
    #[allow(clippy::too_many_arguments)]
    pub fn from_database(
        internal_id: i32,
        name: Option<EntityName>,
        description: Option<Description>,
        semesters: Option<SemestersNumber>,
        modality: Option<Modality>,
        degree: Option<DegreeTitle>,
        is_steam: bool,
        scholarship: Decimal,
        work_informations: Vec<WorkInformation>,
    ) -> Self {
        Self {
            internal_id,
            name,
            description,
            semesters,
            modality,
            degree,
            is_steam,
            scholarship,
            work_informations,
        }
    }

    /// Returns the internal identifier.
    pub fn internal_id(&self) -> i32 {
        self.internal_id
    }

    /// Returns the career name, if any.
    pub fn name(&self) -> Option<&EntityName> {
        self.name.as_ref()
    }

    /// Returns the description, if any.
    pub fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    /// Returns the semester count, if any.
    pub fn semesters(&self) -> Option<&SemestersNumber> {
        self.semesters.as_ref()
    }

    /// Returns the teaching modality, if any.
    pub fn modality(&self) -> Option<Modality> {
        self.modality
    }

    /// Returns the awarded degree, if any.
    pub fn degree(&self) -> Option<DegreeTitle> {
        self.degree
    }

    /// Returns true if this is a STEAM career.
    pub fn is_steam(&self) -> bool {
        self.is_steam
    }

    /// Returns the scholarship as of the last recomputation.
    pub fn scholarship(&self) -> Decimal {
        self.scholarship
    }

    /// Returns the attached work informations in insertion order.
    pub fn work_informations(&self) -> &[WorkInformation] {
        &self.work_informations
    }

    /// Attaches a work information variant.
    ///
    /// Does not recompute the scholarship; recomputation is a separate,
    /// explicit operation so that callers control when the derived value is
    /// refreshed.
    pub fn add_work_information(&mut self, work_information: WorkInformation) {
        self.work_informations.push(work_information);
    }

    /// Recomputes the scholarship from the current work-information snapshot.
    ///
    /// Runs a fresh [`ScholarshipCalculator`] over every attached variant and
    /// overwrites the stored scholarship with the combined result.
    pub fn recompute_scholarship(&mut self, policy: &ScholarshipPolicy) {
        let mut calculator = ScholarshipCalculator::new(policy, self.is_steam);
        for work_information in &self.work_informations {
            work_information.accept(&mut calculator);
        }
        self.scholarship = calculator.total();

        tracing::debug!(
            career_id = self.internal_id,
            scholarship = %self.scholarship,
            work_informations = self.work_informations.len(),
            "scholarship recomputed"
        );
    }
}
