//! WorkInformation - sum type for all work-information variants.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Description;

use super::{Enterprise, Industry, Opportunity, Recruitment, WorkInformationVisitor, WorkLife};

/// Sum type for the closed set of work-information variants a career can own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WorkInformation {
    Enterprise(Enterprise),
    Industry(Industry),
    Opportunity(Opportunity),
    Recruitment(Recruitment),
    WorkLife(WorkLife),
}

impl WorkInformation {
    /// Returns the internal identifier shared by every variant.
    pub fn internal_id(&self) -> i32 {
        match self {
            WorkInformation::Enterprise(w) => w.internal_id(),
            WorkInformation::Industry(w) => w.internal_id(),
            WorkInformation::Opportunity(w) => w.internal_id(),
            WorkInformation::Recruitment(w) => w.internal_id(),
            WorkInformation::WorkLife(w) => w.internal_id(),
        }
    }

    /// Returns the description shared by every variant, if present.
    pub fn description(&self) -> Option<&Description> {
        match self {
            WorkInformation::Enterprise(w) => w.description(),
            WorkInformation::Industry(w) => w.description(),
            WorkInformation::Opportunity(w) => w.description(),
            WorkInformation::Recruitment(w) => w.description(),
            WorkInformation::WorkLife(w) => w.description(),
        }
    }

    /// Dispatches to the single visitor method matching this variant's type.
    pub fn accept<V: WorkInformationVisitor>(&self, visitor: &mut V) {
        match self {
            WorkInformation::Enterprise(w) => visitor.visit_enterprise(w),
            WorkInformation::Industry(w) => visitor.visit_industry(w),
            WorkInformation::Opportunity(w) => visitor.visit_opportunity(w),
            WorkInformation::Recruitment(w) => visitor.visit_recruitment(w),
            WorkInformation::WorkLife(w) => visitor.visit_work_life(w),
        }
    }

    /// Returns a reference to the Enterprise variant, if this is one.
    pub fn as_enterprise(&self) -> Option<&Enterprise> {
        match self {
            WorkInformation::Enterprise(w) => Some(w),
            _ => None,
        }
    }

    /// Returns a reference to the Industry variant, if this is one.
    pub fn as_industry(&self) -> Option<&Industry> {
        match self {
            WorkInformation::Industry(w) => Some(w),
            _ => None,
        }
    }

    /// Returns a reference to the Opportunity variant, if this is one.
    pub fn as_opportunity(&self) -> Option<&Opportunity> {
        match self {
            WorkInformation::Opportunity(w) => Some(w),
            _ => None,
        }
    }

    /// Returns a reference to the Recruitment variant, if this is one.
    pub fn as_recruitment(&self) -> Option<&Recruitment> {
        match self {
            WorkInformation::Recruitment(w) => Some(w),
            _ => None,
        }
    }

    /// Returns a mutable reference to the Recruitment variant, if this is one.
    pub fn as_recruitment_mut(&mut self) -> Option<&mut Recruitment> {
        match self {
            WorkInformation::Recruitment(w) => Some(w),
            _ => None,
        }
    }

    /// Returns a reference to the WorkLife variant, if this is one.
    pub fn as_work_life(&self) -> Option<&WorkLife> {
        match self {
            WorkInformation::WorkLife(w) => Some(w),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Country, EntityName, Workers};

    /// Records which visit method fired, and how often.
    #[derive(Default)]
    struct RecordingVisitor {
        enterprise: u32,
        industry: u32,
        opportunity: u32,
        recruitment: u32,
        work_life: u32,
    }

    impl WorkInformationVisitor for RecordingVisitor {
        fn visit_enterprise(&mut self, _: &Enterprise) {
            self.enterprise += 1;
        }
        fn visit_industry(&mut self, _: &Industry) {
            self.industry += 1;
        }
        fn visit_opportunity(&mut self, _: &Opportunity) {
            self.opportunity += 1;
        }
        fn visit_recruitment(&mut self, _: &Recruitment) {
            self.recruitment += 1;
        }
        fn visit_work_life(&mut self, _: &WorkLife) {
            self.work_life += 1;
        }
    }

    fn all_variants() -> Vec<WorkInformation> {
        vec![
            WorkInformation::Enterprise(Enterprise::new(
                1,
                None,
                Some(EntityName::create("Acme").unwrap()),
                Some(Country::create("Chile").unwrap()),
            )),
            WorkInformation::Industry(Industry::new(2, None, None, true)),
            WorkInformation::Opportunity(Opportunity::new(
                3,
                None,
                Some(Country::create("Norway").unwrap()),
            )),
            WorkInformation::Recruitment(Recruitment::new(4, None, None, None)),
            WorkInformation::WorkLife(WorkLife::new(
                5,
                None,
                Some(Workers::create(10).unwrap()),
                Some(Workers::create(20).unwrap()),
            )),
        ]
    }

    #[test]
    fn accept_invokes_exactly_one_matching_method_per_variant() {
        for variant in all_variants() {
            let mut visitor = RecordingVisitor::default();
            variant.accept(&mut visitor);

            let counts = [
                visitor.enterprise,
                visitor.industry,
                visitor.opportunity,
                visitor.recruitment,
                visitor.work_life,
            ];
            assert_eq!(counts.iter().sum::<u32>(), 1, "{:?}", variant);

            let expected_slot = match variant {
                WorkInformation::Enterprise(_) => visitor.enterprise,
                WorkInformation::Industry(_) => visitor.industry,
                WorkInformation::Opportunity(_) => visitor.opportunity,
                WorkInformation::Recruitment(_) => visitor.recruitment,
                WorkInformation::WorkLife(_) => visitor.work_life,
            };
            assert_eq!(expected_slot, 1);
        }
    }

    #[test]
    fn internal_id_delegates_to_each_variant() {
        let ids: Vec<i32> = all_variants().iter().map(|w| w.internal_id()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn as_accessors_match_only_their_own_variant() {
        let variants = all_variants();
        assert!(variants[0].as_enterprise().is_some());
        assert!(variants[0].as_industry().is_none());
        assert!(variants[1].as_industry().is_some());
        assert!(variants[2].as_opportunity().is_some());
        assert!(variants[3].as_recruitment().is_some());
        assert!(variants[4].as_work_life().is_some());
    }

    #[test]
    fn serializes_with_type_tag() {
        let variant = WorkInformation::Industry(Industry::new(9, None, None, false));
        let json = serde_json::to_value(&variant).unwrap();
        assert_eq!(json["type"], "industry");
    }
}
