//! Visitor protocol for the closed work-information variant set.

use super::{Enterprise, Industry, Opportunity, Recruitment, WorkLife};

/// Double-dispatch visitor over the closed work-information variant set.
///
/// One method per concrete variant: adding a variant means extending this
/// trait and every implementation, which is the intended compile-time
/// exhaustiveness net. [`super::WorkInformation::accept`] guarantees that
/// exactly one type-matching method is invoked per variant.
pub trait WorkInformationVisitor {
    fn visit_enterprise(&mut self, enterprise: &Enterprise);
    fn visit_industry(&mut self, industry: &Industry);
    fn visit_opportunity(&mut self, opportunity: &Opportunity);
    fn visit_recruitment(&mut self, recruitment: &Recruitment);
    fn visit_work_life(&mut self, work_life: &WorkLife);
}
