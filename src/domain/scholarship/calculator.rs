//! Scholarship calculator - stateful visitor folding work informations into money.

use rust_decimal::Decimal;

use crate::domain::work_information::{
    Enterprise, Industry, Opportunity, Recruitment, WorkInformationVisitor, WorkLife,
};

use super::ScholarshipPolicy;

/// Stateful visitor accumulating a monetary base and a fractional rate over a
/// career's work informations.
///
/// Construct a fresh calculator per computation, pass it once to each
/// variant's `accept`, then read [`total`](Self::total). All contributions
/// are additive, so visiting order never changes the result.
///
/// # Edge Cases
/// - No variants visited: base and total are both zero.
/// - Variants with absent fields contribute zero; they never error.
#[derive(Debug)]
pub struct ScholarshipCalculator<'a> {
    policy: &'a ScholarshipPolicy,
    is_steam: bool,
    base: Decimal,
    percentage: Decimal,
}

impl<'a> ScholarshipCalculator<'a> {
    /// Creates a calculator with zeroed accumulators.
    pub fn new(policy: &'a ScholarshipPolicy, is_steam: bool) -> Self {
        Self {
            policy,
            is_steam,
            base: Decimal::ZERO,
            percentage: Decimal::ZERO,
        }
    }

    /// Returns the accumulated monetary base.
    pub fn base(&self) -> Decimal {
        self.base
    }

    /// Returns the accumulated fractional bonus rate.
    pub fn percentage(&self) -> Decimal {
        self.percentage
    }

    /// Combines the accumulators: `base + base * percentage`.
    pub fn total(&self) -> Decimal {
        self.base + self.base * self.percentage
    }

    // STEAM careers have every rate contribution scaled by the policy
    // multiplier.
    fn add_rate(&mut self, rate: Decimal) {
        let effective = if self.is_steam {
            rate * self.policy.steam_multiplier
        } else {
            rate
        };
        self.percentage += effective;
    }
}

impl WorkInformationVisitor for ScholarshipCalculator<'_> {
    fn visit_enterprise(&mut self, enterprise: &Enterprise) {
        if enterprise.name().is_some() {
            self.base += self.policy.enterprise_base;
        }
    }

    fn visit_industry(&mut self, industry: &Industry) {
        if industry.name().is_some() {
            self.base += self.policy.industry_base;
        }
        if industry.is_cs_related() {
            self.add_rate(self.policy.industry_cs_rate);
        }
    }

    fn visit_opportunity(&mut self, opportunity: &Opportunity) {
        if opportunity.country().is_some() {
            self.base += self.policy.opportunity_base;
        }
    }

    fn visit_recruitment(&mut self, recruitment: &Recruitment) {
        let languages = Decimal::from(recruitment.languages_requested().len() as u64);
        self.add_rate(self.policy.recruitment_language_rate * languages);
    }

    fn visit_work_life(&mut self, work_life: &WorkLife) {
        if work_life.female_workers().is_some() && work_life.male_workers().is_some() {
            self.add_rate(self.policy.work_life_rate);
        }
    }
}
