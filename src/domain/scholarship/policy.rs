//! Scholarship contribution policy table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-variant contribution weights for the scholarship computation.
///
/// The weights are operator configuration, not domain logic: the engine fixes
/// *how* contributions accumulate (additively, order-independently, combined
/// as `base + base * percentage`), while this table supplies *how much* each
/// variant contributes. Rules applied by the calculator:
///
/// - Enterprise with a name: `enterprise_base` added to the base.
/// - Industry with a name: `industry_base` added to the base; a CS-related
///   industry additionally contributes `industry_cs_rate` to the percentage.
/// - Opportunity with a country: `opportunity_base` added to the base.
/// - WorkLife reporting both worker counts: `work_life_rate` to the percentage.
/// - Recruitment: `recruitment_language_rate` to the percentage per requested
///   language.
/// - STEAM careers: every percentage contribution is multiplied by
///   `steam_multiplier`.
///
/// Absent fields contribute zero; they never fail the computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScholarshipPolicy {
    pub enterprise_base: Decimal,
    pub industry_base: Decimal,
    pub industry_cs_rate: Decimal,
    pub opportunity_base: Decimal,
    pub work_life_rate: Decimal,
    pub recruitment_language_rate: Decimal,
    pub steam_multiplier: Decimal,
}

impl Default for ScholarshipPolicy {
    /// Placeholder weights; deployments override these through configuration.
    fn default() -> Self {
        Self {
            enterprise_base: Decimal::new(1000, 0),
            industry_base: Decimal::new(500, 0),
            industry_cs_rate: Decimal::new(5, 2),
            opportunity_base: Decimal::new(250, 0),
            work_life_rate: Decimal::new(2, 2),
            recruitment_language_rate: Decimal::new(1, 2),
            steam_multiplier: Decimal::new(2, 0),
        }
    }
}
