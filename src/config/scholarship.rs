//! Scholarship weight configuration

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::scholarship::ScholarshipPolicy;

use super::error::ValidationError;

/// Scholarship contribution weights
///
/// Every field falls back to the documented placeholder table
/// ([`ScholarshipPolicy::default`]); deployments are expected to override
/// these with operator-supplied values.
#[derive(Debug, Clone, Deserialize)]
pub struct ScholarshipConfig {
    /// Base amount per named enterprise
    #[serde(default = "default_enterprise_base")]
    pub enterprise_base: Decimal,

    /// Base amount per named industry
    #[serde(default = "default_industry_base")]
    pub industry_base: Decimal,

    /// Rate contributed per CS-related industry
    #[serde(default = "default_industry_cs_rate")]
    pub industry_cs_rate: Decimal,

    /// Base amount per opportunity with a country
    #[serde(default = "default_opportunity_base")]
    pub opportunity_base: Decimal,

    /// Rate contributed per fully-reported work-life entry
    #[serde(default = "default_work_life_rate")]
    pub work_life_rate: Decimal,

    /// Rate contributed per requested recruitment language
    #[serde(default = "default_recruitment_language_rate")]
    pub recruitment_language_rate: Decimal,

    /// Factor applied to rate contributions of STEAM careers
    #[serde(default = "default_steam_multiplier")]
    pub steam_multiplier: Decimal,
}

impl ScholarshipConfig {
    /// Validate the configured weights
    pub fn validate(&self) -> Result<(), ValidationError> {
        let weights = [
            ("enterprise_base", self.enterprise_base),
            ("industry_base", self.industry_base),
            ("industry_cs_rate", self.industry_cs_rate),
            ("opportunity_base", self.opportunity_base),
            ("work_life_rate", self.work_life_rate),
            ("recruitment_language_rate", self.recruitment_language_rate),
        ];
        for (name, weight) in weights {
            if weight < Decimal::ZERO {
                return Err(ValidationError::NegativeWeight(name));
            }
        }
        if self.steam_multiplier < Decimal::ZERO {
            return Err(ValidationError::NegativeMultiplier);
        }
        Ok(())
    }

    /// Convert into the domain policy table
    pub fn policy(&self) -> ScholarshipPolicy {
        ScholarshipPolicy {
            enterprise_base: self.enterprise_base,
            industry_base: self.industry_base,
            industry_cs_rate: self.industry_cs_rate,
            opportunity_base: self.opportunity_base,
            work_life_rate: self.work_life_rate,
            recruitment_language_rate: self.recruitment_language_rate,
            steam_multiplier: self.steam_multiplier,
        }
    }
}

impl Default for ScholarshipConfig {
    fn default() -> Self {
        Self {
            enterprise_base: default_enterprise_base(),
            industry_base: default_industry_base(),
            industry_cs_rate: default_industry_cs_rate(),
            opportunity_base: default_opportunity_base(),
            work_life_rate: default_work_life_rate(),
            recruitment_language_rate: default_recruitment_language_rate(),
            steam_multiplier: default_steam_multiplier(),
        }
    }
}

fn default_enterprise_base() -> Decimal {
    ScholarshipPolicy::default().enterprise_base
}

fn default_industry_base() -> Decimal {
    ScholarshipPolicy::default().industry_base
}

fn default_industry_cs_rate() -> Decimal {
    ScholarshipPolicy::default().industry_cs_rate
}

fn default_opportunity_base() -> Decimal {
    ScholarshipPolicy::default().opportunity_base
}

fn default_work_life_rate() -> Decimal {
    ScholarshipPolicy::default().work_life_rate
}

fn default_recruitment_language_rate() -> Decimal {
    ScholarshipPolicy::default().recruitment_language_rate
}

fn default_steam_multiplier() -> Decimal {
    ScholarshipPolicy::default().steam_multiplier
}
