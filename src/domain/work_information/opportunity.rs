//! Opportunity work information.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Country, Description};

/// A work opportunity abroad associated with a career.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opportunity {
    internal_id: i32,
    description: Option<Description>,
    country: Option<Country>,
}

impl Opportunity {
    /// Creates an Opportunity from validated value objects.
    pub fn new(internal_id: i32, description: Option<Description>, country: Option<Country>) -> Self {
        Self {
            internal_id,
            description,
            country,
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

    /// Returns the country the opportunity is located in, if any.
    pub fn country(&self) -> Option<&Country> {
        self.country.as_ref()
    }
}
