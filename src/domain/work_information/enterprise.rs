//! Enterprise work information.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Country, Description, EntityName};

/// An enterprise known to hire a career's graduates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enterprise {
    internal_id: i32,
    description: Option<Description>,
    name: Option<EntityName>,
    country: Option<Country>,
}

impl Enterprise {
    /// Creates an Enterprise from validated value objects.
    pub fn new(
        internal_id: i32,
        description: Option<Description>,
        name: Option<EntityName>,
        country: Option<Country>,
    ) -> Self {
        Self {
            internal_id,
            description,
            name,
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

    /// Returns the enterprise name, if any.
    pub fn name(&self) -> Option<&EntityName> {
        self.name.as_ref()
    }

    /// Returns the country the enterprise operates from, if any.
    pub fn country(&self) -> Option<&Country> {
        self.country.as_ref()
    }
}
