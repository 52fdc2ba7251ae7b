//! Industry work information.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Description, EntityName};

/// An industry a career's graduates commonly work in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Industry {
    internal_id: i32,
    description: Option<Description>,
    name: Option<EntityName>,
    cs_related: bool,
}

impl Industry {
    /// Creates an Industry from validated value objects.
    pub fn new(
        internal_id: i32,
        description: Option<Description>,
        name: Option<EntityName>,
        cs_related: bool,
    ) -> Self {
        Self {
            internal_id,
            description,
            name,
            cs_related,
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

    /// Returns the industry name, if any.
    pub fn name(&self) -> Option<&EntityName> {
        self.name.as_ref()
    }

    /// Returns true if this industry is computer-science related.
    pub fn is_cs_related(&self) -> bool {
        self.cs_related
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_keeps_all_fields() {
        let industry = Industry::new(
            1,
            Some(Description::create("Banking software").unwrap()),
            Some(EntityName::create("Fintech").unwrap()),
            true,
        );

        assert_eq!(industry.internal_id(), 1);
        assert_eq!(industry.description().unwrap().value(), "Banking software");
        assert_eq!(industry.name().unwrap().value(), "Fintech");
        assert!(industry.is_cs_related());
    }

    #[test]
    fn fields_may_be_absent() {
        let industry = Industry::new(2, None, None, false);
        assert!(industry.description().is_none());
        assert!(industry.name().is_none());
        assert!(!industry.is_cs_related());
    }
}
