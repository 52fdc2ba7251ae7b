//! WorkLife work information.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Description, Workers};

/// Work-life statistics for a career's field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkLife {
    internal_id: i32,
    description: Option<Description>,
    female_workers: Option<Workers>,
    male_workers: Option<Workers>,
}

impl WorkLife {
    /// Creates a WorkLife entry from validated value objects.
    pub fn new(
        internal_id: i32,
        description: Option<Description>,
        female_workers: Option<Workers>,
        male_workers: Option<Workers>,
    ) -> Self {
        Self {
            internal_id,
            description,
            female_workers,
            male_workers,
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

    /// Returns the reported female worker count, if any.
    pub fn female_workers(&self) -> Option<&Workers> {
        self.female_workers.as_ref()
    }

    /// Returns the reported male worker count, if any.
    pub fn male_workers(&self) -> Option<&Workers> {
        self.male_workers.as_ref()
    }
}
