//! Work-information variants and their visitor protocol.
//!
//! # Module Organization
//!
//! - One file per concrete variant (Enterprise, Industry, Opportunity,
//!   Recruitment, WorkLife)
//! - `variant` - the closed [`WorkInformation`] sum type with `accept` dispatch
//! - `visitor` - the [`WorkInformationVisitor`] trait

mod enterprise;
mod industry;
mod opportunity;
mod recruitment;
mod variant;
mod visitor;
mod work_life;

pub use enterprise::Enterprise;
pub use industry::Industry;
pub use opportunity::Opportunity;
pub use recruitment::{Language, Recruitment};
pub use variant::WorkInformation;
pub use visitor::WorkInformationVisitor;
pub use work_life::WorkLife;
