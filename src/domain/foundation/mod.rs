//! Foundation module - Shared domain primitives.
//!
//! Contains the self-validating value objects and error types that form the
//! vocabulary of the career catalog domain.
//!
//! Every value object follows the same construction contract:
//!
//! - `create(raw)` validates externally supplied data and returns a typed
//!   validation error on violation; it never panics.
//! - `from_database(raw)` re-validates data trusted to be valid (a storage
//!   round-trip) and panics on violation, since that indicates corrupted
//!   persisted state rather than a reachable user error.
//!
//! Value objects are immutable and compared structurally over the wrapped
//! value only.

mod country;
mod degree_title;
mod description;
mod entity_name;
mod errors;
mod language_name;
mod modality;
mod semesters_number;
mod workers;

pub use country::{Country, COUNTRY_NAMES};
pub use degree_title::DegreeTitle;
pub use description::Description;
pub use entity_name::EntityName;
pub use errors::{codes, DomainError, DomainErrors, DomainResult, ErrorKind};
pub use language_name::{LanguageName, LANGUAGE_NAMES};
pub use modality::Modality;
pub use semesters_number::SemestersNumber;
pub use workers::Workers;
