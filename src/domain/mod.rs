//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors)
//! - `work_information` - Closed work-information variant set and visitor protocol
//! - `scholarship` - Scholarship computation engine and policy table
//! - `career` - Career aggregate root

pub mod career;
pub mod foundation;
pub mod scholarship;
pub mod work_information;
