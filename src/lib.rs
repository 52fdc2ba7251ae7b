//! Career Catalog - Academic Career and Work Information Domain
//!
//! This crate implements the domain core of a catalog of academic careers:
//! validated value objects, the closed work-information variant set with its
//! visitor protocol, and the scholarship computation engine.

pub mod config;
pub mod domain;
pub mod ports;
