//! Scholarship computation engine.
//!
//! A stateful visitor ([`ScholarshipCalculator`]) folds over a career's work
//! informations into a monetary base and a fractional rate, combined as
//! `base + base * percentage`. The per-variant weights live in
//! [`ScholarshipPolicy`] and are configuration, not code.

mod calculator;
mod policy;

pub use calculator::ScholarshipCalculator;
pub use policy::ScholarshipPolicy;
