//! Career aggregate.

mod aggregate;

pub use aggregate::Career;
