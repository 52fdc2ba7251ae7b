//! Ports - contracts between the domain core and external collaborators.
//!
//! Implementations live in persistence adapters outside this crate.

mod career_repository;
mod work_information_reader;

pub use career_repository::CareerRepository;
pub use work_information_reader::WorkInformationReader;
