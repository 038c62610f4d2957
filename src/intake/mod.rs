//! Client intake records and contract classification

mod data;
mod classify;
pub mod loader;

pub use data::{Contract, ContractCategory, Frequency, IntakeRecord, MAX_AGE_YEARS};
pub use classify::{ContractClasses, ContractClassifier, KeywordClassifier};
pub use loader::{load_intakes, load_intakes_from_reader};
