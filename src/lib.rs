//! Rentencheck - pension calculation engine for German pension-gap analysis
//!
//! This library provides:
//! - Date-bounded resolution of economic, social insurance and tax parameters
//! - Inflation projection, progressive income tax and statutory pension net of insurance
//! - Pension gap and required capital at retirement
//! - Three-point projections (today, retirement, life expectancy) of a client's intake
//! - Parallel batch and what-if scenario runs

pub mod error;
pub mod parameters;
pub mod calculation;
pub mod intake;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use error::{EngineError, IntakeError, LoadError};
pub use parameters::{ParameterProvider, ParameterSet, SettingsStore};
pub use intake::{Contract, IntakeRecord};
pub use projection::{ProjectionEngine, ProjectionConfig, ProjectionResult};
pub use scenario::ScenarioRunner;
