//! Error types for parameter resolution, intake validation and file loading

use chrono::NaiveDate;
use thiserror::Error;

use crate::parameters::{Category, ParameterKey};

/// Errors raised by the calculation engine
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("no active value for parameter `{key}` as of {as_of}")]
    MissingParameter { key: &'static str, as_of: NaiveDate },

    #[error("invalid parameter set: {0}")]
    InvalidParameters(String),

    #[error("invalid intake: {0}")]
    InvalidIntake(#[from] IntakeError),
}

/// Reasons an intake record is rejected before any computation starts
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntakeError {
    #[error("age must not be negative (got {0})")]
    NegativeAge(i32),

    #[error("age {age} exceeds the supported maximum of {max}")]
    AgeOutOfRange { age: i32, max: i32 },

    #[error("retirement age {retirement_age} must be greater than current age {current_age}")]
    RetirementNotAfterCurrentAge { current_age: i32, retirement_age: i32 },

    #[error("`{field}` must not be negative (got {value})")]
    NegativeAmount { field: String, value: f64 },
}

/// Errors from the CSV/JSON loaders
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid date `{value}`: {source}")]
    Date {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("unknown setting key `{0}`")]
    UnknownKey(String),

    #[error("unknown setting category `{0}`")]
    UnknownCategory(String),

    #[error("setting `{key}` belongs to category `{expected}`, found `{found}`")]
    CategoryMismatch {
        key: ParameterKey,
        expected: Category,
        found: Category,
    },
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;
