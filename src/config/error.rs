//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("{name} must be a finite, non-negative number, got {value}")]
    InvalidSensitivity { name: &'static str, value: f64 },

    #[error("Weight floor must be in (0, 0.125], got {0}")]
    InvalidWeightFloor(f64),

    #[error("SBS weights must be non-negative and sum to 1.0, got sum {0}")]
    InvalidSbsWeights(f64),

    #[error("Catalog path must not be empty")]
    EmptyCatalogPath,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
