//! Assessment scoring and catalog errors.

use thiserror::Error;

use super::taxonomy::{DimensionId, SubdimensionId};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while scoring a single assessment.
///
/// All are deterministic: retrying with the same input yields the same error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssessmentError {
    #[error("Assessment is incomplete, missing ratings for: {}", format_codes(.missing))]
    IncompleteAssessment { missing: Vec<SubdimensionId> },

    #[error("Subdimension {subdimension} was rated more than once")]
    DuplicateRating { subdimension: SubdimensionId },

    #[error("Rating '{field}' for {subdimension} must be between 0.0 and 4.0, got {value}")]
    InvalidRatingRange {
        subdimension: SubdimensionId,
        field: &'static str,
        value: f64,
    },

    #[error("Unknown subdimension code '{code}'")]
    UnknownSubdimension { code: String },

    #[error("Unknown dimension code '{code}'")]
    UnknownDimension { code: String },

    #[error("Unknown context factor '{name}'")]
    UnknownContextFactor { name: String },

    #[error("Context factor '{name}' must be between 0.0 and 1.0, got {value}")]
    InvalidContextValue { name: String, value: f64 },

    #[error("Computed {metric} = {value} lies outside [0, 1]")]
    InvariantViolation { metric: &'static str, value: f64 },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Errors in the static reference catalogs, detected when they are loaded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("Archetype catalog must contain at least one archetype")]
    EmptyArchetypeCatalog,

    #[error("Duplicate archetype '{name}'")]
    DuplicateArchetype { name: String },

    #[error("Archetype '{archetype}' template value for {dimension} must be in [0, 1], got {value}")]
    TemplateOutOfRange {
        archetype: String,
        dimension: DimensionId,
        value: f64,
    },

    #[error("Archetype '{archetype}' bias for {dimension} must be in [-1, 1], got {value}")]
    BiasOutOfRange {
        archetype: String,
        dimension: DimensionId,
        value: f64,
    },

    #[error("Base weights '{profile}' must be positive and sum to 1.0, got sum {sum}")]
    InvalidBaseWeights { profile: &'static str, sum: f64 },

    #[error("Context factor catalog must not be empty")]
    EmptyContextCatalog,

    #[error("Duplicate context factor '{name}'")]
    DuplicateContextFactor { name: String },

    #[error("Context factor weights must be positive and sum to 1.0, got sum {sum}")]
    InvalidContextWeights { sum: f64 },

    #[error("Critical pair ({a}, {b}) must reference two different dimensions")]
    DegeneratePair { a: DimensionId, b: DimensionId },

    #[error("Failed to read catalog file: {0}")]
    Io(String),

    #[error("Failed to parse catalog: {0}")]
    Parse(String),
}

fn format_codes(codes: &[SubdimensionId]) -> String {
    codes
        .iter()
        .map(|c| c.code())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<AssessmentError> for DomainError {
    fn from(err: AssessmentError) -> Self {
        let message = err.to_string();
        match err {
            AssessmentError::IncompleteAssessment { missing } => {
                DomainError::new(ErrorCode::IncompleteAssessment, message)
                    .with_detail("missing", format_codes(&missing))
            }
            AssessmentError::DuplicateRating { subdimension } => {
                DomainError::new(ErrorCode::DuplicateRating, message)
                    .with_detail("subdimension", subdimension.code())
            }
            AssessmentError::InvalidRatingRange {
                subdimension,
                field,
                ..
            } => DomainError::new(ErrorCode::OutOfRange, message)
                .with_detail("subdimension", subdimension.code())
                .with_detail("field", field),
            AssessmentError::UnknownSubdimension { code }
            | AssessmentError::UnknownDimension { code } => {
                DomainError::new(ErrorCode::UnknownSubdimension, message).with_detail("code", code)
            }
            AssessmentError::UnknownContextFactor { name } => {
                DomainError::new(ErrorCode::UnknownContextFactor, message)
                    .with_detail("factor", name)
            }
            AssessmentError::InvalidContextValue { name, .. } => {
                DomainError::new(ErrorCode::OutOfRange, message).with_detail("factor", name)
            }
            AssessmentError::InvariantViolation { metric, .. } => {
                DomainError::new(ErrorCode::InvariantViolation, message)
                    .with_detail("metric", metric)
            }
            AssessmentError::Catalog(err) => err.into(),
        }
    }
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        let code = match err {
            CatalogError::Io(_) => ErrorCode::CatalogUnavailable,
            _ => ErrorCode::CatalogInvalid,
        };
        DomainError::new(code, err.to_string())
    }
}
