//! Error types shared across layers.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    IncompleteAssessment,
    DuplicateRating,
    OutOfRange,
    UnknownSubdimension,
    UnknownContextFactor,

    // Engine errors
    InvariantViolation,

    // Configuration errors
    CatalogInvalid,
    CatalogUnavailable,

    // Infrastructure errors
    EventPublishFailed,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::IncompleteAssessment => "INCOMPLETE_ASSESSMENT",
            ErrorCode::DuplicateRating => "DUPLICATE_RATING",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::UnknownSubdimension => "UNKNOWN_SUBDIMENSION",
            ErrorCode::UnknownContextFactor => "UNKNOWN_CONTEXT_FACTOR",
            ErrorCode::InvariantViolation => "INVARIANT_VIOLATION",
            ErrorCode::CatalogInvalid => "CATALOG_INVALID",
            ErrorCode::CatalogUnavailable => "CATALOG_UNAVAILABLE",
            ErrorCode::EventPublishFailed => "EVENT_PUBLISH_FAILED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Returns true if the error was caused by caller-supplied data.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::IncompleteAssessment
                | ErrorCode::DuplicateRating
                | ErrorCode::OutOfRange
                | ErrorCode::UnknownSubdimension
                | ErrorCode::UnknownContextFactor
        )
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
