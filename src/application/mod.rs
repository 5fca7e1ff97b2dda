//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! It is the only layer that logs; the domain stays pure.

pub mod handlers;

pub use handlers::{
    ScoreAssessmentCommand, ScoreAssessmentHandler, ScoreAssessmentResult, ScoreBatchHandler,
};
