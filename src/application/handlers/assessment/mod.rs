//! Assessment scoring handlers.

mod score_assessment;
mod score_batch;

pub use score_assessment::{ScoreAssessmentCommand, ScoreAssessmentHandler, ScoreAssessmentResult};
pub use score_batch::{ScoreBatchHandler, DEFAULT_BATCH_CONCURRENCY};
