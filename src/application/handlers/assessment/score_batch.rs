//! ScoreBatchHandler - Scores many independent assessments concurrently.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use tracing::{debug, info};

use super::score_assessment::{
    ScoreAssessmentCommand, ScoreAssessmentHandler, ScoreAssessmentResult,
};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Default number of assessments scored at the same time.
pub const DEFAULT_BATCH_CONCURRENCY: usize = 8;

/// Handler for scoring batches of assessments.
///
/// Scoring runs on the blocking thread pool so large batches do not stall
/// the async runtime. Each assessment succeeds or fails on its own; results
/// come back in input order.
pub struct ScoreBatchHandler {
    inner: Arc<ScoreAssessmentHandler>,
    concurrency: usize,
}

impl ScoreBatchHandler {
    pub fn new(inner: Arc<ScoreAssessmentHandler>) -> Self {
        Self {
            inner,
            concurrency: DEFAULT_BATCH_CONCURRENCY,
        }
    }

    /// Sets how many assessments are scored in parallel (at least 1).
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub async fn handle(
        &self,
        commands: Vec<ScoreAssessmentCommand>,
    ) -> Vec<Result<ScoreAssessmentResult, DomainError>> {
        let total = commands.len();
        debug!(total, concurrency = self.concurrency, "Scoring assessment batch");

        let results: Vec<Result<ScoreAssessmentResult, DomainError>> = stream::iter(commands)
            .map(|cmd| self.score_one(cmd))
            .buffered(self.concurrency)
            .collect()
            .await;

        let failed = results.iter().filter(|r| r.is_err()).count();
        info!(total, failed, "Assessment batch scored");
        results
    }

    async fn score_one(
        &self,
        cmd: ScoreAssessmentCommand,
    ) -> Result<ScoreAssessmentResult, DomainError> {
        let engine = self.inner.engine().clone();
        let input = cmd.input.clone();

        let scored = tokio::task::spawn_blocking(move || engine.score(&input))
            .await
            .map_err(|e| {
                DomainError::new(ErrorCode::InternalError, format!("Scoring task failed: {}", e))
                    .with_detail("assessment_id", cmd.assessment_id.to_string())
            })?;

        self.inner.complete(cmd, scored).await
    }
}
