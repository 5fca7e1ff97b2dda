//! ScoreAssessmentHandler - Command handler for scoring one assessment.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::assessment::{
    AssessmentEngine, AssessmentError, AssessmentInput, AssessmentResult, AssessmentScored,
};
use crate::domain::foundation::{
    AssessmentId, DomainError, ErrorCode, OrganisationId, SerializableDomainEvent,
};
use crate::ports::EventPublisher;

/// Command to score a completed assessment.
#[derive(Debug, Clone)]
pub struct ScoreAssessmentCommand {
    pub assessment_id: AssessmentId,
    pub organisation_id: Option<OrganisationId>,
    pub input: AssessmentInput,
    /// Request-scoped ID propagated into the published event.
    pub correlation_id: Option<String>,
}

impl ScoreAssessmentCommand {
    /// Command for a fresh assessment ID without organisation context.
    pub fn new(input: AssessmentInput) -> Self {
        Self {
            assessment_id: AssessmentId::new(),
            organisation_id: None,
            input,
            correlation_id: None,
        }
    }

    pub fn with_organisation(mut self, organisation_id: OrganisationId) -> Self {
        self.organisation_id = Some(organisation_id);
        self
    }

    pub fn with_correlation_id(mut self, correlation_id: impl Into<String>) -> Self {
        self.correlation_id = Some(correlation_id.into());
        self
    }
}

/// Result of successful scoring.
#[derive(Debug, Clone)]
pub struct ScoreAssessmentResult {
    pub assessment_id: AssessmentId,
    pub result: AssessmentResult,
    pub event: AssessmentScored,
}

/// Handler for scoring assessments.
///
/// Runs the engine, then publishes `AssessmentScored`. A failed publish
/// fails the command so callers never see a result without its event.
pub struct ScoreAssessmentHandler {
    engine: AssessmentEngine,
    event_publisher: Arc<dyn EventPublisher>,
}

impl ScoreAssessmentHandler {
    pub fn new(engine: AssessmentEngine, event_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            engine,
            event_publisher,
        }
    }

    pub fn engine(&self) -> &AssessmentEngine {
        &self.engine
    }

    pub async fn handle(
        &self,
        cmd: ScoreAssessmentCommand,
    ) -> Result<ScoreAssessmentResult, DomainError> {
        debug!(
            assessment_id = %cmd.assessment_id,
            ratings = cmd.input.ratings.len(),
            context_factors = cmd.input.context.len(),
            profile = cmd.input.profile.label(),
            "Scoring assessment"
        );

        let scored = self.engine.score(&cmd.input);
        self.complete(cmd, scored).await
    }

    /// Logs the scoring outcome and publishes the event for a success.
    pub(crate) async fn complete(
        &self,
        cmd: ScoreAssessmentCommand,
        scored: Result<AssessmentResult, AssessmentError>,
    ) -> Result<ScoreAssessmentResult, DomainError> {
        let result = match scored {
            Ok(result) => result,
            Err(err) => {
                warn!(
                    assessment_id = %cmd.assessment_id,
                    error = %err,
                    "Assessment scoring failed"
                );
                return Err(err.into());
            }
        };

        if result.context.has_defaults() {
            debug!(
                assessment_id = %cmd.assessment_id,
                defaulted = ?result.context.defaulted,
                "Context factors defaulted to neutral value"
            );
        }
        if !result.tension.pairs_configured {
            warn!(
                assessment_id = %cmd.assessment_id,
                "No critical pairs configured, SI reported as 0"
            );
        }

        let event = AssessmentScored::from_result(cmd.assessment_id, cmd.organisation_id, &result);
        let mut envelope = event.to_envelope()?;
        if let Some(correlation_id) = &cmd.correlation_id {
            envelope = envelope.with_correlation_id(correlation_id.clone());
        }

        if let Err(err) = self.event_publisher.publish(envelope).await {
            warn!(
                assessment_id = %cmd.assessment_id,
                error = %err,
                "Failed to publish AssessmentScored event"
            );
            return Err(DomainError::new(ErrorCode::EventPublishFailed, err.message)
                .with_detail("assessment_id", cmd.assessment_id.to_string()));
        }

        info!(
            assessment_id = %cmd.assessment_id,
            archetype = %result.archetype.name,
            rgi = result.metrics.rgi,
            eqi = result.metrics.eqi,
            si = result.metrics.si,
            sbs = result.metrics.sbs,
            "Assessment scored"
        );

        Ok(ScoreAssessmentResult {
            assessment_id: cmd.assessment_id,
            result,
            event,
        })
    }
}
