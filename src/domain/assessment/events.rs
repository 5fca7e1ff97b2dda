//! Assessment domain events.
//!
//! - `AssessmentScored` - An assessment was scored successfully

use serde::{Deserialize, Serialize};

use super::metrics_calculator::AssessmentMetrics;
use super::result::AssessmentResult;
use crate::domain::foundation::{domain_event, AssessmentId, EventId, OrganisationId, Timestamp};

// ════════════════════════════════════════════════════════════════════════════
// AssessmentScored
// ════════════════════════════════════════════════════════════════════════════

/// Published after an assessment has been scored.
///
/// Carries the headline metrics and the classified archetype, not the full
/// result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentScored {
    /// Unique identifier for this event.
    pub event_id: EventId,

    /// Assessment that was scored.
    pub assessment_id: AssessmentId,

    /// Organisation the assessment belongs to, if known.
    pub organisation_id: Option<OrganisationId>,

    /// Name of the classified archetype.
    pub archetype: String,

    /// Classification confidence in [0, 1].
    pub archetype_confidence: f64,

    pub metrics: AssessmentMetrics,

    /// Number of context factors that fell back to the neutral value.
    pub defaulted_factors: usize,

    /// When scoring completed.
    pub scored_at: Timestamp,
}

impl AssessmentScored {
    pub fn from_result(
        assessment_id: AssessmentId,
        organisation_id: Option<OrganisationId>,
        result: &AssessmentResult,
    ) -> Self {
        Self {
            event_id: EventId::new(),
            assessment_id,
            organisation_id,
            archetype: result.archetype.name.clone(),
            archetype_confidence: result.archetype.confidence,
            metrics: result.metrics,
            defaulted_factors: result.context.defaulted.len(),
            scored_at: Timestamp::now(),
        }
    }
}

domain_event!(
    AssessmentScored,
    event_type = "assessment.scored.v1",
    schema_version = 1,
    aggregate_id = assessment_id,
    aggregate_type = "Assessment",
    occurred_at = scored_at,
    event_id = event_id
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{DomainEvent, SerializableDomainEvent};

    fn sample() -> AssessmentScored {
        AssessmentScored {
            event_id: EventId::from_string("evt-1"),
            assessment_id: AssessmentId::new(),
            organisation_id: None,
            archetype: "Balanced Transformer".into(),
            archetype_confidence: 0.9,
            metrics: AssessmentMetrics {
                rgi: 0.5,
                eqi: 1.0,
                si: 0.0,
                sbs: 0.8,
                context_score: 0.5,
            },
            defaulted_factors: 10,
            scored_at: Timestamp::now(),
        }
    }

    #[test]
    fn implements_domain_event() {
        let event = sample();
        assert_eq!(event.event_type(), "assessment.scored.v1");
        assert_eq!(event.schema_version(), 1);
        assert_eq!(event.aggregate_type(), "Assessment");
        assert_eq!(event.aggregate_id(), event.assessment_id.to_string());
        assert_eq!(event.event_id().as_str(), "evt-1");
    }

    #[test]
    fn envelope_round_trips_payload() {
        let event = sample();
        let envelope = event.to_envelope().unwrap();
        assert_eq!(envelope.event_type, "assessment.scored.v1");
        let restored: AssessmentScored = envelope.payload_as().unwrap();
        assert_eq!(restored, event);
    }
}
