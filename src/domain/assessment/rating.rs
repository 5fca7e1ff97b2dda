//! Subdimension ratings on the 0-4 ist/soll scale.

use serde::{Deserialize, Serialize};

use super::taxonomy::SubdimensionId;
use super::AssessmentError;

/// Lowest value on the maturity scale.
pub const RATING_MIN: f64 = 0.0;

/// Highest value on the maturity scale.
pub const RATING_MAX: f64 = 4.0;

/// Assessor-supplied priority for a subdimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingPriority {
    Low,
    Medium,
    High,
}

/// Current (ist) and target (soll) maturity for one subdimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubdimensionRating {
    pub subdimension_id: SubdimensionId,
    pub ist: f64,
    pub soll: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<RatingPriority>,
    /// Carried for the surrounding layers, never used in scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
}

impl SubdimensionRating {
    /// Creates a rating without priority or justification.
    pub fn new(subdimension_id: SubdimensionId, ist: f64, soll: f64) -> Self {
        Self {
            subdimension_id,
            ist,
            soll,
            priority: None,
            justification: None,
        }
    }

    /// Sets the assessor priority.
    pub fn with_priority(mut self, priority: RatingPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the free-text justification.
    pub fn with_justification(mut self, justification: impl Into<String>) -> Self {
        self.justification = Some(justification.into());
        self
    }

    /// Signed distance to target (`soll - ist`).
    pub fn gap(&self) -> f64 {
        self.soll - self.ist
    }

    /// Checks both values lie on the 0-4 scale.
    ///
    /// NaN is rejected because it fails the range comparison.
    pub fn validate(&self) -> Result<(), AssessmentError> {
        for (field, value) in [("ist", self.ist), ("soll", self.soll)] {
            if !(RATING_MIN..=RATING_MAX).contains(&value) {
                return Err(AssessmentError::InvalidRatingRange {
                    subdimension: self.subdimension_id,
                    field,
                    value,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_scale_bounds() {
        assert!(SubdimensionRating::new(SubdimensionId::AiStrategy, 0.0, 4.0)
            .validate()
            .is_ok());
    }

    #[test]
    fn validate_rejects_ist_above_scale() {
        let err = SubdimensionRating::new(SubdimensionId::AiStrategy, 4.1, 4.0)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            AssessmentError::InvalidRatingRange {
                subdimension: SubdimensionId::AiStrategy,
                field: "ist",
                value: 4.1,
            }
        );
    }

    #[test]
    fn validate_rejects_negative_soll() {
        let err = SubdimensionRating::new(SubdimensionId::AiStrategy, 1.0, -0.5)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            AssessmentError::InvalidRatingRange { field: "soll", .. }
        ));
    }

    #[test]
    fn validate_rejects_nan() {
        let rating = SubdimensionRating::new(SubdimensionId::DataQuality, f64::NAN, 2.0);
        assert!(rating.validate().is_err());
    }

    #[test]
    fn gap_is_signed() {
        assert_eq!(SubdimensionRating::new(SubdimensionId::DataQuality, 3.0, 1.0).gap(), -2.0);
    }

    #[test]
    fn deserializes_with_optional_fields() {
        let json = r#"{"subdimension_id":"D3.2","ist":1.5,"soll":3.0,"priority":"high"}"#;
        let rating: SubdimensionRating = serde_json::from_str(json).unwrap();
        assert_eq!(rating.subdimension_id, SubdimensionId::ExperimentationCulture);
        assert_eq!(rating.priority, Some(RatingPriority::High));
        assert!(rating.justification.is_none());
    }

    #[test]
    fn builder_fields_are_serialized_only_when_set() {
        let plain = serde_json::to_value(SubdimensionRating::new(SubdimensionId::AiLiteracy, 2.0, 3.0))
            .unwrap();
        assert!(plain.get("priority").is_none());
        assert!(plain.get("justification").is_none());

        let annotated = SubdimensionRating::new(SubdimensionId::AiLiteracy, 2.0, 3.0)
            .with_priority(RatingPriority::Medium)
            .with_justification("Pilot training only");
        let json = serde_json::to_value(&annotated).unwrap();
        assert_eq!(json["priority"], "medium");
        assert_eq!(json["justification"], "Pilot training only");
        assert!(annotated.validate().is_ok());
    }
}
