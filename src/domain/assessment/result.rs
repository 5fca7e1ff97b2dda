//! Engine input and output records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::archetype_classifier::ArchetypeMatch;
use super::catalog::OrganisationProfile;
use super::context_scorer::{ContextAssessment, ContextFactor};
use super::dimension_map::DimensionMap;
use super::gap_analyzer::GapAnalysis;
use super::metrics_calculator::AssessmentMetrics;
use super::rating::SubdimensionRating;
use super::score_aggregator::DimensionScore;
use super::tension_analyzer::TensionReport;
use super::weighting_engine::WeightVector;

/// Everything needed to score one assessment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentInput {
    pub ratings: Vec<SubdimensionRating>,
    /// Context factor values in [0, 1], keyed by catalog name.
    #[serde(default)]
    pub context: BTreeMap<String, f64>,
    #[serde(default)]
    pub profile: OrganisationProfile,
}

impl AssessmentInput {
    pub fn new(ratings: Vec<SubdimensionRating>) -> Self {
        Self {
            ratings,
            ..Default::default()
        }
    }

    pub fn with_profile(mut self, profile: OrganisationProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_context(mut self, name: impl Into<String>, value: f64) -> Self {
        self.context.insert(name.into(), value);
        self
    }

    pub fn with_context_factor(mut self, factor: ContextFactor) -> Self {
        self.context.insert(factor.name, factor.value);
        self
    }
}

/// Complete, serializable outcome of scoring one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub profile: OrganisationProfile,
    pub dimension_scores: DimensionMap<DimensionScore>,
    pub context: ContextAssessment,
    /// First-pass weights, used for classification.
    pub unbiased_weights: WeightVector,
    /// Archetype-biased weights, used for RGI and SBS.
    pub weights: WeightVector,
    pub archetype: ArchetypeMatch,
    pub tension: TensionReport,
    pub metrics: AssessmentMetrics,
    pub gap_analysis: GapAnalysis,
}
