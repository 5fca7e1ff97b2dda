//! Assessment Engine - The end-to-end scoring pipeline.
//!
//! ```text
//! ratings ──► ScoreAggregator ─┐
//!                              ├─► WeightingEngine (unbiased) ─► ArchetypeClassifier
//! context ──► ContextScorer ───┘                                        │
//!                                   WeightingEngine (biased) ◄──────────┘
//!                                              │
//!                        TensionAnalyzer ──► MetricsCalculator ──► AssessmentResult
//! ```
//!
//! The engine is pure: no I/O, no logging, no clocks. Identical inputs give
//! identical results.

use std::sync::Arc;

use super::archetype_classifier::ArchetypeClassifier;
use super::catalog::ReferenceCatalogs;
use super::context_scorer::ContextScorer;
use super::gap_analyzer::GapAnalyzer;
use super::metrics_calculator::MetricsCalculator;
use super::parameters::ScoringParameters;
use super::result::{AssessmentInput, AssessmentResult};
use super::score_aggregator::ScoreAggregator;
use super::tension_analyzer::TensionAnalyzer;
use super::weighting_engine::WeightingEngine;
use super::{AssessmentError, CatalogError};

/// Scores assessments against a fixed set of validated reference catalogs.
///
/// Cheap to clone and safe to share across threads.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    catalogs: Arc<ReferenceCatalogs>,
    params: ScoringParameters,
}

impl AssessmentEngine {
    /// Creates an engine, validating the catalogs once up front.
    pub fn new(
        catalogs: Arc<ReferenceCatalogs>,
        params: ScoringParameters,
    ) -> Result<Self, CatalogError> {
        catalogs.validate()?;
        Ok(Self { catalogs, params })
    }

    /// Engine over the built-in catalogs with default parameters.
    pub fn with_defaults() -> Result<Self, CatalogError> {
        Self::new(ReferenceCatalogs::builtin(), ScoringParameters::default())
    }

    pub fn catalogs(&self) -> &ReferenceCatalogs {
        &self.catalogs
    }

    pub fn params(&self) -> &ScoringParameters {
        &self.params
    }

    /// Scores one assessment.
    ///
    /// Weights are derived twice: an unbiased pass used only to classify the
    /// archetype, then a pass biased by that archetype which drives RGI and
    /// SBS. The second pass is never fed back into classification.
    ///
    /// # Errors
    /// - Rating validation errors from `ScoreAggregator`
    /// - Context errors from `ContextScorer`
    /// - `InvariantViolation` if a metric leaves [0, 1]
    pub fn score(&self, input: &AssessmentInput) -> Result<AssessmentResult, AssessmentError> {
        let dimension_scores = ScoreAggregator::aggregate(&input.ratings)?;
        let context = ContextScorer::score(&self.catalogs.context_factors, &input.context)?;

        let base = self.catalogs.base_weights.for_profile(input.profile);
        let unbiased_weights = WeightingEngine::compute(base, context.score, None, &self.params);

        let (archetype, matched) = ArchetypeClassifier::classify(
            &dimension_scores,
            &unbiased_weights,
            &self.catalogs.archetypes,
        )?;
        let weights =
            WeightingEngine::compute(base, context.score, Some(&matched.bias), &self.params);

        let tension = TensionAnalyzer::analyze(&dimension_scores, &self.catalogs.critical_pairs);
        let metrics = MetricsCalculator::compute(
            &dimension_scores,
            &weights,
            tension.si,
            context.score,
            &self.params,
        )?;
        let gap_analysis = GapAnalyzer::analyze(&input.ratings, &dimension_scores);

        Ok(AssessmentResult {
            profile: input.profile,
            dimension_scores,
            context,
            unbiased_weights,
            weights,
            archetype,
            tension,
            metrics,
            gap_analysis,
        })
    }
}
