//! AI maturity assessment scoring.
//!
//! Pure, stateless components that turn 16 subdimension ratings and a set of
//! organisational context factors into weighted maturity metrics.
//!
//! # Components
//!
//! - `ScoreAggregator` - Subdimension ratings to dimension ist/soll/gap
//! - `ContextScorer` - Context factors to a complexity score
//! - `WeightingEngine` - Context- and archetype-adjusted dimension weights
//! - `ArchetypeClassifier` - Nearest reference profile
//! - `TensionAnalyzer` - Gap imbalance between critical pairs (SI)
//! - `MetricsCalculator` - RGI, EQI, SBS
//! - `GapAnalyzer` - Priority levels and recommendations
//! - `AssessmentEngine` - Runs the full pipeline
//!
//! # Design
//!
//! All components are stateless with associated functions only. Reference
//! data lives in `ReferenceCatalogs`, validated once and shared behind `Arc`.

mod archetype_classifier;
mod catalog;
mod context_scorer;
mod dimension_map;
mod engine;
mod errors;
mod events;
mod gap_analyzer;
mod metrics_calculator;
mod parameters;
mod rating;
mod result;
mod score_aggregator;
mod taxonomy;
mod tension_analyzer;
mod weighting_engine;

pub use archetype_classifier::{ArchetypeClassifier, ArchetypeDistance, ArchetypeMatch};
pub use catalog::{
    Archetype, BaseWeights, ContextFactorSpec, CriticalPair, OrganisationProfile,
    ReferenceCatalogs,
};
pub use context_scorer::{
    ContextAssessment, ContextFactor, ContextScorer, FactorContribution, CONTEXT_LEVEL_MAX,
    NEUTRAL_CONTEXT_VALUE,
};
pub use dimension_map::DimensionMap;
pub use engine::AssessmentEngine;
pub use errors::{AssessmentError, CatalogError};
pub use events::AssessmentScored;
pub use gap_analyzer::{GapAnalysis, GapAnalyzer, PriorityLevel, Recommendation, SubdimensionGap};
pub use metrics_calculator::{AssessmentMetrics, MetricsCalculator, METRIC_TOLERANCE, SIGMA_MAX};
pub use parameters::ScoringParameters;
pub use rating::{RatingPriority, SubdimensionRating, RATING_MAX, RATING_MIN};
pub use result::{AssessmentInput, AssessmentResult};
pub use score_aggregator::{DimensionScore, ScoreAggregator};
pub use taxonomy::{DimensionId, SubdimensionId, DIMENSION_COUNT, SUBDIMENSION_COUNT};
pub use tension_analyzer::{PairTension, TensionAnalyzer, TensionReport};
pub use weighting_engine::{WeightVector, WeightingEngine};
