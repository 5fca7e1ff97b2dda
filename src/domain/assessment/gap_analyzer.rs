//! Gap Analyzer - Priority levels and action recommendations.
//!
//! Classifies how urgently each dimension and subdimension needs attention,
//! given its current maturity and the distance to its target.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::dimension_map::DimensionMap;
use super::rating::{SubdimensionRating, RATING_MAX};
use super::score_aggregator::DimensionScore;
use super::taxonomy::{DimensionId, SubdimensionId};

/// Urgency of closing a gap, most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityLevel {
    Critical,
    High,
    Medium,
    Low,
}

impl PriorityLevel {
    /// Returns true for levels that warrant a recommendation.
    pub fn is_actionable(&self) -> bool {
        matches!(self, PriorityLevel::Critical | PriorityLevel::High)
    }
}

/// Gap and priority of one subdimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubdimensionGap {
    pub subdimension_id: SubdimensionId,
    pub ist: f64,
    pub soll: f64,
    /// Absolute distance between ist and soll.
    pub gap: f64,
    /// `gap` as a percentage of the rating scale.
    pub gap_percent: f64,
    pub priority: PriorityLevel,
}

/// A dimension that needs action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub dimension_id: DimensionId,
    pub dimension_name: String,
    pub ist: f64,
    pub soll: f64,
    pub gap: f64,
    pub priority: PriorityLevel,
}

/// Subdimension gaps plus prioritized dimension recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysis {
    /// One entry per subdimension, in code order.
    pub subdimension_gaps: Vec<SubdimensionGap>,
    pub recommendations: Vec<Recommendation>,
}

/// Gap and priority analysis.
pub struct GapAnalyzer;

impl GapAnalyzer {
    /// Full analysis over ratings and their aggregated dimension scores.
    pub fn analyze(
        ratings: &[SubdimensionRating],
        scores: &DimensionMap<DimensionScore>,
    ) -> GapAnalysis {
        let mut subdimension_gaps: Vec<SubdimensionGap> = ratings
            .iter()
            .map(|rating| {
                let (gap, gap_percent) = Self::subdimension_gap(rating.ist, rating.soll);
                SubdimensionGap {
                    subdimension_id: rating.subdimension_id,
                    ist: rating.ist,
                    soll: rating.soll,
                    gap,
                    gap_percent,
                    priority: Self::priority_level(rating.ist, gap),
                }
            })
            .collect();
        subdimension_gaps.sort_by_key(|g| g.subdimension_id.index());

        GapAnalysis {
            subdimension_gaps,
            recommendations: Self::recommendations(scores),
        }
    }

    /// Returns `(gap, gap_percent)` with `gap = |soll - ist|`.
    pub fn subdimension_gap(ist: f64, soll: f64) -> (f64, f64) {
        let gap = (soll - ist).abs();
        (gap, gap / RATING_MAX * 100.0)
    }

    /// Priority from current maturity and gap size.
    ///
    /// Low maturity escalates a gap: below 2.0 a gap over 1.5 is critical,
    /// below 2.5 a gap over 1.0 is already high.
    pub fn priority_level(ist: f64, gap: f64) -> PriorityLevel {
        if ist < 2.0 && gap > 1.5 {
            PriorityLevel::Critical
        } else if ist < 2.5 && gap > 1.0 {
            PriorityLevel::High
        } else if gap > 1.5 {
            PriorityLevel::High
        } else if gap > 0.8 {
            PriorityLevel::Medium
        } else {
            PriorityLevel::Low
        }
    }

    /// Critical and high priority dimensions, most urgent first.
    ///
    /// Sorted by priority, then by descending gap, then dimension order.
    pub fn recommendations(scores: &DimensionMap<DimensionScore>) -> Vec<Recommendation> {
        let mut recommendations: Vec<Recommendation> = scores
            .values()
            .filter_map(|score| {
                let (gap, _) = Self::subdimension_gap(score.ist, score.soll);
                let priority = Self::priority_level(score.ist, gap);
                priority.is_actionable().then(|| Recommendation {
                    dimension_id: score.dimension_id,
                    dimension_name: score.dimension_id.name().to_string(),
                    ist: score.ist,
                    soll: score.soll,
                    gap,
                    priority,
                })
            })
            .collect();

        recommendations.sort_by(|a, b| {
            a.priority
                .cmp(&b.priority)
                .then_with(|| b.gap.partial_cmp(&a.gap).unwrap_or(Ordering::Equal))
                .then_with(|| a.dimension_id.index().cmp(&b.dimension_id.index()))
        });
        recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gap_is_absolute_with_percentage() {
        assert_eq!(GapAnalyzer::subdimension_gap(1.0, 3.0), (2.0, 50.0));
        assert_eq!(GapAnalyzer::subdimension_gap(3.0, 2.0), (1.0, 25.0));
        assert_eq!(GapAnalyzer::subdimension_gap(2.0, 2.0), (0.0, 0.0));
    }

    #[test]
    fn priority_rules() {
        assert_eq!(GapAnalyzer::priority_level(1.5, 2.0), PriorityLevel::Critical);
        assert_eq!(GapAnalyzer::priority_level(2.2, 1.2), PriorityLevel::High);
        assert_eq!(GapAnalyzer::priority_level(3.0, 1.6), PriorityLevel::High);
        assert_eq!(GapAnalyzer::priority_level(3.0, 1.0), PriorityLevel::Medium);
        assert_eq!(GapAnalyzer::priority_level(1.0, 0.5), PriorityLevel::Low);
    }

    #[test]
    fn priority_boundaries_are_exclusive() {
        assert_eq!(GapAnalyzer::priority_level(2.0, 1.6), PriorityLevel::High);
        assert_eq!(GapAnalyzer::priority_level(1.9, 1.5), PriorityLevel::High);
        assert_eq!(GapAnalyzer::priority_level(2.5, 1.5), PriorityLevel::Medium);
        assert_eq!(GapAnalyzer::priority_level(3.0, 0.8), PriorityLevel::Low);
    }

    #[test]
    fn recommendations_are_ordered_by_urgency() {
        let mut scores = DimensionMap::from_fn(|d| DimensionScore::new(d, 3.0, 3.5));
        scores[DimensionId::Impact] = DimensionScore::new(DimensionId::Impact, 1.0, 3.0);
        scores[DimensionId::Data] = DimensionScore::new(DimensionId::Data, 2.0, 4.0);
        scores[DimensionId::Strategy] = DimensionScore::new(DimensionId::Strategy, 1.5, 4.0);
        scores[DimensionId::Culture] = DimensionScore::new(DimensionId::Culture, 2.0, 4.0);

        let recs = GapAnalyzer::recommendations(&scores);
        let order: Vec<DimensionId> = recs.iter().map(|r| r.dimension_id).collect();
        assert_eq!(
            order,
            vec![
                DimensionId::Strategy,
                DimensionId::Impact,
                DimensionId::Culture,
                DimensionId::Data,
            ]
        );
        assert_eq!(recs[0].priority, PriorityLevel::Critical);
        assert_eq!(recs[2].priority, PriorityLevel::High);
    }

    #[test]
    fn analysis_lists_every_subdimension_in_code_order() {
        let ratings: Vec<SubdimensionRating> = SubdimensionId::ALL
            .iter()
            .rev()
            .map(|sd| SubdimensionRating::new(*sd, 1.0, 3.0))
            .collect();
        let scores = DimensionMap::from_fn(|d| DimensionScore::new(d, 1.0, 3.0));

        let analysis = GapAnalyzer::analyze(&ratings, &scores);
        assert_eq!(analysis.subdimension_gaps.len(), 16);
        assert_eq!(
            analysis.subdimension_gaps[0].subdimension_id,
            SubdimensionId::ALL[0]
        );
        assert!(analysis
            .subdimension_gaps
            .iter()
            .all(|g| g.priority == PriorityLevel::Critical));
        assert_eq!(analysis.recommendations.len(), 8);
    }
}
