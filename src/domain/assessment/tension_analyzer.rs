//! Tension Analyzer - Gap imbalance between conflict-prone dimension pairs.

use serde::{Deserialize, Serialize};

use super::catalog::CriticalPair;
use super::dimension_map::DimensionMap;
use super::rating::RATING_MAX;
use super::score_aggregator::DimensionScore;
use super::taxonomy::DimensionId;

/// Tension for one critical pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairTension {
    pub a: DimensionId,
    pub b: DimensionId,
    pub label: String,
    /// `|gap_a - gap_b|` on the 0-4 scale (up to 8 for opposing signs).
    pub gap_difference: f64,
    /// Normalized tension in [0, 1].
    pub tension: f64,
}

impl PairTension {
    /// The dimension lagging further behind its target.
    pub fn lagging(&self, scores: &DimensionMap<DimensionScore>) -> DimensionId {
        if scores[self.b].gap > scores[self.a].gap {
            self.b
        } else {
            self.a
        }
    }
}

/// Tension table and aggregate index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TensionReport {
    /// One entry per critical pair, in catalog order.
    pub pairs: Vec<PairTension>,
    /// Spannungsindex: the worst pair tension.
    pub si: f64,
    /// False when the pair catalog was empty (SI is then 0).
    pub pairs_configured: bool,
}

impl TensionReport {
    /// The pair defining SI; the earliest pair wins ties.
    pub fn worst_pair(&self) -> Option<&PairTension> {
        self.pairs.iter().fold(None, |best: Option<&PairTension>, p| match best {
            Some(b) if b.tension >= p.tension => Some(b),
            _ => Some(p),
        })
    }

    /// Pairs whose tension reaches `threshold`.
    pub fn pairs_above(&self, threshold: f64) -> Vec<&PairTension> {
        self.pairs.iter().filter(|p| p.tension >= threshold).collect()
    }
}

/// Tension analysis over critical pairs.
pub struct TensionAnalyzer;

impl TensionAnalyzer {
    /// Computes per-pair tension and SI.
    ///
    /// `tension = |gap_a - gap_b| / 4`, saturating at 1.0. SI is the maximum
    /// over all pairs so that one severe imbalance is not averaged away.
    ///
    /// # Edge Cases
    /// - Empty catalog: SI = 0 with `pairs_configured = false`
    pub fn analyze(scores: &DimensionMap<DimensionScore>, pairs: &[CriticalPair]) -> TensionReport {
        let pairs: Vec<PairTension> = pairs
            .iter()
            .map(|pair| {
                let gap_difference = (scores[pair.a].gap - scores[pair.b].gap).abs();
                PairTension {
                    a: pair.a,
                    b: pair.b,
                    label: pair.label.clone(),
                    gap_difference,
                    tension: (gap_difference / RATING_MAX).min(1.0),
                }
            })
            .collect();

        let si = pairs.iter().map(|p| p.tension).fold(0.0, f64::max);

        TensionReport {
            pairs_configured: !pairs.is_empty(),
            pairs,
            si,
        }
    }
}
