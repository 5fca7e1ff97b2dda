//! Metrics Calculator - RGI, EQI, SI and SBS.
//!
//! | Metric | Meaning |
//! |--------|---------|
//! | RGI | Weighted overall maturity (Reifegradindex) |
//! | EQI | Evenness of maturity across dimensions (Equilibrium Index) |
//! | SI  | Worst tension between critical pairs (Spannungsindex) |
//! | SBS | Composite of maturity, tension and balance |

use serde::{Deserialize, Serialize};

use super::dimension_map::DimensionMap;
use super::parameters::ScoringParameters;
use super::score_aggregator::DimensionScore;
use super::weighting_engine::WeightVector;
use super::AssessmentError;

/// Values within this distance of [0, 1] are treated as rounding noise.
pub const METRIC_TOLERANCE: f64 = 1e-9;

/// Largest possible population standard deviation of values in [0, 1].
pub const SIGMA_MAX: f64 = 0.5;

/// Largest EQI for a profile whose values are not all identical.
const UNEVEN_EQI_MAX: f64 = 1.0 - f64::EPSILON / 2.0;

/// The five headline metrics of an assessment, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssessmentMetrics {
    pub rgi: f64,
    pub eqi: f64,
    pub si: f64,
    pub sbs: f64,
    pub context_score: f64,
}

/// Metric computation.
pub struct MetricsCalculator;

impl MetricsCalculator {
    /// Computes all metrics from aggregated scores and final weights.
    ///
    /// # Errors
    /// - `InvariantViolation` if any metric or the context score leaves
    ///   [0, 1] by more than `METRIC_TOLERANCE`
    pub fn compute(
        scores: &DimensionMap<DimensionScore>,
        weights: &WeightVector,
        si: f64,
        context_score: f64,
        params: &ScoringParameters,
    ) -> Result<AssessmentMetrics, AssessmentError> {
        let context_score = ensure_unit_interval("context_score", context_score)?;
        let si = ensure_unit_interval("si", si)?;
        let rgi = ensure_unit_interval("rgi", Self::rgi(scores, weights))?;
        let eqi = ensure_unit_interval("eqi", Self::eqi(scores))?;

        let (w1, w2, w3) = params.sbs_weights();
        let sbs = ensure_unit_interval("sbs", w1 * rgi + w2 * (1.0 - si) + w3 * eqi)?;

        Ok(AssessmentMetrics {
            rgi,
            eqi,
            si,
            sbs,
            context_score,
        })
    }

    /// Weighted mean of normalized ist values.
    pub fn rgi(scores: &DimensionMap<DimensionScore>, weights: &WeightVector) -> f64 {
        scores
            .iter()
            .map(|(dimension, score)| weights.weight(dimension) * score.normalized_ist())
            .sum()
    }

    /// `1 - σ / SIGMA_MAX` over the normalized ist profile.
    ///
    /// # Edge Cases
    /// - All dimensions equal: EQI is exactly 1
    /// - Any difference at all: EQI stays strictly below 1, even when σ is
    ///   too small to change `1 - σ / SIGMA_MAX` in floating point
    pub fn eqi(scores: &DimensionMap<DimensionScore>) -> f64 {
        let values: Vec<f64> = scores.values().map(DimensionScore::normalized_ist).collect();
        if values.windows(2).all(|pair| pair[0] == pair[1]) {
            return 1.0;
        }
        (1.0 - population_std_dev(&values) / SIGMA_MAX).min(UNEVEN_EQI_MAX)
    }
}

/// Population standard deviation.
///
/// Deviations are scaled by the largest one before squaring so that tiny
/// spreads do not underflow to zero.
fn population_std_dev(values: &[f64]) -> f64 {
    let Some(first) = values.first() else {
        return 0.0;
    };
    if values.iter().all(|v| v == first) {
        return 0.0;
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let scale = values
        .iter()
        .map(|v| (v - mean).abs())
        .fold(0.0, f64::max);
    if scale == 0.0 {
        return 0.0;
    }

    let variance = values
        .iter()
        .map(|v| ((v - mean) / scale).powi(2))
        .sum::<f64>()
        / n;
    scale * variance.sqrt()
}

/// Snaps `value` into [0, 1] when it is only outside by rounding noise.
///
/// This absorbs floating-point error only. Anything further than
/// `METRIC_TOLERANCE` from the interval is an `InvariantViolation`, never
/// clamped.
pub(crate) fn ensure_unit_interval(metric: &'static str, value: f64) -> Result<f64, AssessmentError> {
    if (-METRIC_TOLERANCE..=1.0 + METRIC_TOLERANCE).contains(&value) {
        Ok(value.clamp(0.0, 1.0))
    } else {
        Err(AssessmentError::InvariantViolation { metric, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::DimensionId;

    fn uniform_scores(ist: f64, soll: f64) -> DimensionMap<DimensionScore> {
        DimensionMap::from_fn(|d| DimensionScore::new(d, ist, soll))
    }

    #[test]
    fn uniform_profile_metrics() {
        let metrics = MetricsCalculator::compute(
            &uniform_scores(2.0, 3.0),
            &WeightVector::uniform(),
            0.0,
            0.5,
            &ScoringParameters::default(),
        )
        .unwrap();

        assert!((metrics.rgi - 0.5).abs() < 1e-12);
        assert_eq!(metrics.eqi, 1.0);
        assert_eq!(metrics.si, 0.0);
        assert!((metrics.sbs - 0.8).abs() < 1e-12);
    }

    #[test]
    fn fully_mature_profile_reaches_one() {
        let metrics = MetricsCalculator::compute(
            &uniform_scores(4.0, 4.0),
            &WeightVector::uniform(),
            0.0,
            0.5,
            &ScoringParameters::default(),
        )
        .unwrap();
        assert!((metrics.rgi - 1.0).abs() < 1e-12);
        assert!((metrics.sbs - 1.0).abs() < 1e-12);
        assert!(metrics.rgi <= 1.0);
    }

    #[test]
    fn polarized_profile_has_zero_equilibrium() {
        let scores = DimensionMap::from_fn(|d| {
            let ist = if d.index() % 2 == 0 { 0.0 } else { 4.0 };
            DimensionScore::new(d, ist, 4.0)
        });
        assert!(MetricsCalculator::eqi(&scores).abs() < 1e-12);
    }

    #[test]
    fn single_outlier_lowers_equilibrium() {
        let mut scores = uniform_scores(2.0, 3.0);
        scores[DimensionId::Impact] = DimensionScore::new(DimensionId::Impact, 4.0, 4.0);
        let eqi = MetricsCalculator::eqi(&scores);
        assert!(eqi > 0.0 && eqi < 1.0);
    }

    #[test]
    fn rgi_follows_weights() {
        let mut scores = uniform_scores(0.0, 4.0);
        scores[DimensionId::Data] = DimensionScore::new(DimensionId::Data, 4.0, 4.0);

        let uniform = MetricsCalculator::rgi(&scores, &WeightVector::uniform());
        assert!((uniform - 0.125).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_context_score_is_an_invariant_violation() {
        let err = MetricsCalculator::compute(
            &uniform_scores(2.0, 3.0),
            &WeightVector::uniform(),
            0.0,
            1.5,
            &ScoringParameters::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            AssessmentError::InvariantViolation {
                metric: "context_score",
                value: 1.5
            }
        );
    }

    #[test]
    fn rounding_noise_is_snapped_into_range() {
        assert_eq!(ensure_unit_interval("rgi", 1.0 + 1e-12).unwrap(), 1.0);
        assert_eq!(ensure_unit_interval("rgi", -1e-12).unwrap(), 0.0);
        assert!(ensure_unit_interval("rgi", 1.0 + 1e-6).is_err());
        assert!(ensure_unit_interval("rgi", f64::NAN).is_err());
    }

    #[test]
    fn std_dev_of_constant_values_is_exactly_zero() {
        assert_eq!(population_std_dev(&[0.3; 8]), 0.0);
        assert_eq!(population_std_dev(&[]), 0.0);
        assert!((population_std_dev(&[0.0, 1.0]) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn vanishing_spread_still_lowers_equilibrium() {
        let scores = DimensionMap::from_fn(|d| {
            let ist = if d == DimensionId::Data { 1e-300 } else { 0.0 };
            DimensionScore::new(d, ist, 4.0)
        });
        let values: Vec<f64> = scores.values().map(DimensionScore::normalized_ist).collect();

        assert!(population_std_dev(&values) > 0.0);
        assert!(MetricsCalculator::eqi(&scores) < 1.0);
    }
}
