//! Weighting Engine - Context- and archetype-dependent dimension weights.

use serde::{Deserialize, Serialize};

use super::dimension_map::DimensionMap;
use super::parameters::ScoringParameters;
use super::taxonomy::{DimensionId, DIMENSION_COUNT};

/// Normalized per-dimension weights: each in (0, 1], summing to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightVector(DimensionMap<f64>);

impl WeightVector {
    /// Equal weight for every dimension.
    pub fn uniform() -> Self {
        Self(DimensionMap::splat(1.0 / DIMENSION_COUNT as f64))
    }

    /// Weight of one dimension.
    pub fn weight(&self, dimension: DimensionId) -> f64 {
        self.0[dimension]
    }

    /// Underlying per-dimension values.
    pub fn as_map(&self) -> &DimensionMap<f64> {
        &self.0
    }

    /// Sum of all weights (1.0 up to rounding).
    pub fn sum(&self) -> f64 {
        self.0.sum()
    }

    /// Dimension with the highest weight; earlier dimensions win ties.
    pub fn dominant(&self) -> DimensionId {
        let mut best = DimensionId::Governance;
        for (dimension, weight) in self.0.iter() {
            if *weight > self.0[best] {
                best = dimension;
            }
        }
        best
    }
}

/// Derivation of the active weight vector.
pub struct WeightingEngine;

impl WeightingEngine {
    /// Computes normalized weights.
    ///
    /// `raw[d] = base[d] * (1 + α·(context_score - 0.5)) * (1 + β·bias[d])`
    ///
    /// Raw weights below the configured floor (including zero, negative and
    /// NaN values) are raised to the floor, then the vector is renormalized.
    /// Without a bias the archetype factor is 1 for every dimension.
    pub fn compute(
        base: &DimensionMap<f64>,
        context_score: f64,
        bias: Option<&DimensionMap<f64>>,
        params: &ScoringParameters,
    ) -> WeightVector {
        let floor = params.weight_floor.max(f64::EPSILON);
        let context_factor = 1.0 + params.context_sensitivity * (context_score - 0.5);

        let raw = base.map(|dimension, base_weight| {
            let archetype_factor = bias
                .map(|b| 1.0 + params.archetype_sensitivity * b[dimension])
                .unwrap_or(1.0);
            let value = base_weight * context_factor * archetype_factor;
            // NaN fails the comparison and is floored as well
            if value >= floor {
                value
            } else {
                floor
            }
        });

        Self::normalize(&raw)
    }

    fn normalize(raw: &DimensionMap<f64>) -> WeightVector {
        let total = raw.sum();
        WeightVector(raw.map(|_, value| value / total))
    }
}
