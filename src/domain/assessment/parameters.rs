//! Tuning constants for weighting and the composite score.

use serde::{Deserialize, Serialize};

/// Enumerated tuning parameters with documented defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringParameters {
    /// How strongly organisational complexity amplifies or dampens weights (α).
    pub context_sensitivity: f64,
    /// How strongly an archetype's bias redistributes weight (β).
    pub archetype_sensitivity: f64,
    /// Minimum raw weight before renormalization.
    pub weight_floor: f64,
    /// SBS weight for RGI (w1).
    pub sbs_maturity_weight: f64,
    /// SBS weight for `1 - SI` (w2).
    pub sbs_tension_weight: f64,
    /// SBS weight for EQI (w3).
    pub sbs_balance_weight: f64,
}

impl ScoringParameters {
    pub const DEFAULT_CONTEXT_SENSITIVITY: f64 = 0.2;
    pub const DEFAULT_ARCHETYPE_SENSITIVITY: f64 = 0.5;
    pub const DEFAULT_WEIGHT_FLOOR: f64 = 0.01;
    pub const DEFAULT_SBS_WEIGHTS: (f64, f64, f64) = (0.4, 0.3, 0.3);

    /// The SBS weights as `(w1, w2, w3)`.
    pub fn sbs_weights(&self) -> (f64, f64, f64) {
        (
            self.sbs_maturity_weight,
            self.sbs_tension_weight,
            self.sbs_balance_weight,
        )
    }
}

impl Default for ScoringParameters {
    fn default() -> Self {
        let (w1, w2, w3) = Self::DEFAULT_SBS_WEIGHTS;
        Self {
            context_sensitivity: Self::DEFAULT_CONTEXT_SENSITIVITY,
            archetype_sensitivity: Self::DEFAULT_ARCHETYPE_SENSITIVITY,
            weight_floor: Self::DEFAULT_WEIGHT_FLOOR,
            sbs_maturity_weight: w1,
            sbs_tension_weight: w2,
            sbs_balance_weight: w3,
        }
    }
}
