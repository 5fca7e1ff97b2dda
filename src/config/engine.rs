//! Scoring engine tuning configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::assessment::{ScoringParameters, DIMENSION_COUNT};

const SBS_SUM_TOLERANCE: f64 = 1e-6;

/// Tuning parameters for weighting and the composite score
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EngineConfig {
    /// Context sensitivity α
    #[serde(default = "default_alpha")]
    pub alpha: f64,

    /// Archetype sensitivity β
    #[serde(default = "default_beta")]
    pub beta: f64,

    /// Minimum raw weight before renormalization
    #[serde(default = "default_weight_floor")]
    pub weight_floor: f64,

    /// SBS weight for RGI
    #[serde(default = "default_sbs_rgi_weight")]
    pub sbs_rgi_weight: f64,

    /// SBS weight for (1 - SI)
    #[serde(default = "default_sbs_tension_weight")]
    pub sbs_tension_weight: f64,

    /// SBS weight for EQI
    #[serde(default = "default_sbs_eqi_weight")]
    pub sbs_eqi_weight: f64,
}

impl EngineConfig {
    /// Converts into the engine's parameter set
    pub fn scoring_parameters(&self) -> ScoringParameters {
        ScoringParameters {
            context_sensitivity: self.alpha,
            archetype_sensitivity: self.beta,
            weight_floor: self.weight_floor,
            sbs_maturity_weight: self.sbs_rgi_weight,
            sbs_tension_weight: self.sbs_tension_weight,
            sbs_balance_weight: self.sbs_eqi_weight,
        }
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (name, value) in [("alpha", self.alpha), ("beta", self.beta)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidSensitivity { name, value });
            }
        }

        // A floor above 1/8 would flatten every weight vector to uniform
        let max_floor = 1.0 / DIMENSION_COUNT as f64;
        if !(self.weight_floor > 0.0 && self.weight_floor <= max_floor) {
            return Err(ValidationError::InvalidWeightFloor(self.weight_floor));
        }

        let weights = [self.sbs_rgi_weight, self.sbs_tension_weight, self.sbs_eqi_weight];
        let sum: f64 = weights.iter().sum();
        if weights.iter().any(|w| w.is_nan() || *w < 0.0) || (sum - 1.0).abs() > SBS_SUM_TOLERANCE {
            return Err(ValidationError::InvalidSbsWeights(sum));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
            beta: default_beta(),
            weight_floor: default_weight_floor(),
            sbs_rgi_weight: default_sbs_rgi_weight(),
            sbs_tension_weight: default_sbs_tension_weight(),
            sbs_eqi_weight: default_sbs_eqi_weight(),
        }
    }
}

fn default_alpha() -> f64 {
    ScoringParameters::DEFAULT_CONTEXT_SENSITIVITY
}

fn default_beta() -> f64 {
    ScoringParameters::DEFAULT_ARCHETYPE_SENSITIVITY
}

fn default_weight_floor() -> f64 {
    ScoringParameters::DEFAULT_WEIGHT_FLOOR
}

fn default_sbs_rgi_weight() -> f64 {
    ScoringParameters::DEFAULT_SBS_WEIGHTS.0
}

fn default_sbs_tension_weight() -> f64 {
    ScoringParameters::DEFAULT_SBS_WEIGHTS.1
}

fn default_sbs_eqi_weight() -> f64 {
    ScoringParameters::DEFAULT_SBS_WEIGHTS.2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_config_defaults_match_parameters() {
        let config = EngineConfig::default();
        assert_eq!(config.scoring_parameters(), ScoringParameters::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_alpha_rejected() {
        let config = EngineConfig {
            alpha: -0.1,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidSensitivity {
                name: "alpha",
                value: -0.1
            })
        );
    }

    #[test]
    fn test_zero_floor_rejected() {
        let config = EngineConfig {
            weight_floor: 0.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidWeightFloor(0.0)));
    }

    #[test]
    fn test_sbs_weights_must_sum_to_one() {
        let config = EngineConfig {
            sbs_rgi_weight: 0.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidSbsWeights(_))
        ));
    }

    #[test]
    fn test_engine_config_deserialization() {
        let json = r#"{ "alpha": 0.3, "sbs_rgi_weight": 0.5, "sbs_tension_weight": 0.25, "sbs_eqi_weight": 0.25 }"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.alpha, 0.3);
        assert_eq!(config.beta, 0.5);
        assert!(config.validate().is_ok());
    }
}
