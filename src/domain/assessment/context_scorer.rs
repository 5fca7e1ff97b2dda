//! Context Scorer - Organisational complexity from context factors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::catalog::ContextFactorSpec;
use super::AssessmentError;

/// Value assumed for a known factor that was not supplied.
pub const NEUTRAL_CONTEXT_VALUE: f64 = 0.5;

/// Highest level on the raw 0-3 context questionnaire scale.
pub const CONTEXT_LEVEL_MAX: u8 = 3;

/// A single supplied context factor value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextFactor {
    pub name: String,
    /// Normalized value in [0, 1].
    pub value: f64,
}

impl ContextFactor {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Converts a raw questionnaire level (0-3) into a normalized factor.
    pub fn from_level(name: impl Into<String>, level: u8) -> Result<Self, AssessmentError> {
        let name = name.into();
        if level > CONTEXT_LEVEL_MAX {
            return Err(AssessmentError::InvalidContextValue {
                name,
                value: f64::from(level),
            });
        }
        Ok(Self {
            name,
            value: f64::from(level) / f64::from(CONTEXT_LEVEL_MAX),
        })
    }
}

/// How one catalog factor contributed to the context score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorContribution {
    pub name: String,
    /// Supplied value, or the neutral value when defaulted.
    pub value: f64,
    /// Value after inversion, as used in the weighted mean.
    pub effective: f64,
    pub weight: f64,
    pub defaulted: bool,
}

/// Context score together with its audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextAssessment {
    /// Weighted complexity in [0, 1].
    pub score: f64,
    /// Per-factor breakdown in catalog order.
    pub factors: Vec<FactorContribution>,
    /// Names of factors that fell back to the neutral value.
    pub defaulted: Vec<String>,
}

impl ContextAssessment {
    /// Returns true if any factor was substituted.
    pub fn has_defaults(&self) -> bool {
        !self.defaulted.is_empty()
    }
}

/// Scoring of the context vector.
pub struct ContextScorer;

impl ContextScorer {
    /// Computes the weighted-mean context score.
    ///
    /// Inverted factors contribute `1 - value`. Missing factors count as
    /// `NEUTRAL_CONTEXT_VALUE` and are listed in `defaulted`. The sum is
    /// divided by the total catalog weight, so a catalog that sums to 1 only
    /// within validation tolerance still yields a score in [0, 1].
    ///
    /// # Errors
    /// - `UnknownContextFactor` for a name not in the catalog
    /// - `InvalidContextValue` for a value outside [0, 1]
    pub fn score(
        catalog: &[ContextFactorSpec],
        supplied: &BTreeMap<String, f64>,
    ) -> Result<ContextAssessment, AssessmentError> {
        for (name, value) in supplied {
            if !catalog.iter().any(|spec| &spec.name == name) {
                return Err(AssessmentError::UnknownContextFactor { name: name.clone() });
            }
            if !(0.0..=1.0).contains(value) {
                return Err(AssessmentError::InvalidContextValue {
                    name: name.clone(),
                    value: *value,
                });
            }
        }

        let mut weighted = 0.0;
        let mut total_weight = 0.0;
        let mut factors = Vec::with_capacity(catalog.len());
        let mut defaulted = Vec::new();

        for spec in catalog {
            let (value, was_defaulted) = match supplied.get(&spec.name) {
                Some(value) => (*value, false),
                None => (NEUTRAL_CONTEXT_VALUE, true),
            };
            let effective = if spec.inverted { 1.0 - value } else { value };
            weighted += spec.weight * effective;
            total_weight += spec.weight;

            if was_defaulted {
                defaulted.push(spec.name.clone());
            }
            factors.push(FactorContribution {
                name: spec.name.clone(),
                value,
                effective,
                weight: spec.weight,
                defaulted: was_defaulted,
            });
        }

        let score = if total_weight > 0.0 {
            weighted / total_weight
        } else {
            NEUTRAL_CONTEXT_VALUE
        };

        Ok(ContextAssessment {
            score,
            factors,
            defaulted,
        })
    }
}
