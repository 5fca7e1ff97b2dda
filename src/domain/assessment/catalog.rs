//! Static reference catalogs: base weights, context factors, archetypes and
//! critical dimension pairs.
//!
//! Catalogs are loaded once at start-up, validated, and then shared read-only
//! (behind `Arc`) by every scoring run.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

use super::dimension_map::DimensionMap;
use super::taxonomy::DimensionId;
use super::CatalogError;

const SUM_TOLERANCE: f64 = 1e-6;

/// Which base weight vector applies to an organisation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganisationProfile {
    #[default]
    Standard,
    /// Small and medium-sized enterprises (KMU).
    SmallMedium,
}

impl OrganisationProfile {
    pub fn label(&self) -> &'static str {
        match self {
            OrganisationProfile::Standard => "standard",
            OrganisationProfile::SmallMedium => "small_medium",
        }
    }
}

/// Balanced default weights per organisation profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseWeights {
    pub standard: DimensionMap<f64>,
    pub small_medium: DimensionMap<f64>,
}

impl BaseWeights {
    /// Returns the base weights for a profile.
    pub fn for_profile(&self, profile: OrganisationProfile) -> &DimensionMap<f64> {
        match profile {
            OrganisationProfile::Standard => &self.standard,
            OrganisationProfile::SmallMedium => &self.small_medium,
        }
    }
}

/// Catalog entry for one organisational context factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextFactorSpec {
    pub name: String,
    /// Relative influence on organisational complexity.
    pub weight: f64,
    /// True when a higher value lowers complexity (e.g. data maturity).
    #[serde(default)]
    pub inverted: bool,
    #[serde(default)]
    pub description: String,
}

/// A named reference profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Archetype {
    pub name: String,
    pub description: String,
    /// Typical normalized ist profile (each value in [0, 1]).
    pub template: DimensionMap<f64>,
    /// Weight redistribution applied once this archetype is identified
    /// (each value in [-1, 1]).
    pub bias: DimensionMap<f64>,
}

/// Two dimensions likely to pull against each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalPair {
    pub a: DimensionId,
    pub b: DimensionId,
    pub label: String,
}

impl CriticalPair {
    pub fn new(a: DimensionId, b: DimensionId, label: impl Into<String>) -> Self {
        Self {
            a,
            b,
            label: label.into(),
        }
    }
}

/// All static reference data the engine reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceCatalogs {
    pub base_weights: BaseWeights,
    pub context_factors: Vec<ContextFactorSpec>,
    pub archetypes: Vec<Archetype>,
    #[serde(default)]
    pub critical_pairs: Vec<CriticalPair>,
}

static BUILTIN: Lazy<Arc<ReferenceCatalogs>> = Lazy::new(|| Arc::new(builtin_catalogs()));

impl ReferenceCatalogs {
    /// Shared handle to the built-in AIHE catalogs.
    pub fn builtin() -> Arc<ReferenceCatalogs> {
        Arc::clone(&BUILTIN)
    }

    /// Checks every catalog for internal consistency.
    pub fn validate(&self) -> Result<(), CatalogError> {
        validate_base_weights("standard", &self.base_weights.standard)?;
        validate_base_weights("small_medium", &self.base_weights.small_medium)?;
        self.validate_context_factors()?;
        self.validate_archetypes()?;

        for pair in &self.critical_pairs {
            if pair.a == pair.b {
                return Err(CatalogError::DegeneratePair {
                    a: pair.a,
                    b: pair.b,
                });
            }
        }
        Ok(())
    }

    /// Looks up a context factor by name.
    pub fn context_factor(&self, name: &str) -> Option<&ContextFactorSpec> {
        self.context_factors.iter().find(|f| f.name == name)
    }

    /// Looks up an archetype by name.
    pub fn archetype(&self, name: &str) -> Option<&Archetype> {
        self.archetypes.iter().find(|a| a.name == name)
    }

    fn validate_context_factors(&self) -> Result<(), CatalogError> {
        if self.context_factors.is_empty() {
            return Err(CatalogError::EmptyContextCatalog);
        }

        let mut seen = HashSet::new();
        for factor in &self.context_factors {
            if !seen.insert(factor.name.as_str()) {
                return Err(CatalogError::DuplicateContextFactor {
                    name: factor.name.clone(),
                });
            }
        }

        let sum: f64 = self.context_factors.iter().map(|f| f.weight).sum();
        let all_positive = self.context_factors.iter().all(|f| f.weight > 0.0);
        if !all_positive || (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(CatalogError::InvalidContextWeights { sum });
        }
        Ok(())
    }

    fn validate_archetypes(&self) -> Result<(), CatalogError> {
        if self.archetypes.is_empty() {
            return Err(CatalogError::EmptyArchetypeCatalog);
        }

        let mut seen = HashSet::new();
        for archetype in &self.archetypes {
            if !seen.insert(archetype.name.as_str()) {
                return Err(CatalogError::DuplicateArchetype {
                    name: archetype.name.clone(),
                });
            }

            for (dimension, value) in archetype.template.iter() {
                if !(0.0..=1.0).contains(value) {
                    return Err(CatalogError::TemplateOutOfRange {
                        archetype: archetype.name.clone(),
                        dimension,
                        value: *value,
                    });
                }
            }

            for (dimension, value) in archetype.bias.iter() {
                if !(-1.0..=1.0).contains(value) {
                    return Err(CatalogError::BiasOutOfRange {
                        archetype: archetype.name.clone(),
                        dimension,
                        value: *value,
                    });
                }
            }
        }
        Ok(())
    }
}

fn validate_base_weights(
    profile: &'static str,
    weights: &DimensionMap<f64>,
) -> Result<(), CatalogError> {
    let sum = weights.sum();
    let all_positive = weights.values().all(|w| *w > 0.0);
    if !all_positive || (sum - 1.0).abs() > SUM_TOLERANCE {
        return Err(CatalogError::InvalidBaseWeights { profile, sum });
    }
    Ok(())
}

fn factor(name: &str, weight: f64, inverted: bool, description: &str) -> ContextFactorSpec {
    ContextFactorSpec {
        name: name.to_string(),
        weight,
        inverted,
        description: description.to_string(),
    }
}

fn archetype(
    name: &str,
    description: &str,
    template: [f64; 8],
    bias: [f64; 8],
) -> Archetype {
    Archetype {
        name: name.to_string(),
        description: description.to_string(),
        template: DimensionMap::from_array(template),
        bias: DimensionMap::from_array(bias),
    }
}

fn builtin_catalogs() -> ReferenceCatalogs {
    use DimensionId::*;

    ReferenceCatalogs {
        base_weights: BaseWeights {
            standard: DimensionMap::splat(0.125),
            small_medium: DimensionMap::from_array([
                0.10, 0.15, 0.15, 0.15, 0.10, 0.10, 0.15, 0.10,
            ]),
        },
        context_factors: vec![
            factor("organisation_size", 0.12, false, "Headcount and structural breadth"),
            factor("industry_dynamics", 0.11, false, "Pace of change in the industry"),
            factor("regulatory_intensity", 0.10, false, "Regulatory pressure on AI use"),
            factor(
                "technological_complexity",
                0.09,
                false,
                "Heterogeneity of the technology landscape",
            ),
            factor("change_velocity", 0.11, false, "Speed of internal change initiatives"),
            factor("market_dynamics", 0.10, false, "Volatility of customer markets"),
            factor("competitive_pressure", 0.12, false, "Intensity of competition"),
            factor("data_maturity", 0.08, true, "Availability and quality of data assets"),
            factor(
                "resource_availability",
                0.09,
                true,
                "Budget and staff available for AI work",
            ),
            factor("change_history", 0.08, false, "Burden of past transformation efforts"),
        ],
        archetypes: vec![
            archetype(
                "Chaotic Doer",
                "Strong technology push with weak governance, strategy and processes",
                [0.25, 0.30, 0.50, 0.45, 0.40, 0.75, 0.30, 0.30],
                [1.0, 0.8, -0.2, 0.2, 0.2, -0.6, 0.6, 0.4],
            ),
            archetype(
                "Cautious Corporate",
                "Solid governance and processes, hesitant culture and capabilities",
                [0.75, 0.60, 0.30, 0.35, 0.60, 0.40, 0.70, 0.50],
                [-0.4, 0.0, 1.0, 0.8, 0.0, 0.6, 0.0, 0.2],
            ),
            archetype(
                "Stagnant Established",
                "Low maturity across the board with little transformation momentum",
                [0.30, 0.25, 0.25, 0.30, 0.35, 0.30, 0.40, 0.25],
                [0.4, 0.8, 0.6, 0.4, 0.0, 0.4, 0.0, 0.6],
            ),
            archetype(
                "Balanced Transformer",
                "Evenly developed dimensions progressing together",
                [0.65; 8],
                [0.0; 8],
            ),
        ],
        critical_pairs: vec![
            CriticalPair::new(Technology, Culture, "Technology vs Culture"),
            CriticalPair::new(Governance, Technology, "Governance vs Innovation"),
            CriticalPair::new(Strategy, Competencies, "Strategy vs Competencies"),
            CriticalPair::new(Data, Processes, "Data vs Processes"),
            CriticalPair::new(Governance, Impact, "Ethics vs Impact"),
            CriticalPair::new(Culture, Competencies, "Culture vs Competencies"),
            CriticalPair::new(Strategy, Governance, "Strategy vs Governance"),
            CriticalPair::new(Technology, Data, "Technology vs Data"),
            CriticalPair::new(Processes, Impact, "Processes vs Impact"),
            CriticalPair::new(Culture, Governance, "Innovation vs Governance"),
            CriticalPair::new(Competencies, Technology, "Competencies vs Technology"),
            CriticalPair::new(Strategy, Processes, "Alignment vs Execution"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalogs_are_valid() {
        assert!(ReferenceCatalogs::builtin().validate().is_ok());
    }

    #[test]
    fn builtin_is_shared_not_copied() {
        let a = ReferenceCatalogs::builtin();
        let b = ReferenceCatalogs::builtin();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn builtin_archetype_order_is_stable() {
        let names: Vec<_> = ReferenceCatalogs::builtin()
            .archetypes
            .iter()
            .map(|a| a.name.clone())
            .collect();
        assert_eq!(
            names,
            vec![
                "Chaotic Doer",
                "Cautious Corporate",
                "Stagnant Established",
                "Balanced Transformer"
            ]
        );
    }

    #[test]
    fn profile_selects_base_weights() {
        let catalogs = ReferenceCatalogs::builtin();
        let sme = catalogs
            .base_weights
            .for_profile(OrganisationProfile::SmallMedium);
        assert_eq!(sme[DimensionId::Processes], 0.15);
        let standard = catalogs.base_weights.for_profile(OrganisationProfile::Standard);
        assert_eq!(standard[DimensionId::Processes], 0.125);
    }

    #[test]
    fn empty_archetype_catalog_is_rejected() {
        let mut catalogs = (*ReferenceCatalogs::builtin()).clone();
        catalogs.archetypes.clear();
        assert_eq!(catalogs.validate(), Err(CatalogError::EmptyArchetypeCatalog));
    }

    #[test]
    fn bias_outside_unit_range_is_rejected() {
        let mut catalogs = (*ReferenceCatalogs::builtin()).clone();
        catalogs.archetypes[0].bias[DimensionId::Data] = 1.5;
        assert!(matches!(
            catalogs.validate(),
            Err(CatalogError::BiasOutOfRange {
                dimension: DimensionId::Data,
                ..
            })
        ));
    }

    #[test]
    fn template_outside_unit_range_is_rejected() {
        let mut catalogs = (*ReferenceCatalogs::builtin()).clone();
        catalogs.archetypes[2].template[DimensionId::Impact] = -0.1;
        assert!(matches!(
            catalogs.validate(),
            Err(CatalogError::TemplateOutOfRange { .. })
        ));
    }

    #[test]
    fn base_weights_must_sum_to_one() {
        let mut catalogs = (*ReferenceCatalogs::builtin()).clone();
        catalogs.base_weights.standard[DimensionId::Governance] = 0.5;
        assert!(matches!(
            catalogs.validate(),
            Err(CatalogError::InvalidBaseWeights {
                profile: "standard",
                ..
            })
        ));
    }

    #[test]
    fn duplicate_context_factor_is_rejected() {
        let mut catalogs = (*ReferenceCatalogs::builtin()).clone();
        let dup = catalogs.context_factors[0].clone();
        catalogs.context_factors.push(dup);
        assert!(matches!(
            catalogs.validate(),
            Err(CatalogError::DuplicateContextFactor { .. })
        ));
    }

    #[test]
    fn degenerate_pair_is_rejected() {
        let mut catalogs = (*ReferenceCatalogs::builtin()).clone();
        catalogs.critical_pairs.push(CriticalPair::new(
            DimensionId::Data,
            DimensionId::Data,
            "Self",
        ));
        assert!(matches!(
            catalogs.validate(),
            Err(CatalogError::DegeneratePair { .. })
        ));
    }

    #[test]
    fn empty_pair_catalog_is_allowed() {
        let mut catalogs = (*ReferenceCatalogs::builtin()).clone();
        catalogs.critical_pairs.clear();
        assert!(catalogs.validate().is_ok());
    }

    #[test]
    fn catalogs_round_trip_through_yaml() {
        let catalogs = ReferenceCatalogs::builtin();
        let yaml = serde_yaml::to_string(&*catalogs).unwrap();
        let restored: ReferenceCatalogs = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(&restored, &*catalogs);
    }
}
