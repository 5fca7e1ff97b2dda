//! Archetype Classifier - Nearest reference profile for a maturity profile.

use serde::{Deserialize, Serialize};

use super::catalog::Archetype;
use super::dimension_map::DimensionMap;
use super::score_aggregator::DimensionScore;
use super::taxonomy::DIMENSION_COUNT;
use super::weighting_engine::WeightVector;
use super::CatalogError;

/// The archetype closest to an assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeMatch {
    pub name: String,
    /// Weighted Euclidean distance to the template, in [0, sqrt(8)].
    pub distance: f64,
    /// `1 - distance / sqrt(8)`, in [0, 1].
    pub confidence: f64,
    /// Distance to every archetype, in catalog order.
    pub distances: Vec<ArchetypeDistance>,
}

/// Distance from the profile to one archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeDistance {
    pub name: String,
    pub distance: f64,
}

/// Classification against the archetype catalog.
pub struct ArchetypeClassifier;

impl ArchetypeClassifier {
    /// Picks the archetype whose template is nearest to the normalized ist
    /// profile.
    ///
    /// `d = sqrt(Σ 8·w[d]·(x[d] - t[d])²)`, which is the plain Euclidean
    /// distance for uniform weights. Ties keep the earlier catalog entry.
    ///
    /// # Errors
    /// - `EmptyArchetypeCatalog` if there is nothing to compare against
    pub fn classify<'a>(
        scores: &DimensionMap<DimensionScore>,
        weights: &WeightVector,
        archetypes: &'a [Archetype],
    ) -> Result<(ArchetypeMatch, &'a Archetype), CatalogError> {
        let profile = scores.map(|_, score| score.normalized_ist());

        let distances: Vec<ArchetypeDistance> = archetypes
            .iter()
            .map(|archetype| ArchetypeDistance {
                name: archetype.name.clone(),
                distance: Self::distance(&profile, &archetype.template, weights),
            })
            .collect();

        let mut best: Option<usize> = None;
        for (index, candidate) in distances.iter().enumerate() {
            match best {
                Some(current) if distances[current].distance <= candidate.distance => {}
                _ => best = Some(index),
            }
        }
        let best = best.ok_or(CatalogError::EmptyArchetypeCatalog)?;

        let archetype = &archetypes[best];
        let distance = distances[best].distance;
        let confidence = (1.0 - distance / max_distance()).clamp(0.0, 1.0);

        Ok((
            ArchetypeMatch {
                name: archetype.name.clone(),
                distance,
                confidence,
                distances,
            },
            archetype,
        ))
    }

    /// Weighted Euclidean distance between a profile and a template.
    pub fn distance(
        profile: &DimensionMap<f64>,
        template: &DimensionMap<f64>,
        weights: &WeightVector,
    ) -> f64 {
        let scale = DIMENSION_COUNT as f64;
        profile
            .iter()
            .map(|(dimension, x)| {
                let diff = x - template[dimension];
                scale * weights.weight(dimension) * diff * diff
            })
            .sum::<f64>()
            .sqrt()
    }
}

fn max_distance() -> f64 {
    (DIMENSION_COUNT as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{DimensionId, ReferenceCatalogs};

    fn scores_from_normalized(values: [f64; 8]) -> DimensionMap<DimensionScore> {
        DimensionMap::from_fn(|d| DimensionScore::new(d, values[d.index()] * 4.0, 4.0))
    }

    fn archetype(name: &str, template: [f64; 8]) -> Archetype {
        Archetype {
            name: name.into(),
            description: String::new(),
            template: DimensionMap::from_array(template),
            bias: DimensionMap::splat(0.0),
        }
    }

    #[test]
    fn exact_template_match_has_full_confidence() {
        let catalogs = ReferenceCatalogs::builtin();
        for expected in &catalogs.archetypes {
            let scores = scores_from_normalized(*expected.template.as_array());
            let (matched, archetype) =
                ArchetypeClassifier::classify(&scores, &WeightVector::uniform(), &catalogs.archetypes)
                    .unwrap();
            assert_eq!(matched.name, expected.name);
            assert_eq!(archetype.name, expected.name);
            assert!(matched.distance.abs() < 1e-12);
            assert!((matched.confidence - 1.0).abs() < 1e-12);
            assert_eq!(matched.distances.len(), catalogs.archetypes.len());
        }
    }

    #[test]
    fn technology_heavy_profile_is_chaotic_doer() {
        let catalogs = ReferenceCatalogs::builtin();
        let scores = scores_from_normalized([0.2, 0.3, 0.55, 0.5, 0.4, 0.85, 0.25, 0.3]);
        let (matched, _) =
            ArchetypeClassifier::classify(&scores, &WeightVector::uniform(), &catalogs.archetypes)
                .unwrap();
        assert_eq!(matched.name, "Chaotic Doer");
    }

    #[test]
    fn ties_keep_the_earlier_archetype() {
        let archetypes = vec![archetype("Low", [0.25; 8]), archetype("High", [0.75; 8])];
        let scores = scores_from_normalized([0.5; 8]);
        let (matched, _) =
            ArchetypeClassifier::classify(&scores, &WeightVector::uniform(), &archetypes).unwrap();
        assert_eq!(matched.name, "Low");
    }

    #[test]
    fn opposite_corner_has_zero_confidence() {
        let archetypes = vec![archetype("Top", [1.0; 8])];
        let scores = scores_from_normalized([0.0; 8]);
        let (matched, _) =
            ArchetypeClassifier::classify(&scores, &WeightVector::uniform(), &archetypes).unwrap();
        assert!((matched.distance - 8f64.sqrt()).abs() < 1e-12);
        assert!(matched.confidence.abs() < 1e-12);
    }

    #[test]
    fn uniform_weights_give_plain_euclidean_distance() {
        let profile = DimensionMap::splat(0.5);
        let mut template = DimensionMap::splat(0.5);
        template[DimensionId::Strategy] = 0.8;
        template[DimensionId::Impact] = 0.1;

        let d = ArchetypeClassifier::distance(&profile, &template, &WeightVector::uniform());
        let expected = (0.3f64.powi(2) + 0.4f64.powi(2)).sqrt();
        assert!((d - expected).abs() < 1e-12);
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let err = ArchetypeClassifier::classify(
            &scores_from_normalized([0.5; 8]),
            &WeightVector::uniform(),
            &[],
        )
        .unwrap_err();
        assert_eq!(err, CatalogError::EmptyArchetypeCatalog);
    }
}
