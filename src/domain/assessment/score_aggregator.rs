//! Score Aggregator - Rolls subdimension ratings up into dimension scores.

use serde::{Deserialize, Serialize};

use super::dimension_map::DimensionMap;
use super::rating::{SubdimensionRating, RATING_MAX};
use super::taxonomy::{DimensionId, SubdimensionId, SUBDIMENSION_COUNT};
use super::AssessmentError;

/// Aggregated ist/soll for one dimension. Always derived, never input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension_id: DimensionId,
    pub ist: f64,
    pub soll: f64,
    /// `soll - ist`; negative when the current state exceeds the target.
    pub gap: f64,
}

impl DimensionScore {
    /// Creates a score from ist/soll means.
    pub fn new(dimension_id: DimensionId, ist: f64, soll: f64) -> Self {
        Self {
            dimension_id,
            ist,
            soll,
            gap: soll - ist,
        }
    }

    /// Current maturity on the unit interval.
    pub fn normalized_ist(&self) -> f64 {
        self.ist / RATING_MAX
    }
}

/// Aggregation of a complete rating set.
pub struct ScoreAggregator;

impl ScoreAggregator {
    /// Aggregates exactly one rating per subdimension into 8 dimension scores.
    ///
    /// Each dimension's ist and soll are the unweighted means of its two
    /// subdimensions.
    ///
    /// # Errors
    /// - `InvalidRatingRange` for the first rating outside 0-4
    /// - `DuplicateRating` for the first code seen twice
    /// - `IncompleteAssessment` listing every missing code
    pub fn aggregate(
        ratings: &[SubdimensionRating],
    ) -> Result<DimensionMap<DimensionScore>, AssessmentError> {
        let slots = Self::index_ratings(ratings)?;

        let mut complete = Vec::with_capacity(SUBDIMENSION_COUNT);
        let mut missing = Vec::new();
        for subdimension in SubdimensionId::ALL {
            match slots[subdimension.index()] {
                Some(rating) => complete.push(rating),
                None => missing.push(subdimension),
            }
        }
        if !missing.is_empty() {
            return Err(AssessmentError::IncompleteAssessment { missing });
        }

        Ok(DimensionMap::from_fn(|dimension| {
            let [first, second] = dimension.subdimensions();
            let (a, b) = (complete[first.index()], complete[second.index()]);
            DimensionScore::new(dimension, (a.ist + b.ist) / 2.0, (a.soll + b.soll) / 2.0)
        }))
    }

    fn index_ratings(
        ratings: &[SubdimensionRating],
    ) -> Result<[Option<&SubdimensionRating>; SUBDIMENSION_COUNT], AssessmentError> {
        let mut slots: [Option<&SubdimensionRating>; SUBDIMENSION_COUNT] =
            [None; SUBDIMENSION_COUNT];

        for rating in ratings {
            rating.validate()?;
            let slot = &mut slots[rating.subdimension_id.index()];
            if slot.is_some() {
                return Err(AssessmentError::DuplicateRating {
                    subdimension: rating.subdimension_id,
                });
            }
            *slot = Some(rating);
        }

        Ok(slots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(ist: f64, soll: f64) -> Vec<SubdimensionRating> {
        SubdimensionId::ALL
            .iter()
            .map(|sd| SubdimensionRating::new(*sd, ist, soll))
            .collect()
    }

    #[test]
    fn uniform_ratings_give_uniform_scores() {
        let scores = ScoreAggregator::aggregate(&uniform(2.0, 3.0)).unwrap();
        for (_, score) in scores.iter() {
            assert_eq!(score.ist, 2.0);
            assert_eq!(score.soll, 3.0);
            assert_eq!(score.gap, 1.0);
        }
    }

    #[test]
    fn dimension_is_mean_of_its_two_subdimensions() {
        let mut ratings = uniform(2.0, 2.0);
        ratings[SubdimensionId::DataQuality.index()] =
            SubdimensionRating::new(SubdimensionId::DataQuality, 1.0, 4.0);
        ratings[SubdimensionId::DataGovernance.index()] =
            SubdimensionRating::new(SubdimensionId::DataGovernance, 2.0, 3.0);

        let scores = ScoreAggregator::aggregate(&ratings).unwrap();
        let data = scores[DimensionId::Data];
        assert_eq!(data.ist, 1.5);
        assert_eq!(data.soll, 3.5);
        assert_eq!(data.gap, 2.0);
        assert_eq!(scores[DimensionId::Governance].gap, 0.0);
    }

    #[test]
    fn input_order_does_not_matter() {
        let mut ratings = uniform(1.0, 3.0);
        ratings[0].ist = 3.0;
        let forward = ScoreAggregator::aggregate(&ratings).unwrap();
        ratings.reverse();
        let backward = ScoreAggregator::aggregate(&ratings).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn every_dimension_reads_its_own_pair() {
        let mut ratings: Vec<_> = SubdimensionId::ALL
            .iter()
            .map(|sd| {
                let level = sd.parent().index() as f64 / 2.0;
                SubdimensionRating::new(*sd, level, 4.0)
            })
            .collect();
        ratings.reverse();

        let scores = ScoreAggregator::aggregate(&ratings).unwrap();
        for (dimension, score) in scores.iter() {
            assert_eq!(score.dimension_id, dimension);
            assert_eq!(score.ist, dimension.index() as f64 / 2.0);
        }
    }

    #[test]
    fn missing_subdimensions_are_all_reported() {
        let ratings: Vec<_> = uniform(2.0, 3.0)
            .into_iter()
            .filter(|r| {
                r.subdimension_id != SubdimensionId::AiLiteracy
                    && r.subdimension_id != SubdimensionId::ResponsibleAi
            })
            .collect();

        let err = ScoreAggregator::aggregate(&ratings).unwrap_err();
        assert_eq!(
            err,
            AssessmentError::IncompleteAssessment {
                missing: vec![SubdimensionId::AiLiteracy, SubdimensionId::ResponsibleAi],
            }
        );
    }

    #[test]
    fn empty_input_is_incomplete() {
        match ScoreAggregator::aggregate(&[]) {
            Err(AssessmentError::IncompleteAssessment { missing }) => {
                assert_eq!(missing.len(), SUBDIMENSION_COUNT)
            }
            other => panic!("Expected IncompleteAssessment, got {:?}", other),
        }
    }

    #[test]
    fn duplicate_code_is_rejected() {
        let mut ratings = uniform(2.0, 3.0);
        ratings.push(SubdimensionRating::new(SubdimensionId::ExperimentationCulture, 1.0, 1.0));

        let err = ScoreAggregator::aggregate(&ratings).unwrap_err();
        assert_eq!(
            err,
            AssessmentError::DuplicateRating {
                subdimension: SubdimensionId::ExperimentationCulture
            }
        );
    }

    #[test]
    fn out_of_range_rating_is_rejected() {
        let mut ratings = uniform(2.0, 3.0);
        ratings[3].soll = 5.0;
        assert!(matches!(
            ScoreAggregator::aggregate(&ratings),
            Err(AssessmentError::InvalidRatingRange { field: "soll", .. })
        ));
    }

    #[test]
    fn normalized_ist_scales_to_unit_interval() {
        let score = DimensionScore::new(DimensionId::Culture, 3.0, 4.0);
        assert_eq!(score.normalized_ist(), 0.75);
    }
}
