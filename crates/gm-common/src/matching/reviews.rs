use super::{clamp_unit, mean};
use crate::Review;

const MAX_RATING: f64 = 5.0;

/// Average rating on the 0-5 scale, normalized to the unit interval.
/// Missing or non-finite ratings count as zero.
pub fn score_reviews(reviews: &[Review]) -> f64 {
    mean(reviews.iter().map(rating_of))
        .map(|avg| clamp_unit(avg / MAX_RATING))
        .unwrap_or(0.0)
}

fn rating_of(review: &Review) -> f64 {
    review
        .rating
        .filter(|rating| rating.is_finite())
        .unwrap_or(0.0)
}
