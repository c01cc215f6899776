pub mod portfolio;
pub mod ranking;
pub mod reviews;
pub mod scoring;
pub mod service;
pub mod skills;
pub mod weights;

pub use ranking::{DEFAULT_MATCH_LIMIT, TopMatch, rank_freelancers, rank_top_matches};
pub use scoring::{
    ComponentScores, MatchResult, MatchingConfig, ScoreBreakdown, score_freelancer_for_job,
};
pub use service::{TopMatchesQuery, get_top_matches};

/// Bound `value` into `[min, max]`. NaN collapses to `min`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.max(min).min(max)
}

/// `clamp` into the unit interval every factor is computed in.
pub fn clamp_unit(value: f64) -> f64 {
    clamp(value, 0.0, 1.0)
}

/// Scale a unit score to percent, rounded to two decimals.
pub fn to_percent(value: f64) -> f64 {
    (clamp_unit(value) * 10_000.0).round() / 100.0
}

/// Arithmetic mean; `None` for an empty input.
pub(crate) fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));

    (count > 0).then(|| sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds_values() {
        assert_eq!(clamp_unit(-0.2), 0.0);
        assert_eq!(clamp_unit(0.42), 0.42);
        assert_eq!(clamp_unit(1.7), 1.0);
        assert_eq!(clamp_unit(f64::NAN), 0.0);
        assert_eq!(clamp(12.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn percent_rounds_to_two_decimals() {
        assert_eq!(to_percent(0.4125), 41.25);
        assert_eq!(to_percent(0.85), 85.0);
        assert_eq!(to_percent(0.123456), 12.35);
        assert_eq!(to_percent(2.0), 100.0);
    }

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(mean(Vec::new()), None);
        assert_eq!(mean([1.0, 2.0, 4.5]), Some(2.5));
    }
}
