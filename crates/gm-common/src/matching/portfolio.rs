use super::{clamp_unit, mean};
use crate::PortfolioItem;

const ITEMS_FOR_FULL_CREDIT: f64 = 10.0;
const DESCRIPTION_CHARS_FOR_FULL_CREDIT: f64 = 300.0;
const IMAGES_FOR_FULL_CREDIT: f64 = 5.0;

/// Portfolio strength: half breadth (item count), half average item quality.
pub fn score_portfolio(portfolio: &[PortfolioItem]) -> f64 {
    let Some(avg_quality) = mean(portfolio.iter().map(item_quality)) else {
        return 0.0;
    };

    let count_factor = clamp_unit(portfolio.len() as f64 / ITEMS_FOR_FULL_CREDIT);
    let quality = clamp_unit(avg_quality);

    clamp_unit(0.5 * count_factor + 0.5 * quality)
}

/// Description length and image count stand in for item quality.
fn item_quality(item: &PortfolioItem) -> f64 {
    let description_chars = item
        .description
        .as_deref()
        .map(|text| text.chars().count())
        .unwrap_or(0);
    let description_score =
        clamp_unit(description_chars as f64 / DESCRIPTION_CHARS_FOR_FULL_CREDIT);
    let images_score = clamp_unit(item.image_count() as f64 / IMAGES_FOR_FULL_CREDIT);

    0.5 * description_score + 0.5 * images_score
}
