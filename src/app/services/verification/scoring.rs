//! Composite score from per-parameter comparisons

use crate::app::models::{ParameterComparison, ParameterComparisons};
use crate::config::VerificationConfig;
use crate::constants::MAX_SCORE;

/// Add the BECMG transition bonus to every comparison
pub fn apply_transition_bonus(
    comparisons: ParameterComparisons,
    bonus: f64,
) -> ParameterComparisons {
    ParameterComparisons {
        wind: comparisons.wind.with_bonus(bonus),
        visibility: comparisons.visibility.with_bonus(bonus),
        weather: comparisons.weather.with_bonus(bonus),
        cloud: comparisons.cloud.with_bonus(bonus),
    }
}

/// Weighted composite score in `0..=100`, rounded to two decimals
///
/// Missing parameters are left out and the remaining weights are scaled
/// back up to the configured total. The category bonus applies only when
/// both visibility and cloud categories were compared and agreed.
pub fn composite_score(comparisons: &ParameterComparisons, config: &VerificationConfig) -> f64 {
    let weights = &config.weights;
    let parts: [(&ParameterComparison, f64); 4] = [
        (&comparisons.wind, weights.wind),
        (&comparisons.visibility, weights.visibility),
        (&comparisons.cloud, weights.cloud),
        (&comparisons.weather, weights.weather),
    ];

    let (weighted, weight) = parts
        .iter()
        .filter(|(comparison, _)| !comparison.is_missing())
        .fold((0.0, 0.0), |(sum, total), (comparison, weight)| {
            (sum + comparison.score * weight, total + weight)
        });

    let base = if weight > 0.0 {
        weighted * (weights.total() / weight)
    } else {
        0.0
    };

    let categories_agree = comparisons.visibility.category_match == Some(true)
        && comparisons.cloud.category_match == Some(true);
    let bonus = if categories_agree {
        config.category_bonus
    } else {
        0.0
    };

    let score = (base + bonus).clamp(0.0, MAX_SCORE);
    (score * 100.0).round() / 100.0
}
