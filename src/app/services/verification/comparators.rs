//! Per-parameter comparison of forecast and observed values
//!
//! Every comparator takes the forecast value first and the observed value
//! second. When wind or visibility is absent on either side the comparison
//! is `Missing` and takes no part in the composite score. An empty cloud
//! list is a report of no ceiling, not an absent value.

use crate::app::models::weather::{ceiling, weather_groups};
use crate::app::models::{
    CloudLayer, ComparisonStatus, FlightCategory, Intensity, ParameterComparison, Visibility,
    WeatherGroup, WeatherPhenomenon, Wind,
};
use crate::constants::{
    CATEGORY_MATCH_FLOOR, CATEGORY_MISMATCH_CAP, MAX_SCORE, SEVERE_WEATHER_RANK,
    SEVERITY_PRIORITY, cloud, visibility, weather, wind,
};
use std::collections::BTreeSet;

fn excess(difference: f64, tolerance: f64) -> f64 {
    (difference - tolerance).max(0.0)
}

/// Smallest angle between two bearings, in degrees
pub fn angular_difference(a: u16, b: u16) -> f64 {
    let diff = (i32::from(a) - i32::from(b)).rem_euclid(360);
    f64::from(diff.min(360 - diff))
}

fn speed_only(forecast: u16, observed: u16) -> ParameterComparison {
    let speed_diff = f64::from(forecast.abs_diff(observed));
    let score =
        MAX_SCORE - wind::SPEED_PENALTY_PER_KT * excess(speed_diff, wind::SPEED_TOLERANCE_KT);
    ParameterComparison::scored(score, format!("Speed diff {} kt", speed_diff))
        .with_values(f64::from(forecast), f64::from(observed))
}

pub fn compare_wind(forecast: Option<&Wind>, observed: Option<&Wind>) -> ParameterComparison {
    let (Some(forecast), Some(observed)) = (forecast, observed) else {
        return ParameterComparison::missing("Wind not reported");
    };

    match (forecast, observed) {
        (Wind::Calm, Wind::Calm) => {
            ParameterComparison::scored(MAX_SCORE, "Both calm").with_values(0.0, 0.0)
        }
        (Wind::Unparsed { .. }, _) | (_, Wind::Unparsed { .. }) => {
            ParameterComparison::missing("Wind group not decodable")
        }
        (
            Wind::Directional {
                direction: f_dir,
                speed: f_speed,
                gust: f_gust,
            },
            Wind::Directional {
                direction: o_dir,
                speed: o_speed,
                gust: o_gust,
            },
        ) => {
            let angle = angular_difference(*f_dir, *o_dir);
            let speed_diff = f64::from(f_speed.abs_diff(*o_speed));
            let mut penalty = wind::DIRECTION_PENALTY_PER_DEG
                * excess(angle, wind::DIRECTION_TOLERANCE_DEG)
                + wind::SPEED_PENALTY_PER_KT * excess(speed_diff, wind::SPEED_TOLERANCE_KT);

            let mut detail = format!("Direction diff {}°, speed diff {} kt", angle, speed_diff);
            if f_gust.is_some() || o_gust.is_some() {
                let f_peak = f_gust.unwrap_or(*f_speed);
                let o_peak = o_gust.unwrap_or(*o_speed);
                let gust_diff = f64::from(f_peak.abs_diff(o_peak));
                penalty += wind::GUST_PENALTY_PER_KT * excess(gust_diff, wind::GUST_TOLERANCE_KT);
                detail.push_str(&format!(", gust diff {} kt", gust_diff));
            }

            ParameterComparison::scored(MAX_SCORE - penalty, detail)
                .with_values(f64::from(*f_speed), f64::from(*o_speed))
        }
        // Calm or variable on either side: only speeds are comparable
        _ => match (forecast.speed(), observed.speed()) {
            (Some(f_speed), Some(o_speed)) => speed_only(f_speed, o_speed),
            _ => ParameterComparison::missing("Wind speed not reported"),
        },
    }
}

/// Apply the category cap or floor to a tolerance score
fn with_category_clamp(
    score: f64,
    detail: String,
    forecast: FlightCategory,
    observed: FlightCategory,
) -> ParameterComparison {
    let comparison = if forecast == observed {
        ParameterComparison::scored(score.max(CATEGORY_MATCH_FLOOR), detail)
    } else {
        ParameterComparison::scored(
            score.min(CATEGORY_MISMATCH_CAP),
            format!("{} (category {} vs {})", detail, forecast, observed),
        )
        .with_status(ComparisonStatus::Mismatch)
    };
    comparison.with_category(forecast, observed)
}

pub fn compare_visibility(
    forecast: Option<Visibility>,
    observed: Option<Visibility>,
) -> ParameterComparison {
    let (Some(forecast), Some(observed)) = (forecast, observed) else {
        return ParameterComparison::missing("Visibility not reported");
    };

    let tolerance = if forecast.meters >= visibility::WIDE_TOLERANCE_FROM_M {
        visibility::WIDE_TOLERANCE_M
    } else {
        visibility::NARROW_TOLERANCE_M
    };
    let difference = f64::from(forecast.meters.abs_diff(observed.meters));
    let score =
        MAX_SCORE - visibility::PENALTY_PER_TOLERANCE * excess(difference, tolerance) / tolerance;

    with_category_clamp(
        score,
        format!("Diff {} m (tolerance {} m)", difference, tolerance),
        forecast.category(),
        observed.category(),
    )
    .with_values(f64::from(forecast.meters), f64::from(observed.meters))
}

pub fn compare_cloud(forecast: &[CloudLayer], observed: &[CloudLayer]) -> ParameterComparison {
    match (ceiling(forecast), ceiling(observed)) {
        (None, None) => ParameterComparison::scored(MAX_SCORE, "No ceiling forecast or observed")
            .with_category(FlightCategory::VfrPlus, FlightCategory::VfrPlus),
        (Some(f_ceiling), None) => ParameterComparison::scored(
            cloud::ONE_SIDED_CEILING_SCORE,
            format!("Ceiling {} ft forecast, none observed", f_ceiling),
        )
        .with_status(ComparisonStatus::Partial)
        .with_category_match(false),
        (None, Some(o_ceiling)) => ParameterComparison::scored(
            cloud::ONE_SIDED_CEILING_SCORE,
            format!("No ceiling forecast, {} ft observed", o_ceiling),
        )
        .with_status(ComparisonStatus::Partial)
        .with_category_match(false),
        (Some(f_ceiling), Some(o_ceiling)) => {
            let tolerance = if f_ceiling <= cloud::NARROW_TOLERANCE_UP_TO_FT {
                cloud::NARROW_TOLERANCE_FT
            } else {
                cloud::WIDE_TOLERANCE_FT
            };
            let difference = f64::from(f_ceiling.abs_diff(o_ceiling));
            let score =
                MAX_SCORE - cloud::PENALTY_PER_TOLERANCE * excess(difference, tolerance) / tolerance;

            with_category_clamp(
                score,
                format!("Ceiling diff {} ft (tolerance {} ft)", difference, tolerance),
                FlightCategory::from_ceiling(Some(f_ceiling)),
                FlightCategory::from_ceiling(Some(o_ceiling)),
            )
            .with_values(f64::from(f_ceiling), f64::from(o_ceiling))
        }
    }
}

fn matches_priority(group: &WeatherGroup, entry: &str) -> bool {
    let (heavy_only, code) = match entry.strip_prefix('+') {
        Some(code) => (true, code),
        None => (false, entry),
    };
    (!heavy_only || group.intensity == Intensity::Heavy) && group.codes().any(|c| c == code)
}

/// Position of the most severe group in the severity list
///
/// Lower is more severe; weather matching no entry ranks after the list.
pub fn severity_rank<'a>(groups: impl IntoIterator<Item = &'a WeatherGroup>) -> usize {
    groups
        .into_iter()
        .filter_map(|group| {
            SEVERITY_PRIORITY
                .iter()
                .position(|entry| matches_priority(group, entry))
        })
        .min()
        .unwrap_or(SEVERITY_PRIORITY.len())
}

fn code_set(groups: &[&WeatherGroup]) -> BTreeSet<&'static str> {
    groups.iter().flat_map(|group| group.codes()).collect()
}

/// Compare present weather
///
/// `temporary_weight` is the confidence weight of an active TEMPO group; it
/// scales the score whenever forecast weather is involved.
pub fn compare_weather(
    forecast: &[WeatherPhenomenon],
    observed: &[WeatherPhenomenon],
    temporary_weight: Option<f64>,
) -> ParameterComparison {
    let forecast_groups: Vec<&WeatherGroup> = weather_groups(forecast).collect();
    let observed_groups: Vec<&WeatherGroup> = weather_groups(observed).collect();

    match (forecast_groups.is_empty(), observed_groups.is_empty()) {
        (true, true) => {
            ParameterComparison::scored(MAX_SCORE, "No significant weather forecast or observed")
        }
        (true, false) => {
            let rank = severity_rank(observed_groups.iter().copied());
            if rank < SEVERE_WEATHER_RANK {
                ParameterComparison::scored(0.0, "Severe weather observed but not forecast")
            } else {
                ParameterComparison::scored(
                    weather::UNFORECAST_SCORE,
                    "Weather observed but not forecast",
                )
            }
        }
        (false, true) => match temporary_weight {
            Some(weight) => ParameterComparison::scored(
                weather::NOT_OBSERVED_TEMPORARY_SCORE * weight,
                format!("Temporary weather not observed (weight {})", weight),
            ),
            None => ParameterComparison::scored(
                weather::NOT_OBSERVED_SCORE,
                "Forecast weather not observed",
            ),
        },
        (false, false) => {
            let forecast_codes = code_set(&forecast_groups);
            let observed_codes = code_set(&observed_groups);
            let union = forecast_codes.union(&observed_codes).count();
            let common = forecast_codes.intersection(&observed_codes).count();
            let overlap = if union == 0 {
                1.0
            } else {
                common as f64 / union as f64
            };

            let mut score = MAX_SCORE * overlap;
            let mut detail = format!("{} of {} weather codes in common", common, union);

            let forecast_rank = severity_rank(forecast_groups.iter().copied());
            let observed_rank = severity_rank(observed_groups.iter().copied());
            if observed_rank > forecast_rank {
                score -= weather::SEVERITY_PENALTY;
                detail.push_str(", observed less severe than forecast");
            }
            if let Some(weight) = temporary_weight {
                score *= weight;
                detail.push_str(&format!(", weight {}", weight));
            }

            ParameterComparison::scored(score, detail)
        }
    }
}
