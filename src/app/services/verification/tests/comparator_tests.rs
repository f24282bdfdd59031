//! Tests for the per-parameter comparators

use crate::app::models::{CloudLayer, ComparisonStatus, Visibility, Wind};
use crate::app::services::field_decoders::{decode_cloud, decode_weather, decode_wind};
use crate::app::services::verification::comparators::*;

fn clouds(tokens: &[&str]) -> Vec<CloudLayer> {
    tokens.iter().filter_map(|t| decode_cloud(t)).collect()
}

fn weather(tokens: &[&str]) -> Vec<crate::app::models::WeatherPhenomenon> {
    tokens.iter().filter_map(|t| decode_weather(t)).collect()
}

#[test]
fn test_wind_within_tolerance_matches() {
    let comparison = compare_wind(Some(&decode_wind("19008KT")), Some(&decode_wind("20010KT")));
    assert_eq!(comparison.score, 100.0);
    assert_eq!(comparison.status, ComparisonStatus::Match);
    assert_eq!(comparison.values, Some((8.0, 10.0)));
}

#[test]
fn test_wind_direction_and_speed_penalties() {
    // 60° off (30 over) and 12 kt apart (7 over): 100 - 60 - 35
    let comparison = compare_wind(Some(&decode_wind("09010KT")), Some(&decode_wind("15022KT")));
    assert_eq!(comparison.score, 5.0);
    assert_eq!(comparison.status, ComparisonStatus::Mismatch);
}

#[test]
fn test_wind_direction_wraps_at_north() {
    assert_eq!(angular_difference(350, 10), 20.0);
    assert_eq!(angular_difference(10, 350), 20.0);
    assert_eq!(angular_difference(90, 270), 180.0);

    let comparison = compare_wind(Some(&decode_wind("35010KT")), Some(&decode_wind("01010KT")));
    assert_eq!(comparison.score, 100.0);
}

#[test]
fn test_gust_penalty() {
    // Gust 35 vs peak 15: 20 kt apart, 13 over tolerance
    let comparison = compare_wind(
        Some(&decode_wind("24015G35KT")),
        Some(&decode_wind("24015KT")),
    );
    assert_eq!(comparison.score, 61.0);
    assert_eq!(comparison.status, ComparisonStatus::Partial);
}

#[test]
fn test_variable_and_calm_compare_speed_only() {
    let comparison = compare_wind(Some(&decode_wind("VRB03KT")), Some(&decode_wind("27012KT")));
    assert_eq!(comparison.score, 80.0);

    let both_calm = compare_wind(Some(&Wind::Calm), Some(&decode_wind("00000KT")));
    assert_eq!(both_calm.score, 100.0);

    let calm_vs_directional = compare_wind(Some(&Wind::Calm), Some(&decode_wind("27004KT")));
    assert_eq!(calm_vs_directional.score, 100.0);
}

#[test]
fn test_wind_missing_or_unparsed() {
    assert!(compare_wind(None, Some(&Wind::Calm)).is_missing());
    assert!(compare_wind(Some(&decode_wind("///05KT")), Some(&Wind::Calm)).is_missing());
}

#[test]
fn test_visibility_category_mismatch_caps_score() {
    let comparison = compare_visibility(Some(Visibility::new(3500)), Some(Visibility::new(2000)));
    assert_eq!(comparison.score, 50.0);
    assert_eq!(comparison.status, ComparisonStatus::Mismatch);
    assert_eq!(comparison.category_match, Some(false));
}

#[test]
fn test_visibility_category_match_floors_score() {
    // 2000 m apart against a 1000 m tolerance would score 50; both are MVFR
    let comparison = compare_visibility(Some(Visibility::new(4900)), Some(Visibility::new(2900)));
    assert_eq!(comparison.score, 70.0);
    assert_eq!(comparison.status, ComparisonStatus::Partial);
    assert_eq!(comparison.category_match, Some(true));
}

#[test]
fn test_visibility_wide_tolerance() {
    let comparison = compare_visibility(Some(Visibility::new(8000)), Some(Visibility::new(6000)));
    assert_eq!(comparison.score, 100.0);
    assert!(compare_visibility(None, Some(Visibility::new(6000))).is_missing());
}

#[test]
fn test_cloud_ceilings() {
    let comparison = compare_cloud(&clouds(&["BKN100"]), &clouds(&["SCT015", "BKN080"]));
    // 2000 ft apart, 1500 over a 500 ft tolerance: 100 - 120, floored at 70 (both VFR+)
    assert_eq!(comparison.score, 70.0);
    assert_eq!(comparison.category_match, Some(true));

    let narrow = compare_cloud(&clouds(&["OVC008"]), &clouds(&["OVC005"]));
    // 300 ft apart, 100 over a 200 ft tolerance: 80, both MVFR
    assert_eq!(narrow.score, 80.0);
    assert_eq!(narrow.status, ComparisonStatus::Partial);
}

#[test]
fn test_cloud_one_sided_ceiling() {
    let comparison = compare_cloud(&clouds(&["BKN020"]), &clouds(&["SCT020"]));
    assert_eq!(comparison.score, 50.0);
    assert_eq!(comparison.status, ComparisonStatus::Partial);
    assert_eq!(comparison.category_match, Some(false));

    // Both sides VFR+ by height, but only one reports a ceiling
    let high = compare_cloud(&clouds(&["BKN040"]), &[]);
    assert_eq!(high.score, 50.0);
    assert_eq!(high.category_match, Some(false));
}

#[test]
fn test_cloud_no_ceiling_either_side() {
    let comparison = compare_cloud(&clouds(&["CAVOK"]), &clouds(&["FEW030"]));
    assert_eq!(comparison.score, 100.0);
    assert_eq!(comparison.category_match, Some(true));

    // No cloud group at all is a report of no ceiling
    let empty = compare_cloud(&[], &clouds(&["SCT030"]));
    assert!(!empty.is_missing());
    assert_eq!(empty.score, 100.0);
    assert_eq!(empty.status, ComparisonStatus::Match);
    assert_eq!(empty.category_match, Some(true));
    assert_eq!(compare_cloud(&[], &[]).score, 100.0);
}

#[test]
fn test_weather_none_on_either_side() {
    assert_eq!(compare_weather(&[], &weather(&["NSW"]), None).score, 100.0);
    assert_eq!(compare_weather(&[], &weather(&["HZ"]), None).score, 50.0);
    assert_eq!(compare_weather(&[], &weather(&["+TSRA"]), None).score, 0.0);
    assert_eq!(compare_weather(&[], &weather(&["-DZ"]), None).score, 0.0);
    assert_eq!(compare_weather(&weather(&["HZ"]), &[], None).score, 30.0);
    assert_eq!(compare_weather(&weather(&["HZ"]), &[], Some(0.6)).score, 30.0);
}

#[test]
fn test_weather_overlap_and_severity() {
    let same = compare_weather(&weather(&["TSRA"]), &weather(&["+TSRA"]), None);
    assert_eq!(same.score, 100.0);

    let partial = compare_weather(&weather(&["RA", "BR"]), &weather(&["RA"]), None);
    assert_eq!(partial.score, 50.0);

    // Forecast thunderstorm, observed only rain: 1 of 2 codes, less severe
    let weaker = compare_weather(&weather(&["TSRA"]), &weather(&["RA"]), None);
    assert_eq!(weaker.score, 20.0);
}

#[test]
fn test_weather_temporary_weight() {
    let comparison = compare_weather(&weather(&["TSRA"]), &weather(&["+TSRA"]), Some(0.8));
    assert_eq!(comparison.score, 80.0);
    assert_eq!(comparison.status, ComparisonStatus::Partial);
}

#[test]
fn test_severity_rank() {
    let groups = weather(&["HZ", "+RA"]);
    let rank = severity_rank(groups.iter().filter_map(|w| w.group()));
    assert_eq!(rank, 1);

    let moderate_rain = weather(&["RA"]);
    assert_eq!(severity_rank(moderate_rain.iter().filter_map(|w| w.group())), 7);
    assert_eq!(severity_rank([]), 19);
}
