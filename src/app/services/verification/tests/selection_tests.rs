//! Tests for forecast selection

use super::*;
use crate::app::services::verification::selection::{is_applicable, select_forecast};

#[test]
fn test_selects_forecast_whose_validity_contains_observation() {
    let forecasts = vec![
        taf("TAF VECC 101100Z 1012/1118 20005KT 6000"),
        taf("TAF VECC 111100Z 1112/1218 20005KT 6000"),
    ];

    let selected = select_forecast("VECC", time(12, 3, 0), &forecasts).unwrap();
    assert_eq!(selected.index, 1);
    assert_eq!(selected.lead_time_hours, Some(16.0));
}

#[test]
fn test_prefers_most_recent_issue() {
    let forecasts = vec![
        taf("TAF VECC 110500Z 1106/1212 19008KT 3500"),
        taf("TAF AMD VECC 110730Z 1108/1212 19010KT 3000"),
        taf("TAF VECC 110200Z 1103/1206 19008KT 4000"),
    ];

    let selected = select_forecast("VECC", time(11, 10, 0), &forecasts).unwrap();
    assert_eq!(selected.index, 1);
    assert_eq!(selected.lead_time_hours, Some(2.5));
}

#[test]
fn test_ties_keep_input_order() {
    let forecasts = vec![
        taf("TAF VECC 110500Z 1106/1212 19008KT 3500"),
        taf("TAF VECC 110500Z 1106/1212 22010KT 5000"),
    ];

    let selected = select_forecast("VECC", time(11, 10, 0), &forecasts).unwrap();
    assert_eq!(selected.index, 0);
}

#[test]
fn test_other_stations_and_cancelled_forecasts_are_ignored() {
    let forecasts = vec![
        taf("TAF VIDP 110500Z 1106/1212 19008KT 3500"),
        taf("TAF AMD VECC 110800Z 1106/1212 CNL"),
    ];

    assert!(select_forecast("VECC", time(11, 10, 0), &forecasts).is_none());
    assert!(!is_applicable(&forecasts[1], "VECC", time(11, 10, 0)));
}

#[test]
fn test_month_rollover_selection() {
    let forecasts = vec![taf("TAF VECC 281100Z 2812/0112 19008KT 5000")];

    let selected = select_forecast("VECC", time(1, 6, 0), &forecasts).unwrap();
    assert_eq!(selected.index, 0);
    assert_eq!(selected.lead_time_hours, Some(67.0));
}

#[test]
fn test_observation_outside_validity() {
    let forecasts = vec![taf(KOLKATA_TAF)];
    assert!(select_forecast("VECC", time(12, 13, 0), &forecasts).is_none());
    assert!(select_forecast("VECC", time(11, 5, 30), &forecasts).is_none());
}
