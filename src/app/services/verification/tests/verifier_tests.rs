//! End-to-end tests for the verifier

use super::*;
use crate::app::models::{
    AnomalyKind, ComparisonStatus, LeadTimeBucket, MetarReport, Rating, Severity,
    VerificationStatus, Wind,
};
use crate::app::services::station_registry::StationRegistry;
use crate::app::services::verification::{Verifier, verify, verify_all};
use crate::config::VerificationConfig;

#[test]
fn test_tempo_thunderstorm_verification() {
    let forecasts = vec![taf(KOLKATA_TAF)];
    let observation =
        metar("METAR VECC 111000Z 19012KT 2000 +TSRA SCT012 FEW025CB OVC080 26/21 Q1006=");

    let result = verify(&observation, &forecasts);
    let comparisons = result.comparisons.as_ref().unwrap();

    assert_eq!(comparisons.wind.score, 100.0);
    assert_eq!(comparisons.visibility.score, 100.0);
    assert_eq!(comparisons.cloud.score, 70.0);
    assert_eq!(comparisons.weather.score, 80.0);
    assert_eq!(result.score, 88.5);
    assert_eq!(result.rating, Rating::Good);
    assert_eq!(result.status, VerificationStatus::Verified);
    assert_eq!(result.lead_time_hours, Some(5.0));
    assert_eq!(result.lead_time_bucket, Some(LeadTimeBucket::ZeroToSix));
    assert_eq!(result.station.name, "Kolkata (NSCBI Airport)");
    assert!(result.anomalies.is_empty());
}

#[test]
fn test_base_period_verification() {
    let forecasts = vec![taf(KOLKATA_TAF)];
    let observation = metar("METAR VECC 110700Z 20010KT 3000 HZ SCT015 BKN080 28/22 Q1008=");

    let result = verify(&observation, &forecasts);
    let comparisons = result.comparisons.as_ref().unwrap();

    assert_eq!(comparisons.wind.status, ComparisonStatus::Match);
    assert_eq!(comparisons.visibility.score, 100.0);
    assert_eq!(comparisons.weather.score, 100.0);
    assert_eq!(result.active_segment.as_ref().map(|a| a.index), Some(0));
}

#[test]
fn test_no_valid_forecast_is_terminal_status() {
    let forecasts = vec![taf(KOLKATA_TAF)];
    let observation = metar("METAR VIDP 111000Z 31005KT 5000 HZ NSC 30/18 Q1009=");

    let result = verify(&observation, &forecasts);

    assert_eq!(result.status, VerificationStatus::NoValidForecast);
    assert_eq!(result.score, 0.0);
    assert_eq!(result.rating, Rating::Poor);
    assert!(result.forecast.is_none());
    assert_eq!(result.anomalies[0].kind, AnomalyKind::NoValidForecast);
    assert_eq!(result.anomalies[0].severity, Severity::High);
}

#[test]
fn test_unparsed_observation() {
    let observation = MetarReport {
        raw: "garbage".to_string(),
        ..MetarReport::default()
    };

    let result = verify(&observation, &[taf(KOLKATA_TAF)]);
    assert_eq!(result.status, VerificationStatus::Unparsed);
    assert!(!result.is_scored());
    assert_eq!(result.anomalies[0].kind, AnomalyKind::UnparsedObservation);
}

#[test]
fn test_observation_anomalies() {
    let forecasts = vec![taf(KOLKATA_TAF)];
    let mut observation = metar("METAR VECC 111000Z 19000KT 0800 TS BKN030 26/21 Q1006=");
    observation.wind = Some(Wind::Directional {
        direction: 190,
        speed: 0,
        gust: None,
    });

    let result = verify(&observation, &forecasts);
    let kinds: Vec<AnomalyKind> = result.anomalies.iter().map(|a| a.kind).collect();

    assert!(kinds.contains(&AnomalyKind::CalmWithDirection));
    assert!(kinds.contains(&AnomalyKind::ThunderstormWithoutCumulonimbus));
    assert!(!kinds.contains(&AnomalyKind::LowVisibilityWithoutWeather));

    let foggy = metar("METAR VECC 111000Z 00000KT 0600 BKN002 20/20 Q1010=");
    let result = verify(&foggy, &forecasts);
    assert!(
        result
            .anomalies
            .iter()
            .any(|a| a.kind == AnomalyKind::LowVisibilityWithoutWeather)
    );
}

#[test]
fn test_transition_bonus_applies_inside_becmg() {
    let forecasts = vec![taf(
        "TAF VIDP 110500Z 1106/1212 31008KT 6000 HZ SCT030 BECMG 1108/1110 32015KT 4000",
    )];
    let observation = metar("METAR VIDP 110900Z 32012KT 4000 HZ SCT030 30/18 Q1009=");

    let with_bonus = verify(&observation, &forecasts);
    let without_bonus = Verifier::new(
        VerificationConfig::default().with_transition_bonus(0.0),
        StationRegistry::builtin(),
    )
    .verify(&observation, &forecasts);

    assert!(with_bonus.active_segment.as_ref().unwrap().in_transition);
    assert!(with_bonus.score >= without_bonus.score);
    let weather = &without_bonus.comparisons.as_ref().unwrap().weather;
    assert_eq!(weather.score, 100.0);
}

#[test]
fn test_verify_all_preserves_order() {
    let forecasts = vec![taf(KOLKATA_TAF)];
    let observations = vec![
        metar("METAR VECC 110800Z 20010KT 3000 HZ SCT015 BKN080 28/22 Q1008="),
        metar("METAR VIDP 111000Z 31005KT 5000 HZ NSC 30/18 Q1009="),
        metar("METAR VECC 111200Z 20012KT 4000 HZ SCT020 BKN080 28/22 Q1008="),
    ];

    let results = verify_all(&observations, &forecasts);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].observation.time, Some(time(11, 8, 0)));
    assert_eq!(results[1].status, VerificationStatus::NoValidForecast);
    assert_eq!(results[2].observation.time, Some(time(11, 12, 0)));
}

#[test]
fn test_selection_is_idempotent() {
    let forecasts = vec![
        taf(KOLKATA_TAF),
        taf("TAF AMD VECC 110730Z 1108/1212 19010KT 3000 HZ BKN080"),
    ];
    let observation = metar("METAR VECC 111000Z 19012KT 2000 +TSRA SCT012 FEW025CB OVC080=");

    let first = verify(&observation, &forecasts);
    let second = verify(&observation, &forecasts);
    assert_eq!(first, second);
    assert_eq!(first.forecast.as_ref().map(|f| f.index), Some(1));
}
