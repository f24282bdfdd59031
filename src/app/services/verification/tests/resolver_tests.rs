//! Tests for active segment resolution

use super::*;
use crate::app::models::{CloudLayer, SegmentKind, Visibility, Wind};
use crate::app::services::verification::resolve_conditions;
use crate::config::VerificationConfig;

fn speed(wind: &Option<Wind>) -> Option<u16> {
    wind.as_ref().and_then(Wind::speed)
}

#[test]
fn test_base_applies_outside_change_windows() {
    let forecast = taf(KOLKATA_TAF);
    let (conditions, active) =
        resolve_conditions(&forecast, time(11, 7, 0), &VerificationConfig::default());

    assert_eq!(active.index, 0);
    assert_eq!(active.kind, SegmentKind::Base);
    assert_eq!(conditions.visibility, Some(Visibility::new(3500)));
    assert!(active.temporary_weight.is_none());
}

#[test]
fn test_tempo_overrides_only_named_fields() {
    let forecast = taf(KOLKATA_TAF);
    let (conditions, active) =
        resolve_conditions(&forecast, time(11, 10, 0), &VerificationConfig::default());

    assert_eq!(active.index, 1);
    assert_eq!(active.applied, vec![0, 1]);
    assert_eq!(speed(&conditions.wind), Some(8));
    assert_eq!(conditions.visibility, Some(Visibility::new(2000)));
    assert_eq!(conditions.clouds.len(), 3);
    assert_eq!(active.temporary_weight, Some(0.8));
    assert!(!active.in_transition);
}

#[test]
fn test_ordinary_tempo_uses_normal_weight() {
    let forecast = taf("TAF VECC 110500Z 1106/1212 19008KT 6000 SCT020 TEMPO 1108/1112 3000 BR");
    let (_, active) =
        resolve_conditions(&forecast, time(11, 9, 0), &VerificationConfig::default());
    assert_eq!(active.temporary_weight, Some(0.6));
}

#[test]
fn test_from_group_replaces_everything() {
    let forecast = taf("TAF VIDP 110500Z 1106/1212 31008KT 4000 HZ SCT030 FM111400 VRB03KT 1500");
    let config = VerificationConfig::default();

    let (before, _) = resolve_conditions(&forecast, time(11, 13, 59), &config);
    assert_eq!(before.visibility, Some(Visibility::new(4000)));

    let (after, active) = resolve_conditions(&forecast, time(11, 14, 0), &config);
    assert_eq!(active.index, 1);
    assert_eq!(after.visibility, Some(Visibility::new(1500)));
    assert!(after.weather.is_empty());
    assert!(after.clouds.is_empty());
    assert_eq!(after.wind, Some(Wind::Variable { speed: 3, gust: None }));
}

#[test]
fn test_becoming_window_marks_transition() {
    let forecast = taf("TAF VIDP 110500Z 1106/1212 31008KT 4000 HZ BECMG 1108/1110 32015KT 6000");
    let (conditions, active) =
        resolve_conditions(&forecast, time(11, 9, 0), &VerificationConfig::default());

    assert!(active.in_transition);
    assert_eq!(active.index, 1);
    assert_eq!(speed(&conditions.wind), Some(15));
}

#[test]
fn test_completed_becoming_persists() {
    let forecast = taf("TAF VIDP 110500Z 1106/1212 31008KT 4000 HZ BECMG 1108/1110 32015KT 6000");
    let (conditions, active) =
        resolve_conditions(&forecast, time(11, 16, 0), &VerificationConfig::default());

    assert!(!active.in_transition);
    assert_eq!(active.index, 0);
    assert_eq!(active.applied, vec![0, 1]);
    assert_eq!(conditions.visibility, Some(Visibility::new(6000)));
    assert_eq!(conditions.weather.len(), 1);
}

#[test]
fn test_cavok_becoming_clears_weather() {
    let forecast = taf("TAF VECC 110500Z 1106/1212 19008KT 3000 HZ BKN010 BECMG 1108/1110 CAVOK");
    let config = VerificationConfig::default();

    let (before, _) = resolve_conditions(&forecast, time(11, 7, 0), &config);
    assert_eq!(before.weather.len(), 1);
    assert!(!before.cavok);

    let (after, active) = resolve_conditions(&forecast, time(11, 12, 0), &config);
    assert_eq!(active.applied, vec![0, 1]);
    assert!(after.cavok);
    assert!(after.weather.is_empty());
    assert_eq!(after.visibility, Some(Visibility::cavok()));
    assert_eq!(after.clouds, vec![CloudLayer::Clear]);
    assert_eq!(speed(&after.wind), Some(8));
}

#[test]
fn test_later_from_supersedes_completed_becoming() {
    let forecast = taf(
        "TAF VIDP 110500Z 1106/1212 31008KT 4000 BECMG 1108/1110 32015KT FM111200 09005KT 8000",
    );
    let (conditions, active) =
        resolve_conditions(&forecast, time(11, 15, 0), &VerificationConfig::default());

    assert_eq!(active.applied, vec![2]);
    assert_eq!(speed(&conditions.wind), Some(5));
}

#[test]
fn test_tempo_takes_precedence_over_becoming_and_prob() {
    let forecast = taf("TAF VECC 110500Z 1106/1212 19008KT 6000 \
                        TEMPO 1108/1112 2000 TSRA \
                        BECMG 1108/1110 4000 \
                        PROB30 1108/1112 1000");
    let (conditions, active) =
        resolve_conditions(&forecast, time(11, 9, 0), &VerificationConfig::default());

    assert_eq!(active.applied, vec![0, 3, 2, 1]);
    assert_eq!(active.index, 1);
    assert_eq!(conditions.visibility, Some(Visibility::new(2000)));
    assert!(active.in_transition);
}

#[test]
fn test_prob_tempo_carries_temporary_weight() {
    let forecast = taf("TAF VIDP 110500Z 1106/1212 31008KT 4000 PROB30 TEMPO 1120/1124 0800 FG");
    let (conditions, active) =
        resolve_conditions(&forecast, time(11, 22, 0), &VerificationConfig::default());

    assert_eq!(conditions.visibility, Some(Visibility::new(800)));
    assert_eq!(active.temporary_weight, Some(0.6));
}

#[test]
fn test_windows_across_month_end() {
    let forecast = taf("TAF VECC 301100Z 3012/0118 19008KT 6000 TEMPO 0102/0106 2000 TSRA");
    let (conditions, active) =
        resolve_conditions(&forecast, time(1, 4, 0), &VerificationConfig::default());

    assert_eq!(active.index, 1);
    assert_eq!(conditions.visibility, Some(Visibility::new(2000)));
}
