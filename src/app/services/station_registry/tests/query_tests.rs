//! Tests for station lookups

use crate::app::models::StationInfo;
use crate::app::services::station_registry::StationRegistry;

#[test]
fn test_builtin_stations() {
    let registry = StationRegistry::builtin();

    assert_eq!(registry.station_count(), 6);
    let delhi = registry.station_info("VIDP");
    assert_eq!(delhi.name, "Delhi (IGI Airport)");
    assert_eq!(delhi.fir, "Delhi FIR");
    assert!(delhi.known);
}

#[test]
fn test_lookup_is_case_insensitive() {
    let registry = StationRegistry::default();
    assert!(registry.contains_station("vabb"));
    assert_eq!(registry.station_info("vabb").code, "VABB");
}

#[test]
fn test_unknown_station_placeholder() {
    let registry = StationRegistry::builtin();
    let info = registry.station_info("KJFK");

    assert_eq!(info.code, "KJFK");
    assert_eq!(info.name, StationInfo::UNKNOWN_NAME);
    assert_eq!(info.fir, StationInfo::UNKNOWN_FIR);
    assert!(!info.known);
}

#[test]
fn test_find_stations_by_fir() {
    let registry = StationRegistry::builtin();
    let kolkata: Vec<&str> = registry
        .find_stations_by_fir("kolkata fir")
        .into_iter()
        .map(|s| s.code.as_str())
        .collect();

    assert_eq!(kolkata, vec!["VECC", "VEGY", "VEPT"]);
}

#[test]
fn test_empty_registry() {
    let registry = StationRegistry::new();
    assert_eq!(registry.station_count(), 0);
    assert!(!registry.station_info("VIDP").known);
}
