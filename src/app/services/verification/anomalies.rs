//! Advisory consistency checks
//!
//! Anomalies never change the score. They flag reports that are internally
//! inconsistent or results that should not have been possible.

use crate::app::models::weather::weather_groups;
use crate::app::models::{Anomaly, AnomalyKind, MetarReport, Severity, Wind};
use crate::app::services::field_decoders::is_low_visibility;
use tracing::debug;

/// Checks that only need the observation
pub fn observation_anomalies(observation: &MetarReport) -> Vec<Anomaly> {
    let mut anomalies = Vec::new();

    if let Some(Wind::Directional {
        direction,
        speed: 0,
        ..
    }) = observation.wind
    {
        if direction != 0 {
            anomalies.push(Anomaly::new(
                AnomalyKind::CalmWithDirection,
                Severity::Medium,
                format!("Zero wind speed reported with direction {:03}°", direction),
            ));
        }
    }

    let thunderstorm = weather_groups(&observation.weather).any(|g| g.is_thunderstorm());
    if thunderstorm && !observation.clouds.iter().any(|c| c.is_cumulonimbus()) {
        anomalies.push(Anomaly::new(
            AnomalyKind::ThunderstormWithoutCumulonimbus,
            Severity::Medium,
            "Thunderstorm reported without a cumulonimbus layer",
        ));
    }

    if let Some(visibility) = observation.visibility {
        if is_low_visibility(&visibility) && weather_groups(&observation.weather).next().is_none() {
            anomalies.push(Anomaly::new(
                AnomalyKind::LowVisibilityWithoutWeather,
                Severity::Medium,
                format!("Visibility {} m with no weather phenomenon", visibility.meters),
            ));
        }
    }

    for anomaly in &anomalies {
        debug!("Observation anomaly: {}", anomaly.message);
    }
    anomalies
}

/// Flag a forecast chosen for a different station than the observation
pub fn station_mismatch(forecast_station: Option<&str>, observed_station: &str) -> Option<Anomaly> {
    if forecast_station == Some(observed_station) {
        return None;
    }
    Some(Anomaly::new(
        AnomalyKind::StationMismatch,
        Severity::Critical,
        format!(
            "Forecast station {} does not match observation station {}",
            forecast_station.unwrap_or("(none)"),
            observed_station
        ),
    ))
}
