//! Forecast verification engine
//!
//! Verifies one observation against a set of decoded forecasts:
//!
//! - [`selection`] picks the applicable forecast for the station and time
//! - [`resolver`] works out which change groups are in force
//! - [`comparators`] score wind, visibility, cloud and weather
//! - [`scoring`] combines the comparisons into a composite score
//! - [`anomalies`] flags inconsistent reports
//!
//! Verification is total. A missing forecast or an incomplete observation
//! yields a result with a terminal status instead of an error.
//!
//! ## Usage
//!
//! ```rust
//! use taf_verifier::{VerificationStatus, decode_metar, decode_taf, verify};
//!
//! let taf = decode_taf("TAF VABB 120500Z 1206/1306 27008KT CAVOK=").unwrap();
//! let metar = decode_metar("METAR VABB 121200Z 27010KT CAVOK 30/24 Q1010=").unwrap();
//!
//! let result = verify(&metar, &[taf]);
//! assert_eq!(result.status, VerificationStatus::Verified);
//! assert_eq!(result.score, 100.0);
//! ```

pub mod anomalies;
pub mod comparators;
pub mod resolver;
pub mod scoring;
pub mod selection;

#[cfg(test)]
pub mod tests;

pub use resolver::{ResolvedConditions, resolve_conditions};
pub use selection::{SelectedForecast, select_forecast};

use crate::app::models::{
    Anomaly, AnomalyKind, ForecastRef, LeadTimeBucket, MetarReport, ObservationRef,
    ParameterComparisons, Rating, Severity, StationInfo, TafReport, VerificationResult,
    VerificationStatus,
};
use crate::app::services::station_registry::StationRegistry;
use crate::config::VerificationConfig;
use comparators::{compare_cloud, compare_visibility, compare_weather, compare_wind};
use rayon::prelude::*;
use std::sync::LazyLock;
use tracing::{debug, warn};

static DEFAULT_VERIFIER: LazyLock<Verifier> = LazyLock::new(Verifier::default);

/// Verification engine with its scoring parameters and station registry
#[derive(Debug, Clone, Default)]
pub struct Verifier {
    config: VerificationConfig,
    registry: StationRegistry,
}

impl Verifier {
    pub fn new(config: VerificationConfig, registry: StationRegistry) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &VerificationConfig {
        &self.config
    }

    pub fn registry(&self) -> &StationRegistry {
        &self.registry
    }

    /// Verify one observation against a set of forecasts
    pub fn verify(&self, observation: &MetarReport, forecasts: &[TafReport]) -> VerificationResult {
        let observation_ref = ObservationRef {
            station: observation.station.clone(),
            time: observation.time,
            raw: observation.raw.clone(),
        };

        let (Some(station), Some(time)) = (observation.station.as_deref(), observation.time)
        else {
            debug!("Observation lacks station or time: '{}'", observation.raw);
            return VerificationResult {
                station: StationInfo::unknown(observation.station.clone().unwrap_or_default()),
                observation: observation_ref,
                forecast: None,
                active_segment: None,
                comparisons: None,
                score: 0.0,
                rating: Rating::Poor,
                status: VerificationStatus::Unparsed,
                lead_time_hours: None,
                lead_time_bucket: None,
                anomalies: vec![Anomaly::new(
                    AnomalyKind::UnparsedObservation,
                    Severity::Medium,
                    "Observation has no station or observation time",
                )],
            };
        };

        let station_info = self.registry.station_info(station);
        let mut anomalies = anomalies::observation_anomalies(observation);

        let Some(selected) = select_forecast(station, time, forecasts) else {
            anomalies.insert(
                0,
                Anomaly::new(
                    AnomalyKind::NoValidForecast,
                    Severity::High,
                    format!("No forecast for {} valid at {}", station, time),
                ),
            );
            return VerificationResult {
                observation: observation_ref,
                station: station_info,
                forecast: None,
                active_segment: None,
                comparisons: None,
                score: 0.0,
                rating: Rating::Poor,
                status: VerificationStatus::NoValidForecast,
                lead_time_hours: None,
                lead_time_bucket: None,
                anomalies,
            };
        };

        let forecast = selected.forecast;
        if let Some(anomaly) = anomalies::station_mismatch(forecast.station.as_deref(), station) {
            warn!("{}", anomaly.message);
            anomalies.push(anomaly);
        }

        let (conditions, active) = resolve_conditions(forecast, time, &self.config);
        let mut comparisons = ParameterComparisons {
            wind: compare_wind(conditions.wind.as_ref(), observation.wind.as_ref()),
            visibility: compare_visibility(conditions.visibility, observation.visibility),
            weather: compare_weather(
                &conditions.weather,
                &observation.weather,
                active.temporary_weight,
            ),
            cloud: compare_cloud(&conditions.clouds, &observation.clouds),
        };
        if active.in_transition {
            comparisons = scoring::apply_transition_bonus(comparisons, self.config.transition_bonus);
        }

        let score = scoring::composite_score(&comparisons, &self.config);
        let status = VerificationStatus::from_score(score);
        debug!(
            "Verified {} at {} against forecast #{}: {:.1} ({})",
            station, time, selected.index, score, status
        );

        VerificationResult {
            observation: observation_ref,
            station: station_info,
            forecast: Some(ForecastRef {
                index: selected.index,
                station: forecast.station.clone(),
                issue_time: forecast.issue_time,
                validity: forecast.validity,
            }),
            active_segment: Some(active),
            comparisons: Some(comparisons),
            score,
            rating: Rating::from_score(score),
            status,
            lead_time_hours: selected.lead_time_hours,
            lead_time_bucket: selected.lead_time_hours.and_then(LeadTimeBucket::from_hours),
            anomalies,
        }
    }

    /// Verify every observation against the same forecast set in parallel
    ///
    /// Results keep the order of `observations`.
    pub fn verify_all(
        &self,
        observations: &[MetarReport],
        forecasts: &[TafReport],
    ) -> Vec<VerificationResult> {
        observations
            .par_iter()
            .map(|observation| self.verify(observation, forecasts))
            .collect()
    }
}

/// Verify one observation with the default configuration and station table
pub fn verify(observation: &MetarReport, forecasts: &[TafReport]) -> VerificationResult {
    DEFAULT_VERIFIER.verify(observation, forecasts)
}

/// Verify many observations with the default configuration and station table
pub fn verify_all(observations: &[MetarReport], forecasts: &[TafReport]) -> Vec<VerificationResult> {
    DEFAULT_VERIFIER.verify_all(observations, forecasts)
}
