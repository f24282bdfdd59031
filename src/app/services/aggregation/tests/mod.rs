//! Tests for result aggregation


use crate::app::models::{
    LeadTimeBucket, ObservationRef, ParameterComparison, ParameterComparisons, Rating,
    StationInfo, VerificationResult, VerificationStatus,
};

/// Build a scored result with the given composite score
pub fn scored(station: &str, score: f64) -> VerificationResult {
    VerificationResult {
        observation: ObservationRef {
            station: Some(station.to_string()),
            time: None,
            raw: String::new(),
        },
        station: StationInfo::unknown(station),
        forecast: None,
        active_segment: None,
        comparisons: Some(ParameterComparisons {
            wind: ParameterComparison::scored(score, "wind"),
            visibility: ParameterComparison::scored(score, "visibility"),
            weather: ParameterComparison::scored(score, "weather"),
            cloud: ParameterComparison::missing("cloud not compared"),
        }),
        score,
        rating: Rating::from_score(score),
        status: VerificationStatus::from_score(score),
        lead_time_hours: None,
        lead_time_bucket: None,
        anomalies: Vec::new(),
    }
}

/// Build a result that could not be scored
pub fn unverifiable(station: &str) -> VerificationResult {
    VerificationResult {
        comparisons: None,
        score: 0.0,
        rating: Rating::Poor,
        status: VerificationStatus::NoValidForecast,
        ..scored(station, 0.0)
    }
}

pub fn with_lead(mut result: VerificationResult, hours: f64) -> VerificationResult {
    result.lead_time_hours = Some(hours);
    result.lead_time_bucket = LeadTimeBucket::from_hours(hours);
    result
}

pub fn with_wind_speeds(mut result: VerificationResult, forecast: f64, observed: f64) -> VerificationResult {
    if let Some(comparisons) = result.comparisons.as_mut() {
        comparisons.wind = comparisons.wind.clone().with_values(forecast, observed);
    }
    result
}
