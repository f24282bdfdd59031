//! Data models for METAR/TAF decoding and forecast verification
//!
//! Decoders produce fully formed, immutable reports. The verification engine
//! borrows them and produces new result values.

pub mod report;
pub mod time;
pub mod verification;
pub mod weather;

use serde::{Deserialize, Serialize};

pub use report::{ForecastSegment, MetarReport, MetarType, SegmentKind, TafClass, TafReport};
pub use time::{ReportTime, Timeline, ValidityWindow};
pub use verification::{
    ActiveSegment, Anomaly, AnomalyKind, ComparisonStatus, ForecastRef, LeadTimeBucket,
    ObservationRef, ParameterComparison, ParameterComparisons, Rating, Severity,
    VerificationResult, VerificationStatus,
};
pub use weather::{
    CloudCoverage, CloudLayer, ConvectiveType, Descriptor, FlightCategory, Intensity,
    Phenomenon, Visibility, WeatherGroup, WeatherPhenomenon, Wind,
};

// =============================================================================
// Station Information
// =============================================================================

/// Station lookup result
///
/// Unknown codes resolve to a placeholder with `known = false` rather than
/// failing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StationInfo {
    pub code: String,
    pub name: String,
    pub fir: String,
    #[serde(default)]
    pub known: bool,
}

impl StationInfo {
    pub const UNKNOWN_NAME: &'static str = "Unknown Station Code";
    pub const UNKNOWN_FIR: &'static str = "Unknown FIR";

    pub fn known(code: impl Into<String>, name: impl Into<String>, fir: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            fir: fir.into(),
            known: true,
        }
    }

    pub fn unknown(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: Self::UNKNOWN_NAME.to_string(),
            fir: Self::UNKNOWN_FIR.to_string(),
            known: false,
        }
    }
}
