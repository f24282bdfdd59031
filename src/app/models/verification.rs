//! Verification outcome types

use super::StationInfo;
use super::report::SegmentKind;
use super::time::{ReportTime, ValidityWindow};
use super::weather::FlightCategory;
use crate::constants::{
    EXCELLENT_THRESHOLD, GOOD_THRESHOLD, MATCH_THRESHOLD, MODERATE_THRESHOLD,
    PARTIAL_STATUS_THRESHOLD, PARTIAL_THRESHOLD, VERIFIED_THRESHOLD,
};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Per-parameter Comparison
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComparisonStatus {
    Missing,
    Mismatch,
    Partial,
    Match,
}

impl ComparisonStatus {
    /// Default status for a score
    pub fn from_score(score: f64) -> Self {
        if score >= MATCH_THRESHOLD {
            ComparisonStatus::Match
        } else if score >= PARTIAL_THRESHOLD {
            ComparisonStatus::Partial
        } else {
            ComparisonStatus::Mismatch
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterComparison {
    /// Score in `0..=100`
    pub score: f64,
    pub status: ComparisonStatus,
    pub detail: String,
    /// Category agreement for visibility and cloud comparisons
    pub category_match: Option<bool>,
    /// Forecast and observed magnitudes (kt, m or ft) when both are numeric
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<(f64, f64)>,
}

impl ParameterComparison {
    pub fn scored(score: f64, detail: impl Into<String>) -> Self {
        let score = score.clamp(0.0, 100.0);
        Self {
            score,
            status: ComparisonStatus::from_score(score),
            detail: detail.into(),
            category_match: None,
            values: None,
        }
    }

    pub fn missing(detail: impl Into<String>) -> Self {
        Self {
            score: 0.0,
            status: ComparisonStatus::Missing,
            detail: detail.into(),
            category_match: None,
            values: None,
        }
    }

    pub fn with_status(mut self, status: ComparisonStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_category(self, forecast: FlightCategory, observed: FlightCategory) -> Self {
        self.with_category_match(forecast == observed)
    }

    pub fn with_category_match(mut self, matched: bool) -> Self {
        self.category_match = Some(matched);
        self
    }

    pub fn with_values(mut self, forecast: f64, observed: f64) -> Self {
        self.values = Some((forecast, observed));
        self
    }

    pub fn is_missing(&self) -> bool {
        self.status == ComparisonStatus::Missing
    }

    /// Add a flat bonus, upgrading the status if the new score warrants it
    pub fn with_bonus(mut self, bonus: f64) -> Self {
        if self.is_missing() || bonus <= 0.0 {
            return self;
        }
        self.score = (self.score + bonus).min(100.0);
        self.status = self.status.max(ComparisonStatus::from_score(self.score));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterComparisons {
    pub wind: ParameterComparison,
    pub visibility: ParameterComparison,
    pub weather: ParameterComparison,
    pub cloud: ParameterComparison,
}

// =============================================================================
// Rating and Status
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rating {
    Poor,
    Moderate,
    Good,
    Excellent,
}

impl Rating {
    pub fn from_score(score: f64) -> Self {
        if score >= EXCELLENT_THRESHOLD {
            Rating::Excellent
        } else if score >= GOOD_THRESHOLD {
            Rating::Good
        } else if score >= MODERATE_THRESHOLD {
            Rating::Moderate
        } else {
            Rating::Poor
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Rating::Poor => "Poor",
            Rating::Moderate => "Moderate",
            Rating::Good => "Good",
            Rating::Excellent => "Excellent",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerificationStatus {
    Verified,
    Partial,
    Failed,
    /// No forecast for the station was valid at the observation time
    NoValidForecast,
    /// The observation lacks a station or time
    Unparsed,
}

impl VerificationStatus {
    pub fn from_score(score: f64) -> Self {
        if score >= VERIFIED_THRESHOLD {
            VerificationStatus::Verified
        } else if score >= PARTIAL_STATUS_THRESHOLD {
            VerificationStatus::Partial
        } else {
            VerificationStatus::Failed
        }
    }

    /// Whether a forecast was actually scored
    pub fn is_scored(&self) -> bool {
        matches!(
            self,
            VerificationStatus::Verified | VerificationStatus::Partial | VerificationStatus::Failed
        )
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            VerificationStatus::Verified => "VERIFIED",
            VerificationStatus::Partial => "PARTIAL",
            VerificationStatus::Failed => "FAILED",
            VerificationStatus::NoValidForecast => "NO VALID FORECAST",
            VerificationStatus::Unparsed => "UNPARSED",
        };
        f.write_str(text)
    }
}

// =============================================================================
// Anomalies
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnomalyKind {
    NoValidForecast,
    UnparsedObservation,
    StationMismatch,
    CalmWithDirection,
    ThunderstormWithoutCumulonimbus,
    LowVisibilityWithoutWeather,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anomaly {
    pub kind: AnomalyKind,
    pub severity: Severity,
    pub message: String,
}

impl Anomaly {
    pub fn new(kind: AnomalyKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
        }
    }
}

// =============================================================================
// Lead Time
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LeadTimeBucket {
    #[serde(rename = "0-6h")]
    ZeroToSix,
    #[serde(rename = "6-12h")]
    SixToTwelve,
    #[serde(rename = "12-18h")]
    TwelveToEighteen,
    #[serde(rename = "18-24h")]
    EighteenToTwentyFour,
    #[serde(rename = "24h+")]
    TwentyFourPlus,
}

impl LeadTimeBucket {
    pub const ALL: [LeadTimeBucket; 5] = [
        LeadTimeBucket::ZeroToSix,
        LeadTimeBucket::SixToTwelve,
        LeadTimeBucket::TwelveToEighteen,
        LeadTimeBucket::EighteenToTwentyFour,
        LeadTimeBucket::TwentyFourPlus,
    ];

    /// Bucket for a lead time; negative lead times have no bucket
    pub fn from_hours(hours: f64) -> Option<Self> {
        if hours < 0.0 || hours.is_nan() {
            None
        } else if hours < 6.0 {
            Some(LeadTimeBucket::ZeroToSix)
        } else if hours < 12.0 {
            Some(LeadTimeBucket::SixToTwelve)
        } else if hours < 18.0 {
            Some(LeadTimeBucket::TwelveToEighteen)
        } else if hours < 24.0 {
            Some(LeadTimeBucket::EighteenToTwentyFour)
        } else {
            Some(LeadTimeBucket::TwentyFourPlus)
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeadTimeBucket::ZeroToSix => "0-6h",
            LeadTimeBucket::SixToTwelve => "6-12h",
            LeadTimeBucket::TwelveToEighteen => "12-18h",
            LeadTimeBucket::EighteenToTwentyFour => "18-24h",
            LeadTimeBucket::TwentyFourPlus => "24h+",
        }
    }
}

// =============================================================================
// Verification Result
// =============================================================================

/// Identifies the observation a result was produced for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationRef {
    pub station: Option<String>,
    pub time: Option<ReportTime>,
    pub raw: String,
}

/// Identifies the forecast chosen for verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastRef {
    /// Position in the forecast set passed to `verify`
    pub index: usize,
    pub station: Option<String>,
    pub issue_time: Option<ReportTime>,
    pub validity: Option<ValidityWindow>,
}

/// The forecast conditions found to apply at observation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveSegment {
    /// Segment index (0 = base, n = n-th change group)
    pub index: usize,
    pub kind: SegmentKind,
    /// Every segment whose values were applied, in application order
    pub applied: Vec<usize>,
    /// A BECMG window contains the observation time
    pub in_transition: bool,
    /// Weather confidence weight from an active TEMPO segment
    pub temporary_weight: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub observation: ObservationRef,
    pub station: StationInfo,
    pub forecast: Option<ForecastRef>,
    pub active_segment: Option<ActiveSegment>,
    pub comparisons: Option<ParameterComparisons>,
    /// Composite score in `0..=100`
    pub score: f64,
    pub rating: Rating,
    pub status: VerificationStatus,
    pub lead_time_hours: Option<f64>,
    pub lead_time_bucket: Option<LeadTimeBucket>,
    pub anomalies: Vec<Anomaly>,
}

impl VerificationResult {
    pub fn is_scored(&self) -> bool {
        self.status.is_scored()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_thresholds() {
        assert_eq!(VerificationStatus::from_score(75.0), VerificationStatus::Verified);
        assert_eq!(VerificationStatus::from_score(74.9), VerificationStatus::Partial);
        assert_eq!(VerificationStatus::from_score(50.0), VerificationStatus::Partial);
        assert_eq!(VerificationStatus::from_score(49.9), VerificationStatus::Failed);
    }

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(Rating::from_score(90.0), Rating::Excellent);
        assert_eq!(Rating::from_score(80.0), Rating::Good);
        assert_eq!(Rating::from_score(50.0), Rating::Moderate);
        assert_eq!(Rating::from_score(10.0), Rating::Poor);
    }

    #[test]
    fn test_bonus_clamps_and_upgrades_status() {
        let comparison = ParameterComparison::scored(80.0, "test").with_bonus(15.0);
        assert_eq!(comparison.score, 95.0);
        assert_eq!(comparison.status, ComparisonStatus::Match);

        let comparison = ParameterComparison::scored(95.0, "test").with_bonus(15.0);
        assert_eq!(comparison.score, 100.0);

        let missing = ParameterComparison::missing("none").with_bonus(15.0);
        assert_eq!(missing.score, 0.0);
        assert_eq!(missing.status, ComparisonStatus::Missing);
    }

    #[test]
    fn test_lead_time_buckets() {
        assert_eq!(LeadTimeBucket::from_hours(-1.0), None);
        assert_eq!(LeadTimeBucket::from_hours(0.0), Some(LeadTimeBucket::ZeroToSix));
        assert_eq!(LeadTimeBucket::from_hours(6.0), Some(LeadTimeBucket::SixToTwelve));
        assert_eq!(
            LeadTimeBucket::from_hours(31.0),
            Some(LeadTimeBucket::TwentyFourPlus)
        );
    }
}
