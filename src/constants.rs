//! Application constants for the TAF verifier
//!
//! This module contains the code tables, tolerance thresholds, category
//! boundaries and scoring weights used by the decoders and the
//! verification engine.

// =============================================================================
// Report Keywords
// =============================================================================

pub const METAR_KEYWORD: &str = "METAR";
pub const SPECI_KEYWORD: &str = "SPECI";
pub const TAF_KEYWORD: &str = "TAF";
pub const CAVOK: &str = "CAVOK";
pub const NSW: &str = "NSW";

/// Report terminator used in raw bulletins
pub const REPORT_TERMINATOR: char = '=';

/// Fragments at or below this length are discarded when splitting bulletins
pub const MIN_REPORT_LENGTH: usize = 10;

// =============================================================================
// Weather Code Tables
// =============================================================================

/// Descriptor codes (9 entries)
pub const DESCRIPTOR_CODES: &[&str] = &["MI", "BC", "PR", "DR", "BL", "SH", "TS", "FZ", "VC"];

/// Phenomenon codes (21 entries)
pub const PHENOMENON_CODES: &[&str] = &[
    "DZ", "RA", "SN", "SG", "IC", "PL", "GR", "GS", "UP", "BR", "FG", "FU", "VA", "DU", "SA",
    "HZ", "PO", "SQ", "FC", "SS", "DS",
];

/// Weather severity ranking, most severe first.
///
/// A weather list ranks at the index of its most severe entry. Entries
/// prefixed with `+` only match heavy-intensity groups.
pub const SEVERITY_PRIORITY: &[&str] = &[
    "TS", "+RA", "DZ", "FC", "SQ", "GR", "+SN", "RA", "SN", "SH", "FZ", "PL", "GS", "FG", "BR",
    "DU", "SA", "HZ", "FU",
];

/// Observed weather ranked within this many entries of the top is never
/// acceptable when the forecast called for no weather.
pub const SEVERE_WEATHER_RANK: usize = 3;

// =============================================================================
// Time Handling
// =============================================================================

pub const MINUTES_PER_HOUR: i64 = 60;
pub const MINUTES_PER_DAY: i64 = 24 * MINUTES_PER_HOUR;

/// Length of the synthetic month used for rollover correction
pub const SYNTHETIC_MONTH_MINUTES: i64 = 30 * MINUTES_PER_DAY;

/// A time earlier than its reference by more than this is assumed to be in the next month
pub const ROLLOVER_THRESHOLD_MINUTES: i64 = 15 * MINUTES_PER_DAY;

/// Validity periods up to this length are classified as short TAFs
pub const SHORT_TAF_MAX_HOURS: i64 = 12;

// =============================================================================
// Wind Tolerances
// =============================================================================

pub mod wind {
    /// Allowed angular difference before penalties (degrees)
    pub const DIRECTION_TOLERANCE_DEG: f64 = 30.0;
    /// Penalty per degree beyond tolerance
    pub const DIRECTION_PENALTY_PER_DEG: f64 = 2.0;
    /// Allowed speed difference before penalties (knots)
    pub const SPEED_TOLERANCE_KT: f64 = 5.0;
    /// Penalty per knot beyond tolerance
    pub const SPEED_PENALTY_PER_KT: f64 = 5.0;
    /// Allowed gust difference before penalties (knots)
    pub const GUST_TOLERANCE_KT: f64 = 7.0;
    /// Penalty per gust knot beyond tolerance
    pub const GUST_PENALTY_PER_KT: f64 = 3.0;
}

// =============================================================================
// Visibility Tolerances and Categories
// =============================================================================

pub mod visibility {
    /// Forecasts at or above this use the wide tolerance
    pub const WIDE_TOLERANCE_FROM_M: u32 = 5000;
    pub const WIDE_TOLERANCE_M: f64 = 2000.0;
    pub const NARROW_TOLERANCE_M: f64 = 1000.0;
    /// Penalty applied per full tolerance width of excess
    pub const PENALTY_PER_TOLERANCE: f64 = 50.0;

    pub const LIFR_BELOW_M: u32 = 500;
    pub const IFR_BELOW_M: u32 = 1500;
    pub const MVFR_BELOW_M: u32 = 5000;

    /// Visibility implied by CAVOK and by the `9999` group
    pub const CAVOK_METERS: u32 = 10_000;
    /// Below this, some obscuring phenomenon is expected to be reported
    pub const LOW_VISIBILITY_M: u32 = 1000;
}

// =============================================================================
// Cloud Tolerances and Categories
// =============================================================================

pub mod cloud {
    /// Forecast ceilings at or below this use the narrow tolerance
    pub const NARROW_TOLERANCE_UP_TO_FT: u32 = 1000;
    pub const NARROW_TOLERANCE_FT: f64 = 200.0;
    pub const WIDE_TOLERANCE_FT: f64 = 500.0;
    pub const PENALTY_PER_TOLERANCE: f64 = 40.0;
    /// Score when only one side reports a ceiling
    pub const ONE_SIDED_CEILING_SCORE: f64 = 50.0;

    pub const LIFR_BELOW_FT: u32 = 200;
    pub const IFR_BELOW_FT: u32 = 500;
    pub const MVFR_BELOW_FT: u32 = 1000;
    pub const VFR_BELOW_FT: u32 = 3000;

    /// Cloud group heights are reported in hundreds of feet
    pub const HEIGHT_UNIT_FT: u32 = 100;
}

// =============================================================================
// Weather Scores
// =============================================================================

pub mod weather {
    /// Forecast called for nothing but weather was observed
    pub const UNFORECAST_SCORE: f64 = 50.0;
    /// Forecast weather did not occur
    pub const NOT_OBSERVED_SCORE: f64 = 30.0;
    /// Forecast weather did not occur inside a TEMPO window, before weighting
    pub const NOT_OBSERVED_TEMPORARY_SCORE: f64 = 50.0;
    /// Deducted when the observed weather is less severe than forecast
    pub const SEVERITY_PENALTY: f64 = 30.0;
}

// =============================================================================
// Category Clamping
// =============================================================================

/// Maximum score when forecast and observed categories differ
pub const CATEGORY_MISMATCH_CAP: f64 = 50.0;

/// Minimum score when forecast and observed categories agree
pub const CATEGORY_MATCH_FLOOR: f64 = 70.0;

// =============================================================================
// Comparison Status Thresholds
// =============================================================================

pub const MATCH_THRESHOLD: f64 = 90.0;
pub const PARTIAL_THRESHOLD: f64 = 50.0;

// =============================================================================
// Composite Score Defaults
// =============================================================================

pub const DEFAULT_WIND_WEIGHT: f64 = 0.20;
pub const DEFAULT_VISIBILITY_WEIGHT: f64 = 0.25;
pub const DEFAULT_CLOUD_WEIGHT: f64 = 0.25;
pub const DEFAULT_WEATHER_WEIGHT: f64 = 0.20;

/// Sum the parameter weights must add up to
pub const TOTAL_PARAMETER_WEIGHT: f64 = 0.90;

/// Added when both visibility and cloud categories agree
pub const DEFAULT_CATEGORY_BONUS: f64 = 10.0;

/// Added to every comparison while a BECMG transition is underway
pub const DEFAULT_TRANSITION_BONUS: f64 = 15.0;

/// Weather score multiplier inside a TEMPO window
pub const DEFAULT_TEMPORARY_WEIGHT: f64 = 0.6;

/// Weather score multiplier inside a TEMPO window forecasting TS or heavy rain
pub const DEFAULT_SEVERE_TEMPORARY_WEIGHT: f64 = 0.8;

pub const MAX_SCORE: f64 = 100.0;

// =============================================================================
// Rating and Status Thresholds
// =============================================================================

pub const EXCELLENT_THRESHOLD: f64 = 90.0;
pub const GOOD_THRESHOLD: f64 = 75.0;
pub const MODERATE_THRESHOLD: f64 = 50.0;

pub const VERIFIED_THRESHOLD: f64 = 75.0;
pub const PARTIAL_STATUS_THRESHOLD: f64 = 50.0;

// =============================================================================
// Aggregation
// =============================================================================

/// Scores below this count towards a failure streak
pub const FAILURE_STREAK_BELOW: f64 = 50.0;

/// First-to-last score change needed before a trend is reported
pub const DEFAULT_TREND_THRESHOLD: f64 = 0.0;

// =============================================================================
// Logging
// =============================================================================

pub const LOG_LEVEL_INFO: &str = "info";
pub const LOG_LEVEL_DEBUG: &str = "debug";
pub const LOG_LEVEL_WARN: &str = "warn";

// =============================================================================
// Built-in Station Table
// =============================================================================

/// ICAO code, name and flight information region of the built-in stations
pub const BUILTIN_STATIONS: &[(&str, &str, &str)] = &[
    ("VIDP", "Delhi (IGI Airport)", "Delhi FIR"),
    ("VABB", "Mumbai (CSIA)", "Mumbai FIR"),
    ("VECC", "Kolkata (NSCBI Airport)", "Kolkata FIR"),
    ("VOMM", "Chennai (Chennai Airport)", "Chennai FIR"),
    ("VEPT", "Patna", "Kolkata FIR"),
    ("VEGY", "Gaya", "Kolkata FIR"),
];
