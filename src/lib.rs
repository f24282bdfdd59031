//! TAF Verifier Library
//!
//! A Rust library for decoding aviation weather reports and verifying
//! Terminal Aerodrome Forecasts (TAF) against the observations (METAR/SPECI)
//! that followed them.
//!
//! This library provides tools for:
//! - Decoding METAR/SPECI and TAF reports into typed structures
//! - Resolving which TAF change groups are in force at an observation time
//! - Scoring wind, visibility, cloud and weather against ICAO-style tolerances
//! - Aggregating verification results into trend and consistency statistics
//! - Splitting archived bulletins into individual reports
//!
//! Report times carry only day, hour and minute. Month boundaries are
//! handled with a synthetic 30-day month, so no calendar is needed.
//!
//! The four entry points [`decode_metar`], [`decode_taf`], [`verify`] and
//! [`summarize`] never fail: malformed input yields `None` or a result with a
//! terminal status.

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aggregation;
        pub mod bulletin;
        pub mod field_decoders;
        pub mod lexer;
        pub mod metar_decoder;
        pub mod station_registry;
        pub mod taf_decoder;
        pub mod verification;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{
    CloudLayer, MetarReport, Rating, ReportTime, StationInfo, TafReport, VerificationResult,
    VerificationStatus, Visibility, WeatherPhenomenon, Wind,
};
pub use app::services::aggregation::{AggregateSummary, Trend, summarize, summarize_with};
pub use app::services::bulletin::{ReportKind, split_bulletin};
pub use app::services::metar_decoder::decode_metar;
pub use app::services::station_registry::StationRegistry;
pub use app::services::taf_decoder::decode_taf;
pub use app::services::verification::{Verifier, verify, verify_all};
pub use config::{Config, VerificationConfig};

/// Result type alias for the TAF verifier
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the I/O and configuration boundaries
///
/// Decoding and verification never produce these.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Station registry error
    #[error("Station registry error: {message}")]
    StationRegistry { message: String },

    /// JSON parsing error
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid user input
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a station registry error
    pub fn station_registry(message: impl Into<String>) -> Self {
        Self::StationRegistry {
            message: message.into(),
        }
    }

    /// Create a JSON error with context
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json {
            message: "JSON processing failed".to_string(),
            source: error,
        }
    }
}
