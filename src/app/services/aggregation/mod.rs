//! Aggregate statistics over verification results
//!
//! Results are expected in chronological order (typically one station at a
//! time, see [`group_by_station`]). Only scored results, those with status
//! Verified, Partial or Failed, contribute to the score statistics. The rest
//! are counted as unverifiable.
//!
//! ## Usage
//!
//! ```rust
//! use taf_verifier::{Trend, decode_metar, decode_taf, summarize, verify};
//!
//! let taf = decode_taf("TAF VABB 120500Z 1206/1306 27008KT CAVOK=").unwrap();
//! let metar = decode_metar("METAR VABB 121200Z 27010KT CAVOK 30/24 Q1010=").unwrap();
//!
//! let summary = summarize(&[verify(&metar, &[taf])]);
//! assert_eq!(summary.count, 1);
//! assert_eq!(summary.mean_score, 100.0);
//! assert_eq!(summary.trend, Trend::Stable);
//! ```

pub mod summary;

#[cfg(test)]
pub mod tests;

pub use summary::{AggregateSummary, BucketSummary, ParameterMeans, Trend};

use crate::app::models::VerificationResult;
use crate::constants::DEFAULT_TREND_THRESHOLD;
use std::collections::BTreeMap;

/// Summarize results with the default trend threshold
pub fn summarize(results: &[VerificationResult]) -> AggregateSummary {
    summarize_with(results, DEFAULT_TREND_THRESHOLD)
}

/// Summarize results, reporting a trend only when the first-to-last score
/// change exceeds `trend_threshold`
///
/// With the default threshold of zero any change counts.
pub fn summarize_with(results: &[VerificationResult], trend_threshold: f64) -> AggregateSummary {
    AggregateSummary::from_results(results, trend_threshold)
}

/// Group results by station code, keeping their relative order
///
/// Results without a station are grouped under an empty code.
pub fn group_by_station(
    results: &[VerificationResult],
) -> BTreeMap<String, Vec<&VerificationResult>> {
    let mut groups: BTreeMap<String, Vec<&VerificationResult>> = BTreeMap::new();
    for result in results {
        groups
            .entry(result.station.code.clone())
            .or_default()
            .push(result);
    }
    groups
}
