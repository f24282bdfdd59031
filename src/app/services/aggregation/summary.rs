//! Summary statistics for a sequence of verification results

use crate::app::models::{
    LeadTimeBucket, ParameterComparison, VerificationResult, VerificationStatus,
};
use crate::constants::FAILURE_STREAK_BELOW;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Direction of the score between the first and last scored result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Improving,
    Degrading,
    Stable,
}

impl Trend {
    fn from_change(change: f64, threshold: f64) -> Self {
        if change > threshold {
            Trend::Improving
        } else if change < -threshold {
            Trend::Degrading
        } else {
            Trend::Stable
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Trend::Improving => "improving",
            Trend::Degrading => "degrading",
            Trend::Stable => "stable",
        };
        f.write_str(label)
    }
}

/// Mean score per parameter over non-missing comparisons
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterMeans {
    pub wind: Option<f64>,
    pub visibility: Option<f64>,
    pub weather: Option<f64>,
    pub cloud: Option<f64>,
}

/// Results falling in one lead-time bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketSummary {
    pub bucket: LeadTimeBucket,
    pub count: usize,
    pub mean_score: f64,
}

/// Aggregate statistics over an ordered sequence of results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateSummary {
    /// Number of scored results (Verified, Partial or Failed)
    pub count: usize,

    /// Results with no forecast or an unparsed observation
    pub unverifiable: usize,

    /// Mean over the `count` scored results; unverifiable results are not
    /// counted as zeros
    pub mean_score: f64,

    /// Share of the `count` scored results with status Verified, in `0..=1`;
    /// unverifiable results are left out of the denominator
    pub verified_fraction: f64,

    pub trend: Trend,

    /// `100 - (max - min)` over scored results
    pub consistency: f64,

    /// Longest run of consecutive scores below 50
    pub longest_failure_streak: usize,

    pub parameter_means: ParameterMeans,

    /// Non-empty lead-time buckets in ascending order
    pub lead_times: Vec<BucketSummary>,

    /// Root-mean-square error between forecast and observed wind speed (kt)
    pub wind_speed_rmse: Option<f64>,
}

impl AggregateSummary {
    pub(crate) fn from_results(results: &[VerificationResult], trend_threshold: f64) -> Self {
        let scored: Vec<&VerificationResult> = results.iter().filter(|r| r.is_scored()).collect();
        let scores: Vec<f64> = scored.iter().map(|r| r.score).collect();
        let unverifiable = results.len() - scored.len();

        debug!(
            "Summarizing {} results ({} unverifiable)",
            results.len(),
            unverifiable
        );

        let verified = scored
            .iter()
            .filter(|r| r.status == VerificationStatus::Verified)
            .count();

        let trend = match (scores.first(), scores.last()) {
            (Some(first), Some(last)) => Trend::from_change(last - first, trend_threshold),
            _ => Trend::Stable,
        };

        let consistency = match (
            scores.iter().copied().reduce(f64::min),
            scores.iter().copied().reduce(f64::max),
        ) {
            (Some(min), Some(max)) => round2(100.0 - (max - min)),
            _ => 100.0,
        };

        Self {
            count: scored.len(),
            unverifiable,
            mean_score: mean(&scores).map(round2).unwrap_or(0.0),
            verified_fraction: if scored.is_empty() {
                0.0
            } else {
                verified as f64 / scored.len() as f64
            },
            trend,
            consistency,
            longest_failure_streak: longest_failure_streak(&scores),
            parameter_means: parameter_means(&scored),
            lead_times: lead_time_breakdown(&scored),
            wind_speed_rmse: wind_speed_rmse(&scored),
        }
    }

    pub fn verified_percentage(&self) -> f64 {
        self.verified_fraction * 100.0
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

fn longest_failure_streak(scores: &[f64]) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for &score in scores {
        if score < FAILURE_STREAK_BELOW {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

fn parameter_mean<'a>(
    results: &[&'a VerificationResult],
    pick: impl Fn(&'a VerificationResult) -> Option<&'a ParameterComparison>,
) -> Option<f64> {
    let scores: Vec<f64> = results
        .iter()
        .filter_map(|&r| pick(r))
        .filter(|c| !c.is_missing())
        .map(|c| c.score)
        .collect();
    mean(&scores).map(round2)
}

fn parameter_means(results: &[&VerificationResult]) -> ParameterMeans {
    ParameterMeans {
        wind: parameter_mean(results, |r| r.comparisons.as_ref().map(|c| &c.wind)),
        visibility: parameter_mean(results, |r| r.comparisons.as_ref().map(|c| &c.visibility)),
        weather: parameter_mean(results, |r| r.comparisons.as_ref().map(|c| &c.weather)),
        cloud: parameter_mean(results, |r| r.comparisons.as_ref().map(|c| &c.cloud)),
    }
}

fn lead_time_breakdown(results: &[&VerificationResult]) -> Vec<BucketSummary> {
    LeadTimeBucket::ALL
        .iter()
        .filter_map(|&bucket| {
            let scores: Vec<f64> = results
                .iter()
                .filter(|r| r.lead_time_bucket == Some(bucket))
                .map(|r| r.score)
                .collect();
            mean(&scores).map(|mean_score| BucketSummary {
                bucket,
                count: scores.len(),
                mean_score: round2(mean_score),
            })
        })
        .collect()
}

fn wind_speed_rmse(results: &[&VerificationResult]) -> Option<f64> {
    let squared: Vec<f64> = results
        .iter()
        .filter_map(|r| r.comparisons.as_ref()?.wind.values)
        .map(|(forecast, observed)| (forecast - observed).powi(2))
        .collect();
    mean(&squared).map(|m| round2(m.sqrt()))
}
