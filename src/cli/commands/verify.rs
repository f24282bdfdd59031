//! Verify command implementation
//!
//! Decodes a TAF and a METAR bulletin, verifies every observation against
//! the forecasts and prints the results followed by the aggregate summary.

use super::shared::{
    colored_score, colored_status, load_registry, or_dash, print_json, read_reports,
};
use crate::app::models::{ParameterComparison, VerificationResult};
use crate::app::services::aggregation::{AggregateSummary, group_by_station, summarize_with};
use crate::app::services::bulletin::ReportKind;
use crate::app::services::metar_decoder::decode_metar;
use crate::app::services::taf_decoder::decode_taf;
use crate::app::services::verification::Verifier;
use crate::cli::args::{OutputFormat, VerifyArgs};
use crate::config::Config;
use anyhow::Result;
use colored::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{info, warn};

/// JSON document printed by the verify command
#[derive(Debug, Serialize)]
struct VerifyReport<'a> {
    results: &'a [VerificationResult],
    summary: AggregateSummary,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    stations: BTreeMap<String, AggregateSummary>,
}

/// Verify command runner
pub fn run_verify(args: &VerifyArgs, config: &Config) -> Result<()> {
    let start_time = Instant::now();

    let forecasts: Vec<_> = read_reports(&args.taf_file, ReportKind::Taf)?
        .iter()
        .filter_map(|raw| decode_taf(raw))
        .collect();
    let observations: Vec<_> = read_reports(&args.metar_file, ReportKind::Metar)?
        .iter()
        .filter_map(|raw| decode_metar(raw))
        .collect();

    if forecasts.is_empty() {
        anyhow::bail!("No TAF in {} could be decoded", args.taf_file.display());
    }
    info!(
        "Verifying {} observations against {} forecasts",
        observations.len(),
        forecasts.len()
    );

    let verifier = Verifier::new(config.verification.clone(), load_registry(config)?);
    let results = verifier.verify_all(&observations, &forecasts);

    let threshold = config.verification.trend_threshold;
    let summary = summarize_with(&results, threshold);
    let stations: BTreeMap<String, AggregateSummary> = if args.by_station {
        group_by_station(&results)
            .into_iter()
            .map(|(code, group)| {
                let owned: Vec<VerificationResult> = group.into_iter().cloned().collect();
                (code, summarize_with(&owned, threshold))
            })
            .collect()
    } else {
        BTreeMap::new()
    };

    if summary.unverifiable > 0 {
        warn!(
            "{} observations could not be verified",
            summary.unverifiable
        );
    }

    match args.output_format {
        OutputFormat::Json => print_json(&VerifyReport {
            results: &results,
            summary,
            stations,
        })?,
        OutputFormat::Text => {
            results.iter().for_each(print_result);
            print_summary("Verification Summary", &summary);
            for (code, station_summary) in &stations {
                print_summary(&format!("Station {}", code), station_summary);
            }
        }
    }

    info!("Verification completed in {:.2?}", start_time.elapsed());
    Ok(())
}

fn print_result(result: &VerificationResult) {
    println!(
        "{} {} {}  {}  score {}",
        or_dash(result.observation.station.as_deref()).bright_white().bold(),
        or_dash(result.observation.time),
        result.station.name.bright_black(),
        colored_status(result.status),
        colored_score(result.score)
    );

    if let Some(forecast) = &result.forecast {
        let segment = result
            .active_segment
            .as_ref()
            .map(|a| a.kind.label())
            .unwrap_or_default();
        println!(
            "  TAF #{} issued {} lead {} h  [{}]",
            forecast.index,
            or_dash(forecast.issue_time),
            or_dash(result.lead_time_hours.map(|h| format!("{:.1}", h))),
            segment.bright_blue()
        );
    }

    if let Some(comparisons) = &result.comparisons {
        print_comparison("Wind", &comparisons.wind);
        print_comparison("Visibility", &comparisons.visibility);
        print_comparison("Weather", &comparisons.weather);
        print_comparison("Cloud", &comparisons.cloud);
    }

    for anomaly in &result.anomalies {
        println!(
            "  {} [{:?}] {}",
            "!".bright_red().bold(),
            anomaly.severity,
            anomaly.message
        );
    }
    println!();
}

fn print_comparison(name: &str, comparison: &ParameterComparison) {
    println!(
        "  {:<11} {:>6}  {:?}  {}",
        name,
        format!("{:.1}", comparison.score),
        comparison.status,
        comparison.detail.bright_black()
    );
}

fn print_summary(title: &str, summary: &AggregateSummary) {
    println!("{}", title.bright_green().bold());
    println!(
        "  Scored:            {} ({} unverifiable)",
        summary.count.to_string().bright_white().bold(),
        summary.unverifiable
    );
    println!("  Mean score:        {}", colored_score(summary.mean_score));
    println!("  Verified:          {:.1}%", summary.verified_percentage());
    println!("  Trend:             {}", summary.trend);
    println!("  Consistency:       {:.1}", summary.consistency);
    println!("  Failure streak:    {}", summary.longest_failure_streak);

    let means = &summary.parameter_means;
    println!(
        "  Parameter means:   wind {} / vis {} / wx {} / cloud {}",
        or_dash(means.wind),
        or_dash(means.visibility),
        or_dash(means.weather),
        or_dash(means.cloud)
    );
    for bucket in &summary.lead_times {
        println!(
            "  Lead {:<7}        {} results, mean {:.1}",
            bucket.bucket.label(),
            bucket.count,
            bucket.mean_score
        );
    }
    if let Some(rmse) = summary.wind_speed_rmse {
        println!("  Wind speed RMSE:   {:.2} kt", rmse);
    }
    println!();
}
