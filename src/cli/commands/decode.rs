//! Decode command implementation
//!
//! Splits a bulletin into reports and prints each decoded report.

use super::shared::{join_or_dash, or_dash, print_json, read_reports};
use crate::app::models::{ForecastSegment, MetarReport, TafReport};
use crate::app::services::bulletin::ReportKind;
use crate::app::services::metar_decoder::decode_metar;
use crate::app::services::taf_decoder::decode_taf;
use crate::cli::args::{DecodeArgs, OutputFormat};
use anyhow::Result;
use colored::*;
use tracing::{info, warn};

/// Decode command runner
pub fn run_decode(args: &DecodeArgs) -> Result<()> {
    let kind = ReportKind::from(args.report_type);
    let reports = read_reports(&args.file, kind)?;

    match kind {
        ReportKind::Metar => {
            let decoded = decode_all(&reports, decode_metar);
            match args.output_format {
                OutputFormat::Json => print_json(&decoded)?,
                OutputFormat::Text => decoded.iter().for_each(print_metar),
            }
        }
        ReportKind::Taf => {
            let decoded = decode_all(&reports, decode_taf);
            match args.output_format {
                OutputFormat::Json => print_json(&decoded)?,
                OutputFormat::Text => decoded.iter().for_each(print_taf),
            }
        }
    }

    Ok(())
}

/// Decode every report, logging the ones without a station
fn decode_all<T>(reports: &[String], decode: impl Fn(&str) -> Option<T>) -> Vec<T> {
    let decoded: Vec<T> = reports
        .iter()
        .filter_map(|raw| {
            let report = decode(raw);
            if report.is_none() {
                warn!("Could not decode report: {}", raw);
            }
            report
        })
        .collect();

    info!("Decoded {} of {} reports", decoded.len(), reports.len());
    decoded
}

fn print_metar(report: &MetarReport) {
    println!(
        "{} {} {}",
        report.report_type.to_string().bright_cyan().bold(),
        or_dash(report.station.as_deref()).bright_white().bold(),
        or_dash(report.time)
    );

    if report.nil {
        println!("  {}", "NIL report".bright_black());
        println!();
        return;
    }

    println!("  Wind:        {}", or_dash(report.wind.as_ref()));
    if let Some((from, to)) = report.wind_variation {
        println!("  Variation:   {:03}V{:03}", from, to);
    }
    println!("  Visibility:  {}", or_dash(report.visibility));
    println!("  Weather:     {}", join_or_dash(&report.weather));
    println!("  Cloud:       {}", join_or_dash(&report.clouds));
    if !report.runway_visual_range.is_empty() {
        println!("  RVR:         {}", report.runway_visual_range.join(" "));
    }
    println!(
        "  Temp/Dew:    {} / {}",
        or_dash(report.temperature),
        or_dash(report.dewpoint)
    );
    println!("  QNH:         {}", or_dash(report.qnh.map(|q| format!("{} hPa", q))));
    if !report.supplementary.is_empty() {
        println!(
            "  Remarks:     {}",
            report.supplementary.join(" ").bright_black()
        );
    }
    println!();
}

fn print_taf(report: &TafReport) {
    let mut flags = Vec::new();
    if report.amendment {
        flags.push("AMD");
    }
    if report.correction {
        flags.push("COR");
    }
    if report.cancelled {
        flags.push("CNL");
    }
    if report.nil {
        flags.push("NIL");
    }

    println!(
        "{} {} issued {} valid {} {}",
        "TAF".bright_cyan().bold(),
        or_dash(report.station.as_deref()).bright_white().bold(),
        or_dash(report.issue_time),
        or_dash(report.validity),
        flags.join(" ").bright_yellow()
    );

    if let (Some(hours), Some(class)) = (report.validity_hours(), report.class()) {
        println!("  Validity:    {} h ({:?})", hours, class);
    }

    for segment in report.segments() {
        print_segment(segment);
    }
    println!();
}

fn print_segment(segment: &ForecastSegment) {
    println!("  {}", segment.kind.label().bright_blue().bold());
    if segment.wind.is_some() {
        println!("    Wind:        {}", or_dash(segment.wind.as_ref()));
    }
    if segment.visibility.is_some() {
        println!("    Visibility:  {}", or_dash(segment.visibility));
    }
    if !segment.weather.is_empty() {
        println!("    Weather:     {}", join_or_dash(&segment.weather));
    }
    if !segment.clouds.is_empty() {
        println!("    Cloud:       {}", join_or_dash(&segment.clouds));
    }
}
