//! Command-line argument definitions for the TAF verifier
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::services::bulletin::ReportKind;
use crate::constants::{LOG_LEVEL_DEBUG, LOG_LEVEL_INFO, LOG_LEVEL_WARN};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the TAF verifier
///
/// Decodes METAR and TAF bulletins and verifies forecasts against the
/// observations that followed them.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taf-verifier",
    version,
    about = "Decode METAR/TAF bulletins and verify aerodrome forecasts",
    long_about = "Decodes METAR/SPECI and TAF reports and scores each TAF against the \
                  observations made during its validity. Wind, visibility, cloud and weather \
                  are compared using ICAO-style tolerances and combined into a composite score."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to a JSON configuration file
    ///
    /// Overrides scoring weights, bonuses and the station table. Built-in
    /// defaults are used when not given.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        help = "Enable debug logging"
    )]
    pub verbose: bool,

    /// Only show warnings and errors
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except warnings and errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Decode every report in a METAR or TAF bulletin
    Decode(DecodeArgs),
    /// Verify TAFs against METAR observations
    Verify(VerifyArgs),
    /// Look up stations in the registry
    Stations(StationsArgs),
}

/// Arguments for the decode command
#[derive(Debug, Clone, Parser)]
pub struct DecodeArgs {
    /// Report type contained in the file
    #[arg(value_enum, help = "Report type contained in the file")]
    pub report_type: ReportType,

    /// Bulletin file to decode
    #[arg(value_name = "FILE", help = "Bulletin file to decode")]
    pub file: PathBuf,

    #[arg(
        long = "format",
        value_enum,
        default_value = "text",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the verify command
#[derive(Debug, Clone, Parser)]
pub struct VerifyArgs {
    /// TAF bulletin file
    #[arg(long = "taf", value_name = "FILE", help = "TAF bulletin file")]
    pub taf_file: PathBuf,

    /// METAR bulletin file
    #[arg(long = "metar", value_name = "FILE", help = "METAR bulletin file")]
    pub metar_file: PathBuf,

    #[arg(
        long = "format",
        value_enum,
        default_value = "text",
        help = "Output format"
    )]
    pub output_format: OutputFormat,

    /// Print one summary per station instead of a single overall summary
    #[arg(long = "by-station", help = "Summarize results per station")]
    pub by_station: bool,
}

/// Arguments for the stations command
#[derive(Debug, Clone, Parser)]
pub struct StationsArgs {
    /// ICAO codes to look up; lists every known station when empty
    #[arg(value_name = "CODE", help = "ICAO station codes to look up")]
    pub codes: Vec<String>,

    /// Only list stations in this FIR
    #[arg(long = "fir", value_name = "FIR", help = "Filter stations by FIR")]
    pub fir: Option<String>,

    #[arg(
        long = "format",
        value_enum,
        default_value = "text",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// Report type argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportType {
    Metar,
    Taf,
}

impl From<ReportType> for ReportKind {
    fn from(report_type: ReportType) -> Self {
        match report_type {
            ReportType::Metar => ReportKind::Metar,
            ReportType::Taf => ReportKind::Taf,
        }
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Text,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Determine the log level from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            LOG_LEVEL_WARN
        } else if self.verbose {
            LOG_LEVEL_DEBUG
        } else {
            LOG_LEVEL_INFO
        }
    }
}
