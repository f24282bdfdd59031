//! Shared components for CLI commands
//!
//! Logging setup, configuration and registry loading, bulletin reading, and
//! the colored formatting used by more than one command.

use crate::app::models::{Rating, VerificationStatus};
use crate::app::services::bulletin::{ReportKind, split_bulletin};
use crate::app::services::station_registry::StationRegistry;
use crate::cli::args::Args;
use crate::config::Config;
use anyhow::{Context, Result};
use colored::*;
use std::path::Path;
use tracing::{debug, info};

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("taf_verifier={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load the configuration file if one was given, otherwise the defaults
pub fn load_config(args: &Args) -> Result<Config> {
    match &args.config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => debug!("No config file given, using defaults"),
    }

    Config::load_or_default(args.config_file.as_deref()).context("Failed to load configuration")
}

/// Build the station registry, merging the configured station file if any
pub fn load_registry(config: &Config) -> Result<StationRegistry> {
    match &config.stations_file {
        Some(path) => StationRegistry::load_with_file(path)
            .with_context(|| format!("Failed to load station file {}", path.display())),
        None => Ok(StationRegistry::builtin()),
    }
}

/// Read a bulletin file and split it into report strings
pub fn read_reports(path: &Path, kind: ReportKind) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} file {}", kind, path.display()))?;

    let reports = split_bulletin(&text, kind);
    if reports.is_empty() {
        anyhow::bail!("No {} reports found in {}", kind, path.display());
    }

    info!("Read {} {} reports from {}", reports.len(), kind, path.display());
    Ok(reports)
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

/// Verification status colored by outcome
pub fn colored_status(status: VerificationStatus) -> ColoredString {
    let label = status.to_string();
    match status {
        VerificationStatus::Verified => label.bright_green().bold(),
        VerificationStatus::Partial => label.bright_yellow().bold(),
        VerificationStatus::Failed => label.bright_red().bold(),
        VerificationStatus::NoValidForecast | VerificationStatus::Unparsed => label.bright_black(),
    }
}

/// Composite score colored by rating
pub fn colored_score(score: f64) -> ColoredString {
    let text = format!("{:.1}", score);
    match Rating::from_score(score) {
        Rating::Excellent => text.bright_green().bold(),
        Rating::Good => text.green(),
        Rating::Moderate => text.yellow(),
        Rating::Poor => text.red(),
    }
}

/// Placeholder for absent optional values
pub fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Join displayable items with spaces, or a dash when there are none
pub fn join_or_dash<T: ToString>(items: &[T]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
