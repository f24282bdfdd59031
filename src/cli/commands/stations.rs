//! Stations command implementation
//!
//! Prints registry lookups for the requested codes, or the whole registry.

use super::shared::{load_registry, print_json};
use crate::app::models::StationInfo;
use crate::cli::args::{OutputFormat, StationsArgs};
use crate::config::Config;
use anyhow::Result;
use colored::*;
use tracing::debug;

/// Stations command runner
pub fn run_stations(args: &StationsArgs, config: &Config) -> Result<()> {
    let registry = load_registry(config)?;
    debug!("Registry holds {} stations", registry.station_count());

    let stations: Vec<StationInfo> = if !args.codes.is_empty() {
        args.codes
            .iter()
            .map(|code| registry.station_info(code))
            .collect()
    } else if let Some(fir) = &args.fir {
        registry
            .find_stations_by_fir(fir)
            .into_iter()
            .cloned()
            .collect()
    } else {
        registry.stations().into_iter().cloned().collect()
    };

    match args.output_format {
        OutputFormat::Json => print_json(&stations)?,
        OutputFormat::Text => {
            println!(
                "{} ({} of {} known)",
                "Stations".bright_green().bold(),
                stations.iter().filter(|s| s.known).count(),
                registry.station_count()
            );
            for station in &stations {
                let code = if station.known {
                    station.code.bright_cyan().bold()
                } else {
                    station.code.bright_red().bold()
                };
                println!("  {}  {:<28} {}", code, station.name, station.fir.bright_black());
            }
        }
    }

    Ok(())
}
