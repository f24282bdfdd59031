//! Command implementations for the TAF verifier CLI
//!
//! Each subcommand lives in its own module:
//! - `decode`: decode a METAR or TAF bulletin
//! - `verify`: verify TAFs against METAR observations and summarize
//! - `stations`: station registry lookups

pub mod decode;
pub mod shared;
pub mod stations;
pub mod verify;

use crate::cli::args::{Args, Commands};
use anyhow::Result;
use tracing::debug;

/// Main command runner
///
/// Sets up logging and configuration, then dispatches to the subcommand.
pub fn run(args: Args) -> Result<()> {
    shared::setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    let config = shared::load_config(&args)?;

    match args.command {
        Some(Commands::Decode(decode_args)) => decode::run_decode(&decode_args),
        Some(Commands::Verify(verify_args)) => verify::run_verify(&verify_args, &config),
        Some(Commands::Stations(stations_args)) => stations::run_stations(&stations_args, &config),
        None => anyhow::bail!("No command given. Run with --help to see available commands."),
    }
}
