use clap::Parser;
use std::process;
use taf_verifier::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    if let Err(error) = commands::run(args) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("TAF Verifier - Aerodrome Forecast Verification");
    println!("==============================================");
    println!();
    println!("Decode METAR/TAF bulletins and score each TAF against the observations");
    println!("made during its validity.");
    println!();
    println!("USAGE:");
    println!("    taf-verifier <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    decode      Decode a METAR or TAF bulletin");
    println!("    verify      Verify TAFs against METAR observations");
    println!("    stations    Look up stations in the registry");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <FILE>    JSON configuration file");
    println!("    -v, --verbose          Enable debug logging");
    println!("    -q, --quiet            Only show warnings and errors");
    println!("    -h, --help             Show help information");
    println!("    -V, --version          Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Decode a TAF bulletin:");
    println!("    taf-verifier decode taf bulletins/taf.txt");
    println!();
    println!("    # Verify forecasts and print JSON:");
    println!("    taf-verifier verify --taf taf.txt --metar metar.txt --format json");
    println!();
    println!("    # Look up stations:");
    println!("    taf-verifier stations VECC VIDP");
    println!();
    println!("For detailed help on any command, use:");
    println!("    taf-verifier <COMMAND> --help");
}
