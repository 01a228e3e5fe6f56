use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use hotel_reservation::console::Console;
use hotel_reservation::domain::registry::ReservationRegistry;
use hotel_reservation::domain::report::write_reservation_report_to_file;
use hotel_reservation::error::Result;
use hotel_reservation::{generate_registry, logger};

/// Interactive hotel room reservation console.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON file with the hotel's rooms (defaults to rooms 101, 102 and 103).
    #[arg(short, long, value_name = "FILE")]
    rooms: Option<PathBuf>,

    /// Write a CSV report of all reservations to this file on exit.
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<()> {
    let registry = match &cli.rooms {
        Some(path) => {
            log::info!("Loading rooms from '{}'...", path.display());
            generate_registry(path)?
        }
        None => ReservationRegistry::with_default_rooms()?,
    };

    let stdin = io::stdin();
    Console::new(&registry, stdin.lock(), io::stdout()).run()?;

    registry.log_summary();
    if let Some(path) = &cli.report {
        write_reservation_report_to_file(&registry, path)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    logger::init();
    log::info!("Starting reservation console.");

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
