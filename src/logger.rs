use chrono::Local;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use std::fs;

// Relative to the working directory of the reservation console.
const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "reservations.log";

/// Sets up logging for the reservation console.
///
/// Bookings, rejections and cancellations are logged by the registry and its
/// rooms. Records go to stderr with colored levels and, when the file can be
/// opened, to `logs/reservations.log` without colors. `RUST_LOG` selects the
/// level (`debug` also shows availability queries), default `info`.
///
/// Call once from `main`, before the registry is built.
pub fn init() {
    if let Err(e) = fs::create_dir_all(LOG_DIR) {
        eprintln!("Failed to create log directory at '{}': {}", LOG_DIR, e);
    }
    let log_file_path = format!("{}/{}", LOG_DIR, LOG_FILE);

    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::BrightBlack);

    let console_config = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!("[{} {} {}] {}", timestamp(), colors.color(record.level()), record.target(), message))
        })
        .chain(std::io::stderr());

    let mut dispatch = Dispatch::new().level(level_from_env()).chain(console_config);

    // Console-only logging if the file cannot be opened.
    let file_attached = match fern::log_file(&log_file_path) {
        Ok(file) => {
            let file_config = Dispatch::new()
                .format(|out, message, record| out.finish(format_args!("[{} {} {}] {}", timestamp(), record.level(), record.target(), message)))
                .chain(file);
            dispatch = dispatch.chain(file_config);
            true
        }
        Err(e) => {
            eprintln!("Failed to open log file '{}': {}", log_file_path, e);
            false
        }
    };

    if let Err(e) = dispatch.apply() {
        eprintln!("Failed to apply logger configuration: {}", e);
        return;
    }

    if file_attached {
        log::info!("Logger initialized. Logging to stderr and '{}'.", log_file_path);
    } else {
        log::info!("Logger initialized. Logging to stderr only.");
    }
}

/// `RUST_LOG` as a level filter; unset or unparsable means `info`.
fn level_from_env() -> LevelFilter {
    std::env::var("RUST_LOG").ok().and_then(|level| level.parse().ok()).unwrap_or(LevelFilter::Info)
}

fn timestamp() -> impl std::fmt::Display {
    Local::now().format("%Y-%m-%d %H:%M:%S")
}
