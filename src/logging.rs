use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Where log lines go.
pub enum LogTarget {
    /// One-shot CLI commands log to stderr.
    Stderr,
    /// The TUI owns the terminal, so it logs to a file instead.
    File,
}

fn filter() -> EnvFilter {
    // By default, only log from the toolbelt crates at info level
    // Users can override with RUST_LOG environment variable
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("toolbelt=info"))
}

/// Initialize the tracing subscriber for logging.
pub fn init(target: LogTarget) -> Result<()> {
    match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .without_time(),
            )
            .with(filter())
            .try_init()?,
        LogTarget::File => {
            let path = default_log_path();
            let file = File::options().create(true).append(true).open(&path)?;
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(false),
                )
                .with(filter())
                .try_init()?;
        }
    }
    Ok(())
}

/// Returns the log file path inside the user's data directory.
/// Falls back to `./toolbelt.log` when no data dir is found.
pub fn default_log_path() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let toolbelt_dir = data_dir.join("toolbelt");
        fs::create_dir_all(&toolbelt_dir).ok();
        toolbelt_dir.join("toolbelt.log")
    } else {
        PathBuf::from("toolbelt.log")
    }
}
