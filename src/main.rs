//! Measurement Journal - Main Entry Point
//!
//! Loads the journal file, opens the window and runs until it is closed.
//! The actual implementation is in the `meteolog` library.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use meteolog::{Journal, LoadReport, MeteoApp, Storage};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Desktop journal for temperature, humidity and pressure readings
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal file
    #[arg(default_value = "measurements.txt")]
    file: PathBuf,
}

fn main() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("meteolog=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let storage = Storage::new(&args.file);

    // An unreadable file is reported, not fatal; the journal starts empty.
    let report = match storage.load() {
        Ok(report) => report,
        Err(err) => {
            warn!("failed to read {}: {err}", args.file.display());
            LoadReport::default()
        }
    };
    for skipped in &report.skipped {
        warn!(
            line = skipped.number,
            text = %skipped.text,
            "line skipped: {}", skipped.error
        );
    }
    info!(
        count = report.measurements.len(),
        file = %args.file.display(),
        "journal loaded"
    );

    let journal = Journal::from_report(report, storage);
    MeteoApp::run(journal).map_err(|err| anyhow!("window error: {err}"))?;
    Ok(())
}
