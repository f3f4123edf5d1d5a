//! Tracing subscriber setup.
//!
//! Every event goes to stdout in human-readable form and to
//! `<log_dir>/combined.log` as JSON lines. Errors are additionally written
//! to `<log_dir>/error.log`.

use anyhow::Context;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const COMBINED_LOG: &str = "combined.log";
pub const ERROR_LOG: &str = "error.log";

const DEFAULT_FILTER: &str = "info,reqwest=warn,hyper=warn";

/// Initialize the tracing subscriber with environment-based filtering.
pub fn init_tracing(log_dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;
    let combined = open_log(&log_dir.join(COMBINED_LOG))?;
    let errors = open_log(&log_dir.join(ERROR_LOG))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(fmt::layer().json().with_ansi(false).with_writer(combined))
        .with(
            fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(errors)
                .with_filter(LevelFilter::ERROR),
        )
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(())
}

fn open_log(path: &Path) -> anyhow::Result<Arc<File>> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    Ok(Arc::new(file))
}
