//! Tracing setup.
//!
//! The terminal owns stdout while the UI runs, so log output goes to a file
//! in the data directory. The filter honours `RUST_LOG` and defaults to
//! `info`.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

const LOG_FILE_NAME: &str = "gewaesserkarte.log";

/// Path of the log file inside the data directory.
pub fn log_file_path() -> Result<PathBuf> {
    Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME))
}

/// Install the global subscriber. Call once, before the terminal is put into
/// raw mode.
pub fn initialize() -> Result<()> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
