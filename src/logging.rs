// File: ./src/logging.rs
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::env;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const DEBUG_ENV: &str = "LISTO_DEBUG";

fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating data dir {}", dir.display()))?;
    }
    Ok(dir.to_path_buf())
}

/// `Ok(None)` when the platform has no home directory to derive paths from.
fn data_dir() -> Result<Option<PathBuf>> {
    match ProjectDirs::from("com", "listo", "listo") {
        Some(proj) => ensure_dir(proj.data_dir()).map(Some),
        None => Ok(None),
    }
}

/// Falls back to the working directory: a panic report must not fail on a
/// missing data dir.
pub fn panic_log_path() -> PathBuf {
    data_dir()
        .ok()
        .flatten()
        .map(|d| d.join("listo_panic.log"))
        .unwrap_or_else(|| PathBuf::from("listo_panic.log"))
}

/// Installs a file subscriber when `LISTO_DEBUG` is set. The terminal belongs to
/// the UI, so nothing is ever written to stdout/stderr. `LISTO_DEBUG` holds the
/// filter directive; an empty value means `listo=debug`.
pub fn init() -> Result<()> {
    let Ok(directive) = env::var(DEBUG_ENV) else {
        return Ok(());
    };
    let directive = if directive.trim().is_empty() {
        "listo=debug".to_string()
    } else {
        directive
    };

    let path = data_dir()?
        .map(|d| d.join("listo.log"))
        .unwrap_or_else(|| PathBuf::from("listo.log"));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!(path = %path.display(), "logging started");
    Ok(())
}
