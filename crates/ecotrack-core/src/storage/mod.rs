mod config;
mod state_store;

pub use config::{Config, PlaceholderConfig, ReportConfig, TrackingConfig};
pub use state_store::StateStore;

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/ecotrack[-dev]/` based on ECOTRACK_ENV.
///
/// Set ECOTRACK_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("ECOTRACK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("ecotrack-dev")
    } else {
        base_dir.join("ecotrack")
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| StorageError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
