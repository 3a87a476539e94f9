//! On-disk state: TOML configuration and the JSON inbox of captured items.

mod config;
pub mod inbox;

pub use config::{Config, LoggingConfig, OutputConfig};
pub use inbox::Inbox;

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns the data directory, creating it if needed.
///
/// `BRAINFLOW_DATA_DIR` overrides the location outright. Otherwise this is
/// `~/.config/brainflow[-dev]/`, with the `-dev` suffix selected by
/// `BRAINFLOW_ENV=dev`.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("BRAINFLOW_DATA_DIR") {
        Some(custom) if !custom.is_empty() => PathBuf::from(custom),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("BRAINFLOW_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("brainflow-dev")
            } else {
                base_dir.join("brainflow")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| StorageError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
