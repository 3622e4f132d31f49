mod config;
pub mod secrets;

pub use config::{ChatConfig, Config};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns `~/.config/ecohabit[-dev]/` based on ECOHABIT_ENV.
///
/// Set ECOHABIT_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("ECOHABIT_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("ecohabit-dev")
    } else {
        base_dir.join("ecohabit")
    };

    std::fs::create_dir_all(&dir).map_err(ConfigError::DataDir)?;
    Ok(dir)
}
