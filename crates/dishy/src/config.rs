//! CLI configuration: TOML file + `DISHY_`-prefixed env + flag overrides,
//! resolved into a `dishy_core::DishConfig`.

use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use dishy_core::DishConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── TOML config struct ──────────────────────────────────────────────

/// On-disk configuration. Everything is optional; unset values fall
/// back to the library defaults.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FileConfig {
    /// Dish endpoint as `host:port`.
    pub address: Option<String>,

    /// Connect and request timeout, in seconds.
    pub timeout: Option<u64>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("rs", "dishy", "dishy").map_or_else(
        || PathBuf::from("dishy.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the file + environment layers.
pub fn load_file_config() -> Result<FileConfig, CliError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(FileConfig::default()))
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("DISHY_"));

    Ok(figment.extract()?)
}

/// Resolve the effective `DishConfig`: flag > env > file > default.
pub fn resolve(global: &GlobalOpts) -> Result<DishConfig, CliError> {
    let file = load_file_config()?;

    let mut config = DishConfig::default();
    if let Some(address) = global.address.clone().or(file.address) {
        if address.trim().is_empty() {
            return Err(CliError::Validation {
                field: "address".into(),
                reason: "expected host:port".into(),
            });
        }
        config.address = address;
    }
    if let Some(secs) = global.timeout.or(file.timeout) {
        if secs == 0 {
            return Err(CliError::Validation {
                field: "timeout".into(),
                reason: "must be at least 1 second".into(),
            });
        }
        config.timeout = Duration::from_secs(secs);
    }

    Ok(config)
}
