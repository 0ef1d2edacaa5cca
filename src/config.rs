//! Application configuration
//!
//! Defaults cover everything. A TOML file named by `ROSTER_CONFIG` may
//! override any subset of keys.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

pub const CONFIG_ENV_VAR: &str = "ROSTER_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub window_width: f32,
    pub window_height: f32,
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: String::from("Employee Roster"),
            window_width: 960.0,
            window_height: 640.0,
            log_filter: String::from("info"),
        }
    }
}

impl AppConfig {
    /// Load from the file named by `ROSTER_CONFIG`, or defaults if unset
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw).context("failed to parse TOML")?;
        if !(config.window_width > 0.0 && config.window_height > 0.0) {
            anyhow::bail!(
                "window size must be positive, got {}x{}",
                config.window_width,
                config.window_height
            );
        }
        Ok(config)
    }
}
