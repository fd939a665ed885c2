//! Layered settings: defaults, optional TOML file, then environment.
//!
//! Environment variables use the `MEDAL_COUNT_` prefix and `__` between
//! nested keys, e.g. `MEDAL_COUNT_SERVER__PORT=4000`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::ui::ThemeMode;

/// Config file read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "medal-count.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "MEDAL_COUNT";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub client: ClientSettings,
    pub ui: UiSettings,
}

/// Mock API server settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Static JSON file served by `/api/medals`.
    pub data_file: PathBuf,
    pub min_latency_ms: u64,
    pub max_latency_ms: u64,
    /// Probability in `[0, 1]` that a request fails with a 500.
    pub failure_rate: f64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            data_file: PathBuf::from("public/medals.json"),
            min_latency_ms: 200,
            max_latency_ms: 700,
            failure_rate: 0.05,
        }
    }
}

/// Fetch client settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    pub endpoint: String,
    pub timeout_ms: u64,
    /// Extra wait before each request.
    pub delay_ms: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:3000/api/medals".to_string(),
            timeout_ms: 10_000,
            delay_ms: 0,
        }
    }
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// `light`, `dark`, or `auto`.
    pub theme: String,
    /// Base for relative `--location` values.
    pub base_url: String,
    pub tick_ms: u64,
    pub log_file: Option<PathBuf>,
    /// Where the theme preference is saved. Defaults to the platform
    /// config directory.
    pub theme_file: Option<PathBuf>,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: "auto".to_string(),
            base_url: "http://localhost:3000/".to_string(),
            tick_ms: 100,
            log_file: None,
            theme_file: None,
        }
    }
}

impl UiSettings {
    /// Configured theme, or `None` for auto-detection.
    pub fn theme_mode(&self) -> Option<ThemeMode> {
        self.theme.parse().ok()
    }
}

impl Settings {
    /// Load settings from `path` (required) or the default config file
    /// (optional), then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("failed to load configuration")?
            .try_deserialize()
            .context("invalid configuration")
    }
}
