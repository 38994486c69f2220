//! Folio configuration file handling

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use folio_app::AppSettings;
use folio_theme::{Customizations, ThemeOption};
use serde::{Deserialize, Serialize};

/// File name looked up when a directory is given
pub const CONFIG_FILE: &str = "folio.toml";

/// Top-level Folio configuration (folio.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub toast: ToastConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub customizations: Customizations,
    #[serde(default)]
    pub log: LogConfig,
}

/// Toast timing
#[derive(Debug, Deserialize, Serialize)]
pub struct ToastConfig {
    /// Visible lifetime of a toast in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
}

fn default_duration_ms() -> u64 {
    2000
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
        }
    }
}

/// Theme used before any device preference is known
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub initial: ThemeOption,
}

/// Logging
#[derive(Debug, Deserialize, Serialize)]
pub struct LogConfig {
    /// Filter used when `RUST_LOG` is not set
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl FolioConfig {
    /// Load configuration from a file or a directory containing folio.toml
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE)
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            anyhow::bail!(
                "No {} found at {}. Run `folio init` to create one.",
                CONFIG_FILE,
                config_path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    /// Load `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Settings for building the app
    pub fn app_settings(&self) -> AppSettings {
        AppSettings {
            toast_duration: Duration::from_millis(self.toast.duration_ms),
            initial_theme: self.theme.initial,
            customizations: self.customizations,
        }
    }
}
