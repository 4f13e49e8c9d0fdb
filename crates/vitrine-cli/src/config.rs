//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`VITRINE_*`)
//! 3. Config file (`--config` path or the default location)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new products.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Category applied when `add` is called without `--category`.
    /// `None` falls back to the first built-in category.
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults { category: None },
            output: OutputConfig {
                no_color: false,
                format: "human".into(),
            },
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Self { category: None }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// The `config_file` parameter is the path the user passed via
    /// `--config` (or `None` to use the default location). A missing file
    /// at the default location is fine; a missing file the user explicitly
    /// asked for is an error.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder();

        match config_file {
            Some(path) => {
                builder = builder.add_source(config::File::from(path.as_path()));
            }
            None => {
                let path = Self::config_path();
                builder = builder
                    .add_source(config::File::from(path.as_path()).required(false));
            }
        }

        let cfg = builder
            .add_source(config::Environment::with_prefix("VITRINE").separator("__"))
            .build()?;

        Ok(cfg.try_deserialize()?)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.vitrine.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "vitrine", "vitrine")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".vitrine.toml"))
    }
}
