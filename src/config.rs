//! Configuration file support
//!
//! Loads optional settings from `check-descriptions.toml` in the working
//! directory, or from an explicit `--config` path.
//!
//! # Configuration Format
//!
//! ```toml
//! # check-descriptions.toml
//! posts_dir = "_posts"
//! extension = "md"
//!
//! [thresholds]
//! min_length = 80
//!
//! [placeholders]
//! extra = ["^TODO", "^Lorem ipsum"]
//! ```
//!
//! Command-line flags override anything set here.

use crate::models::DEFAULT_MIN_LENGTH;
use crate::scanner::DEFAULT_EXTENSION;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "check-descriptions.toml";

/// Default posts directory, relative to the working directory
pub const DEFAULT_POSTS_DIR: &str = "_posts";

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub posts_dir: PathBuf,
    pub extension: String,
    pub thresholds: ThresholdConfig,
    pub placeholders: PlaceholderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            posts_dir: PathBuf::from(DEFAULT_POSTS_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
            thresholds: ThresholdConfig::default(),
            placeholders: PlaceholderConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ThresholdConfig {
    pub min_length: usize,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

/// Placeholder patterns added after the built-in set
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PlaceholderConfig {
    pub extra: Vec<String>,
}

/// Parse a config file
fn load_toml_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Load configuration.
///
/// An explicit path must exist and parse. Otherwise `check-descriptions.toml`
/// in `cwd` is used when present; a broken implicit file is logged and
/// ignored.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<Config> {
    if let Some(path) = explicit {
        let config = load_toml_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?;
        debug!("Loaded config from {}", path.display());
        return Ok(config);
    }

    let path = cwd.join(CONFIG_FILE_NAME);
    if !path.exists() {
        debug!("No config file found, using defaults");
        return Ok(Config::default());
    }

    match load_toml_config(&path) {
        Ok(config) => {
            debug!("Loaded config from {}", path.display());
            Ok(config)
        }
        Err(e) => {
            warn!("Failed to load {}: {}", path.display(), e);
            Ok(Config::default())
        }
    }
}
