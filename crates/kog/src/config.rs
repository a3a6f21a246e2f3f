//! Configuration module
//!
//! Loads `kog.toml`. Every field has a default, so an empty or missing file is
//! a valid configuration.

use std::path::{Path, PathBuf};

use anyhow::Context;
use kog_decode::FormLimits;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "kog.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KogConfig {
    /// Limits for the form body parser
    pub form: FormLimits,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

impl KogConfig {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: KogConfig = toml::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Load `explicit` if given, else `kog.toml` from `dir` when present, else defaults.
    ///
    /// An explicit path that does not exist is an error; a missing `kog.toml`
    /// in `dir` is not.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate: PathBuf = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            debug!("Using config at {:?}", candidate);
            return Self::load(&candidate);
        }
        Ok(Self::default())
    }
}
