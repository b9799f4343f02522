//! Configuration loaded from an optional TOML file.
//!
//! The file is looked up at `$RHYTHMIC_CONFIG` if set, otherwise at
//! `rhythmic.toml` in the working directory. A missing file means defaults;
//! every key is optional:
//!
//! ```toml
//! log_dir = ".logs"
//! tick_rate_ms = 50
//! catalog_path = "songs.json"
//!
//! [storefront]
//! latest_hits = 6
//! top_count = 6
//! mood_count = 3
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::SectionLimits;

const CONFIG_ENV_VAR: &str = "RHYTHMIC_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "rhythmic.toml";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory for rotating log files
    pub log_dir: PathBuf,

    /// Input poll interval of the render loop
    pub tick_rate_ms: u64,

    /// JSON catalog to use instead of the built-in mock songs
    pub catalog_path: Option<PathBuf>,

    /// Sizes of the capped storefront sections
    pub storefront: SectionLimits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(".logs"),
            tick_rate_ms: 50,
            catalog_path: None,
            storefront: SectionLimits::default(),
        }
    }
}

impl Config {
    /// Load from `$RHYTHMIC_CONFIG` or `rhythmic.toml`, falling back to defaults.
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }
}
