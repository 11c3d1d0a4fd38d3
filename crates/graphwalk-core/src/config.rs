//! Configuration for graphwalk
//!
//! Looked up in order: an explicit `--config` path, then
//! `$GRAPHWALK_CONFIG_DIR/config.toml`, then `~/.config/graphwalk/config.toml`.
//! A missing file in either default location means built-in defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{Result, WalkError};

pub use types::{PathAlgorithm, PathConfig, TraversalConfig, WalkConfig};

const CONFIG_DIR: &str = "graphwalk";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "GRAPHWALK_CONFIG_DIR";

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl WalkConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: WalkConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WalkError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the commands cannot act on
    pub fn validate(&self) -> Result<()> {
        if self.traversal.max_visits == Some(0) {
            bail_invalid!("traversal.max_visits", 0);
        }
        let weight = self.path.default_weight;
        if !weight.is_finite() || weight < 0.0 {
            bail_invalid!("path.default_weight", weight);
        }
        Ok(())
    }

    /// Default location, honouring `GRAPHWALK_CONFIG_DIR`
    pub fn default_path() -> Option<PathBuf> {
        let dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => dirs::config_dir()?.join(CONFIG_DIR),
        };
        Some(dir.join(CONFIG_FILE))
    }

    /// Resolve the configuration for this run
    ///
    /// An explicit path must exist; the default location is optional.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, ConfigSource)> {
        if let Some(path) = explicit {
            let config = Self::load(path)?;
            return Ok((config, ConfigSource::File(path.to_path_buf())));
        }

        match Self::default_path() {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "config_discovered");
                let config = Self::load(&path)?;
                Ok((config, ConfigSource::File(path)))
            }
            _ => Ok((Self::default(), ConfigSource::Defaults)),
        }
    }
}
