//! # CLI Configuration
//!
//! Optional YAML file with defaults for the state path and the sender.
//! Command-line flags always win over the file.
//!
//! ```yaml
//! state: ./registry/exv-state.json
//! sender: ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use exv_core::Principal;

/// State file used when neither a flag nor the config names one.
pub const DEFAULT_STATE_PATH: &str = "exv-state.json";

/// Defaults loaded from the YAML config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Path of the registry state file.
    #[serde(default)]
    pub state: Option<PathBuf>,
    /// Sender used when a call has no `--sender` flag.
    #[serde(default)]
    pub sender: Option<Principal>,
}

impl CliConfig {
    /// Read and parse a config file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_yaml(&raw).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Parse config YAML.
    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }

    /// State path: flag, then config, then [`DEFAULT_STATE_PATH`].
    pub fn state_path(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.state.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_PATH))
    }

    /// Sender: flag, then config. There is no implicit sender.
    pub fn sender(&self, flag: Option<&Principal>) -> anyhow::Result<Principal> {
        flag.cloned()
            .or_else(|| self.sender.clone())
            .context("no sender: pass --sender or set `sender` in the config file")
    }
}
