use crate::utils::APP_NAME;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration read from `config.toml`
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Playlist used by `run` when none is given on the command line
    pub default_playlist: Option<PathBuf>,

    /// Turn shuffle on right after the player is created
    pub start_shuffled: bool,

    /// Turn looping on right after the player is created
    pub start_looping: bool,

    /// Tracing filter, e.g. "episode_player=debug"
    pub log_filter: Option<String>,
}

impl PlayerConfig {
    /// Default location: `<config dir>/episode-player/config.toml`
    pub fn default_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir().context("Could not find config directory")?;
        path.push(APP_NAME);
        path.push("config.toml");
        Ok(path)
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
