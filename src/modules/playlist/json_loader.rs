use crate::core::models::Episode;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Accepts either a bare array or `{ "episodes": [...] }`
#[derive(Deserialize)]
#[serde(untagged)]
enum PlaylistFile {
    Bare(Vec<Episode>),
    Wrapped { episodes: Vec<Episode> },
}

pub struct JsonPlaylistLoader {
    file_path: PathBuf,
}

impl JsonPlaylistLoader {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn load(&self) -> Result<Vec<Episode>> {
        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Could not read playlist {}", self.file_path.display()))?;

        parse_playlist(&content)
            .with_context(|| format!("Invalid playlist {}", self.file_path.display()))
    }
}

pub fn parse_playlist(content: &str) -> Result<Vec<Episode>> {
    let file: PlaylistFile = serde_json::from_str(content)?;

    Ok(match file {
        PlaylistFile::Bare(episodes) => episodes,
        PlaylistFile::Wrapped { episodes } => episodes,
    })
}
