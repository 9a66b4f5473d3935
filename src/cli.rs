use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::APP_NAME;

#[derive(Parser)]
#[command(name = APP_NAME)]
#[command(about = "Drive a shared podcast player state from the terminal", long_about = None)]
pub struct Cli {
    /// Config file (defaults to <config dir>/episode-player/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the episodes in a playlist file
    List {
        /// Path to a JSON playlist
        playlist: PathBuf,
    },

    /// Start an interactive player session
    Run {
        /// Path to a JSON playlist (falls back to the configured default)
        playlist: Option<PathBuf>,

        /// Episode to start from (1-based)
        #[arg(short, long, default_value_t = 1)]
        index: usize,

        /// Read commands from this file instead of stdin
        #[arg(short, long)]
        script: Option<PathBuf>,
    },

    /// Show the configuration file location and effective settings
    Config,
}
