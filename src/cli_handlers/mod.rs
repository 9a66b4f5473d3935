mod config;
mod list;
mod run;

pub use config::ConfigCommand;
pub use list::ListCommand;
pub use run::{RunCommand, Session};

use crate::cli::Commands;
use crate::config::PlayerConfig;
use anyhow::Result;
use std::path::PathBuf;

/// Every CLI command implements this trait.
///
/// Commands own their arguments and are consumed on execution and run exactly once.
pub trait CliCommand {
    fn execute(self: Box<Self>) -> Result<()>;
}

/// Converts a parsed [`Commands`] variant into a boxed [`CliCommand`] ready to execute.
pub fn from_cli(cmd: Commands, config: PlayerConfig, config_path: PathBuf) -> Box<dyn CliCommand> {
    match cmd {
        Commands::List { playlist } => Box::new(ListCommand { playlist }),
        Commands::Run {
            playlist,
            index,
            script,
        } => Box::new(RunCommand {
            playlist,
            index,
            script,
            config,
        }),
        Commands::Config => Box::new(ConfigCommand {
            path: config_path,
            config,
        }),
    }
}
