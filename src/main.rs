use anyhow::Result;
use clap::Parser;
use episode_player::cli::Cli;
use episode_player::cli_handlers::from_cli;
use episode_player::config::PlayerConfig;
use episode_player::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => PlayerConfig::default_path()?,
    };
    let config = PlayerConfig::load_from(&config_path)?;

    logging::init(config.log_filter.as_deref());
    tracing::debug!(path = %config_path.display(), "configuration loaded");

    from_cli(cli.command, config, config_path).execute()
}
