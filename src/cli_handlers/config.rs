use crate::cli_handlers::CliCommand;
use crate::config::PlayerConfig;
use crate::modules::ui::terminal::renderer::TerminalRenderer;
use anyhow::Result;
use std::path::PathBuf;

pub struct ConfigCommand {
    pub path: PathBuf,
    pub config: PlayerConfig,
}

impl CliCommand for ConfigCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let mut ui = TerminalRenderer::new();
        let origin = if self.path.exists() { "" } else { " (not created yet, using defaults)" };

        ui.print_message(&format!("# {}{}", self.path.display(), origin))?;
        ui.print_message(self.config.to_toml()?.trim_end())?;

        Ok(())
    }
}
