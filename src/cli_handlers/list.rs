use crate::cli_handlers::CliCommand;
use crate::modules::playlist::json_loader::JsonPlaylistLoader;
use crate::modules::ui::terminal::renderer::TerminalRenderer;
use anyhow::Result;
use std::path::PathBuf;

pub struct ListCommand {
    pub playlist: PathBuf,
}

impl CliCommand for ListCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let episodes = JsonPlaylistLoader::new(self.playlist).load()?;
        let mut ui = TerminalRenderer::new();

        ui.print_episode_list(&episodes)?;

        Ok(())
    }
}
