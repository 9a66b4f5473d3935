use crate::application::handlers::EngineHandler;
use crate::application::store::PlayerStore;
use crate::cli_handlers::CliCommand;
use crate::config::PlayerConfig;
use crate::core::events::PlayerAction;
use crate::core::models::Episode;
use crate::modules::playlist::json_loader::JsonPlaylistLoader;
use crate::modules::ui::command_parser::{parse_command, Command, HELP};
use crate::modules::ui::terminal::renderer::{status_line, TerminalRenderer};
use anyhow::{Context, Result, bail};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::info;

pub struct RunCommand {
    pub playlist: Option<PathBuf>,
    pub index: usize,
    pub script: Option<PathBuf>,
    pub config: PlayerConfig,
}

impl CliCommand for RunCommand {
    fn execute(self: Box<Self>) -> Result<()> {
        let RunCommand {
            playlist,
            index,
            script,
            config,
        } = *self;

        let playlist_path = playlist.or(config.default_playlist);
        let library = match &playlist_path {
            Some(path) => JsonPlaylistLoader::new(path).load()?,
            None => Vec::new(),
        };
        info!(episodes = library.len(), "starting player session");

        let store = PlayerStore::new();
        if config.start_shuffled {
            store.toggle_shuffle();
        }
        if config.start_looping {
            store.toggle_looping();
        }
        store.subscribe(Box::new(TerminalRenderer::new()));

        let mut session = Session::new(store, library, io::stdout());
        if !session.library().is_empty() {
            session.execute(Command::Queue(index))?;
        } else {
            session.print("No playlist loaded; type 'help' for commands")?;
        }

        match script {
            Some(path) => {
                let file = File::open(&path)
                    .with_context(|| format!("Could not open script {}", path.display()))?;
                session.run(BufReader::new(file))
            }
            None => session.run(io::stdin().lock()),
        }
    }
}

/// Whether the session keeps reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive driver around one player store.
///
/// State changes reach the screen through whatever observers are subscribed to
/// the store; `out` only carries replies to the user (help, status, errors).
pub struct Session<W: Write> {
    store: PlayerStore,
    engine: EngineHandler,
    library: Vec<Episode>,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(store: PlayerStore, library: Vec<Episode>, out: W) -> Self {
        Self {
            engine: EngineHandler::new(store.clone()),
            store,
            library,
            out,
        }
    }

    pub fn library(&self) -> &[Episode] {
        &self.library
    }

    pub fn store(&self) -> &PlayerStore {
        &self.store
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn print(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", message)?;
        Ok(())
    }

    /// Read commands until `quit` or end of input. Bad lines are reported and skipped.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        for line in input.lines() {
            let line = line?;

            let command = match parse_command(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    self.print(&format!("Error: {}", e))?;
                    continue;
                }
            };

            match self.execute(command) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => self.print(&format!("Error: {}", e))?,
            }
        }

        info!("player session finished");
        Ok(())
    }

    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        let action = match command {
            Command::Play(n) => PlayerAction::Play {
                episode: self.episode_at(n)?.clone(),
            },
            Command::Queue(n) => {
                self.episode_at(n)?;
                PlayerAction::PlayList {
                    list: self.library.clone(),
                    index: n - 1,
                }
            }
            Command::Next => PlayerAction::PlayNext,
            Command::Previous => PlayerAction::PlayPrevious,
            Command::TogglePlay => PlayerAction::TogglePlay,
            Command::ToggleLooping => PlayerAction::ToggleLooping,
            Command::ToggleShuffle => PlayerAction::ToggleShuffle,
            Command::SetPlaying(playing) => PlayerAction::SetPlaying { playing },
            Command::Clear => PlayerAction::Clear,
            Command::Engine(event) => {
                self.engine.handle(event);
                return Ok(Flow::Continue);
            }
            Command::Status => {
                let line = status_line(&self.store.snapshot());
                self.print(&line)?;
                return Ok(Flow::Continue);
            }
            Command::Help => {
                self.print(HELP)?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
        };

        let name = action.name();
        if !self.store.dispatch(action) {
            self.print(&format!("({} left the player unchanged)", name))?;
        }

        Ok(Flow::Continue)
    }

    /// Look up a 1-based position in the loaded playlist
    fn episode_at(&self, n: usize) -> Result<&Episode> {
        if self.library.is_empty() {
            bail!("No playlist loaded");
        }

        match n.checked_sub(1).and_then(|i| self.library.get(i)) {
            Some(episode) => Ok(episode),
            None => bail!(
                "No episode {} (playlist has {})",
                n,
                self.library.len()
            ),
        }
    }
}
