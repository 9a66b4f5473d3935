use crate::core::events::EngineEvent;
use anyhow::{bail, Context, Result};

/// One line typed into the `run` prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play a single episode from the loaded playlist (1-based)
    Play(usize),
    /// Queue the whole loaded playlist starting at an episode (1-based)
    Queue(usize),
    Next,
    Previous,
    TogglePlay,
    ToggleLooping,
    ToggleShuffle,
    SetPlaying(bool),
    Engine(EngineEvent),
    Clear,
    Status,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  play N          play episode N on its own
  queue N         queue the loaded playlist, starting at episode N
  next | n        next episode (random when shuffling)
  prev | b        previous episode
  toggle | p      toggle play/pause
  loop            toggle looping
  shuffle         toggle shuffle
  playing on|off  set the playing flag
  started         engine reports playback started
  paused          engine reports playback paused
  ended           engine reports the episode ended
  clear           clear the player
  status          show the current state
  help            show this help
  quit | q        exit";

/// Parse a line. Blank lines and `#` comments give `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut parts = line.split_whitespace();
    let word = parts.next().unwrap_or_default().to_lowercase();
    let arg = parts.next();

    if let Some(extra) = parts.next() {
        bail!("Unexpected argument '{}'", extra);
    }

    let command = match (word.as_str(), arg) {
        ("play", Some(n)) => Command::Play(parse_position(n)?),
        ("queue", Some(n)) => Command::Queue(parse_position(n)?),
        ("queue", None) => Command::Queue(1),
        ("next" | "n", None) => Command::Next,
        ("prev" | "previous" | "b", None) => Command::Previous,
        ("toggle" | "p", None) => Command::TogglePlay,
        ("loop", None) => Command::ToggleLooping,
        ("shuffle", None) => Command::ToggleShuffle,
        ("playing", Some(flag)) => Command::SetPlaying(parse_flag(flag)?),
        ("started", None) => Command::Engine(EngineEvent::Started),
        ("paused", None) => Command::Engine(EngineEvent::Paused),
        ("ended", None) => Command::Engine(EngineEvent::Ended),
        ("clear", None) => Command::Clear,
        ("status" | "s", None) => Command::Status,
        ("help" | "?", None) => Command::Help,
        ("quit" | "q" | "exit", None) => Command::Quit,
        ("play" | "playing", None) => bail!("'{}' needs an argument", word),
        (_, Some(extra)) if is_known(&word) => bail!("Unexpected argument '{}'", extra),
        _ => bail!("Unknown command '{}' (type 'help')", word),
    };

    Ok(Some(command))
}

fn is_known(word: &str) -> bool {
    matches!(
        word,
        "next" | "n" | "prev" | "previous" | "b" | "toggle" | "p" | "loop" | "shuffle"
            | "started" | "paused" | "ended" | "clear" | "status" | "s" | "help" | "?"
            | "quit" | "q" | "exit"
    )
}

/// 1-based position as typed by the user
fn parse_position(raw: &str) -> Result<usize> {
    let n: usize = raw
        .parse()
        .with_context(|| format!("'{}' is not an episode number", raw))?;
    if n == 0 {
        bail!("Episode numbers start at 1");
    }
    Ok(n)
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => bail!("Expected on/off, got '{}'", raw),
    }
}
