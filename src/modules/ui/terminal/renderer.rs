use crate::application::state::PlayerState;
use crate::core::models::Episode;
use crate::core::traits::PlayerObserver;
use anyhow::Result;
use std::io::{self, Stdout, Write};

/// Line-oriented renderer: prints one status line per player snapshot
pub struct TerminalRenderer<W: Write + Send = Stdout> {
    out: W,
}

impl TerminalRenderer<Stdout> {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TerminalRenderer<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn print_message(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}", message)?;
        Ok(())
    }

    pub fn print_episode_list(&mut self, episodes: &[Episode]) -> Result<()> {
        if episodes.is_empty() {
            writeln!(self.out, "Playlist is empty")?;
            return Ok(());
        }

        let total = episodes.len();
        for (index, episode) in episodes.iter().enumerate() {
            writeln!(self.out, "[{}/{}] {}", index + 1, total, episode)?;
        }
        Ok(())
    }

    pub fn print_state(&mut self, state: &PlayerState) -> Result<()> {
        writeln!(self.out, "{}", status_line(state))?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write + Send> PlayerObserver for TerminalRenderer<W> {
    fn on_change(&mut self, state: &PlayerState) -> Result<()> {
        self.print_state(state)
    }
}

/// e.g. `▶ [2/3] Host - Title [10:00] | loop | shuffle | prev next`
pub fn status_line(state: &PlayerState) -> String {
    let icon = if state.is_playing { "▶" } else { "⏸" };

    let mut line = if state.episode_list.is_empty() {
        format!("{} nothing queued", icon)
    } else {
        let position = format!(
            "[{}/{}]",
            state.current_episode_index.saturating_add(1),
            state.episode_list.len()
        );
        match state.current_episode() {
            Some(episode) => format!("{} {} {}", icon, position, episode),
            None => format!("{} {} (no episode at this position)", icon, position),
        }
    };

    if state.is_looping {
        line.push_str(" | loop");
    }
    if state.is_shuffle {
        line.push_str(" | shuffle");
    }

    let nav = match (state.has_previous(), state.has_next()) {
        (true, true) => Some("prev next"),
        (true, false) => Some("prev"),
        (false, true) => Some("next"),
        (false, false) => None,
    };
    if let Some(nav) = nav {
        line.push_str(" | ");
        line.push_str(nav);
    }

    line
}
