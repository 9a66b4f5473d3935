use crate::application::state::PlayerState;
use crate::core::models::Episode;

/// Every mutation the player store accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerAction {
    /// Replace the playlist with a single episode and start playing it
    Play { episode: Episode },

    /// Replace the playlist and start playing at `index` (not validated)
    PlayList { list: Vec<Episode>, index: usize },

    /// Move to the next episode (random when shuffling)
    PlayNext,

    /// Move to the previous episode
    PlayPrevious,

    /// Flip the playing flag
    TogglePlay,

    /// Flip the looping flag
    ToggleLooping,

    /// Flip the shuffle flag
    ToggleShuffle,

    /// Set the playing flag explicitly
    SetPlaying { playing: bool },

    /// Empty the playlist, keeping the flags
    Clear,

    /// The engine finished the current episode: stay when looping, otherwise
    /// move on when there is a next episode, otherwise clear
    EpisodeEnded,
}

impl PlayerAction {
    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            PlayerAction::Play { .. } => "play",
            PlayerAction::PlayList { .. } => "play_list",
            PlayerAction::PlayNext => "play_next",
            PlayerAction::PlayPrevious => "play_previous",
            PlayerAction::TogglePlay => "toggle_play",
            PlayerAction::ToggleLooping => "toggle_looping",
            PlayerAction::ToggleShuffle => "toggle_shuffle",
            PlayerAction::SetPlaying { .. } => "set_playing_state",
            PlayerAction::Clear => "clear_player_state",
            PlayerAction::EpisodeEnded => "episode_ended",
        }
    }
}

/// Callbacks reported by the audio engine that renders the current episode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// Audio started or resumed
    Started,

    /// Audio paused by the engine or the user
    Paused,

    /// Current episode reached its end
    Ended,
}

/// Type alias for snapshot sender
pub type StateSender = crossbeam_channel::Sender<PlayerState>;

/// Type alias for snapshot receiver
pub type StateReceiver = crossbeam_channel::Receiver<PlayerState>;
