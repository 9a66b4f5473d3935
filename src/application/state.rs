use crate::core::events::PlayerAction;
use crate::core::models::Episode;
use crate::core::traits::IndexPicker;

/// Snapshot of the shared player (single source of truth).
///
/// `current_episode_index` points into `episode_list` whenever the list is
/// non-empty. An empty list always carries index 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerState {
    pub episode_list: Vec<Episode>,
    pub current_episode_index: usize,
    pub is_playing: bool,
    pub is_looping: bool,
    pub is_shuffle: bool,
}

impl PlayerState {
    /// Shuffle mode always has a next episode, even for an empty list.
    pub fn has_next(&self) -> bool {
        self.is_shuffle
            || self
                .current_episode_index
                .checked_add(1)
                .is_some_and(|next| next < self.episode_list.len())
    }

    pub fn has_previous(&self) -> bool {
        self.current_episode_index > 0
    }

    /// The episode under the index, if the index is in range
    pub fn current_episode(&self) -> Option<&Episode> {
        self.episode_list.get(self.current_episode_index)
    }

    /// Apply an action and report whether the snapshot changed
    pub fn apply_action(&mut self, action: &PlayerAction, picker: &mut dyn IndexPicker) -> bool {
        let before = self.clone();

        match action {
            PlayerAction::Play { episode } => {
                self.episode_list = vec![episode.clone()];
                self.current_episode_index = 0;
                self.is_playing = true;
            }
            PlayerAction::PlayList { list, index } => {
                // Index is trusted; an out-of-range value is corrected by later navigation.
                self.episode_list = list.clone();
                self.current_episode_index = *index;
                self.is_playing = true;
            }
            PlayerAction::PlayNext => self.advance(picker),
            PlayerAction::EpisodeEnded => {
                // A looping engine replays the episode itself.
                if !self.is_looping {
                    if self.has_next() {
                        self.advance(picker);
                    } else {
                        self.episode_list.clear();
                        self.current_episode_index = 0;
                    }
                }
            }
            PlayerAction::PlayPrevious => {
                if self.has_previous() {
                    self.current_episode_index -= 1;
                }
            }
            PlayerAction::TogglePlay => {
                self.is_playing = !self.is_playing;
            }
            PlayerAction::ToggleLooping => {
                self.is_looping = !self.is_looping;
            }
            PlayerAction::ToggleShuffle => {
                self.is_shuffle = !self.is_shuffle;
            }
            PlayerAction::SetPlaying { playing } => {
                self.is_playing = *playing;
            }
            PlayerAction::Clear => {
                // Flags survive a clear.
                self.episode_list.clear();
                self.current_episode_index = 0;
            }
        }

        *self != before
    }

    fn advance(&mut self, picker: &mut dyn IndexPicker) {
        if self.is_shuffle {
            // May land on the current episode again.
            self.current_episode_index = picker.pick(self.episode_list.len());
        } else if self.has_next() {
            self.current_episode_index += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::playback::shuffle_picker::ScriptedPicker;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn episode(title: &str) -> Episode {
        Episode::new(
            title,
            "Host",
            format!("https://img/{title}.png"),
            600,
            format!("https://cdn/{title}.mp3"),
        )
    }

    fn list(titles: &[&str]) -> Vec<Episode> {
        titles.iter().map(|t| episode(t)).collect()
    }

    fn state_at(titles: &[&str], index: usize) -> PlayerState {
        PlayerState {
            episode_list: list(titles),
            current_episode_index: index,
            ..PlayerState::default()
        }
    }

    fn apply(state: &mut PlayerState, action: PlayerAction) -> bool {
        state.apply_action(&action, &mut ScriptedPicker::new(vec![]))
    }

    // ── Construction ──────────────────────────────────────────────────────────

    #[test]
    fn default_is_empty_and_idle() {
        let state = PlayerState::default();
        assert!(state.episode_list.is_empty());
        assert_eq!(state.current_episode_index, 0);
        assert!(!state.is_playing);
        assert!(!state.is_looping);
        assert!(!state.is_shuffle);
        assert!(!state.has_next());
        assert!(!state.has_previous());
        assert_eq!(state.current_episode(), None);
    }

    // ── play / play_list ──────────────────────────────────────────────────────

    #[test]
    fn play_replaces_list_with_singleton() {
        let mut state = state_at(&["a", "b", "c"], 2);
        state.is_looping = true;

        assert!(apply(&mut state, PlayerAction::Play { episode: episode("x") }));
        assert_eq!(state.episode_list, vec![episode("x")]);
        assert_eq!(state.current_episode_index, 0);
        assert!(state.is_playing);
        assert!(state.is_looping, "play must not touch looping");
    }

    #[test]
    fn play_list_sets_list_index_and_playing() {
        let mut state = PlayerState::default();
        let episodes = list(&["a", "b", "c"]);

        apply(
            &mut state,
            PlayerAction::PlayList { list: episodes.clone(), index: 1 },
        );
        assert_eq!(state.episode_list, episodes);
        assert_eq!(state.current_episode_index, 1);
        assert!(state.is_playing);
        assert!(state.has_next());
        assert!(state.has_previous());
        assert_eq!(state.current_episode(), Some(&episode("b")));
    }

    #[test]
    fn play_list_keeps_out_of_range_index() {
        let mut state = PlayerState::default();
        apply(
            &mut state,
            PlayerAction::PlayList { list: list(&["a", "b"]), index: 5 },
        );
        assert_eq!(state.current_episode_index, 5);
        assert_eq!(state.current_episode(), None);
        assert!(!state.has_next());
        assert!(state.has_previous());

        // Navigation walks it back into range one step at a time.
        apply(&mut state, PlayerAction::PlayPrevious);
        assert_eq!(state.current_episode_index, 4);
    }

    #[test]
    fn play_list_with_max_index_does_not_panic() {
        let mut state = PlayerState::default();
        apply(
            &mut state,
            PlayerAction::PlayList { list: list(&["a"]), index: usize::MAX },
        );
        assert!(!state.has_next());
        assert!(state.has_previous());

        assert!(!apply(&mut state, PlayerAction::PlayNext));
        assert_eq!(state.current_episode_index, usize::MAX);

        assert!(apply(&mut state, PlayerAction::EpisodeEnded));
        assert!(state.episode_list.is_empty());
        assert_eq!(state.current_episode_index, 0);
    }

    // ── play_next ─────────────────────────────────────────────────────────────

    #[test]
    fn next_sequential_advances_by_one() {
        let mut state = state_at(&["a", "b", "c"], 0);
        assert!(apply(&mut state, PlayerAction::PlayNext));
        assert_eq!(state.current_episode_index, 1);
    }

    #[test]
    fn next_sequential_at_end_is_noop() {
        let mut state = state_at(&["a", "b"], 1);
        state.is_playing = true;
        let before = state.clone();

        assert!(!state.has_next());
        assert!(!apply(&mut state, PlayerAction::PlayNext));
        assert_eq!(state, before);
    }

    #[test]
    fn next_shuffle_uses_picker() {
        let mut state = state_at(&["a", "b", "c"], 0);
        state.is_shuffle = true;

        let mut picker = ScriptedPicker::new(vec![2, 0]);
        state.apply_action(&PlayerAction::PlayNext, &mut picker);
        assert_eq!(state.current_episode_index, 2);
        state.apply_action(&PlayerAction::PlayNext, &mut picker);
        assert_eq!(state.current_episode_index, 0);
        assert_eq!(picker.requested_lengths(), &[3, 3]);
    }

    #[test]
    fn next_shuffle_can_repeat_current() {
        let mut state = state_at(&["a", "b"], 1);
        state.is_shuffle = true;

        let changed = state.apply_action(&PlayerAction::PlayNext, &mut ScriptedPicker::new(vec![1]));
        assert!(!changed);
        assert_eq!(state.current_episode_index, 1);
    }

    #[test]
    fn next_shuffle_on_empty_list_yields_zero() {
        let mut state = PlayerState {
            is_shuffle: true,
            ..PlayerState::default()
        };
        assert!(state.has_next(), "shuffle reports a next episode unconditionally");

        let mut picker = ScriptedPicker::new(vec![]);
        state.apply_action(&PlayerAction::PlayNext, &mut picker);
        assert_eq!(state.current_episode_index, 0);
        assert_eq!(picker.requested_lengths(), &[0]);
    }

    // ── episode_ended ─────────────────────────────────────────────────────────

    #[test]
    fn ended_advances_when_next_exists() {
        let mut state = state_at(&["a", "b"], 0);
        assert!(apply(&mut state, PlayerAction::EpisodeEnded));
        assert_eq!(state.current_episode_index, 1);
    }

    #[test]
    fn ended_on_last_episode_clears_list_and_keeps_flags() {
        let mut state = state_at(&["a", "b"], 1);
        state.is_playing = true;

        assert!(apply(&mut state, PlayerAction::EpisodeEnded));
        assert!(state.episode_list.is_empty());
        assert_eq!(state.current_episode_index, 0);
        assert!(state.is_playing);
    }

    #[test]
    fn ended_while_looping_is_noop() {
        let mut state = state_at(&["a", "b"], 1);
        state.is_looping = true;
        let before = state.clone();

        assert!(!apply(&mut state, PlayerAction::EpisodeEnded));
        assert_eq!(state, before);
    }

    #[test]
    fn ended_while_shuffling_uses_picker() {
        let mut state = state_at(&["a", "b", "c"], 2);
        state.is_shuffle = true;

        let mut picker = ScriptedPicker::new(vec![0]);
        state.apply_action(&PlayerAction::EpisodeEnded, &mut picker);
        assert_eq!(state.current_episode_index, 0);
        assert_eq!(state.episode_list.len(), 3);
    }

    // ── play_previous ─────────────────────────────────────────────────────────

    #[test]
    fn previous_decrements_by_one() {
        let mut state = state_at(&["a", "b", "c"], 2);
        assert!(state.has_previous());
        apply(&mut state, PlayerAction::PlayPrevious);
        assert_eq!(state.current_episode_index, 1);
    }

    #[test]
    fn previous_at_zero_is_noop() {
        let mut state = state_at(&["a", "b"], 0);
        assert!(!state.has_previous());
        assert!(!apply(&mut state, PlayerAction::PlayPrevious));
        assert_eq!(state.current_episode_index, 0);
    }

    #[test]
    fn previous_ignores_shuffle() {
        let mut state = state_at(&["a", "b", "c"], 2);
        state.is_shuffle = true;
        apply(&mut state, PlayerAction::PlayPrevious);
        assert_eq!(state.current_episode_index, 1);
    }

    // ── Flags ─────────────────────────────────────────────────────────────────

    #[test]
    fn toggles_flip_once_and_restore_twice() {
        let toggles = [
            PlayerAction::TogglePlay,
            PlayerAction::ToggleLooping,
            PlayerAction::ToggleShuffle,
        ];

        for toggle in toggles {
            let mut state = state_at(&["a"], 0);
            let original = state.clone();

            assert!(apply(&mut state, toggle.clone()));
            assert_ne!(state, original, "{} must flip its flag", toggle.name());

            apply(&mut state, toggle.clone());
            assert_eq!(state, original, "{} twice must restore", toggle.name());
        }
    }

    #[test]
    fn set_playing_overrides_flag() {
        let mut state = PlayerState::default();
        assert!(apply(&mut state, PlayerAction::SetPlaying { playing: true }));
        assert!(state.is_playing);
        assert!(!apply(&mut state, PlayerAction::SetPlaying { playing: true }));
        assert!(apply(&mut state, PlayerAction::SetPlaying { playing: false }));
        assert!(!state.is_playing);
    }

    // ── clear ─────────────────────────────────────────────────────────────────

    #[test]
    fn clear_empties_list_and_keeps_flags() {
        let mut state = state_at(&["a", "b", "c"], 2);
        state.is_playing = true;
        state.is_looping = true;
        state.is_shuffle = true;

        apply(&mut state, PlayerAction::Clear);
        assert!(state.episode_list.is_empty());
        assert_eq!(state.current_episode_index, 0);
        assert!(state.is_playing);
        assert!(state.is_looping);
        assert!(state.is_shuffle);
    }
}
