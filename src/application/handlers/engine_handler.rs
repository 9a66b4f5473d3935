use crate::application::store::PlayerStore;
use crate::core::events::{EngineEvent, PlayerAction};
use tracing::debug;

/// Handles all [`EngineEvent`] variants.
///
/// Responsible for:
/// - Mirroring engine play/pause into the playing flag
/// - Auto-advancing when an episode finishes, or clearing the player at the end
pub struct EngineHandler {
    store: PlayerStore,
}

impl EngineHandler {
    pub fn new(store: PlayerStore) -> Self {
        Self { store }
    }

    pub fn handle(&self, event: EngineEvent) {
        match event {
            EngineEvent::Started => self.store.set_playing_state(true),

            EngineEvent::Paused => self.store.set_playing_state(false),

            EngineEvent::Ended => {
                if !self.store.dispatch(PlayerAction::EpisodeEnded) {
                    debug!("episode ended without changing the player");
                }
            }
        }
    }
}
