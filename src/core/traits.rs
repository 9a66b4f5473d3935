use crate::application::state::PlayerState;
use anyhow::Result;

/// Receives every new player snapshot.
///
/// Called synchronously after each change, with the store unlocked, so an
/// observer may read or drive the store it watches. Returning an error
/// unsubscribes the observer.
pub trait PlayerObserver: Send {
    fn on_change(&mut self, state: &PlayerState) -> Result<()>;
}

/// Source of the random position used by shuffle mode
pub trait IndexPicker: Send {
    /// Pick an index in `[0, len)`. Must return 0 when `len` is 0.
    fn pick(&mut self, len: usize) -> usize;
}
