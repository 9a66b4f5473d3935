use crate::application::state::PlayerState;
use crate::core::events::{PlayerAction, StateReceiver, StateSender};
use crate::core::models::Episode;
use crate::core::traits::{IndexPicker, PlayerObserver};
use crate::modules::playback::shuffle_picker::RandomIndexPicker;
use anyhow::Result;
use crossbeam_channel::unbounded;
use std::collections::VecDeque;
use std::mem;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

/// Handle returned by the subscribe methods, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observers = Vec<(SubscriptionId, Box<dyn PlayerObserver>)>;

struct StoreInner {
    state: PlayerState,
    picker: Box<dyn IndexPicker>,
    observers: Observers,
    next_id: u64,

    /// Snapshots waiting to be handed to observers, oldest first
    pending: VecDeque<PlayerState>,
    /// Set while some caller is delivering `pending` with the lock released
    delivering: bool,
    /// Observers taken out of `observers` by the running delivery
    in_delivery: Vec<SubscriptionId>,
    /// Unsubscribed while out for delivery
    cancelled: Vec<SubscriptionId>,
}

/// Shared player state plus its mutators.
///
/// Cloning gives another handle to the same store. Pass it to every consumer
/// that needs to read or drive the player.
#[derive(Clone)]
pub struct PlayerStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl PlayerStore {
    pub fn new() -> Self {
        Self::with_picker(Box::new(RandomIndexPicker::new()))
    }

    /// Create a store whose shuffle mode draws indices from `picker`
    pub fn with_picker(picker: Box<dyn IndexPicker>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                state: PlayerState::default(),
                picker,
                observers: Vec::new(),
                next_id: 0,
                pending: VecDeque::new(),
                delivering: false,
                in_delivery: Vec::new(),
                cancelled: Vec::new(),
            })),
        }
    }

    // Transitions never leave the state half-written, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get current state (read-only copy)
    pub fn snapshot(&self) -> PlayerState {
        self.lock().state.clone()
    }

    /// Register an observer; it is called after every change
    pub fn subscribe(&self, observer: Box<dyn PlayerObserver>) -> SubscriptionId {
        let mut inner = self.lock();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.observers.push((id, observer));
        id
    }

    /// Subscribe through a channel that receives every new snapshot
    pub fn subscribe_channel(&self) -> (SubscriptionId, StateReceiver) {
        let (tx, rx) = unbounded();
        let id = self.subscribe(Box::new(ChannelObserver { tx }));
        (id, rx)
    }

    /// Remove an observer. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.lock();
        let before = inner.observers.len();
        inner.observers.retain(|(observer_id, _)| *observer_id != id);
        if inner.observers.len() != before {
            return true;
        }

        match inner.in_delivery.iter().position(|held| *held == id) {
            Some(pos) => {
                inner.in_delivery.swap_remove(pos);
                inner.cancelled.push(id);
                true
            }
            None => false,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        let inner = self.lock();
        inner.observers.len() + inner.in_delivery.len()
    }

    /// Apply an action and notify observers if the snapshot changed.
    /// Returns whether it changed.
    ///
    /// Observers run after the lock is released, so they may read or drive the
    /// store. A dispatch made during delivery queues its snapshot and the
    /// delivery already running hands it out, keeping snapshots in order.
    pub fn dispatch(&self, action: PlayerAction) -> bool {
        let changed = {
            let mut inner = self.lock();
            let StoreInner { state, picker, pending, .. } = &mut *inner;

            let changed = state.apply_action(&action, picker.as_mut());
            debug!(
                action = action.name(),
                changed,
                index = state.current_episode_index,
                len = state.episode_list.len(),
                "player action applied"
            );

            if changed {
                pending.push_back(state.clone());
            }
            changed
        };

        if changed {
            self.deliver_pending();
        }

        changed
    }

    fn deliver_pending(&self) {
        let mut observers = {
            let mut inner = self.lock();
            if inner.delivering {
                return;
            }
            inner.delivering = true;
            let taken = mem::take(&mut inner.observers);
            inner.in_delivery = taken.iter().map(|(id, _)| *id).collect();
            taken
        };

        loop {
            let snapshot = {
                let mut inner = self.lock();

                let cancelled = mem::take(&mut inner.cancelled);
                observers.retain(|(id, _)| !cancelled.contains(id));

                // Subscribed while the previous snapshot was out
                let joined = mem::take(&mut inner.observers);
                inner.in_delivery.extend(joined.iter().map(|(id, _)| *id));
                observers.extend(joined);

                match inner.pending.pop_front() {
                    Some(snapshot) => snapshot,
                    None => {
                        inner.observers = observers;
                        inner.in_delivery.clear();
                        inner.delivering = false;
                        return;
                    }
                }
            };

            observers.retain_mut(|(id, observer)| match observer.on_change(&snapshot) {
                Ok(()) => true,
                Err(e) => {
                    warn!(subscription = id.0, error = %e, "dropping player observer");
                    self.lock().in_delivery.retain(|held| *held != *id);
                    false
                }
            });
        }
    }

    pub fn play(&self, episode: Episode) {
        self.dispatch(PlayerAction::Play { episode });
    }

    pub fn play_list(&self, list: Vec<Episode>, index: usize) {
        self.dispatch(PlayerAction::PlayList { list, index });
    }

    pub fn play_next(&self) {
        self.dispatch(PlayerAction::PlayNext);
    }

    pub fn play_previous(&self) {
        self.dispatch(PlayerAction::PlayPrevious);
    }

    pub fn toggle_play(&self) {
        self.dispatch(PlayerAction::TogglePlay);
    }

    pub fn toggle_looping(&self) {
        self.dispatch(PlayerAction::ToggleLooping);
    }

    pub fn toggle_shuffle(&self) {
        self.dispatch(PlayerAction::ToggleShuffle);
    }

    pub fn set_playing_state(&self, playing: bool) {
        self.dispatch(PlayerAction::SetPlaying { playing });
    }

    pub fn clear_player_state(&self) {
        self.dispatch(PlayerAction::Clear);
    }

    pub fn has_next(&self) -> bool {
        self.lock().state.has_next()
    }

    pub fn has_previous(&self) -> bool {
        self.lock().state.has_previous()
    }

    pub fn current_episode(&self) -> Option<Episode> {
        self.lock().state.current_episode().cloned()
    }
}

impl Default for PlayerStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Forwards snapshots into a channel; fails once the receiver is dropped
struct ChannelObserver {
    tx: StateSender,
}

impl PlayerObserver for ChannelObserver {
    fn on_change(&mut self, state: &PlayerState) -> Result<()> {
        self.tx.send(state.clone())?;
        Ok(())
    }
}
