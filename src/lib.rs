//! Shared podcast player state.
//!
//! [`PlayerStore`] holds the playlist, the current episode and the playback
//! flags. Clone the store to hand it to every consumer; subscribe to get each
//! new [`PlayerState`] snapshot.

pub mod application;
pub mod cli;
pub mod cli_handlers;
pub mod config;
pub mod core;
pub mod logging;
pub mod modules;
pub mod utils;

pub use crate::application::handlers::EngineHandler;
pub use crate::application::state::PlayerState;
pub use crate::application::store::{PlayerStore, SubscriptionId};
pub use crate::core::events::{EngineEvent, PlayerAction};
pub use crate::core::models::Episode;
pub use crate::core::traits::{IndexPicker, PlayerObserver};
