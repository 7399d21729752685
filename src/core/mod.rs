//! Core engine types: players, RNG, configuration, errors, and the event log.
//!
//! These are the building blocks the card model and the turn engine share.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod event;

pub use player::PlayerId;
pub use rng::GameRng;
pub use config::{GameConfig, DEFAULT_DRAW_PENALTY, INITIAL_HAND_SIZE};
pub use error::EngineError;
pub use event::{EventRecord, TurnEvent};
