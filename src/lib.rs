//! # crazy-eights
//!
//! A rules engine for the card game Crazy Eights.
//!
//! ## Design Principles
//!
//! 1. **Engine owns the state**: hands, piles, seating order, and phase
//!    live inside one explicitly constructed `CrazyEights` value. There is
//!    no global state; independent games are independent values.
//!
//! 2. **Agents see snapshots**: player agents receive a copy of their own
//!    hand and a `GameView` (top card plus legality). They cannot mutate
//!    the engine or see anyone else's cards.
//!
//! 3. **Closed card behavior**: rank effects are a `Behavior` enum matched
//!    exhaustively by the engine.
//!
//! 4. **Reproducible**: all shuffles come from a seeded ChaCha8 `GameRng`.
//!
//! ## Modules
//!
//! - `core`: Player ids, RNG, configuration, errors, event log
//! - `cards`: Suits, ranks, behaviors, the 52-card deck
//! - `zones`: Draw and discard piles with recycling
//! - `rules`: Phase state machine, legality helpers, round result
//! - `agents`: The `Agent` trait, `GameView`, built-in agents
//! - `games`: The Crazy Eights turn engine

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod agents;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    PlayerId,
    GameRng,
    GameConfig, INITIAL_HAND_SIZE,
    EngineError,
    EventRecord, TurnEvent,
};

pub use crate::cards::{Behavior, Card, Rank, Suit, DECK_SIZE};

pub use crate::zones::{Draw, Piles};

pub use crate::rules::{GameResult, Phase, PhaseEvent};

pub use crate::agents::{Agent, FirstLegalAgent, GameView, RandomAgent, ScriptedAgent};

pub use crate::games::crazy_eights::{CrazyEights, CrazyEightsBuilder};
