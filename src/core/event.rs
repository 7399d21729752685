//! Turn-by-turn event log.
//!
//! The engine appends a `TurnEvent` for everything observable that happens
//! in a round: deals, plays, draws, suit changes, reversals, skips, bad
//! answers, and the end of the round. The log is what the demo binary
//! narrates and what scenario tests compare against.
//!
//! Events name players by `PlayerId` and cards by value; they never hold
//! references into engine state.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::{Card, Suit};

/// Something that happened during a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    /// A player was dealt their opening hand.
    Dealt { player: PlayerId, cards: Vec<Card> },

    /// The starter card was flipped onto the discard pile.
    Flipped { card: Card },

    /// A player discarded a card.
    Played { player: PlayerId, card: Card },

    /// A player drew a card.
    Drew { player: PlayerId, card: Card },

    /// A player declined to play (and will draw).
    Declined { player: PlayerId },

    /// An agent named a card it does not hold or that does not fit.
    InvalidChoice { player: PlayerId, card: Card },

    /// A player chose the active suit after an Eight.
    SuitChosen { player: PlayerId, suit: Suit },

    /// The seating order was reversed.
    Reversed,

    /// A player lost their turn to a Queen or a Two.
    Skipped { player: PlayerId },

    /// Discarded cards were shuffled back into the draw pile.
    Recycled { cards: usize },

    /// A player emptied their hand.
    RoundOver { winner: PlayerId },
}

/// A logged event with the turn it happened in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Turn number (0 for the deal, 1 for the first turn).
    pub turn: u32,

    /// What happened.
    pub event: TurnEvent,
}

impl EventRecord {
    /// Create a new event record.
    #[must_use]
    pub fn new(turn: u32, event: TurnEvent) -> Self {
        Self { turn, event }
    }
}
