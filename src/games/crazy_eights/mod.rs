//! Crazy Eights.
//!
//! Each player is dealt five cards and one card is flipped to start the
//! discard pile. On their turn a player discards a card matching the top
//! card's suit or rank, or draws one card and passes. The first player to
//! empty their hand wins the round.
//!
//! Special ranks:
//! - Ace: reverses the seating order
//! - Two: the next player draws two cards and loses their turn
//! - Eight: wild; playable on anything, and the player names the next suit
//! - Queen: the next player is skipped

mod game;

pub use game::{CrazyEights, CrazyEightsBuilder};
