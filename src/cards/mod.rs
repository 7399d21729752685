//! Card model: suits, ranks, behaviors, and the 52-card deck.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`: the face of a card
//! - `Behavior`: closed set of rank effects (reverse, draw two, skip, wild)
//! - `Card`: immutable value with its behavior attached
//!
//! `deck::fresh_deck` builds the full set; `deck::validate` checks one.

pub mod behavior;
pub mod card;
pub mod deck;

pub use behavior::Behavior;
pub use card::{Card, Rank, Suit};
pub use deck::{fresh_deck, validate, DECK_SIZE};
