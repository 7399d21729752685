//! Fresh deck construction and validation.
//!
//! A fresh deck always has the same composition: one card per
//! (suit, rank) pair, each with the behavior its rank implies. Only the
//! shuffle that follows is random.

use rustc_hash::FxHashSet;

use super::behavior::Behavior;
use super::card::{Card, Rank, Suit};
use crate::core::EngineError;

/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Build all 52 cards, suits in declaration order, Ace through King.
#[must_use]
pub fn fresh_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::all().map(move |rank| Card::new(suit, rank)))
        .collect()
}

/// Check that `deck` is exactly one full set of physical cards.
///
/// Fails on a wrong size, a duplicate (suit, rank), a synthetic card, or
/// a card whose behavior does not match its rank.
pub fn validate(deck: &[Card]) -> Result<(), EngineError> {
    if deck.len() != DECK_SIZE {
        return Err(EngineError::InvalidDeck(format!(
            "expected {} cards, found {}",
            DECK_SIZE,
            deck.len()
        )));
    }

    let mut seen = FxHashSet::default();
    for card in deck {
        if card.behavior() != Behavior::for_rank(card.rank()) {
            return Err(EngineError::InvalidDeck(format!(
                "{} carries {:?}",
                card,
                card.behavior()
            )));
        }
        if !seen.insert((card.suit(), card.rank())) {
            return Err(EngineError::InvalidDeck(format!("duplicate {}", card)));
        }
    }

    Ok(())
}
