//! Hand queries shared by the engine and the built-in agents.

use crate::cards::Card;

/// Cards in `hand` that may be played on `top`, in hand order.
#[must_use]
pub fn playable_cards(hand: &[Card], top: &Card) -> Vec<Card> {
    hand.iter().copied().filter(|c| c.is_playable_on(top)).collect()
}

/// Number of cards of each suit in `hand`, indexed like `Suit::ALL`.
#[must_use]
pub fn suit_counts(hand: &[Card]) -> [usize; 4] {
    let mut counts = [0; 4];
    for card in hand {
        counts[card.suit() as usize] += 1;
    }
    counts
}
