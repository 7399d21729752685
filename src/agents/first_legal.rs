//! Greedy agent: first legal card, most-held suit.

use super::{Agent, GameView};
use crate::cards::{Card, Suit};
use crate::rules::suit_counts;

/// Plays the first legal card in hand order and, after an Eight, names
/// the suit it holds most of (ties go to the earlier suit).
#[derive(Clone, Debug, Default)]
pub struct FirstLegalAgent;

impl FirstLegalAgent {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Agent for FirstLegalAgent {
    fn name(&self) -> &str {
        "first-legal"
    }

    fn choose_card(&mut self, hand: &[Card], view: GameView) -> Option<Card> {
        hand.iter().copied().find(|c| view.is_playable(c))
    }

    fn choose_suit(&mut self, hand: &[Card], _view: GameView) -> Suit {
        let counts = suit_counts(hand);
        let mut best = 0;
        for (i, &count) in counts.iter().enumerate().skip(1) {
            if count > counts[best] {
                best = i;
            }
        }
        Suit::ALL[best]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    fn card(suit: Suit, rank: u8) -> Card {
        Card::new(suit, Rank::new(rank).unwrap())
    }

    #[test]
    fn test_plays_first_legal() {
        let mut agent = FirstLegalAgent::new();
        let hand = vec![card(Suit::Clubs, 4), card(Suit::Hearts, 9), card(Suit::Hearts, 3)];
        let view = GameView::new(card(Suit::Hearts, 5));

        assert_eq!(agent.choose_card(&hand, view), Some(card(Suit::Hearts, 9)));
        assert_eq!(agent.choose_card(&hand[..1], view), None);
    }

    #[test]
    fn test_names_most_held_suit() {
        let mut agent = FirstLegalAgent::new();
        let view = GameView::new(card(Suit::Hearts, 8));
        let hand = vec![card(Suit::Spades, 4), card(Suit::Diamonds, 9), card(Suit::Spades, 3)];

        assert_eq!(agent.choose_suit(&hand, view), Suit::Spades);
        assert_eq!(agent.choose_suit(&[], view), Suit::Clubs);
    }
}
