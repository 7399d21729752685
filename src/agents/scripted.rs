//! Agent that replays fixed answers.

use std::collections::VecDeque;

use super::{Agent, GameView};
use crate::cards::{Card, Suit};

/// Replays queued answers in order.
///
/// Once the card script runs out the agent falls back to the first legal
/// card in hand order; once the suit script runs out it names Clubs. Used
/// to drive exact scenarios, including deliberately bad answers.
///
/// ```
/// use crazy_eights::agents::{Agent, GameView, ScriptedAgent};
/// use crazy_eights::cards::{Card, Rank, Suit};
///
/// let h3 = Card::new(Suit::Hearts, Rank::new(3).unwrap());
/// let mut agent = ScriptedAgent::new()
///     .then_play(h3)
///     .then_draw()
///     .then_suit(Suit::Spades);
///
/// let view = GameView::new(Card::new(Suit::Hearts, Rank::KING));
/// assert_eq!(agent.choose_card(&[h3], view), Some(h3));
/// assert_eq!(agent.choose_card(&[h3], view), None);
/// assert_eq!(agent.choose_suit(&[], view), Suit::Spades);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedAgent {
    cards: VecDeque<Option<Card>>,
    suits: VecDeque<Suit>,
}

impl ScriptedAgent {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a card answer.
    #[must_use]
    pub fn then_play(mut self, card: Card) -> Self {
        self.cards.push_back(Some(card));
        self
    }

    /// Queue a decline.
    #[must_use]
    pub fn then_draw(mut self) -> Self {
        self.cards.push_back(None);
        self
    }

    /// Queue a suit answer.
    #[must_use]
    pub fn then_suit(mut self, suit: Suit) -> Self {
        self.suits.push_back(suit);
        self
    }
}

impl Agent for ScriptedAgent {
    fn name(&self) -> &str {
        "scripted"
    }

    fn choose_card(&mut self, hand: &[Card], view: GameView) -> Option<Card> {
        match self.cards.pop_front() {
            Some(answer) => answer,
            None => hand.iter().copied().find(|c| view.is_playable(c)),
        }
    }

    fn choose_suit(&mut self, _hand: &[Card], _view: GameView) -> Suit {
        self.suits.pop_front().unwrap_or(Suit::Clubs)
    }
}
