//! Uniformly random agent.

use super::{Agent, GameView};
use crate::cards::{Card, Suit};
use crate::core::GameRng;
use crate::rules::playable_cards;

/// Plays a uniformly random legal card, drawing only when nothing fits.
///
/// Seeded, so a table of random agents replays identically.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    name: String,
    rng: GameRng,
}

impl RandomAgent {
    /// Create a random agent with its own RNG stream.
    #[must_use]
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: GameRng::new(seed),
        }
    }

    /// Create a random agent from an existing RNG.
    #[must_use]
    pub fn with_rng(name: impl Into<String>, rng: GameRng) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_card(&mut self, hand: &[Card], view: GameView) -> Option<Card> {
        let playable = playable_cards(hand, &view.top_card());
        self.rng.choose(&playable).copied()
    }

    fn choose_suit(&mut self, _hand: &[Card], _view: GameView) -> Suit {
        self.rng.choose(&Suit::ALL).copied().unwrap_or(Suit::Clubs)
    }
}
