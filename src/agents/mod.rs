//! Player agents: the decision-makers the engine calls out to.
//!
//! The engine asks an agent two things: which card to play (or none, to
//! draw), and which suit to name after an Eight. Agents only ever see a
//! snapshot of their own hand and a `GameView`; they cannot reach the
//! engine, other hands, or the piles.
//!
//! ## Built-in agents
//!
//! - `RandomAgent`: uniformly random legal play, random suit
//! - `FirstLegalAgent`: first legal card in hand order, most-held suit
//! - `ScriptedAgent`: replays fixed answers (scenario tests)

mod first_legal;
mod random;
mod scripted;

pub use first_legal::FirstLegalAgent;
pub use random::RandomAgent;
pub use scripted::ScriptedAgent;

use crate::cards::{Card, Suit};

/// Read-only view of the table handed to agents.
///
/// Exposes the top of the discard pile and the legality rule, and nothing
/// else: no hands, no pile contents, no pile sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameView {
    top: Card,
}

impl GameView {
    /// Create a view over the given top card.
    #[must_use]
    pub fn new(top: Card) -> Self {
        Self { top }
    }

    /// Card currently on top of the discard pile.
    ///
    /// After an Eight this is the stand-in carrying the chosen suit.
    #[must_use]
    pub fn top_card(&self) -> Card {
        self.top
    }

    /// Whether `card` may be played right now.
    #[must_use]
    pub fn is_playable(&self, card: &Card) -> bool {
        card.is_playable_on(&self.top)
    }
}

/// A player's decision-maker.
///
/// Answers are checked by the engine: a card that is not in `hand` or
/// does not fit the top card is rejected and the agent is asked again.
pub trait Agent: Send {
    /// Display name used in narration.
    fn name(&self) -> &str {
        "agent"
    }

    /// Pick a card from `hand` to play, or `None` to draw and pass.
    fn choose_card(&mut self, hand: &[Card], view: GameView) -> Option<Card>;

    /// Pick the suit that follows an Eight.
    fn choose_suit(&mut self, hand: &[Card], view: GameView) -> Suit;
}
