//! Draw and discard piles.
//!
//! `Piles` owns every card that is not in a player's hand. It supports:
//! - Dealing from the top of the draw pile
//! - Discarding with an O(1) cached top card
//! - Replacing the effective top card after a wild suit change
//! - Recycling the discard pile into the draw pile when it runs low
//!
//! The discard pile only ever stores physical cards. The effective top
//! card is tracked separately, so a synthetic suit-change card never
//! enters circulation and the 52-card count always holds.

use tracing::debug;

use crate::cards::Card;
use crate::core::{EngineError, GameRng};

/// Result of drawing a single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Draw {
    /// The card drawn.
    pub card: Card,
    /// Cards recycled from the discard pile before this draw (usually 0).
    pub recycled: usize,
}

/// Draw pile plus discard pile.
///
/// ## Usage
///
/// ```
/// use crazy_eights::cards::fresh_deck;
/// use crazy_eights::core::GameRng;
/// use crazy_eights::zones::Piles;
///
/// let mut piles = Piles::new();
/// piles.reset(fresh_deck());
/// let starter = piles.flip_starter().unwrap();
/// assert_eq!(piles.top(), Some(starter));
///
/// let mut rng = GameRng::new(42);
/// let draw = piles.draw_one(&mut rng).unwrap();
/// assert_eq!(draw.recycled, 0);
/// assert_eq!(piles.draw_len(), 50);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Piles {
    /// Draw pile, top card last.
    draw: Vec<Card>,

    /// Discard pile, most recent physical card last.
    discard: Vec<Card>,

    /// Card that currently decides legality.
    top: Option<Card>,
}

impl Piles {
    /// Create empty piles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace both piles with `deck` as the draw pile.
    ///
    /// `deck[0]` becomes the top of the draw pile.
    pub fn reset(&mut self, mut deck: Vec<Card>) {
        deck.reverse();
        self.draw = deck;
        self.discard.clear();
        self.top = None;
    }

    /// Shuffle the draw pile.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.draw);
    }

    /// Take the top card of the draw pile without recycling.
    ///
    /// Used for the deal, where the discard pile is still empty.
    pub fn deal_one(&mut self) -> Option<Card> {
        self.draw.pop()
    }

    /// Turn the top card of the draw pile onto the discard pile.
    pub fn flip_starter(&mut self) -> Option<Card> {
        let card = self.draw.pop()?;
        self.discard(card);
        Some(card)
    }

    /// Draw one card, recycling the discard pile first if the draw pile
    /// is down to one card or none.
    ///
    /// Returns `DrawPileExhausted` if nothing is left even after recycling.
    pub fn draw_one(&mut self, rng: &mut GameRng) -> Result<Draw, EngineError> {
        let recycled = if self.draw.len() <= 1 {
            self.recycle(rng)
        } else {
            0
        };

        let card = self.draw.pop().ok_or(EngineError::DrawPileExhausted)?;
        Ok(Draw { card, recycled })
    }

    /// Move every discarded card except the most recent one under the
    /// draw pile and shuffle. Returns the number of cards moved.
    pub fn recycle(&mut self, rng: &mut GameRng) -> usize {
        if self.discard.len() <= 1 {
            return 0;
        }

        let keep = self.discard.len() - 1;
        let recycled: Vec<Card> = self.discard.drain(..keep).collect();
        let moved = recycled.len();
        self.draw.extend(recycled);
        rng.shuffle(&mut self.draw);

        debug!(moved, draw_pile = self.draw.len(), "recycled discard pile");
        moved
    }

    /// Put a card on the discard pile; it becomes the top card.
    pub fn discard(&mut self, card: Card) {
        self.discard.push(card);
        self.top = Some(card);
    }

    /// Replace the effective top card without touching the discard pile.
    pub fn set_effective_top(&mut self, card: Card) {
        self.top = Some(card);
    }

    /// Card that currently decides legality, if a round has started.
    #[must_use]
    pub fn top(&self) -> Option<Card> {
        self.top
    }

    /// Draw pile contents, top first.
    #[must_use]
    pub fn draw_pile(&self) -> Vec<Card> {
        self.draw.iter().rev().copied().collect()
    }

    /// Discard pile contents, most recent last.
    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }

    #[must_use]
    pub fn draw_len(&self) -> usize {
        self.draw.len()
    }

    #[must_use]
    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    /// Physical cards held by the piles.
    #[must_use]
    pub fn physical_count(&self) -> usize {
        self.draw.len() + self.discard.len()
    }
}
