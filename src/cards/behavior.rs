//! Rank-specific card behavior.
//!
//! A closed set of effects, selected by rank when a card is built and
//! dispatched by the turn engine with an exhaustive `match`.

use serde::{Deserialize, Serialize};

use super::card::Rank;
use crate::core::DEFAULT_DRAW_PENALTY;

/// What happens after a card is discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Behavior {
    /// Play passes to the next player.
    PassTurn,
    /// Seating order reverses, then play passes (Ace).
    ReverseOrder,
    /// The next player draws this many cards and loses their turn (Two).
    ForceDraw(u8),
    /// The next player is skipped (Queen).
    SkipNext,
    /// Playable on anything; the player picks the active suit (Eight).
    WildChooseSuit,
    /// No effect. Carried by the stand-in card left after a suit change.
    Inert,
}

impl Behavior {
    /// Behavior attached to a physical card of the given rank.
    #[must_use]
    pub fn for_rank(rank: Rank) -> Self {
        match rank {
            Rank::ACE => Behavior::ReverseOrder,
            Rank::TWO => Behavior::ForceDraw(DEFAULT_DRAW_PENALTY),
            Rank::EIGHT => Behavior::WildChooseSuit,
            Rank::QUEEN => Behavior::SkipNext,
            _ => Behavior::PassTurn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_mapping() {
        assert_eq!(Behavior::for_rank(Rank::ACE), Behavior::ReverseOrder);
        assert_eq!(Behavior::for_rank(Rank::TWO), Behavior::ForceDraw(2));
        assert_eq!(Behavior::for_rank(Rank::EIGHT), Behavior::WildChooseSuit);
        assert_eq!(Behavior::for_rank(Rank::QUEEN), Behavior::SkipNext);

        for plain in [3, 4, 5, 6, 7, 9, 10, 11, 13] {
            let rank = Rank::new(plain).unwrap();
            assert_eq!(Behavior::for_rank(rank), Behavior::PassTurn, "rank {}", plain);
        }
    }
}
