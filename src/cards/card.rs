//! Playing cards: suits, ranks, and the card value itself.
//!
//! Cards are immutable `Copy` values. Two cards with the same suit, rank,
//! and behavior are interchangeable; there is no per-card identity.

use serde::{Deserialize, Serialize};

use super::behavior::Behavior;

/// One of the four French suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Hearts,
    Diamonds,
    Spades,
}

impl Suit {
    /// All suits in declaration order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Hearts, Suit::Diamonds, Suit::Spades];

    /// One-letter code used in card labels.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Spades => 'S',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suit::Clubs => "Clubs",
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Spades => "Spades",
        };
        f.write_str(name)
    }
}

/// Card rank, 1 (Ace) through 13 (King).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const TWO: Rank = Rank(2);
    pub const EIGHT: Rank = Rank(8);
    pub const JACK: Rank = Rank(11);
    pub const QUEEN: Rank = Rank(12);
    pub const KING: Rank = Rank(13);

    /// Create a rank, or `None` outside 1..=13.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 13 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// All thirteen ranks, Ace first.
    pub fn all() -> impl Iterator<Item = Rank> {
        (1..=13).map(Rank)
    }

    /// Face label: `A`, `J`, `Q`, `K`, or the numeral.
    #[must_use]
    pub fn label(self) -> String {
        match self.0 {
            1 => "A".to_string(),
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            n => n.to_string(),
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rank::new(value).ok_or_else(|| format!("rank {} out of range 1..=13", value))
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.0
    }
}

/// A playing card with its rule behavior attached.
///
/// ## Example
///
/// ```
/// use crazy_eights::cards::{Behavior, Card, Rank, Suit};
///
/// let queen = Card::new(Suit::Hearts, Rank::QUEEN);
/// assert_eq!(queen.behavior(), Behavior::SkipNext);
/// assert_eq!(queen.to_string(), "HQ");
///
/// let eight = Card::new(Suit::Clubs, Rank::EIGHT);
/// assert!(eight.is_playable_on(&queen));
/// assert!(!queen.is_playable_on(&eight));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    behavior: Behavior,
}

impl Card {
    /// Create a physical card; its behavior follows from its rank.
    #[must_use]
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            behavior: Behavior::for_rank(rank),
        }
    }

    /// Create the stand-in top card left after a wild suit change.
    ///
    /// It carries the chosen suit and the wild card's rank, and no effect.
    #[must_use]
    pub fn synthetic_wild(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            behavior: Behavior::Inert,
        }
    }

    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    /// Whether this card is a synthetic stand-in rather than one of the 52.
    #[must_use]
    pub fn is_synthetic(&self) -> bool {
        self.behavior == Behavior::Inert
    }

    /// Whether this card may be played on top of `other`.
    ///
    /// Wild cards fit anywhere; everything else must match suit or rank.
    #[must_use]
    pub fn is_playable_on(&self, other: &Card) -> bool {
        match self.behavior {
            Behavior::WildChooseSuit => true,
            _ => self.suit == other.suit || self.rank == other.rank,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.suit.code(), self.rank.label())
    }
}
