//! Player identification.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting up to 255 seats.
//!
//! Ids are handed out by the engine when a player joins and are never
//! reused, so an id stays valid (and stays meaningful in the event log)
//! even after other players leave the table or the seating order is
//! reversed by an Ace.

use serde::{Deserialize, Serialize};

/// Player identifier.
///
/// The first player added to an engine is `PlayerId(0)`, the second
/// `PlayerId(1)`, and so on. Ids say nothing about seating position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}
