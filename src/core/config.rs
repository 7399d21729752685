//! Game configuration.
//!
//! `GameConfig` holds the knobs of a round that are not part of the card
//! rules themselves: hand size, RNG seed, and how patiently the engine
//! re-prompts an agent that answers badly.
//!
//! Configs are plain serde data so the demo binary can load them from JSON.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Number of cards dealt to each player when a round starts.
pub const INITIAL_HAND_SIZE: usize = 5;

/// Number of cards the player after a Two is forced to draw.
pub const DEFAULT_DRAW_PENALTY: u8 = 2;

/// Round configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Cards dealt to each player at the start of a round.
    pub initial_hand_size: usize,

    /// Seed for deck shuffles and recycles.
    pub seed: u64,

    /// Consecutive invalid answers tolerated per turn before the engine
    /// treats the agent as having declined. `None` re-prompts forever.
    pub reprompt_limit: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_hand_size: INITIAL_HAND_SIZE,
            seed: 42,
            reprompt_limit: None,
        }
    }
}

impl GameConfig {
    /// Set the initial hand size.
    #[must_use]
    pub fn with_initial_hand_size(mut self, size: usize) -> Self {
        self.initial_hand_size = size;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Cap consecutive invalid answers per turn.
    #[must_use]
    pub fn with_reprompt_limit(mut self, limit: u32) -> Self {
        self.reprompt_limit = Some(limit);
        self
    }

    /// Check that a round with `player_count` players can be dealt.
    ///
    /// The deal needs `player_count * initial_hand_size` cards plus one
    /// starter card out of the 52.
    pub fn validate(&self, player_count: usize) -> Result<(), EngineError> {
        if self.initial_hand_size == 0 {
            return Err(EngineError::InvalidConfig(
                "initial hand size must be at least 1".to_string(),
            ));
        }
        let needed = player_count
            .checked_mul(self.initial_hand_size)
            .and_then(|n| n.checked_add(1));
        match needed {
            Some(n) if n <= crate::cards::DECK_SIZE => Ok(()),
            _ => Err(EngineError::InvalidConfig(format!(
                "cannot deal {} cards to each of {} players from a {}-card deck",
                self.initial_hand_size,
                player_count,
                crate::cards::DECK_SIZE
            ))),
        }
    }
}
