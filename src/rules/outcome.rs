//! Result of a completed round.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// How a round ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// The player whose hand emptied first.
    pub winner: PlayerId,

    /// Number of turns played.
    pub turns: u32,
}
