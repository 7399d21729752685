//! Round rules: the phase state machine, legality helpers, and results.
//!
//! The turn engine consults these but owns all mutable state itself.

pub mod legality;
pub mod outcome;
pub mod phase;

pub use legality::{playable_cards, suit_counts};
pub use outcome::GameResult;
pub use phase::{Phase, PhaseEvent};
