//! Engine errors.
//!
//! Only broken invariants surface as errors. Usage mistakes (starting
//! twice, editing the roster mid-round) and bad agent answers are not
//! errors: the former are ignored and the latter re-prompted.

use thiserror::Error;

/// Fatal engine error. The round in progress is abandoned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A draw was requested with both piles spent.
    #[error("draw pile exhausted: no cards left to draw or recycle")]
    DrawPileExhausted,

    /// A turn began with nothing on the discard pile.
    #[error("no card on the discard pile")]
    MissingTopCard,

    /// A deck handed to the engine is not one full 52-card set.
    #[error("invalid deck: {0}")]
    InvalidDeck(String),

    /// The configuration cannot be played with the current roster.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
