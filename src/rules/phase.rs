//! Engine phase state machine.
//!
//! ```text
//!              Start                AwaitDecision
//!   Inactive ---------> Playing -------------------> AwaitingDecision
//!      ^                 |   ^                              |
//!      |    RoundOver    |   |         DecisionMade         |
//!      +-----------------+   +------------------------------+
//!      ^                                                    |
//!      +-------------------------- Abort -------------------+
//! ```
//!
//! `Phase::on` is total: every phase accepts every event, and events that
//! make no sense in a phase leave it unchanged.

use serde::{Deserialize, Serialize};

/// Engine-wide phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No round in progress. The roster may change.
    #[default]
    Inactive,
    /// Normal turn flow. Effects and pile changes happen only here.
    Playing,
    /// Blocked on an agent callback.
    AwaitingDecision,
}

/// Something that moves the engine between phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhaseEvent {
    /// A round is starting.
    Start,
    /// The engine is about to call into an agent.
    AwaitDecision,
    /// The agent has answered.
    DecisionMade,
    /// A hand emptied.
    RoundOver,
    /// The round was abandoned on a fatal error.
    Abort,
}

impl Phase {
    /// Next phase after `event`.
    #[must_use]
    pub fn on(self, event: PhaseEvent) -> Phase {
        use PhaseEvent::*;

        match (self, event) {
            (Phase::Inactive, Start) => Phase::Playing,
            (Phase::Inactive, _) => Phase::Inactive,

            (Phase::Playing, AwaitDecision) => Phase::AwaitingDecision,
            (Phase::Playing, RoundOver | Abort) => Phase::Inactive,
            (Phase::Playing, Start | DecisionMade) => Phase::Playing,

            (Phase::AwaitingDecision, DecisionMade) => Phase::Playing,
            (Phase::AwaitingDecision, Abort) => Phase::Inactive,
            (Phase::AwaitingDecision, Start | AwaitDecision | RoundOver) => {
                Phase::AwaitingDecision
            }
        }
    }

    /// Whether a round is in progress.
    #[must_use]
    pub fn is_active(self) -> bool {
        self != Phase::Inactive
    }
}
