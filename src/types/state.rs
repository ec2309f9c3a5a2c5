//! Round phase definitions

use serde::{Deserialize, Serialize};

/// Where the round state machine is in its cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundPhase {
    /// No round running, start-round accepted
    Idle,
    /// Countdown running, player's move not yet frozen
    Countdown,
    /// A round resolved on this tick; the machine is already back to Idle
    JustResolved,
}

impl std::fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RoundPhase::Idle => "IDLE",
            RoundPhase::Countdown => "COUNTDOWN",
            RoundPhase::JustResolved => "JUST_RESOLVED",
        };
        write!(f, "{}", name)
    }
}
