//! Round outcome definitions

use colored::Color;
use serde::{Deserialize, Serialize};

/// Who won a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    #[serde(rename = "player")]
    PlayerWin,
    #[serde(rename = "ai")]
    AiWin,
    #[serde(rename = "tie")]
    Tie,
}

impl RoundOutcome {
    /// Result label used in the history log
    pub fn label(&self) -> &'static str {
        match self {
            RoundOutcome::PlayerWin => "player",
            RoundOutcome::AiWin => "ai",
            RoundOutcome::Tie => "tie",
        }
    }

    /// Terminal color for overlays
    pub fn color(&self) -> Color {
        match self {
            RoundOutcome::PlayerWin => Color::Green,
            RoundOutcome::AiWin => Color::Red,
            RoundOutcome::Tie => Color::Yellow,
        }
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
