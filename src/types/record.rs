//! Completed round records

use chrono::{DateTime, SecondsFormat, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use crate::types::{Gesture, RoundOutcome};

/// One resolved round, handed to the history log and the display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// When the round resolved
    pub timestamp: DateTime<Utc>,
    /// Player's official move (never Unknown)
    pub player: Gesture,
    /// AI move (never Unknown)
    pub ai: Gesture,
    /// Result from the player's point of view
    pub outcome: RoundOutcome,
}

impl RoundRecord {
    /// Create a record stamped with the current time
    pub fn new(player: Gesture, ai: Gesture, outcome: RoundOutcome) -> Self {
        Self {
            timestamp: Utc::now(),
            player,
            ai,
            outcome,
        }
    }

    /// Plain summary, e.g. `You: rock  AI: paper -> ai`
    pub fn summary(&self) -> String {
        format!("You: {}  AI: {} -> {}", self.player, self.ai, self.outcome)
    }

    /// Colored summary for the terminal
    pub fn to_terminal_string(&self) -> String {
        format!(
            "You: {} {}  AI: {} {} -> {}",
            self.player.emoji(),
            self.player.label().color(self.player.color()),
            self.ai.emoji(),
            self.ai.label().color(self.ai.color()),
            self.outcome.label().color(self.outcome.color()).bold(),
        )
    }

    /// History log row: `timestamp,player,ai,result`
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Micros, false),
            self.player,
            self.ai,
            self.outcome
        )
    }
}
