//! Score tallies

use serde::{Deserialize, Serialize};

/// Running player/ai/tie counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreTally {
    pub player: u32,
    pub ai: u32,
    pub tie: u32,
}

impl ScoreTally {
    pub fn new(player: u32, ai: u32, tie: u32) -> Self {
        Self { player, ai, tie }
    }

    /// Rounds counted since the last reset
    pub fn rounds(&self) -> u32 {
        self.player + self.ai + self.tie
    }
}

impl std::fmt::Display for ScoreTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P:{}  AI:{}  Ties:{}", self.player, self.ai, self.tie)
    }
}
