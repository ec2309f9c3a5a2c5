//! Observed player move frequencies

use serde::{Deserialize, Serialize};
use crate::types::Gesture;

/// Counts of observed Rock/Paper/Scissors moves. Never decremented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GestureFrequencyTable {
    pub rock: u64,
    pub paper: u64,
    pub scissors: u64,
}

impl GestureFrequencyTable {
    /// Count one observation. Unknown is ignored.
    pub fn record(&mut self, gesture: Gesture) {
        match gesture {
            Gesture::Rock => self.rock += 1,
            Gesture::Paper => self.paper += 1,
            Gesture::Scissors => self.scissors += 1,
            Gesture::Unknown => {}
        }
    }

    /// Count for a gesture (always 0 for Unknown)
    pub fn count(&self, gesture: Gesture) -> u64 {
        match gesture {
            Gesture::Rock => self.rock,
            Gesture::Paper => self.paper,
            Gesture::Scissors => self.scissors,
            Gesture::Unknown => 0,
        }
    }

    pub fn total(&self) -> u64 {
        self.rock + self.paper + self.scissors
    }

    /// Most observed move, None before any observation.
    /// Ties resolve by priority Rock > Paper > Scissors.
    pub fn most_frequent(&self) -> Option<Gesture> {
        if self.total() == 0 {
            return None;
        }
        let mut best = Gesture::Rock;
        for gesture in Gesture::MOVES {
            if self.count(gesture) > self.count(best) {
                best = gesture;
            }
        }
        Some(best)
    }
}
