//! Opponent predictor: counters the player's most frequent move
//!
//! - no observations → uniform random move
//! - otherwise counter(most frequent) with probability 0.75, uniform random otherwise

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use crate::EXPLOIT_PROBABILITY;
use crate::types::{Gesture, GestureFrequencyTable};

/// Frequency-based AI opponent
#[derive(Debug)]
pub struct OpponentPredictor<R = SmallRng> {
    table: GestureFrequencyTable,
    rng: R,
}

impl Default for OpponentPredictor<SmallRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl OpponentPredictor<SmallRng> {
    /// Predictor seeded from the OS
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_os_rng())
    }

    /// Reproducible predictor
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> OpponentPredictor<R> {
    /// Predictor drawing from the given random source
    pub fn with_rng(rng: R) -> Self {
        Self {
            table: GestureFrequencyTable::default(),
            rng,
        }
    }

    /// Record the player's official move. Unknown is ignored.
    pub fn update(&mut self, player: Gesture) {
        self.table.record(player);
    }

    /// Choose the AI move for the next round. Never Unknown.
    pub fn predict(&mut self) -> Gesture {
        let Some(most) = self.table.most_frequent() else {
            return self.random_move();
        };
        if self.rng.random::<f64>() < EXPLOIT_PROBABILITY {
            most.counter()
        } else {
            self.random_move()
        }
    }

    /// Observed move counts
    pub fn table(&self) -> &GestureFrequencyTable {
        &self.table
    }

    fn random_move(&mut self) -> Gesture {
        Gesture::MOVES[self.rng.random_range(0..Gesture::MOVES.len())]
    }
}

// =============================================================================
// TESTS
// =============================================================================
