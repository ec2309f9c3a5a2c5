//! Round outcome engine and score tracker

use crate::types::{Gesture, RoundOutcome, ScoreTally};

/// Decides rounds under Rock > Scissors > Paper > Rock
#[derive(Debug, Default, Clone, Copy)]
pub struct RoundOutcomeEngine;

impl RoundOutcomeEngine {
    pub fn new() -> Self {
        Self
    }

    /// Outcome from the player's side
    pub fn decide(&self, player: Gesture, ai: Gesture) -> RoundOutcome {
        if player == ai {
            RoundOutcome::Tie
        } else if player.beats(ai) {
            RoundOutcome::PlayerWin
        } else {
            RoundOutcome::AiWin
        }
    }
}

/// Running score
#[derive(Debug, Default, Clone)]
pub struct ScoreTracker {
    tally: ScoreTally,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one round
    pub fn increment(&mut self, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::PlayerWin => self.tally.player += 1,
            RoundOutcome::AiWin => self.tally.ai += 1,
            RoundOutcome::Tie => self.tally.tie += 1,
        }
    }

    /// Zero all counters
    pub fn reset(&mut self) {
        self.tally = ScoreTally::default();
    }

    pub fn tally(&self) -> ScoreTally {
        self.tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_outcome_table() {
        use Gesture::{Paper, Rock, Scissors};
        use RoundOutcome::{AiWin, PlayerWin, Tie};
        let engine = RoundOutcomeEngine::new();
        let table = [
            (Rock, Rock, Tie),
            (Rock, Paper, AiWin),
            (Rock, Scissors, PlayerWin),
            (Paper, Rock, PlayerWin),
            (Paper, Paper, Tie),
            (Paper, Scissors, AiWin),
            (Scissors, Rock, AiWin),
            (Scissors, Paper, PlayerWin),
            (Scissors, Scissors, Tie),
        ];
        for (player, ai, expected) in table {
            assert_eq!(engine.decide(player, ai), expected, "{} vs {}", player, ai);
        }
    }

    #[test]
    fn test_score_increments_and_resets() {
        let mut score = ScoreTracker::new();
        score.increment(RoundOutcome::PlayerWin);
        score.increment(RoundOutcome::AiWin);
        score.increment(RoundOutcome::AiWin);
        score.increment(RoundOutcome::Tie);
        assert_eq!(score.tally(), ScoreTally::new(1, 2, 1));

        score.reset();
        assert_eq!(score.tally(), ScoreTally::default());
    }

    #[test]
    fn test_score_monotonic() {
        let mut score = ScoreTracker::new();
        let mut prev = score.tally();
        for outcome in [RoundOutcome::Tie, RoundOutcome::AiWin, RoundOutcome::PlayerWin, RoundOutcome::Tie] {
            score.increment(outcome);
            let now = score.tally();
            assert!(now.player >= prev.player && now.ai >= prev.ai && now.tie >= prev.tie);
            assert_eq!(now.rounds(), prev.rounds() + 1);
            prev = now;
        }
    }
}
