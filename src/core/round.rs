//! Round state machine: countdown, freeze, resolve exactly once
//!
//! State transitions:
//! - IDLE → COUNTDOWN: start-round (ignored unless IDLE)
//! - COUNTDOWN → COUNTDOWN: tick before the deadline, exposes ceil(remaining)
//! - COUNTDOWN → JUST_RESOLVED → IDLE: tick at/after the deadline, emits one RoundRecord

use std::time::{Duration, Instant};
use rand::rngs::SmallRng;
use rand::Rng;
use crate::COUNTDOWN_SECS;
use crate::core::{Clock, OpponentPredictor, RoundOutcomeEngine, ScoreTracker};
use crate::types::{Gesture, GestureFrequencyTable, RoundPhase, RoundReason, RoundRecord, ScoreTally, TickOutput};

/// Internal timer state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Timer {
    Idle,
    Counting { ends_at: Instant },
}

/// Round state machine engine
#[derive(Debug)]
pub struct RoundStateMachine<C, R = SmallRng> {
    /// Time source
    clock: C,
    /// Idle or counting toward a deadline
    timer: Timer,
    /// Most recent classification, fed every frame a hand is seen
    last_gesture: Option<Gesture>,
    /// AI move source, learns from official moves
    predictor: OpponentPredictor<R>,
    /// Outcome rules
    engine: RoundOutcomeEngine,
    /// Running score
    score: ScoreTracker,
    /// Last resolved round, cleared when the next one starts
    last_record: Option<RoundRecord>,
    /// Rounds resolved since creation
    rounds_played: u64,
}

impl<C: Clock, R: Rng> RoundStateMachine<C, R> {
    /// Create new machine
    pub fn new(clock: C, predictor: OpponentPredictor<R>) -> Self {
        Self {
            clock,
            timer: Timer::Idle,
            last_gesture: None,
            predictor,
            engine: RoundOutcomeEngine::new(),
            score: ScoreTracker::new(),
            last_record: None,
            rounds_played: 0,
        }
    }

    /// Cache the latest classification, independent of phase
    pub fn observe(&mut self, gesture: Gesture) {
        self.last_gesture = Some(gesture);
    }

    /// Begin a countdown if idle; otherwise ignored
    pub fn start_round(&mut self) -> RoundReason {
        match self.timer {
            Timer::Counting { .. } => RoundReason::R002_START_IGNORED_BUSY,
            Timer::Idle => {
                let ends_at = self.clock.now() + Duration::from_secs_f64(COUNTDOWN_SECS);
                self.timer = Timer::Counting { ends_at };
                self.last_record = None;
                log::debug!("round started, resolves in {:.1}s", COUNTDOWN_SECS);
                RoundReason::R002_ROUND_STARTED
            }
        }
    }

    /// Advance against the clock; resolves the round once the deadline passes
    pub fn tick(&mut self) -> TickOutput {
        let Timer::Counting { ends_at } = self.timer else {
            return TickOutput::idle();
        };
        let now = self.clock.now();
        if now < ends_at {
            let remaining = (ends_at - now).as_secs_f64().ceil() as u32;
            return TickOutput::counting(remaining);
        }
        self.resolve()
    }

    /// Freeze the cached gesture and settle the round
    fn resolve(&mut self) -> TickOutput {
        let (player, reason) = match self.last_gesture {
            Some(gesture) if gesture.is_move() => (gesture, RoundReason::R003_ROUND_RESOLVED),
            _ => (Gesture::Rock, RoundReason::R003_RESOLVED_WITH_FALLBACK),
        };
        let ai = self.predictor.predict();
        let outcome = self.engine.decide(player, ai);

        self.score.increment(outcome);
        self.predictor.update(player);
        self.timer = Timer::Idle;
        self.rounds_played += 1;

        let record = RoundRecord::new(player, ai, outcome);
        self.last_record = Some(record.clone());
        TickOutput::resolved(record, reason)
    }

    /// Zero the score. Predictor history is kept.
    pub fn reset_score(&mut self) -> RoundReason {
        self.score.reset();
        RoundReason::R004_SCORE_RESET
    }

    /// Get current phase
    pub fn phase(&self) -> RoundPhase {
        match self.timer {
            Timer::Idle => RoundPhase::Idle,
            Timer::Counting { .. } => RoundPhase::Countdown,
        }
    }

    pub fn is_counting(&self) -> bool {
        self.phase() == RoundPhase::Countdown
    }

    pub fn score(&self) -> ScoreTally {
        self.score.tally()
    }

    pub fn last_gesture(&self) -> Option<Gesture> {
        self.last_gesture
    }

    pub fn last_record(&self) -> Option<&RoundRecord> {
        self.last_record.as_ref()
    }

    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    /// Player move counts learned so far
    pub fn frequencies(&self) -> &GestureFrequencyTable {
        self.predictor.table()
    }
}

// =============================================================================
// TESTS
// =============================================================================
