//! Per-tick output of the round state machine

use serde::{Deserialize, Serialize};
use crate::types::{RoundPhase, RoundReason, RoundRecord};

/// What one tick of the round state machine produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickOutput {
    /// Phase as of this tick
    pub phase: RoundPhase,
    /// Whole seconds left, only while counting down
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countdown: Option<u32>,
    /// The round record, only on the tick that resolved the round
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<RoundRecord>,
    /// Reason for this report
    pub reason: RoundReason,
}

impl TickOutput {
    pub fn idle() -> Self {
        Self {
            phase: RoundPhase::Idle,
            countdown: None,
            record: None,
            reason: RoundReason::R001_STATE_IDLE,
        }
    }

    pub fn counting(remaining: u32) -> Self {
        Self {
            phase: RoundPhase::Countdown,
            countdown: Some(remaining),
            record: None,
            reason: RoundReason::R001_COUNTDOWN_RUNNING,
        }
    }

    pub fn resolved(record: RoundRecord, reason: RoundReason) -> Self {
        Self {
            phase: RoundPhase::JustResolved,
            countdown: None,
            record: Some(record),
            reason,
        }
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        let countdown = self
            .countdown
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        let round = self
            .record
            .as_ref()
            .map(|r| r.summary())
            .unwrap_or_else(|| "-".to_string());
        format!(
            "phase={} | countdown={} | round={} | reason={}",
            self.phase,
            countdown,
            round,
            self.reason.code()
        )
    }
}
