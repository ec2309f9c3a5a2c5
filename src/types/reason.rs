//! Reason codes for round events and history failures

use serde::{Deserialize, Serialize};

/// Reason codes for every round state machine report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum RoundReason {
    // =========================================================================
    // R001: Phase
    // =========================================================================
    /// No round running
    R001_STATE_IDLE,
    /// Countdown still running
    R001_COUNTDOWN_RUNNING,

    // =========================================================================
    // R002: Start requests
    // =========================================================================
    /// Countdown started
    R002_ROUND_STARTED,
    /// Start requested while a round is running, ignored
    R002_START_IGNORED_BUSY,

    // =========================================================================
    // R003: Resolution
    // =========================================================================
    /// Round resolved with the cached gesture
    R003_ROUND_RESOLVED,
    /// Round resolved, cached gesture was Unknown or absent so Rock was played
    R003_RESOLVED_WITH_FALLBACK,

    // =========================================================================
    // R004: Score
    // =========================================================================
    /// Score reset on request
    R004_SCORE_RESET,
}

impl RoundReason {
    /// Get the code string (for logging)
    pub fn code(&self) -> &'static str {
        match self {
            Self::R001_STATE_IDLE => "R001_STATE_IDLE",
            Self::R001_COUNTDOWN_RUNNING => "R001_COUNTDOWN_RUNNING",
            Self::R002_ROUND_STARTED => "R002_ROUND_STARTED",
            Self::R002_START_IGNORED_BUSY => "R002_START_IGNORED_BUSY",
            Self::R003_ROUND_RESOLVED => "R003_ROUND_RESOLVED",
            Self::R003_RESOLVED_WITH_FALLBACK => "R003_RESOLVED_WITH_FALLBACK",
            Self::R004_SCORE_RESET => "R004_SCORE_RESET",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::R001_STATE_IDLE => "Waiting for start-round",
            Self::R001_COUNTDOWN_RUNNING => "Countdown running",
            Self::R002_ROUND_STARTED => "Round started",
            Self::R002_START_IGNORED_BUSY => "Round already running, start ignored",
            Self::R003_ROUND_RESOLVED => "Round resolved",
            Self::R003_RESOLVED_WITH_FALLBACK => "Round resolved, no gesture seen so rock was played",
            Self::R004_SCORE_RESET => "Score reset",
        }
    }
}

impl std::fmt::Display for RoundReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

/// Reasons the history log could not be used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[allow(non_camel_case_types)]
pub enum HistoryReason {
    /// Log file could not be opened or created
    R301_HISTORY_OPEN_ERROR,
    /// Header row could not be written to an empty log
    R302_HISTORY_HEADER_ERROR,
    /// Record could not be appended
    R303_HISTORY_WRITE_ERROR,
}

impl HistoryReason {
    pub fn code(&self) -> &'static str {
        match self {
            Self::R301_HISTORY_OPEN_ERROR => "R301_HISTORY_OPEN_ERROR",
            Self::R302_HISTORY_HEADER_ERROR => "R302_HISTORY_HEADER_ERROR",
            Self::R303_HISTORY_WRITE_ERROR => "R303_HISTORY_WRITE_ERROR",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::R301_HISTORY_OPEN_ERROR => "Cannot open history log",
            Self::R302_HISTORY_HEADER_ERROR => "Cannot write history header",
            Self::R303_HISTORY_WRITE_ERROR => "Cannot append to history log",
        }
    }
}

impl std::fmt::Display for HistoryReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code(), self.description())
    }
}

impl std::error::Error for HistoryReason {}
