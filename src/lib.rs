//! rps-vision: rock-paper-scissors against an adaptive AI
//!
//! Hand-pose frames → GestureClassifier → RoundStateMachine → display + history

pub mod core;
pub mod types;

// =============================================================================
// ROUND TIMING
// =============================================================================

/// Countdown length from start-round to resolution (seconds)
pub const COUNTDOWN_SECS: f64 = 3.0;

/// Frame period used by replay feeds when a line carries no timestamp (milliseconds)
/// 33ms ≈ 30 fps camera
pub const DEFAULT_FRAME_MS: u64 = 33;

// =============================================================================
// OPPONENT
// =============================================================================

/// Probability of playing the counter to the player's most frequent move
pub const EXPLOIT_PROBABILITY: f64 = 0.75;

// =============================================================================
// DETECTION
// =============================================================================

/// Landmarks per hand in the tracked hand model
pub const LANDMARK_COUNT: usize = 21;

/// Detector confidence below which a sample counts as "no hand"
pub const MIN_DETECTION_CONFIDENCE: f32 = 0.6;

// =============================================================================
// HISTORY
// =============================================================================

/// Header row written to an empty history log
pub const HISTORY_HEADER: &str = "timestamp,player,ai,result";

/// Default history log path
pub const DEFAULT_HISTORY_PATH: &str = "rps_log.csv";

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
