//! Frames, key events, and the overlay view handed to the display

use serde::{Deserialize, Serialize};
use crate::types::{Gesture, HandPoseSample, RoundRecord, ScoreTally};

/// Key hints shown to the player
pub const CONTROL_HINTS: &str = "SPACE=start round  r=reset score  q=quit";

/// Discrete input events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyEvent {
    #[serde(alias = "space", alias = " ")]
    StartRound,
    #[serde(alias = "r")]
    ResetScore,
    #[serde(alias = "q", alias = "esc")]
    Quit,
}

/// One tick of input: the first detected hand (if any) plus one key poll
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    #[serde(default)]
    pub hand: Option<HandPoseSample>,
    #[serde(default)]
    pub key: Option<KeyEvent>,
}

impl Frame {
    pub fn new(hand: Option<HandPoseSample>, key: Option<KeyEvent>) -> Self {
        Self { hand, key }
    }
}

/// Overlay state for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameView {
    /// Gesture detected in this frame (Unknown when no hand)
    pub detected: Gesture,
    /// Running score
    pub score: ScoreTally,
    /// Countdown value while a round is running
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countdown: Option<u32>,
    /// Most recent round, cleared when a new round starts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_round: Option<RoundRecord>,
}
