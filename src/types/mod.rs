//! Core types for rps-vision

mod gesture;
mod pose;
mod outcome;
mod record;
mod score;
mod frequency;
mod state;
mod reason;
mod output;
mod frame;

pub use gesture::Gesture;
pub use pose::{
    Digit, HandPoseSample, Landmark, Laterality, WRIST, THUMB_CMC, THUMB_MCP, THUMB_IP,
    THUMB_TIP, INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP, MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP,
    MIDDLE_TIP, RING_MCP, RING_PIP, RING_DIP, RING_TIP, PINKY_MCP, PINKY_PIP, PINKY_DIP,
    PINKY_TIP,
};
pub use outcome::RoundOutcome;
pub use record::RoundRecord;
pub use score::ScoreTally;
pub use frequency::GestureFrequencyTable;
pub use state::RoundPhase;
pub use reason::{RoundReason, HistoryReason};
pub use output::TickOutput;
pub use frame::{Frame, FrameView, KeyEvent, CONTROL_HINTS};
