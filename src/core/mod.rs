//! Core modules for rps-vision

pub mod classifier;
pub mod predictor;
pub mod outcome;
pub mod clock;
pub mod round;
pub mod history;
pub mod feed;
pub mod display;
pub mod session;

pub use classifier::{GestureClassifier, ExtendedDigits};
pub use predictor::OpponentPredictor;
pub use outcome::{RoundOutcomeEngine, ScoreTracker};
pub use clock::{Clock, SystemClock, ManualClock};
pub use round::RoundStateMachine;
pub use history::{HistorySink, CsvHistory, open_history};
pub use feed::{FrameSource, FrameRead, JsonFeed};
pub use display::{DisplaySink, TerminalDisplay};
pub use session::{GameSession, SessionSummary, Flow};
