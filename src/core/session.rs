//! Game session: the frame-driven loop
//!
//! Per tick, in order: read frame → classify → advance round → log → render → handle key.

use rand::Rng;
use serde::{Deserialize, Serialize};
use crate::MIN_DETECTION_CONFIDENCE;
use crate::core::{Clock, DisplaySink, FrameRead, FrameSource, GestureClassifier, HistorySink, RoundStateMachine};
use crate::types::{Frame, FrameView, Gesture, KeyEvent, RoundReason, ScoreTally, TickOutput};

/// Whether the loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Totals reported when a session ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub frames: u64,
    pub missed_frames: u64,
    pub rounds: u64,
    pub score: ScoreTally,
}

/// One player's game
pub struct GameSession<C, R, D> {
    classifier: GestureClassifier,
    machine: RoundStateMachine<C, R>,
    display: D,
    /// Best-effort; dropped on first failure
    history: Option<Box<dyn HistorySink>>,
    frames: u64,
    missed_frames: u64,
}

impl<C: Clock, R: Rng, D: DisplaySink> GameSession<C, R, D> {
    pub fn new(machine: RoundStateMachine<C, R>, display: D, history: Option<Box<dyn HistorySink>>) -> Self {
        Self {
            classifier: GestureClassifier::new(),
            machine,
            display,
            history,
            frames: 0,
            missed_frames: 0,
        }
    }

    /// Run until quit or until the source closes
    pub fn run<F: FrameSource>(&mut self, source: &mut F) -> SessionSummary {
        loop {
            match source.next_frame() {
                FrameRead::Closed => {
                    log::info!("frame source closed");
                    break;
                }
                FrameRead::Miss => {
                    self.missed_frames += 1;
                    continue;
                }
                FrameRead::Frame(frame) => {
                    if self.step(&frame) == Flow::Quit {
                        log::info!("quit requested");
                        break;
                    }
                }
            }
        }
        self.summary()
    }

    /// Process one frame
    pub fn step(&mut self, frame: &Frame) -> Flow {
        self.frames += 1;

        let hand = frame
            .hand
            .as_ref()
            .filter(|h| h.is_confident(MIN_DETECTION_CONFIDENCE));
        let detected = match hand {
            Some(sample) => {
                if !sample.is_complete() {
                    log::debug!("partial hand sample: {} landmarks", sample.landmarks.len());
                }
                let digits = self.classifier.extended_digits(sample);
                let gesture = GestureClassifier::gesture_for(&digits);
                log::debug!("extended {} → {}", digits, gesture);
                self.machine.observe(gesture);
                gesture
            }
            None => Gesture::Unknown,
        };

        let tick = self.machine.tick();
        self.record(&tick);
        self.render(detected, &tick);

        match frame.key {
            Some(KeyEvent::Quit) => return Flow::Quit,
            Some(KeyEvent::ResetScore) => {
                self.machine.reset_score();
                log::info!("score reset");
            }
            Some(KeyEvent::StartRound) => {
                if self.machine.start_round() == RoundReason::R002_START_IGNORED_BUSY {
                    log::debug!("start-round ignored, countdown running");
                }
            }
            None => {}
        }
        Flow::Continue
    }

    fn record(&mut self, tick: &TickOutput) {
        let Some(record) = &tick.record else {
            return;
        };
        log::info!("round: {}", record.summary());
        log::debug!("{}", tick.to_parseable_string());
        if let Some(history) = self.history.as_mut() {
            if let Err(reason) = history.append(record) {
                log::warn!("history disabled: {}", reason);
                self.history = None;
            }
        }
    }

    fn render(&mut self, detected: Gesture, tick: &TickOutput) {
        let view = FrameView {
            detected,
            score: self.machine.score(),
            countdown: tick.countdown,
            last_round: self.machine.last_record().cloned(),
        };
        self.display.render(&view);
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            frames: self.frames,
            missed_frames: self.missed_frames,
            rounds: self.machine.rounds_played(),
            score: self.machine.score(),
        }
    }

    pub fn machine(&self) -> &RoundStateMachine<C, R> {
        &self.machine
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Is the history log still active?
    pub fn history_enabled(&self) -> bool {
        self.history.is_some()
    }
}
