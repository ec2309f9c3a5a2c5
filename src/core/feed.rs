//! Frame feed: hand-pose detector output as JSON lines
//!
//! One line per frame:
//! `{"t": 0.033, "hand": {"laterality": "Right", "landmarks": [...]}, "key": "start-round"}`
//! All fields optional. `t` is seconds since the feed started.

use std::io::BufRead;
use std::time::Duration;
use serde::Deserialize;
use crate::core::ManualClock;
use crate::types::{Frame, HandPoseSample, KeyEvent};

/// Result of asking a source for the next frame
#[derive(Debug, Clone, PartialEq)]
pub enum FrameRead {
    /// A frame arrived
    Frame(Frame),
    /// Nothing usable this tick
    Miss,
    /// Source is exhausted
    Closed,
}

/// Produces one frame per tick
pub trait FrameSource {
    fn next_frame(&mut self) -> FrameRead;
}

#[derive(Debug, Deserialize)]
struct FeedLine {
    #[serde(default)]
    t: Option<f64>,
    #[serde(default)]
    hand: Option<HandPoseSample>,
    #[serde(default)]
    key: Option<KeyEvent>,
}

/// JSON-lines frame source
pub struct JsonFeed<B> {
    reader: B,
    /// Clock driven by the feed in replay mode
    clock: Option<ManualClock>,
    frame_period: Duration,
    line_no: u64,
}

impl<B: BufRead> JsonFeed<B> {
    /// Feed that does not touch any clock (live mode)
    pub fn live(reader: B) -> Self {
        Self {
            reader,
            clock: None,
            frame_period: Duration::ZERO,
            line_no: 0,
        }
    }

    /// Feed that drives `clock`: from `t` when present, else by `frame_period`
    pub fn replay(reader: B, clock: ManualClock, frame_period: Duration) -> Self {
        Self {
            reader,
            clock: Some(clock),
            frame_period,
            line_no: 0,
        }
    }

    fn advance_clock(&self, t: Option<f64>) {
        let Some(clock) = &self.clock else {
            return;
        };
        match t {
            Some(secs) => match Duration::try_from_secs_f64(secs) {
                Ok(elapsed) => clock.set_elapsed(elapsed),
                Err(_) => {
                    log::warn!("feed line {}: unusable timestamp {}", self.line_no, secs);
                    clock.advance(self.frame_period)
                }
            },
            None => clock.advance(self.frame_period),
        }
    }
}

impl<B: BufRead> FrameSource for JsonFeed<B> {
    fn next_frame(&mut self) -> FrameRead {
        let mut bytes = Vec::new();
        match self.reader.read_until(b'\n', &mut bytes) {
            Ok(0) => return FrameRead::Closed,
            Ok(_) => {}
            Err(e) => {
                log::warn!("feed read error: {}", e);
                return FrameRead::Closed;
            }
        }
        self.line_no += 1;

        let Ok(line) = std::str::from_utf8(&bytes) else {
            log::warn!("feed line {} skipped: not valid UTF-8", self.line_no);
            self.advance_clock(None);
            return FrameRead::Miss;
        };
        let line = line.trim();
        if line.is_empty() {
            self.advance_clock(None);
            return FrameRead::Miss;
        }

        match serde_json::from_str::<FeedLine>(line) {
            Ok(parsed) => {
                self.advance_clock(parsed.t);
                FrameRead::Frame(Frame::new(parsed.hand, parsed.key))
            }
            Err(e) => {
                log::warn!("feed line {} skipped: {}", self.line_no, e);
                self.advance_clock(None);
                FrameRead::Miss
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Laterality;

    #[test]
    fn test_parses_frames_and_keys() {
        let input = "{\"key\":\"space\"}\n{\"hand\":{\"laterality\":\"Left\",\"landmarks\":[]}}\n";
        let mut feed = JsonFeed::live(input.as_bytes());

        assert_eq!(feed.next_frame(), FrameRead::Frame(Frame::new(None, Some(KeyEvent::StartRound))));
        match feed.next_frame() {
            FrameRead::Frame(frame) => {
                assert_eq!(frame.hand.map(|h| h.laterality), Some(Laterality::Left));
                assert_eq!(frame.key, None);
            }
            other => panic!("expected frame, got {:?}", other),
        }
        assert_eq!(feed.next_frame(), FrameRead::Closed);
    }

    #[test]
    fn test_blank_and_malformed_lines_miss() {
        let mut feed = JsonFeed::live("\nnot json\n{}\n".as_bytes());
        assert_eq!(feed.next_frame(), FrameRead::Miss);
        assert_eq!(feed.next_frame(), FrameRead::Miss);
        assert_eq!(feed.next_frame(), FrameRead::Frame(Frame::default()));
    }

    #[test]
    fn test_replay_drives_clock() {
        let clock = ManualClock::new();
        let input = "{}\n{\"t\":1.5}\n{}\n{\"t\":0.2}\n";
        let mut feed = JsonFeed::replay(input.as_bytes(), clock.clone(), Duration::from_millis(100));

        feed.next_frame();
        assert_eq!(clock.elapsed(), Duration::from_millis(100));
        feed.next_frame();
        assert_eq!(clock.elapsed(), Duration::from_millis(1500));
        feed.next_frame();
        assert_eq!(clock.elapsed(), Duration::from_millis(1600));
        // Backwards timestamps are ignored
        feed.next_frame();
        assert_eq!(clock.elapsed(), Duration::from_millis(1600));
    }

    #[test]
    fn test_invalid_utf8_line_is_skipped() {
        let input: &[u8] = b"{}\n\xff\xfe\n{}\n{}\n";
        let mut feed = JsonFeed::live(input);
        assert_eq!(feed.next_frame(), FrameRead::Frame(Frame::default()));
        assert_eq!(feed.next_frame(), FrameRead::Miss);
        assert_eq!(feed.next_frame(), FrameRead::Frame(Frame::default()));
        assert_eq!(feed.next_frame(), FrameRead::Frame(Frame::default()));
        assert_eq!(feed.next_frame(), FrameRead::Closed);
    }

    #[test]
    fn test_out_of_range_timestamp_uses_frame_period() {
        let clock = ManualClock::new();
        let input = "{\"t\":1e20}\n{\"t\":-4.0}\n{\"key\":\"quit\"}\n";
        let mut feed = JsonFeed::replay(input.as_bytes(), clock.clone(), Duration::from_millis(50));

        assert_eq!(feed.next_frame(), FrameRead::Frame(Frame::default()));
        assert_eq!(clock.elapsed(), Duration::from_millis(50));
        assert_eq!(feed.next_frame(), FrameRead::Frame(Frame::default()));
        assert_eq!(clock.elapsed(), Duration::from_millis(100));
        assert_eq!(feed.next_frame(), FrameRead::Frame(Frame::new(None, Some(KeyEvent::Quit))));
    }
}
