//! Display sinks for the per-frame overlay

use colored::Colorize;
use crate::types::{FrameView, CONTROL_HINTS};

/// Receives the overlay state every frame
pub trait DisplaySink {
    fn render(&mut self, view: &FrameView);
}

/// Collects every view, for tests and recordings
impl DisplaySink for Vec<FrameView> {
    fn render(&mut self, view: &FrameView) {
        self.push(view.clone());
    }
}

/// Terminal overlay. Prints only when the view changes.
#[derive(Debug, Default)]
pub struct TerminalDisplay {
    json: bool,
    last: Option<FrameView>,
}

impl TerminalDisplay {
    pub fn new(json: bool) -> Self {
        Self { json, last: None }
    }

    /// Startup banner with the control hints
    pub fn print_header(&self, version: &str) {
        if self.json {
            return;
        }
        println!("{}", format!("rps-vision v{}", version).bold());
        println!("{}", CONTROL_HINTS.dimmed());
        println!();
    }

    /// One overlay line, e.g. `Detected: rock | P:0  AI:1  Ties:0 | Countdown: 2`
    pub fn format_view(view: &FrameView) -> String {
        let mut line = format!(
            "Detected: {} {} | {}",
            view.detected.emoji(),
            view.detected.label().color(view.detected.color()),
            view.score
        );
        if let Some(countdown) = view.countdown {
            line.push_str(&format!(" | {}", format!("Countdown: {}", countdown).yellow().bold()));
        }
        if let Some(record) = &view.last_round {
            line.push_str(&format!(" | {}", record.to_terminal_string()));
        }
        line
    }
}

impl DisplaySink for TerminalDisplay {
    fn render(&mut self, view: &FrameView) {
        if self.last.as_ref() == Some(view) {
            return;
        }
        if self.json {
            match serde_json::to_string(view) {
                Ok(json) => println!("{}", json),
                Err(e) => log::warn!("view not serializable: {}", e),
            }
        } else {
            println!("{}", Self::format_view(view));
        }
        self.last = Some(view.clone());
    }
}
