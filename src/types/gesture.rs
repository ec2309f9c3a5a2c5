//! Gesture definitions

use colored::Color;
use serde::{Deserialize, Serialize};

/// A classified hand shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gesture {
    /// Closed fist, at most one digit extended
    Rock,
    /// Open hand, four or more digits extended
    Paper,
    /// Index and middle extended, ring and pinky curled
    Scissors,
    /// Classification failure
    Unknown,
}

impl Gesture {
    /// The three playable moves, in tie-break priority order
    pub const MOVES: [Gesture; 3] = [Gesture::Rock, Gesture::Paper, Gesture::Scissors];

    /// Is this one of Rock/Paper/Scissors?
    pub fn is_move(&self) -> bool {
        !matches!(self, Gesture::Unknown)
    }

    /// The gesture that defeats this one
    pub fn counter(&self) -> Gesture {
        match self {
            Gesture::Rock => Gesture::Paper,
            Gesture::Paper => Gesture::Scissors,
            Gesture::Scissors => Gesture::Rock,
            Gesture::Unknown => Gesture::Unknown,
        }
    }

    /// Does this gesture beat `other`? Unknown never beats anything.
    pub fn beats(&self, other: Gesture) -> bool {
        matches!(
            (self, other),
            (Gesture::Rock, Gesture::Scissors)
                | (Gesture::Scissors, Gesture::Paper)
                | (Gesture::Paper, Gesture::Rock)
        )
    }

    /// Lowercase label used in logs and overlays
    pub fn label(&self) -> &'static str {
        match self {
            Gesture::Rock => "rock",
            Gesture::Paper => "paper",
            Gesture::Scissors => "scissors",
            Gesture::Unknown => "unknown",
        }
    }

    /// Terminal color for overlays
    pub fn color(&self) -> Color {
        match self {
            Gesture::Rock => Color::Red,
            Gesture::Paper => Color::Cyan,
            Gesture::Scissors => Color::Yellow,
            Gesture::Unknown => Color::BrightBlack,
        }
    }

    /// Get emoji for gesture
    pub fn emoji(&self) -> &'static str {
        match self {
            Gesture::Rock => "✊",
            Gesture::Paper => "✋",
            Gesture::Scissors => "✌",
            Gesture::Unknown => "❔",
        }
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
