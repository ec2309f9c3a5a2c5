//! Gesture classifier: hand landmarks → rock / paper / scissors / unknown
//!
//! Counts extended digits:
//! - fingers: tip above PIP (tip.y < pip.y, image y grows downward)
//! - thumb: horizontal tip vs IP test, direction depends on laterality
//!
//! Rules, first match wins: ≥4 extended → Paper; index+middle only → Scissors;
//! ≤1 extended → Rock; else Unknown.

use serde::{Deserialize, Serialize};
use crate::types::{Digit, Gesture, HandPoseSample, Laterality};

/// Which digits read as extended in one sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtendedDigits {
    pub thumb: bool,
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl std::fmt::Display for ExtendedDigits {
    /// Thumb to pinky, `1` for extended: `01100` is scissors
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for up in [self.thumb, self.index, self.middle, self.ring, self.pinky] {
            write!(f, "{}", if up { '1' } else { '0' })?;
        }
        Ok(())
    }
}

impl ExtendedDigits {
    /// Number of extended digits, thumb included
    pub fn count(&self) -> usize {
        [self.thumb, self.index, self.middle, self.ring, self.pinky]
            .iter()
            .filter(|up| **up)
            .count()
    }

    fn set(&mut self, digit: Digit, up: bool) {
        match digit {
            Digit::Thumb => self.thumb = up,
            Digit::Index => self.index = up,
            Digit::Middle => self.middle = up,
            Digit::Ring => self.ring = up,
            Digit::Pinky => self.pinky = up,
        }
    }
}

/// Deterministic hand-shape classifier
#[derive(Debug, Default, Clone, Copy)]
pub struct GestureClassifier;

impl GestureClassifier {
    /// Create new classifier
    pub fn new() -> Self {
        Self
    }

    /// Classify a sample. No sample → Unknown.
    pub fn classify(&self, sample: Option<&HandPoseSample>) -> Gesture {
        let Some(sample) = sample else {
            return Gesture::Unknown;
        };
        Self::gesture_for(&self.extended_digits(sample))
    }

    /// Per-digit extension. Missing landmarks leave a digit not extended.
    pub fn extended_digits(&self, sample: &HandPoseSample) -> ExtendedDigits {
        let mut digits = ExtendedDigits::default();
        for digit in Digit::FINGERS {
            digits.set(digit, finger_extended(sample, digit));
        }
        digits.thumb = thumb_extended(sample);
        digits
    }

    /// Apply the classification rules to an extension pattern
    pub fn gesture_for(digits: &ExtendedDigits) -> Gesture {
        let count = digits.count();
        if count >= 4 {
            return Gesture::Paper;
        }
        if digits.index && digits.middle && !digits.ring && !digits.pinky {
            return Gesture::Scissors;
        }
        if count <= 1 {
            return Gesture::Rock;
        }
        Gesture::Unknown
    }
}

fn finger_extended(sample: &HandPoseSample, digit: Digit) -> bool {
    match (sample.landmark(digit.tip()), sample.landmark(digit.joint())) {
        (Some(tip), Some(pip)) => tip.y < pip.y,
        _ => false,
    }
}

// Heuristic: a mirrored camera can flip which side the thumb opens to.
fn thumb_extended(sample: &HandPoseSample) -> bool {
    match (sample.landmark(Digit::Thumb.tip()), sample.landmark(Digit::Thumb.joint())) {
        (Some(tip), Some(ip)) => match sample.laterality {
            Laterality::Right => tip.x < ip.x,
            Laterality::Left => tip.x > ip.x,
        },
        _ => false,
    }
}

// =============================================================================
// TESTS
// =============================================================================
