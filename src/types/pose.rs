//! Hand pose samples produced by the external hand-pose detector

use serde::{Deserialize, Serialize};
use crate::LANDMARK_COUNT;

// =============================================================================
// LANDMARK INDICES (21-point hand model)
// =============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// One tracked joint, normalized to [0,1] image space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Which hand the detector reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Laterality {
    Left,
    #[default]
    Right,
}

/// The five digits of a hand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Digit {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Digit {
    /// Non-thumb digits, tested with the vertical rule
    pub const FINGERS: [Digit; 4] = [Digit::Index, Digit::Middle, Digit::Ring, Digit::Pinky];

    /// Tip landmark index
    pub fn tip(&self) -> usize {
        match self {
            Digit::Thumb => THUMB_TIP,
            Digit::Index => INDEX_TIP,
            Digit::Middle => MIDDLE_TIP,
            Digit::Ring => RING_TIP,
            Digit::Pinky => PINKY_TIP,
        }
    }

    /// Reference joint index: IP for the thumb, PIP for the fingers
    pub fn joint(&self) -> usize {
        match self {
            Digit::Thumb => THUMB_IP,
            Digit::Index => INDEX_PIP,
            Digit::Middle => MIDDLE_PIP,
            Digit::Ring => RING_PIP,
            Digit::Pinky => PINKY_PIP,
        }
    }
}

/// One detected hand in one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandPoseSample {
    /// Left or right hand
    #[serde(default)]
    pub laterality: Laterality,
    /// Landmarks in model order; may be partial
    #[serde(default)]
    pub landmarks: Vec<Landmark>,
    /// Detector confidence, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

impl HandPoseSample {
    pub fn new(laterality: Laterality, landmarks: Vec<Landmark>) -> Self {
        Self {
            laterality,
            landmarks,
            confidence: None,
        }
    }

    /// Landmark at `index`, or None if absent or non-finite
    pub fn landmark(&self, index: usize) -> Option<&Landmark> {
        self.landmarks.get(index).filter(|lm| lm.is_finite())
    }

    /// Are all landmarks of the hand model present?
    pub fn is_complete(&self) -> bool {
        self.landmarks.len() >= LANDMARK_COUNT
            && self.landmarks.iter().take(LANDMARK_COUNT).all(Landmark::is_finite)
    }

    /// Does the detector confidence clear `threshold`? Unreported confidence passes.
    pub fn is_confident(&self, threshold: f32) -> bool {
        self.confidence.map_or(true, |c| c >= threshold)
    }
}
