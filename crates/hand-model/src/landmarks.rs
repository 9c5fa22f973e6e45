//! Hand landmarks and handedness labels.
//!
//! Landmark indexing follows the common 21-point hand topology: the wrist is
//! index 0, then four points per digit from base to tip, thumb first.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Number of landmarks per detected hand.
pub const LANDMARK_COUNT: usize = 21;

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

/// A single normalized landmark.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Landmark {
    /// Normalized X coordinate [0.0, 1.0], left to right.
    pub x: f64,
    /// Normalized Y coordinate [0.0, 1.0], top to bottom.
    pub y: f64,
    /// Depth relative to the wrist; smaller is closer to the camera.
    #[serde(default)]
    pub z: f64,
}

impl Landmark {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// The 21 landmarks of one detected hand.
///
/// Serialized as a plain array; decoding rejects any other length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Landmark>", into = "Vec<Landmark>")]
pub struct Landmarks([Landmark; LANDMARK_COUNT]);

impl Landmarks {
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self(points)
    }

    /// Landmark at a topology index. Panics on an index >= 21, like slice indexing.
    pub fn point(&self, index: usize) -> Landmark {
        self.0[index]
    }

    pub fn wrist(&self) -> Landmark {
        self.0[WRIST]
    }

    /// Wrist position projected onto the image plane.
    pub fn wrist_xy(&self) -> (f64, f64) {
        let wrist = self.wrist();
        (wrist.x, wrist.y)
    }

    pub fn as_slice(&self) -> &[Landmark] {
        &self.0
    }
}

impl Default for Landmarks {
    fn default() -> Self {
        Self([Landmark::default(); LANDMARK_COUNT])
    }
}

impl TryFrom<Vec<Landmark>> for Landmarks {
    type Error = ModelError;

    fn try_from(points: Vec<Landmark>) -> Result<Self, Self::Error> {
        let actual = points.len();
        let points: [Landmark; LANDMARK_COUNT] =
            points.try_into().map_err(|_| ModelError::LandmarkCount {
                expected: LANDMARK_COUNT,
                actual,
            })?;
        Ok(Self(points))
    }
}

impl From<Landmarks> for Vec<Landmark> {
    fn from(landmarks: Landmarks) -> Self {
        landmarks.0.to_vec()
    }
}

/// Handedness reported by the detector.
///
/// Serialized lowercase (`"left"`/`"right"`); the detector's capitalized
/// spelling is accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandLabel {
    #[serde(alias = "Left")]
    Left,
    #[serde(alias = "Right")]
    Right,
}

impl HandLabel {
    pub const ALL: [HandLabel; 2] = [HandLabel::Left, HandLabel::Right];

    /// Lowercase name used on the wire.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for HandLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("Left"),
            Self::Right => f.write_str("Right"),
        }
    }
}

impl FromStr for HandLabel {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(ModelError::UnknownLabel {
                label: s.to_string(),
            }),
        }
    }
}

/// One value per hand-label slot.
///
/// Handedness doubles as hand identity: two physical right hands in the same
/// frame share the `right` slot and therefore share history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerHand<T> {
    left: T,
    right: T,
}

impl<T> PerHand<T> {
    pub fn new(left: T, right: T) -> Self {
        Self { left, right }
    }

    /// Build both slots from a constructor.
    pub fn from_fn(mut f: impl FnMut(HandLabel) -> T) -> Self {
        Self {
            left: f(HandLabel::Left),
            right: f(HandLabel::Right),
        }
    }

    pub fn get(&self, label: HandLabel) -> &T {
        match label {
            HandLabel::Left => &self.left,
            HandLabel::Right => &self.right,
        }
    }

    pub fn get_mut(&mut self, label: HandLabel) -> &mut T {
        match label {
            HandLabel::Left => &mut self.left,
            HandLabel::Right => &mut self.right,
        }
    }

    /// Iterate slots in label order (left, then right).
    pub fn iter(&self) -> impl Iterator<Item = (HandLabel, &T)> {
        [(HandLabel::Left, &self.left), (HandLabel::Right, &self.right)].into_iter()
    }
}
