//! Gesture names carried by hand states.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Direction of a wrist swipe, in image coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

impl SwipeDirection {
    /// Gesture name emitted for this swipe.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "swipe_left",
            Self::Right => "swipe_right",
            Self::Up => "swipe_up",
            Self::Down => "swipe_down",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "swipe_left" => Some(Self::Left),
            "swipe_right" => Some(Self::Right),
            "swipe_up" => Some(Self::Up),
            "swipe_down" => Some(Self::Down),
            _ => None,
        }
    }
}

/// A gesture reported for one hand: either a motion or a static pose.
///
/// Serialized as its bare name, e.g. `"swipe_right"` or `"Open Palm"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gesture {
    Swipe(SwipeDirection),
    Pose(String),
}

impl Gesture {
    pub fn pose(name: impl Into<String>) -> Self {
        Self::Pose(name.into())
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Swipe(direction) => direction.as_str(),
            Self::Pose(name) => name,
        }
    }

    pub fn is_swipe(&self) -> bool {
        matches!(self, Self::Swipe(_))
    }
}

impl From<SwipeDirection> for Gesture {
    fn from(direction: SwipeDirection) -> Self {
        Self::Swipe(direction)
    }
}

impl From<String> for Gesture {
    fn from(name: String) -> Self {
        match SwipeDirection::from_name(&name) {
            Some(direction) => Self::Swipe(direction),
            None => Self::Pose(name),
        }
    }
}

impl From<Gesture> for String {
    fn from(gesture: Gesture) -> Self {
        match gesture {
            Gesture::Swipe(direction) => direction.as_str().to_string(),
            Gesture::Pose(name) => name,
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
