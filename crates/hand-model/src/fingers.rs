//! Finger extension vectors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// The five digits, in vector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    /// Slot of this finger in a [`FingerVector`].
    pub const fn slot(self) -> usize {
        self as usize
    }
}

/// Which fingers are extended, ordered `[thumb, index, middle, ring, pinky]`.
///
/// On the wire this is an array of five `0`/`1` integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(into = "[u8; 5]", try_from = "[u8; 5]")]
pub struct FingerVector([bool; 5]);

impl FingerVector {
    pub const FIST: FingerVector = FingerVector([false; 5]);
    pub const OPEN_PALM: FingerVector = FingerVector([true; 5]);

    pub const fn new(extended: [bool; 5]) -> Self {
        Self(extended)
    }

    /// Build from `0`/`1` digits; any non-zero digit counts as extended.
    pub const fn from_digits(digits: [u8; 5]) -> Self {
        Self([
            digits[0] != 0,
            digits[1] != 0,
            digits[2] != 0,
            digits[3] != 0,
            digits[4] != 0,
        ])
    }

    pub fn is_extended(&self, finger: Finger) -> bool {
        self.0[finger.slot()]
    }

    /// Number of extended fingers.
    pub fn extended_count(&self) -> usize {
        self.0.iter().filter(|&&up| up).count()
    }

    pub fn as_array(&self) -> [bool; 5] {
        self.0
    }

    pub fn to_digits(&self) -> [u8; 5] {
        self.0.map(u8::from)
    }

    /// Iterate `(finger, extended)` pairs in vector order.
    pub fn iter(&self) -> impl Iterator<Item = (Finger, bool)> + '_ {
        Finger::ALL.into_iter().zip(self.0.iter().copied())
    }
}

impl From<[bool; 5]> for FingerVector {
    fn from(extended: [bool; 5]) -> Self {
        Self(extended)
    }
}

impl From<FingerVector> for [u8; 5] {
    fn from(fingers: FingerVector) -> Self {
        fingers.to_digits()
    }
}

impl TryFrom<[u8; 5]> for FingerVector {
    type Error = ModelError;

    fn try_from(digits: [u8; 5]) -> Result<Self, Self::Error> {
        if let Some(&value) = digits.iter().find(|&&d| d > 1) {
            return Err(ModelError::FingerSlot { value });
        }
        Ok(Self::from_digits(digits))
    }
}

impl fmt::Display for FingerVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e] = self.to_digits();
        write!(f, "({a},{b},{c},{d},{e})")
    }
}
