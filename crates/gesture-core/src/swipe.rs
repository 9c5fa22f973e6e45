//! Windowed swipe detection from wrist motion.
//!
//! Compares the newest wrist position against the oldest one in a full
//! window. The window keeps sliding, so a sustained motion keeps reporting
//! the swipe on every frame rather than firing once.

use handstream_hand_model::gesture::SwipeDirection;
use handstream_hand_model::landmarks::{HandLabel, PerHand};

use crate::history::HistoryBuffer;

/// Per-hand swipe classifier.
#[derive(Debug, Clone)]
pub struct SwipeClassifier {
    histories: PerHand<HistoryBuffer<(f64, f64)>>,
    threshold: f64,
}

impl SwipeClassifier {
    /// `threshold` is the minimum displacement across the window, in
    /// normalized image units.
    pub fn new(buffer_size: usize, threshold: f64) -> Self {
        Self {
            histories: PerHand::from_fn(|_| HistoryBuffer::new(buffer_size)),
            threshold,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Record a wrist position and classify the window.
    ///
    /// Returns `None` until the window is full.
    pub fn update(&mut self, label: HandLabel, wrist: (f64, f64)) -> Option<SwipeDirection> {
        let history = self.histories.get_mut(label);
        history.push(wrist);
        if !history.is_full() {
            return None;
        }

        let (x0, y0) = *history.oldest()?;
        let (x1, y1) = *history.newest()?;
        let dx = x1 - x0;
        let dy = y1 - y0;

        let direction = if dx.abs() >= dy.abs() {
            if dx > self.threshold {
                Some(SwipeDirection::Right)
            } else if dx < -self.threshold {
                Some(SwipeDirection::Left)
            } else {
                None
            }
        } else if dy > self.threshold {
            Some(SwipeDirection::Down)
        } else if dy < -self.threshold {
            Some(SwipeDirection::Up)
        } else {
            None
        };

        if let Some(direction) = direction {
            tracing::trace!(hand = %label, dx, dy, direction = direction.as_str(), "Swipe");
        }
        direction
    }

    /// Forget the wrist trail for a hand.
    pub fn reset(&mut self, label: HandLabel) {
        self.histories.get_mut(label).clear();
    }
}
