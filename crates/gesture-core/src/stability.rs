//! Majority-vote debouncing of finger vectors.
//!
//! Each hand label keeps its own window of recent classifications. The stable
//! vector is the most frequent one in the window; ties go to the candidate
//! observed most recently, so the result never depends on container order.

use handstream_hand_model::fingers::FingerVector;
use handstream_hand_model::landmarks::{HandLabel, PerHand};

use crate::history::HistoryBuffer;

/// Per-hand sliding majority vote.
#[derive(Debug, Clone)]
pub struct StabilityFilter {
    histories: PerHand<HistoryBuffer<FingerVector>>,
}

impl StabilityFilter {
    /// Create a filter with a window of `buffer_size` frames per hand.
    pub fn new(buffer_size: usize) -> Self {
        Self {
            histories: PerHand::from_fn(|_| HistoryBuffer::new(buffer_size)),
        }
    }

    /// Record a classification and return the current stable vector.
    pub fn update(&mut self, label: HandLabel, fingers: FingerVector) -> FingerVector {
        let history = self.histories.get_mut(label);
        history.push(fingers);
        majority(history).unwrap_or(fingers)
    }

    /// Current window for a hand, oldest first.
    pub fn history(&self, label: HandLabel) -> &HistoryBuffer<FingerVector> {
        self.histories.get(label)
    }

    /// Forget everything seen for a hand.
    pub fn reset(&mut self, label: HandLabel) {
        self.histories.get_mut(label).clear();
    }
}

/// Most frequent vector in the window, scanning newest first so the most
/// recent candidate wins a tie.
fn majority(history: &HistoryBuffer<FingerVector>) -> Option<FingerVector> {
    let mut tallies: Vec<(FingerVector, usize)> = Vec::with_capacity(history.len());
    for fingers in history.iter().rev() {
        match tallies.iter_mut().find(|(seen, _)| seen == fingers) {
            Some((_, count)) => *count += 1,
            None => tallies.push((*fingers, 1)),
        }
    }

    let mut best: Option<(FingerVector, usize)> = None;
    for (fingers, count) in tallies {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((fingers, count));
        }
    }
    best.map(|(fingers, _)| fingers)
}
