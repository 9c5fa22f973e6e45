//! Synthetic hand poses and scripted recordings.
//!
//! Produces landmark sets whose geometry encodes a chosen finger vector, for
//! tests and demo recordings. Coordinates are not clamped, so keep the wrist
//! at least 0.35 below the top of the image and 0.15 from the sides.

use crate::event::TimestampNs;
use crate::fingers::{Finger, FingerVector};
use crate::landmarks::{HandLabel, Landmark, Landmarks, LANDMARK_COUNT, THUMB_CMC, WRIST};
use crate::recording::{Detection, RecordedFrame};

/// Horizontal spacing between finger columns.
const FINGER_SPACING: f64 = 0.035;

/// Landmarks for a hand at `wrist` showing `fingers`.
///
/// The thumb is laid out for a mirrored front camera, so the same vector
/// produces mirrored thumb geometry for left and right hands.
pub fn pose(fingers: FingerVector, label: HandLabel, wrist: (f64, f64)) -> Landmarks {
    let (wx, wy) = wrist;
    let mut points = [Landmark::new(wx, wy, 0.0); LANDMARK_COUNT];

    // Thumb points away from the palm: toward -x for a right hand.
    let side = match label {
        HandLabel::Right => -1.0,
        HandLabel::Left => 1.0,
    };
    let thumb_reach = if fingers.is_extended(Finger::Thumb) {
        0.14
    } else {
        0.04
    };
    points[THUMB_CMC] = Landmark::new(wx + side * 0.03, wy - 0.03, -0.01);
    points[THUMB_CMC + 1] = Landmark::new(wx + side * 0.06, wy - 0.06, -0.02);
    points[THUMB_CMC + 2] = Landmark::new(wx + side * 0.08, wy - 0.08, -0.03);
    points[THUMB_CMC + 3] = Landmark::new(wx + side * thumb_reach, wy - 0.09, -0.03);

    for (column, finger) in Finger::ALL[1..].iter().enumerate() {
        let base = 5 + column * 4;
        let x = wx - side * (column as f64 - 1.5) * FINGER_SPACING;
        let (pip_y, dip_y, tip_y) = if fingers.is_extended(*finger) {
            (wy - 0.25, wy - 0.30, wy - 0.35)
        } else {
            // Curled: tip drops back below the middle joint.
            (wy - 0.20, wy - 0.16, wy - 0.12)
        };
        points[base] = Landmark::new(x, wy - 0.15, -0.02);
        points[base + 1] = Landmark::new(x, pip_y, -0.03);
        points[base + 2] = Landmark::new(x, dip_y, -0.03);
        points[base + 3] = Landmark::new(x, tip_y, -0.03);
    }

    points[WRIST] = Landmark::new(wx, wy, 0.0);
    Landmarks::new(points)
}

/// A single-hand detection.
pub fn detection(fingers: FingerVector, label: HandLabel, wrist: (f64, f64)) -> Detection {
    Detection::new(label, pose(fingers, label, wrist))
}

/// Frame timestamps at a fixed rate.
pub fn timestamp_for(index: usize, fps: f64) -> TimestampNs {
    (index as f64 * 1_000_000_000.0 / fps.max(1.0)) as TimestampNs
}

/// Right hand holds an open palm for the first half, then a fist.
pub fn palm_to_fist(frames: usize, fps: f64) -> Vec<RecordedFrame> {
    let switch_at = frames / 2;
    (0..frames)
        .map(|i| {
            let fingers = if i < switch_at {
                FingerVector::OPEN_PALM
            } else {
                FingerVector::FIST
            };
            RecordedFrame {
                timestamp_ns: timestamp_for(i, fps),
                hands: vec![detection(fingers, HandLabel::Right, (0.5, 0.7))],
            }
        })
        .collect()
}

/// Right hand pointing while the wrist travels from x=0.2 to x=0.8.
pub fn swipe_right(frames: usize, fps: f64) -> Vec<RecordedFrame> {
    let pointing = FingerVector::from_digits([0, 1, 0, 0, 0]);
    let span = frames.saturating_sub(1).max(1) as f64;
    (0..frames)
        .map(|i| {
            let x = 0.2 + 0.6 * i as f64 / span;
            RecordedFrame {
                timestamp_ns: timestamp_for(i, fps),
                hands: vec![detection(pointing, HandLabel::Right, (x, 0.7))],
            }
        })
        .collect()
}

/// Both hands visible: the left holds a victory sign, the right alternates
/// between open palm and fist every quarter of the run. Every fifth frame
/// drops the left hand to exercise absent-hand handling.
pub fn two_hands(frames: usize, fps: f64) -> Vec<RecordedFrame> {
    let victory = FingerVector::from_digits([0, 1, 1, 0, 0]);
    let quarter = (frames / 4).max(1);
    (0..frames)
        .map(|i| {
            let right = if (i / quarter) % 2 == 0 {
                FingerVector::OPEN_PALM
            } else {
                FingerVector::FIST
            };
            let mut hands = vec![detection(right, HandLabel::Right, (0.65, 0.7))];
            if i % 5 != 4 {
                hands.push(detection(victory, HandLabel::Left, (0.3, 0.7)));
            }
            RecordedFrame {
                timestamp_ns: timestamp_for(i, fps),
                hands,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::{INDEX_MCP, INDEX_PIP, INDEX_TIP, THUMB_IP, THUMB_TIP};

    #[test]
    fn test_extended_index_is_stacked_upward() {
        let hand = pose(FingerVector::OPEN_PALM, HandLabel::Right, (0.5, 0.7));
        let tip = hand.point(INDEX_TIP);
        let pip = hand.point(INDEX_PIP);
        let mcp = hand.point(INDEX_MCP);
        assert!(tip.y < pip.y && pip.y < mcp.y);
        assert!((tip.y - hand.wrist().y).abs() > 0.1);
    }

    #[test]
    fn test_thumb_is_mirrored_by_label() {
        let right = pose(FingerVector::OPEN_PALM, HandLabel::Right, (0.5, 0.7));
        let left = pose(FingerVector::OPEN_PALM, HandLabel::Left, (0.5, 0.7));
        assert!(right.point(THUMB_TIP).x < right.point(THUMB_IP).x);
        assert!(left.point(THUMB_TIP).x > left.point(THUMB_IP).x);
    }

    #[test]
    fn test_palm_to_fist_switches_halfway() {
        let frames = palm_to_fist(10, 30.0);
        assert_eq!(frames.len(), 10);
        assert_eq!(frames[1].timestamp_ns, 33_333_333);
        assert_ne!(frames[4].hands[0].landmarks, frames[5].hands[0].landmarks);
        assert_eq!(frames[5].hands[0].landmarks, frames[9].hands[0].landmarks);
    }

    #[test]
    fn test_two_hands_drops_left_periodically() {
        let frames = two_hands(10, 30.0);
        assert_eq!(frames[3].hands.len(), 2);
        assert_eq!(frames[4].hands.len(), 1);
        assert_eq!(frames[4].hands[0].label, HandLabel::Right);
    }
}
