//! Per-frame finger extension from landmark geometry.
//!
//! Assumes a mirrored front-camera image with y growing downward.

use handstream_hand_model::fingers::FingerVector;
use handstream_hand_model::landmarks::{
    HandLabel, Landmarks, INDEX_MCP, INDEX_PIP, INDEX_TIP, MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP,
    PINKY_MCP, PINKY_PIP, PINKY_TIP, RING_MCP, RING_PIP, RING_TIP, THUMB_IP, THUMB_TIP,
};

/// Minimum vertical tip-to-wrist distance for a finger to count as extended.
/// Rejects flattened readings when the hand faces the lens head-on.
pub const WRIST_DISTANCE_GUARD: f64 = 0.1;

/// `(tip, joint, base)` landmark indices for index, middle, ring, pinky.
const FINGER_JOINTS: [(usize, usize, usize); 4] = [
    (INDEX_TIP, INDEX_PIP, INDEX_MCP),
    (MIDDLE_TIP, MIDDLE_PIP, MIDDLE_MCP),
    (RING_TIP, RING_PIP, RING_MCP),
    (PINKY_TIP, PINKY_PIP, PINKY_MCP),
];

/// Classify which fingers are extended. Total: out-of-range coordinates
/// just produce best-effort booleans.
pub fn classify_fingers(landmarks: &Landmarks, label: HandLabel) -> FingerVector {
    let mut extended = [false; 5];
    extended[0] = thumb_extended(landmarks, label);

    let wrist = landmarks.wrist();
    for (slot, &(tip, joint, base)) in FINGER_JOINTS.iter().enumerate() {
        let tip = landmarks.point(tip);
        let joint = landmarks.point(joint);
        let base = landmarks.point(base);
        extended[slot + 1] = tip.y < joint.y
            && joint.y < base.y
            && (tip.y - wrist.y).abs() > WRIST_DISTANCE_GUARD;
    }

    FingerVector::new(extended)
}

fn thumb_extended(landmarks: &Landmarks, label: HandLabel) -> bool {
    let tip = landmarks.point(THUMB_TIP);
    let joint = landmarks.point(THUMB_IP);
    match label {
        HandLabel::Right => tip.x < joint.x,
        HandLabel::Left => tip.x > joint.x,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use handstream_hand_model::fingers::Finger;
    use handstream_hand_model::landmarks::{Landmark, LANDMARK_COUNT};
    use handstream_hand_model::synthetic::pose;

    fn digits(d: [u8; 5]) -> FingerVector {
        FingerVector::from_digits(d)
    }

    #[test]
    fn test_synthetic_poses_classify_back_to_their_vectors() {
        let vectors = [
            digits([0, 0, 0, 0, 0]),
            digits([1, 1, 1, 1, 1]),
            digits([0, 1, 0, 0, 0]),
            digits([1, 1, 0, 0, 1]),
            digits([0, 0, 1, 1, 0]),
        ];
        for label in HandLabel::ALL {
            for fingers in vectors {
                let hand = pose(fingers, label, (0.5, 0.7));
                assert_eq!(classify_fingers(&hand, label), fingers, "{label} {fingers}");
            }
        }
    }

    #[test]
    fn test_thumb_direction_is_mirrored_by_label() {
        // Geometry of an extended right thumb reads as folded for a left hand.
        let right_palm = pose(FingerVector::OPEN_PALM, HandLabel::Right, (0.5, 0.7));
        assert!(classify_fingers(&right_palm, HandLabel::Right).is_extended(Finger::Thumb));
        assert!(!classify_fingers(&right_palm, HandLabel::Left).is_extended(Finger::Thumb));
    }

    #[test]
    fn test_wrist_guard_rejects_short_fingers() {
        let mut points = [Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
        // Correct ordering, but the tip sits only 0.05 above the wrist.
        points[INDEX_MCP] = Landmark::new(0.5, 0.49, 0.0);
        points[INDEX_PIP] = Landmark::new(0.5, 0.47, 0.0);
        points[INDEX_TIP] = Landmark::new(0.5, 0.45, 0.0);
        let hand = Landmarks::new(points);
        assert!(!classify_fingers(&hand, HandLabel::Right).is_extended(Finger::Index));
    }

    #[test]
    fn test_degenerate_landmarks_are_all_folded() {
        let hand = Landmarks::default();
        assert_eq!(classify_fingers(&hand, HandLabel::Left), FingerVector::FIST);
        assert_eq!(classify_fingers(&hand, HandLabel::Right), FingerVector::FIST);
    }
}
