//! Static pose names for stable finger vectors.

use handstream_hand_model::fingers::FingerVector;
use handstream_hand_model::gesture::Gesture;

/// Recognized poses. Extend this table for more gestures.
pub const POSE_TABLE: [(FingerVector, &str); 10] = [
    (FingerVector::from_digits([0, 1, 0, 0, 0]), "Pointing (Index)"),
    (FingerVector::from_digits([0, 1, 1, 0, 0]), "Victory Sign"),
    (FingerVector::from_digits([0, 1, 1, 1, 0]), "Three-Finger Salute"),
    (FingerVector::from_digits([0, 1, 0, 0, 1]), "Horns"),
    (FingerVector::from_digits([1, 1, 0, 0, 1]), "I love you"),
    (FingerVector::from_digits([0, 0, 1, 0, 0]), "Rude!!!"),
    (FingerVector::from_digits([0, 0, 0, 0, 0]), "Fist"),
    (FingerVector::from_digits([1, 0, 0, 0, 0]), "Thumbs Up"),
    (FingerVector::from_digits([1, 1, 1, 1, 1]), "Open Palm"),
    (FingerVector::from_digits([1, 0, 0, 0, 1]), "Shaka Sign"),
];

/// Name for a finger vector: the table entry, or `"{k} fingers"`.
pub fn name_fingers(fingers: FingerVector) -> String {
    POSE_TABLE
        .iter()
        .find(|(pose, _)| *pose == fingers)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| format!("{} fingers", fingers.extended_count()))
}

/// [`name_fingers`] wrapped as a pose gesture.
pub fn pose_gesture(fingers: FingerVector) -> Gesture {
    Gesture::Pose(name_fingers(fingers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_table_entries_are_named() {
        assert_eq!(
            name_fingers(FingerVector::from_digits([0, 1, 0, 0, 0])),
            "Pointing (Index)"
        );
        assert_eq!(name_fingers(FingerVector::OPEN_PALM), "Open Palm");
        assert_eq!(name_fingers(FingerVector::FIST), "Fist");
    }

    #[test]
    fn test_unknown_vectors_fall_back_to_count() {
        assert_eq!(
            name_fingers(FingerVector::from_digits([0, 1, 1, 1, 1])),
            "4 fingers"
        );
        assert_eq!(
            name_fingers(FingerVector::from_digits([0, 0, 0, 1, 0])),
            "1 fingers"
        );
    }

    #[test]
    fn test_table_has_no_duplicate_vectors() {
        for (i, (a, _)) in POSE_TABLE.iter().enumerate() {
            for (b, _) in &POSE_TABLE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    proptest! {
        #[test]
        fn test_naming_is_total(extended in any::<[bool; 5]>()) {
            let fingers = FingerVector::new(extended);
            let name = name_fingers(fingers);
            match POSE_TABLE.iter().find(|(pose, _)| *pose == fingers) {
                Some((_, expected)) => prop_assert_eq!(name, *expected),
                None => prop_assert_eq!(name, format!("{} fingers", fingers.extended_count())),
            }
        }
    }
}
