use handstream_gesture_core::{
    classify_fingers, name_fingers, StabilityFilter, SwipeClassifier,
};
use handstream_hand_model::gesture::SwipeDirection;
use handstream_hand_model::landmarks::HandLabel;
use handstream_hand_model::synthetic;

#[test]
fn palm_to_fist_recording_converges_to_fist() {
    let frames = synthetic::palm_to_fist(10, 30.0);
    let mut filter = StabilityFilter::new(5);

    let names: Vec<String> = frames
        .iter()
        .map(|frame| {
            let hand = &frame.hands[0];
            let raw = classify_fingers(&hand.landmarks, hand.label);
            name_fingers(filter.update(hand.label, raw))
        })
        .collect();

    assert!(names[..7].iter().all(|n| n == "Open Palm"), "{names:?}");
    assert!(names[7..].iter().all(|n| n == "Fist"), "{names:?}");
}

#[test]
fn swipe_recording_reports_right_once_window_fills() {
    let frames = synthetic::swipe_right(12, 30.0);
    let mut swipes = SwipeClassifier::new(5, 0.1);

    let detected: Vec<Option<SwipeDirection>> = frames
        .iter()
        .map(|frame| {
            let hand = &frame.hands[0];
            swipes.update(hand.label, hand.landmarks.wrist_xy())
        })
        .collect();

    assert!(detected[..4].iter().all(Option::is_none));
    assert!(detected[4..]
        .iter()
        .all(|d| *d == Some(SwipeDirection::Right)));
}

#[test]
fn two_hand_recording_keeps_left_victory_stable() {
    let frames = synthetic::two_hands(20, 30.0);
    let mut filter = StabilityFilter::new(5);

    for frame in &frames {
        for hand in &frame.hands {
            let stable = filter.update(hand.label, classify_fingers(&hand.landmarks, hand.label));
            if hand.label == HandLabel::Left {
                assert_eq!(name_fingers(stable), "Victory Sign");
            }
        }
    }
}
