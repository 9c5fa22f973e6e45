//! Validate a landmark recording.

use std::path::PathBuf;

use handstream_gesture_core::{classify_fingers, name_fingers, StabilityFilter};
use handstream_hand_model::landmarks::{HandLabel, PerHand};
use handstream_hand_model::recording::{parse_recording, Recording};

/// Stable pose changes per hand, as `(frame index, pose name)`.
fn pose_timeline(recording: &Recording, buffer_size: usize) -> PerHand<Vec<(usize, String)>> {
    let mut filter = StabilityFilter::new(buffer_size);
    let mut timeline: PerHand<Vec<(usize, String)>> = PerHand::default();

    for (idx, frame) in recording.frames.iter().enumerate() {
        for hand in &frame.hands {
            let stable = filter.update(hand.label, classify_fingers(&hand.landmarks, hand.label));
            let name = name_fingers(stable);
            let changes = timeline.get_mut(hand.label);
            if changes.last().map(|(_, last)| last != &name).unwrap_or(true) {
                changes.push((idx, name));
            }
        }
    }
    timeline
}

pub fn run(path: PathBuf, buffer_size: usize) -> anyhow::Result<()> {
    println!("Validating recording at: {}", path.display());

    let content = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read recording: {e}"))?;
    let recording = parse_recording(&content)?;

    match &recording.header {
        Some(header) => {
            println!("  Schema: {}", header.schema_version);
            println!("  Source: {}", header.source);
            println!("  FPS: {}", header.fps);
        }
        None => println!("  Header: missing"),
    }
    println!("  Frames: {}", recording.frames.len());
    println!("  Frames with hands: {}", recording.frames_with_hands());

    let mut issues = Vec::new();
    if !recording.is_monotonic() {
        issues.push("timestamps go backwards".to_string());
    }
    for (idx, frame) in recording.frames.iter().enumerate() {
        for label in HandLabel::ALL {
            let count = frame.hands.iter().filter(|h| h.label == label).count();
            if count > 1 {
                issues.push(format!("frame {idx}: {count} hands labelled {label}"));
            }
        }
    }

    let timeline = pose_timeline(&recording, buffer_size.max(1));
    for (label, changes) in timeline.iter() {
        if changes.is_empty() {
            continue;
        }
        println!("\n  {label} hand:");
        for (idx, name) in changes {
            println!("    frame {idx:>5}: {name}");
        }
    }

    if issues.is_empty() {
        println!("\nRecording is valid.");
    } else {
        println!("\nValidation issues:");
        for issue in &issues {
            println!("  - {issue}");
        }
        println!("\n{} issue(s) found.", issues.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use handstream_hand_model::synthetic;

    #[test]
    fn test_palm_to_fist_timeline_has_one_flip() {
        let recording = Recording {
            header: None,
            frames: synthetic::palm_to_fist(10, 30.0),
        };
        let timeline = pose_timeline(&recording, 5);
        assert_eq!(
            timeline.get(HandLabel::Right),
            &vec![(0, "Open Palm".to_string()), (7, "Fist".to_string())]
        );
        assert!(timeline.get(HandLabel::Left).is_empty());
    }
}
