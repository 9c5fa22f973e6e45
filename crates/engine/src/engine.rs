//! The per-frame hand engine.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use handstream_common::config::EngineConfig;
use handstream_common::error::HandResult;
use handstream_common::throttle::FrameThrottle;
use handstream_gesture_core::{classify_fingers, pose_gesture, StabilityFilter, SwipeClassifier};
use handstream_hand_model::event::{Frame, HandEvent, HandState};
use handstream_hand_model::fingers::FingerVector;
use handstream_hand_model::gesture::{Gesture, SwipeDirection};
use handstream_hand_model::landmarks::{HandLabel, PerHand};
use handstream_hand_model::recording::Detection;

use crate::sinks::Sink;
use crate::LandmarkSource;

/// The last emitted state of one hand, used only for change detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandSnapshot {
    pub fingers: FingerVector,
    pub gesture: Option<Gesture>,
}

/// What happened to a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Dropped by the frame-skip throttle before detection.
    Skipped,
    /// The source reported no hands; nothing was emitted or updated.
    NoHands,
    /// An event was assembled and offered to the sinks.
    Processed {
        any_change: bool,
        hands: usize,
        delivered: usize,
        failed: usize,
    },
}

/// Running totals since the engine was created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineStats {
    pub frames_seen: u64,
    pub frames_skipped: u64,
    pub frames_without_hands: u64,
    pub events: u64,
    pub changed_events: u64,
    pub deliveries: u64,
    pub sink_failures: u64,
}

/// Orchestrates classification, stabilization, change detection, and
/// dispatch for a stream of frames.
pub struct HandEngine {
    config: EngineConfig,
    source: Box<dyn LandmarkSource>,
    throttle: FrameThrottle,
    stability: StabilityFilter,
    swipes: SwipeClassifier,
    last_known: PerHand<Option<HandSnapshot>>,
    sinks: Vec<Box<dyn Sink>>,
    stop_flag: Arc<AtomicBool>,
    stats: EngineStats,
}

impl HandEngine {
    /// Create an engine. Fails if the config does not validate.
    pub fn new(config: EngineConfig, source: Box<dyn LandmarkSource>) -> HandResult<Self> {
        config.validate()?;

        Ok(Self {
            throttle: FrameThrottle::new(config.frame_skip),
            stability: StabilityFilter::new(config.buffer_size),
            swipes: SwipeClassifier::new(config.buffer_size, config.gesture_threshold),
            last_known: PerHand::default(),
            sinks: Vec::new(),
            stop_flag: Arc::new(AtomicBool::new(false)),
            stats: EngineStats::default(),
            config,
            source,
        })
    }

    /// Register a sink. Sinks receive events in registration order.
    pub fn add_sink(&mut self, sink: Box<dyn Sink>) {
        tracing::debug!(
            sink = %sink.name(),
            always = sink.always_consume(),
            "Sink registered"
        );
        self.sinks.push(sink);
    }

    pub fn with_sink(mut self, sink: Box<dyn Sink>) -> Self {
        self.add_sink(sink);
        self
    }

    /// Run one frame through the pipeline.
    ///
    /// Only a source failure is returned as an error; sink failures are
    /// logged and counted in the outcome.
    pub fn process_frame(&mut self, frame: Frame) -> HandResult<FrameOutcome> {
        self.stats.frames_seen += 1;

        if !self.throttle.should_process() {
            self.stats.frames_skipped += 1;
            return Ok(FrameOutcome::Skipped);
        }

        let mut detections = self.source.detect(&frame)?;
        if detections.is_empty() {
            self.stats.frames_without_hands += 1;
            return Ok(FrameOutcome::NoHands);
        }
        if detections.len() > self.config.max_hands {
            tracing::debug!(
                frame = frame.sequence,
                detected = detections.len(),
                max_hands = self.config.max_hands,
                "Ignoring hands beyond max_hands"
            );
            detections.truncate(self.config.max_hands);
        }

        let (event, any_change) = self.assemble(frame, detections);
        let (delivered, failed) = self.dispatch(&event, any_change);

        self.stats.events += 1;
        if any_change {
            self.stats.changed_events += 1;
        }
        self.stats.deliveries += delivered as u64;
        self.stats.sink_failures += failed as u64;

        Ok(FrameOutcome::Processed {
            any_change,
            hands: event.hands.len(),
            delivered,
            failed,
        })
    }

    /// Process frames until they run out or the stop flag is set.
    pub fn run(&mut self, frames: impl IntoIterator<Item = Frame>) -> HandResult<EngineStats> {
        tracing::info!(
            source = %self.source.name(),
            sinks = self.sinks.len(),
            buffer_size = self.config.buffer_size,
            frame_skip = self.config.frame_skip,
            "Hand engine started"
        );

        for frame in frames {
            if self.stop_flag.load(Ordering::Relaxed) {
                tracing::info!("Stop requested");
                break;
            }
            self.process_frame(frame)?;
        }

        tracing::info!(
            frames = self.stats.frames_seen,
            events = self.stats.events,
            changed = self.stats.changed_events,
            sink_failures = self.stats.sink_failures,
            "Hand engine stopped"
        );
        Ok(self.stats)
    }

    /// Close every sink, logging failures. Sinks stay registered.
    pub fn close_sinks(&mut self) {
        for sink in &mut self.sinks {
            if let Err(e) = sink.close() {
                tracing::warn!(sink = %sink.name(), error = %e, "Failed to close sink");
            }
        }
    }

    /// Set the stop flag.
    pub fn stop(&self) {
        self.stop_flag.store(true, Ordering::SeqCst);
    }

    /// Get the stop flag for external coordination.
    pub fn stop_flag(&self) -> Arc<AtomicBool> {
        self.stop_flag.clone()
    }

    pub fn stats(&self) -> EngineStats {
        self.stats
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Last emitted state for a hand, if it has ever been seen.
    pub fn last_known(&self, label: HandLabel) -> Option<&HandSnapshot> {
        self.last_known.get(label).as_ref()
    }

    /// Classify every detection, update per-hand state, and build the event.
    fn assemble(&mut self, frame: Frame, detections: Vec<Detection>) -> (HandEvent, bool) {
        let mut event = HandEvent::new(frame);
        let mut any_change = false;

        for Detection { label, landmarks } in detections {
            let raw = classify_fingers(&landmarks, label);
            let stable = self.stability.update(label, raw);
            let swipe = self.swipes.update(label, landmarks.wrist_xy());
            let gesture = resolve_gesture(stable, swipe);

            let snapshot = HandSnapshot {
                fingers: stable,
                gesture: Some(gesture.clone()),
            };
            let slot = self.last_known.get_mut(label);
            if slot.as_ref() != Some(&snapshot) {
                tracing::debug!(
                    frame = event.frame.sequence,
                    hand = %label,
                    fingers = %stable,
                    gesture = %gesture,
                    "Hand state changed"
                );
                any_change = true;
            }
            *slot = Some(snapshot);

            event.hands.push(HandState {
                label,
                stable_fingers: stable,
                gesture: Some(gesture),
                landmarks,
            });
        }

        (event, any_change)
    }

    /// Offer the event to every sink. Returns `(delivered, failed)`.
    fn dispatch(&mut self, event: &HandEvent, any_change: bool) -> (usize, usize) {
        let mut delivered = 0;
        let mut failed = 0;

        for sink in &mut self.sinks {
            if !(any_change || sink.always_consume()) {
                continue;
            }
            match sink.consume(event) {
                Ok(()) => delivered += 1,
                Err(e) => {
                    failed += 1;
                    tracing::warn!(
                        sink = %sink.name(),
                        frame = event.frame.sequence,
                        error = %e,
                        "Sink failed to consume event"
                    );
                }
            }
        }

        (delivered, failed)
    }
}

/// A swipe, when present, takes precedence over the static pose name.
fn resolve_gesture(stable: FingerVector, swipe: Option<SwipeDirection>) -> Gesture {
    match swipe {
        Some(direction) => Gesture::Swipe(direction),
        None => pose_gesture(stable),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::channel::ChannelSink;
    use crate::sources::StubSource;
    use handstream_hand_model::synthetic;

    fn engine_with(script: Vec<Vec<Detection>>, config: EngineConfig) -> HandEngine {
        HandEngine::new(config, Box::new(StubSource::new(script))).unwrap()
    }

    fn frames(n: u64) -> impl Iterator<Item = Frame> {
        (0..n).map(|i| Frame::blank(i, i * 33_000_000))
    }

    #[test]
    fn test_swipe_takes_precedence_over_pose() {
        assert_eq!(
            resolve_gesture(FingerVector::OPEN_PALM, Some(SwipeDirection::Up)),
            Gesture::Swipe(SwipeDirection::Up)
        );
        assert_eq!(
            resolve_gesture(FingerVector::OPEN_PALM, None),
            Gesture::pose("Open Palm")
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = EngineConfig {
            buffer_size: 0,
            ..Default::default()
        };
        assert!(HandEngine::new(config, Box::new(StubSource::empty())).is_err());
    }

    #[test]
    fn test_empty_frames_do_not_touch_state() {
        let mut engine = engine_with(vec![vec![], vec![]], EngineConfig::default());
        for frame in frames(2) {
            assert_eq!(engine.process_frame(frame).unwrap(), FrameOutcome::NoHands);
        }
        assert!(engine.last_known(HandLabel::Left).is_none());
        assert!(engine.last_known(HandLabel::Right).is_none());
        assert_eq!(engine.stats().events, 0);
    }

    #[test]
    fn test_frame_skip_drops_frames_before_detection() {
        let hand = synthetic::detection(FingerVector::FIST, HandLabel::Right, (0.5, 0.7));
        // Only two scripted entries: skipped frames must not consume them.
        let config = EngineConfig {
            frame_skip: 3,
            ..Default::default()
        };
        let mut engine = engine_with(vec![vec![hand.clone()], vec![hand]], config);

        let outcomes: Vec<FrameOutcome> = frames(6)
            .map(|f| engine.process_frame(f).unwrap())
            .collect();
        assert_eq!(outcomes[0], FrameOutcome::Skipped);
        assert_eq!(outcomes[1], FrameOutcome::Skipped);
        assert!(matches!(outcomes[2], FrameOutcome::Processed { .. }));
        assert!(matches!(outcomes[5], FrameOutcome::Processed { .. }));
        assert_eq!(engine.stats().frames_skipped, 4);
    }

    #[test]
    fn test_max_hands_truncates_detections() {
        let both = vec![
            synthetic::detection(FingerVector::FIST, HandLabel::Right, (0.6, 0.7)),
            synthetic::detection(FingerVector::OPEN_PALM, HandLabel::Left, (0.3, 0.7)),
        ];
        let config = EngineConfig {
            max_hands: 1,
            ..Default::default()
        };
        let mut engine = engine_with(vec![both], config);
        let outcome = engine.process_frame(Frame::blank(0, 0)).unwrap();
        assert!(matches!(outcome, FrameOutcome::Processed { hands: 1, .. }));
        assert!(engine.last_known(HandLabel::Left).is_none());
    }

    #[test]
    fn test_stop_flag_ends_run() {
        let hand = synthetic::detection(FingerVector::FIST, HandLabel::Right, (0.5, 0.7));
        let mut engine = engine_with(vec![vec![hand]; 10], EngineConfig::default());
        let (sink, events) = ChannelSink::pair();
        engine.add_sink(Box::new(sink));

        engine.stop();
        let stats = engine.run(frames(10)).unwrap();
        assert_eq!(stats.frames_seen, 0);
        assert!(events.try_recv().is_err());
    }
}
