//! Replay a landmark recording through the hand engine.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use handstream_common::config::{AppConfig, SinkSpec};
use handstream_engine::sources::ReplaySource;
use handstream_engine::{build_sinks, HandEngine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SinkKind {
    Stdout,
    Http,
    Jsonl,
}

#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// Path to the recording (JSONL)
    pub recording: PathBuf,

    /// Replace the configured sinks with a single sink of this kind
    #[arg(long, value_enum)]
    pub sink: Option<SinkKind>,

    /// Endpoint for the http sink
    #[arg(long)]
    pub url: Option<String>,

    /// Output file for the jsonl sink
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Deliver every processed frame, not only changes
    #[arg(long)]
    pub always: bool,

    /// Process every Nth frame
    #[arg(long)]
    pub frame_skip: Option<u32>,

    /// Stability and swipe window length
    #[arg(long)]
    pub buffer_size: Option<usize>,

    /// Minimum wrist displacement for a swipe
    #[arg(long)]
    pub gesture_threshold: Option<f64>,

    /// Maximum hands per frame
    #[arg(long)]
    pub max_hands: Option<usize>,
}

/// Fold command-line overrides into the loaded config.
fn apply_overrides(mut config: AppConfig, args: &ReplayArgs) -> anyhow::Result<AppConfig> {
    if let Some(frame_skip) = args.frame_skip {
        config.engine.frame_skip = frame_skip;
    }
    if let Some(buffer_size) = args.buffer_size {
        config.engine.buffer_size = buffer_size;
    }
    if let Some(threshold) = args.gesture_threshold {
        config.engine.gesture_threshold = threshold;
    }
    if let Some(max_hands) = args.max_hands {
        config.engine.max_hands = max_hands;
    }

    if let Some(kind) = args.sink {
        let spec = match kind {
            SinkKind::Stdout => SinkSpec::Stdout {
                always_consume: args.always,
            },
            SinkKind::Http => SinkSpec::Http {
                url: args
                    .url
                    .clone()
                    .ok_or_else(|| anyhow::anyhow!("--sink http requires --url"))?,
                timeout_ms: 2000,
                always_consume: args.always,
            },
            SinkKind::Jsonl => SinkSpec::Jsonl {
                path: args
                    .output
                    .clone()
                    .ok_or_else(|| anyhow::anyhow!("--sink jsonl requires --output"))?,
                always_consume: args.always,
            },
        };
        config.sinks = vec![spec];
    } else if args.always {
        for spec in &mut config.sinks {
            match spec {
                SinkSpec::Stdout { always_consume }
                | SinkSpec::Http { always_consume, .. }
                | SinkSpec::Jsonl { always_consume, .. } => *always_consume = true,
            }
        }
    }

    config.validate()?;
    Ok(config)
}

pub fn run(config: AppConfig, args: ReplayArgs) -> anyhow::Result<()> {
    let config = apply_overrides(config, &args)?;

    let source = ReplaySource::from_path(&args.recording)
        .map_err(|e| anyhow::anyhow!("Failed to load recording: {e}"))?;
    let frames = source.frames();

    let sinks = build_sinks(&config.sinks, &config.engine)?;
    let mut engine = HandEngine::new(config.engine.clone(), Box::new(source))?;
    for sink in sinks {
        engine.add_sink(sink);
    }

    let result = engine.run(frames);
    engine.close_sinks();
    let stats = result?;

    // stdout belongs to the stdout sink; the summary goes to stderr.
    eprintln!(
        "Replayed {} frame(s): {} skipped, {} without hands, {} event(s), {} change(s), {} sink failure(s)",
        stats.frames_seen,
        stats.frames_skipped,
        stats.frames_without_hands,
        stats.events,
        stats.changed_events,
        stats.sink_failures
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ReplayArgs {
        ReplayArgs {
            recording: PathBuf::from("rec.jsonl"),
            sink: None,
            url: None,
            output: None,
            always: false,
            frame_skip: None,
            buffer_size: None,
            gesture_threshold: None,
            max_hands: None,
        }
    }

    #[test]
    fn test_flags_override_engine_settings() {
        let config = apply_overrides(
            AppConfig::default(),
            &ReplayArgs {
                frame_skip: Some(2),
                buffer_size: Some(9),
                ..args()
            },
        )
        .unwrap();
        assert_eq!(config.engine.frame_skip, 2);
        assert_eq!(config.engine.buffer_size, 9);
    }

    #[test]
    fn test_sink_flag_replaces_configured_sinks() {
        let config = apply_overrides(
            AppConfig::default(),
            &ReplayArgs {
                sink: Some(SinkKind::Jsonl),
                output: Some(PathBuf::from("/tmp/events.jsonl")),
                always: true,
                ..args()
            },
        )
        .unwrap();
        assert_eq!(
            config.sinks,
            vec![SinkSpec::Jsonl {
                path: PathBuf::from("/tmp/events.jsonl"),
                always_consume: true,
            }]
        );
    }

    #[test]
    fn test_http_sink_without_url_is_rejected() {
        let result = apply_overrides(
            AppConfig::default(),
            &ReplayArgs {
                sink: Some(SinkKind::Http),
                ..args()
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_override_fails_validation() {
        let result = apply_overrides(
            AppConfig::default(),
            &ReplayArgs {
                buffer_size: Some(0),
                ..args()
            },
        );
        assert!(result.is_err());
    }
}
