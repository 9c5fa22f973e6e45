//! Handstream CLI: replay landmark recordings through the hand engine.
//!
//! Usage:
//!   handstream replay <RECORDING>    Run a recording through the engine and sinks
//!   handstream validate <RECORDING>  Check a recording and summarize its poses
//!   handstream synth <OUTPUT>        Write a synthetic recording
//!   handstream config                Print the effective configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use handstream_common::config::AppConfig;

mod commands;

use commands::replay::ReplayArgs;
use commands::synth::Scenario;

#[derive(Parser)]
#[command(
    name = "handstream",
    about = "Hand-landmark gesture events from recorded or live frames",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    /// Config file (defaults to $XDG_CONFIG_HOME/handstream/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a landmark recording through the engine
    Replay(ReplayArgs),

    /// Validate a landmark recording
    Validate {
        /// Path to the recording (JSONL)
        recording: PathBuf,

        /// Window length used for the pose summary
        #[arg(long, default_value = "5")]
        buffer_size: usize,
    },

    /// Write a synthetic landmark recording
    Synth {
        /// Output file path
        output: PathBuf,

        /// Scripted motion to generate
        #[arg(long, value_enum, default_value = "palm-to-fist")]
        scenario: Scenario,

        /// Number of frames
        #[arg(long, default_value = "30")]
        frames: usize,

        /// Nominal frame rate
        #[arg(long, default_value = "30")]
        fps: f64,
    },

    /// Print the effective, validated configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {e}", path.display()))?,
        None => AppConfig::load()?,
    };
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    if cli.json_logs {
        config.logging.json = true;
    }
    handstream_common::logging::init_logging(&config.logging);

    match cli.command {
        Commands::Replay(args) => commands::replay::run(config, args),
        Commands::Validate {
            recording,
            buffer_size,
        } => commands::validate::run(recording, buffer_size),
        Commands::Synth {
            output,
            scenario,
            frames,
            fps,
        } => commands::synth::run(output, scenario, frames, fps),
        Commands::Config => commands::config::run(config, cli.config),
    }
}
