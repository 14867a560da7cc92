//! Demo subcommand - run the bundled mock ASR sample through the pipeline.

use crate::cli::GateArgs;
use crate::jsonl;
use eyre::{Context, Result};
use quelea_align::pipeline::Pipeline;
use quelea_align::types::RawSegment;
use std::path::PathBuf;

/// CLI arguments for the demo run.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Output JSONL path
    #[arg(short, long, default_value = "train_manifest.jsonl")]
    pub output: PathBuf,

    #[command(flatten)]
    pub gate: GateArgs,
}

/// Resolved configuration for the demo run.
#[derive(Debug)]
pub struct Config {
    pub output: PathBuf,
    pub pipeline: Pipeline,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        Ok(Self {
            output: args.output,
            pipeline: Pipeline::new(args.gate.into()),
        })
    }
}

/// Simulated raw output from a base recognizer.
///
/// Contains messy data on purpose: silence, a sub-second fragment, and valid
/// Pidgin speech.
pub fn mock_asr_output() -> Vec<RawSegment> {
    vec![
        RawSegment::new(
            1,
            "lagos_traffic.wav",
            "00:00:00.500",
            "00:00:04.200",
            "Abeg, no vex, road block yakata today.",
        ),
        RawSegment::new(
            2,
            "lagos_traffic.wav",
            "00:00:04.200",
            "00:00:04.800",
            "[silence]",
        ),
        RawSegment::new(
            3,
            "lagos_traffic.wav",
            "00:00:05.000",
            "00:00:15.500",
            "You see say fuel price don go up again? Na wa o.",
        ),
        RawSegment::new(
            4,
            "lagos_traffic.wav",
            "00:00:16.000",
            "00:00:16.400",
            "Hmm.",
        ),
    ]
}

pub fn execute(config: Config) -> Result<()> {
    let segments = mock_asr_output();

    tracing::info!(count = segments.len(), "processing mock raw segments");

    let result = config
        .pipeline
        .process(&segments)
        .wrap_err("segment pipeline failed")?;

    let lines = jsonl::to_lines(&result.entries)?;

    std::fs::write(&config.output, jsonl::render(&lines))
        .wrap_err_with(|| format!("failed to write manifest: {:?}", config.output.display()))?;

    tracing::info!(
        processed = result.total(),
        discarded = result.discarded,
        valid = result.entries.len(),
        path = ?config.output.display(),
        "pipeline summary"
    );

    print!("{}", jsonl::preview_lines(&lines, 3, 3));

    Ok(())
}
