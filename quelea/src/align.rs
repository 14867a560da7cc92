//! Align subcommand - filter a raw transcript file into a JSONL manifest.

use crate::cli::GateArgs;
use crate::{input, jsonl};
use eyre::{Context, Result, ensure};
use quelea_align::pipeline::Pipeline;
use std::path::PathBuf;

/// CLI arguments for manifest generation.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Path to input transcript file (.json segment array or .srt subtitles)
    pub path: PathBuf,

    /// Output JSONL path (default: same as input with .jsonl extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Audio file name recorded in manifest entries for SRT input
    #[arg(long)]
    pub audio: Option<String>,

    /// Fail on malformed timestamps instead of substituting 0.0
    #[arg(long)]
    pub strict: bool,

    /// Print a head/tail preview of the manifest to stdout
    #[arg(long)]
    pub preview: bool,

    #[command(flatten)]
    pub gate: GateArgs,
}

/// Resolved configuration for manifest generation.
#[derive(Debug)]
pub struct Config {
    pub path: PathBuf,
    pub output: Option<PathBuf>,
    pub audio: Option<String>,
    pub preview: bool,
    pub pipeline: Pipeline,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        ensure!(
            args.gate.min_duration <= args.gate.max_duration,
            "min duration {} exceeds max duration {}",
            args.gate.min_duration,
            args.gate.max_duration
        );

        Ok(Self {
            path: args.path,
            output: args.output,
            audio: args.audio,
            preview: args.preview,
            pipeline: Pipeline::new(args.gate.into()).with_strict_timestamps(args.strict),
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    // Resolve output path
    let output = config
        .output
        .unwrap_or_else(|| config.path.with_extension("jsonl"));

    tracing::info!(
        input = ?config.path.display(),
        output = ?output.display(),
        "generating manifest"
    );

    let segments = input::load_segments(&config.path, config.audio.as_deref())?;

    tracing::info!(count = segments.len(), "processing raw segments");

    let result = config
        .pipeline
        .process(&segments)
        .wrap_err("segment pipeline failed")?;

    let lines = jsonl::to_lines(&result.entries)?;

    tracing::info!(path = ?output.display(), "write manifest");

    std::fs::write(&output, jsonl::render(&lines))
        .wrap_err_with(|| format!("failed to write manifest: {:?}", output.display()))?;

    tracing::info!(
        processed = result.total(),
        discarded = result.discarded,
        valid = result.entries.len(),
        "pipeline summary"
    );

    if config.preview {
        print!("{}", jsonl::preview_lines(&lines, 3, 3));
    }

    Ok(())
}
