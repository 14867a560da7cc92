//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use eyre::Result;
use quelea_align::validate::{DEFAULT_MAX_DURATION, DEFAULT_MIN_DURATION, GateConfig};

#[derive(Debug, Parser)]
#[command(name = "quelea")]
#[command(about = "Align and filter raw ASR transcripts into training manifests")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Filter a raw transcript file into a JSONL training manifest
    Align(crate::align::Args),

    /// Run the bundled mock ASR sample through the pipeline
    Demo(crate::demo::Args),
}

/// Quality-gate arguments shared by subcommands.
#[derive(clap::Args, Clone, Copy, Debug)]
pub struct GateArgs {
    /// Minimum segment duration in seconds
    #[arg(long, default_value_t = DEFAULT_MIN_DURATION)]
    pub min_duration: f64,

    /// Maximum segment duration in seconds
    #[arg(long, default_value_t = DEFAULT_MAX_DURATION)]
    pub max_duration: f64,
}

impl From<GateArgs> for GateConfig {
    fn from(args: GateArgs) -> Self {
        GateConfig::new(args.min_duration, args.max_duration)
    }
}

/// Execute CLI command - separated for testing.
pub fn run(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Align(args) => crate::align::execute(args.try_into()?),
        Commands::Demo(args) => crate::demo::execute(args.try_into()?),
    }
}
