//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::generate::GenerateArgs;
use crate::commands::history::HistoryArgs;
use crate::commands::preview::PreviewArgs;
use crate::config::ConfigArgs;

/// Generate short-form videos from a text prompt.
#[derive(Parser, Debug)]
#[command(name = "vidgen")]
#[command(author, version = env!("VIDGEN_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a video from a prompt
    Generate(GenerateArgs),

    /// Show a generated video (the latest by default)
    Preview(PreviewArgs),

    /// List recently generated videos
    History(HistoryArgs),
}
