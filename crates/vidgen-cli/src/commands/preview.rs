//! Preview command implementation.

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;

use vidgen_core::VideoId;

use crate::config::ConfigArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Video ID (defaults to the most recent video)
    pub id: Option<String>,

    /// Print the record as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: PreviewArgs, config: &ConfigArgs) -> Result<()> {
    let history = config.load_history().await?;

    let record = match &args.id {
        Some(id) => match history.get(&VideoId::from_string(id.as_str())) {
            Some(record) => record,
            None => bail!("No video with ID '{}' in history", id),
        },
        None => match history.latest() {
            Some(record) => record,
            None => {
                eprintln!("{}", "Generate a video to see preview".dimmed());
                return Ok(());
            }
        },
    };

    if args.json {
        output::json_pretty(record)?;
    } else {
        output::record(record);
    }

    Ok(())
}
