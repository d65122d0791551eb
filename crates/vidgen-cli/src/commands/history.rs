//! History command implementation.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use crate::config::ConfigArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Maximum number of videos to list
    #[arg(long)]
    pub limit: Option<usize>,

    /// Print the history as a JSON array
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: HistoryArgs, config: &ConfigArgs) -> Result<()> {
    let history = config.load_history().await?;
    let limit = args.limit.unwrap_or(history.len());
    let records: Vec<_> = history.iter().take(limit).collect();

    if args.json {
        return output::json(&records);
    }

    if history.is_empty() {
        eprintln!("{}", "No videos generated yet".dimmed());
        return Ok(());
    }

    for record in records {
        output::history_entry(record);
    }

    Ok(())
}
