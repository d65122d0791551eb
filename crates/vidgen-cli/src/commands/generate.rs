//! Generate command implementation.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use colored::Colorize;

use vidgen_core::{NoticeKind, Studio, Style, VideoDuration};
use vidgen_http::HttpBackend;

use crate::config::ConfigArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Video idea; multiple words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub prompt: Vec<String>,

    /// Video style
    #[arg(long, short, default_value_t = Style::Trending)]
    pub style: Style,

    /// Video length in seconds (15, 30 or 60)
    #[arg(long, short, default_value_t = VideoDuration::Short)]
    pub duration: VideoDuration,

    /// Print the record as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: GenerateArgs, config: &ConfigArgs) -> Result<()> {
    let endpoint = config.endpoint()?;
    let backend = HttpBackend::new(endpoint).context("Failed to create HTTP client")?;
    let studio = Studio::open(backend, config.file_store()?).await;

    let prompt = args.prompt.join(" ");

    eprintln!("{}", "Generating...".dimmed());

    let result = studio.submit(&prompt, args.style, args.duration).await;

    let record = match result {
        Ok(record) => record,
        Err(e) if e.is_empty_prompt() => return Err(e.into()),
        Err(e) => return Err(anyhow::Error::new(e).context("Failed to generate video")),
    };

    if let Some(notice) = studio.visible_notice(Utc::now()) {
        output::notice(&notice);
        if notice.kind == NoticeKind::Warning {
            tracing::warn!("history kept in memory only for this run");
        }
    }

    if args.json {
        output::json_pretty(&record)?;
    } else {
        println!();
        output::record(&record);
    }

    Ok(())
}
