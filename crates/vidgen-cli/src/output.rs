//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use vidgen_core::{Notice, NoticeKind, VideoRecord};

/// Print a success message.
pub fn success(msg: &str) {
    eprintln!("{} {}", "✓".green(), msg);
}

/// Print a warning message.
pub fn warning(msg: &str) {
    eprintln!("{} {}", "!".yellow(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a studio notice with its severity marker.
pub fn notice(notice: &Notice) {
    match notice.kind {
        NoticeKind::Success => success(&notice.message),
        NoticeKind::Warning => warning(&notice.message),
        NoticeKind::Error => error(&notice.message),
    }
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a video's details and its scenes.
pub fn record(record: &VideoRecord) {
    println!("{}", record.title.bold());
    field("ID", record.id.as_str());
    field("Style", record.style.as_str());
    field("Duration", &record.duration_seconds.to_string());
    field("Created", &record.created_at.to_rfc3339());
    if let Some(image) = record.preview_image() {
        field("Preview", image);
    }

    println!();
    for (n, (caption, image)) in record.scenes().enumerate() {
        println!(
            "{:>3}. {} {}",
            n + 1,
            caption.unwrap_or("-"),
            image.unwrap_or("-").dimmed()
        );
    }
}

/// Print a one-entry history line.
pub fn history_entry(record: &VideoRecord) {
    println!("{}", record.title.bold());
    println!(
        "  {}  {}",
        format!("{} • {}", record.style, record.duration_seconds).dimmed(),
        record.id.as_str().dimmed()
    );
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}
