use anyhow::Result;
use std::path::PathBuf;

use scryfall_client::ScryfallClient;
use scryfall_core::vocab::BulkDataKind;
use scryfall_core::BulkData;

use super::output::print_json;

pub async fn run_list(client: &ScryfallClient, json: bool) -> Result<()> {
    let files = client.bulk_data().await?;
    if json {
        return print_json(&files);
    }
    for file in &files {
        println!("{}", bulk_line(file));
    }
    Ok(())
}

/// Download the current file of `kind` to `output` (default `./<kind>.json`).
pub async fn run_download(
    client: &ScryfallClient,
    kind: &BulkDataKind,
    output: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let bulk = client.bulk_data_by_kind(kind).await?;
    let dest = output.unwrap_or_else(|| PathBuf::from(format!("{kind}.json")));

    log::info!(
        "{} ({}), updated {}",
        bulk.name,
        human_size(bulk.size),
        bulk.updated_at.format("%Y-%m-%d %H:%M UTC")
    );
    let written = client.download_bulk_data(&bulk, &dest).await?;

    if json {
        return print_json(&bulk);
    }
    println!("✓ Wrote {} to {}", human_size(written), dest.display());
    Ok(())
}

fn bulk_line(file: &BulkData) -> String {
    format!(
        "{:<16} {:>9}  {}  {}",
        file.kind,
        human_size(file.size),
        file.updated_at.format("%Y-%m-%d"),
        file.name
    )
}

fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes;
    let mut remainder = 0;
    let mut unit = 0;
    while value >= 1024 && unit < UNITS.len() - 1 {
        remainder = value % 1024;
        value /= 1024;
        unit += 1;
    }
    if unit == 0 {
        format!("{value} B")
    } else {
        format!("{value}.{} {}", remainder * 10 / 1024, UNITS[unit])
    }
}
