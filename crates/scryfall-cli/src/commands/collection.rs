use anyhow::{Context, Result};
use std::path::Path;

use scryfall_client::ScryfallClient;
use scryfall_core::CardIdentifier;

use super::output::print_json;
use super::search::print_cards;

pub async fn run_collection(
    client: &ScryfallClient,
    entries: Vec<String>,
    file: Option<&Path>,
    json: bool,
) -> Result<()> {
    let mut lines = entries;
    if let Some(path) = file {
        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        lines.extend(contents.lines().map(str::to_string));
    }

    let identifiers: Vec<CardIdentifier> =
        lines.iter().filter_map(|line| parse_entry(line)).collect();
    if identifiers.is_empty() {
        anyhow::bail!("No cards given. Pass names or set/number pairs, or --file <path>.");
    }
    log::info!("fetching {} cards", identifiers.len());

    let collection = client
        .cards()
        .collection()
        .identifiers(identifiers)
        .send_chunked()
        .await?;

    if json {
        return print_json(&collection);
    }

    print_cards(&collection.data);
    if !collection.not_found.is_empty() {
        println!("\nNot found:");
        for identifier in &collection.not_found {
            println!("  {}", describe(identifier));
        }
    }
    for warning in &collection.warnings {
        log::warn!("Scryfall: {warning}");
    }
    Ok(())
}

/// Read one entry: `set/number` when it looks like one, otherwise a card
/// name. Blank lines and `#` comments yield nothing.
fn parse_entry(line: &str) -> Option<CardIdentifier> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    if let Some((set, number)) = line.split_once('/') {
        let is_code =
            (2..=6).contains(&set.len()) && set.chars().all(|c| c.is_ascii_alphanumeric());
        let is_number = !number.is_empty() && !number.contains(char::is_whitespace);
        if is_code && is_number {
            return Some(CardIdentifier::set_and_number(set.to_lowercase(), number));
        }
    }
    Some(CardIdentifier::name(line))
}

fn describe(identifier: &CardIdentifier) -> String {
    match identifier {
        CardIdentifier::SetAndCollectorNumber {
            set,
            collector_number,
        } => format!("{set} #{collector_number}"),
        CardIdentifier::NameAndSet { name, set } => format!("{name} ({set})"),
        CardIdentifier::Id { id } => format!("id {id}"),
        CardIdentifier::MtgoId { mtgo_id } => format!("MTGO id {mtgo_id}"),
        CardIdentifier::MultiverseId { multiverse_id } => format!("multiverse id {multiverse_id}"),
        CardIdentifier::Oracle { oracle_id } => format!("oracle id {oracle_id}"),
        CardIdentifier::Illustration { illustration_id } => {
            format!("illustration id {illustration_id}")
        }
        CardIdentifier::Name { name } => name.clone(),
    }
}
