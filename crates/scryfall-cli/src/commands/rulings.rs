use anyhow::Result;

use scryfall_client::ScryfallClient;
use scryfall_core::{Ruling, ScryfallId};

use super::output::print_json;

/// Rulings for a card named fuzzily, or given by Scryfall id.
pub async fn run_rulings(
    client: &ScryfallClient,
    name: Option<&str>,
    id: Option<&str>,
    json: bool,
) -> Result<()> {
    let (title, rulings) = match (name, id) {
        (_, Some(id)) => {
            let id: ScryfallId = id.trim().parse()?;
            (id.to_string(), client.rulings_by_id(id).await?)
        }
        (Some(name), None) => {
            let card = client.cards().named().fuzzy(name).send().await?;
            let rulings = client.card_rulings(&card).await?;
            (card.name, rulings)
        }
        (None, None) => anyhow::bail!("Give a card name or --id"),
    };

    if json {
        return print_json(&rulings);
    }

    if rulings.is_empty() {
        println!("No rulings for {title}");
        return Ok(());
    }
    println!("Rulings for {title} ({}):\n", rulings.len());
    for ruling in &rulings {
        println!("{}\n", format_ruling(ruling));
    }
    Ok(())
}

fn format_ruling(ruling: &Ruling) -> String {
    format!(
        "{} [{}]\n  {}",
        ruling.published_at, ruling.source, ruling.comment
    )
}
