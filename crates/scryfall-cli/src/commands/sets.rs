use anyhow::Result;

use scryfall_client::ScryfallClient;
use scryfall_core::vocab::SetType;
use scryfall_core::Set;

use super::output::print_json;
use super::search::print_cards;

/// Show one set, and optionally its cards.
pub async fn run_set(client: &ScryfallClient, code: &str, cards: bool, json: bool) -> Result<()> {
    let set = client.set_by_code(code).await?;
    let set_cards = if cards {
        Some(client.set_cards(&set).await?)
    } else {
        None
    };

    if json {
        return match &set_cards {
            Some(set_cards) => print_json(&serde_json::json!({ "set": set, "cards": set_cards })),
            None => print_json(&set),
        };
    }

    println!("{} ({})", set.name, set.code.to_uppercase());
    println!("  Type: {}", set.set_type);
    if let Some(released) = set.released_at {
        println!("  Released: {released}");
    }
    if let Some(block) = &set.block {
        println!("  Block: {block}");
    }
    if let Some(parent) = &set.parent_set_code {
        println!("  Parent set: {}", parent.to_uppercase());
    }
    println!("  Cards: {}", set.card_count);
    if set.digital {
        println!("  Digital only");
    }
    if !set.scryfall_uri.is_empty() {
        println!("  {}", set.scryfall_uri);
    }

    if let Some(set_cards) = set_cards {
        println!();
        print_cards(&set_cards);
    }
    Ok(())
}

/// List every set, newest first as the API returns them.
pub async fn run_sets(client: &ScryfallClient, set_type: Option<&str>, json: bool) -> Result<()> {
    let sets = filter_sets(client.sets().await?, set_type);

    if json {
        return print_json(&sets);
    }
    for set in &sets {
        println!("{}", set_line(set));
    }
    println!("\n{} sets", sets.len());
    Ok(())
}

fn filter_sets(sets: Vec<Set>, set_type: Option<&str>) -> Vec<Set> {
    match set_type {
        Some(wanted) => {
            let wanted = SetType::from(wanted.trim());
            sets.into_iter().filter(|set| set.set_type == wanted).collect()
        }
        None => sets,
    }
}

fn set_line(set: &Set) -> String {
    let released = set
        .released_at
        .map(|date| date.to_string())
        .unwrap_or_else(|| "----------".to_string());
    format!(
        "{:<6} {released}  {} ({}, {} cards)",
        set.code.to_uppercase(),
        set.name,
        set.set_type,
        set.card_count
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(code: &str, set_type: &str) -> Set {
        serde_json::from_value(serde_json::json!({
            "object": "set",
            "id": "c1d109bc-ffd8-428f-8d7d-3f8d7e648046",
            "code": code,
            "name": "Modern Horizons 2",
            "set_type": set_type,
            "released_at": "2021-06-18",
            "card_count": 303
        }))
        .unwrap()
    }

    #[test]
    fn test_set_line() {
        assert_eq!(
            set_line(&set("mh2", "draft_innovation")),
            "MH2    2021-06-18  Modern Horizons 2 (draft_innovation, 303 cards)"
        );
    }

    #[test]
    fn test_filter_sets_by_type() {
        let sets = vec![set("mh2", "draft_innovation"), set("m21", "core"), set("xyz", "brand_new")];
        let core = filter_sets(sets.clone(), Some("core"));
        assert_eq!(core.len(), 1);
        assert_eq!(core[0].code, "m21");

        let unknown = filter_sets(sets.clone(), Some("brand_new"));
        assert_eq!(unknown.len(), 1);
        assert_eq!(filter_sets(sets, None).len(), 3);
    }
}
