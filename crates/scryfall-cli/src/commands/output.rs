//! Shared rendering: JSON for `--json`, short text summaries otherwise.

use anyhow::{Context, Result};
use serde::Serialize;

use scryfall_core::vocab::Color;
use scryfall_core::{Card, CardFace};

/// Print any API object as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{text}");
    Ok(())
}

/// Mana cost of the card, or of each face joined with ` // `.
pub fn mana_cost(card: &Card) -> String {
    match card.mana_cost.as_deref() {
        Some(cost) if !cost.is_empty() || card.card_faces.is_empty() => cost.to_string(),
        _ => card
            .card_faces
            .iter()
            .map(|face| face.mana_cost.as_str())
            .filter(|cost| !cost.is_empty())
            .collect::<Vec<_>>()
            .join(" // "),
    }
}

/// `Name {cost}  (SET #number, rarity)`
pub fn card_line(card: &Card) -> String {
    let rarity = card
        .rarity
        .as_ref()
        .map(|rarity| format!(", {rarity}"))
        .unwrap_or_default();
    format!(
        "{}  ({} #{}{rarity})",
        heading(&card.name, &mana_cost(card)),
        card.set.to_uppercase(),
        card.collector_number
    )
}

/// A multi-line description: rules text per face, printing and legality.
pub fn card_details(card: &Card) -> String {
    let mut lines = Vec::new();

    if card.card_faces.is_empty() {
        lines.push(heading(&card.name, card.mana_cost.as_deref().unwrap_or_default()));
        push_rules(
            &mut lines,
            card.type_line.as_deref(),
            card.oracle_text.as_deref(),
            stats(card.power.as_deref(), card.toughness.as_deref(), card.loyalty.as_deref()),
        );
    } else {
        for (index, face) in card.card_faces.iter().enumerate() {
            if index > 0 {
                lines.push("----".to_string());
            }
            push_face(&mut lines, face);
        }
    }

    if !card.colors.is_empty() || !card.color_identity.is_empty() {
        lines.push(format!(
            "Colors: {}  Identity: {}",
            color_list(&card.colors),
            color_list(&card.color_identity)
        ));
    }

    let mut printing = vec![format!(
        "{} ({}) #{}",
        card.set_name,
        card.set.to_uppercase(),
        card.collector_number
    )];
    printing.extend(card.rarity.as_ref().map(ToString::to_string));
    printing.extend(card.artist.clone());
    lines.push(printing.join(" · "));

    let formats: Vec<String> = card
        .legalities
        .playable_formats()
        .map(ToString::to_string)
        .collect();
    if !formats.is_empty() {
        lines.push(format!("Legal in: {}", formats.join(", ")));
    }

    if let Some(usd) = &card.prices.usd {
        lines.push(format!("Price: ${usd}"));
    }
    if !card.scryfall_uri.is_empty() {
        lines.push(card.scryfall_uri.clone());
    }

    lines.join("\n")
}

fn push_face(lines: &mut Vec<String>, face: &CardFace) {
    lines.push(heading(&face.name, &face.mana_cost));
    push_rules(
        lines,
        face.type_line.as_deref(),
        face.oracle_text.as_deref(),
        stats(face.power.as_deref(), face.toughness.as_deref(), face.loyalty.as_deref()),
    );
}

fn push_rules(
    lines: &mut Vec<String>,
    type_line: Option<&str>,
    oracle_text: Option<&str>,
    stats: Option<String>,
) {
    if let Some(type_line) = type_line {
        lines.push(type_line.to_string());
    }
    if let Some(text) = oracle_text.filter(|t| !t.is_empty()) {
        lines.push(text.to_string());
    }
    if let Some(stats) = stats {
        lines.push(stats);
    }
}

fn heading(name: &str, cost: &str) -> String {
    if cost.is_empty() {
        name.to_string()
    } else {
        format!("{name} {cost}")
    }
}

fn stats(power: Option<&str>, toughness: Option<&str>, loyalty: Option<&str>) -> Option<String> {
    match (power, toughness, loyalty) {
        (Some(power), Some(toughness), _) => Some(format!("{power}/{toughness}")),
        (_, _, Some(loyalty)) => Some(format!("Loyalty: {loyalty}")),
        _ => None,
    }
}

fn color_list(colors: &[Color]) -> String {
    if colors.is_empty() {
        "colorless".to_string()
    } else {
        Color::abbreviate(colors)
    }
}
