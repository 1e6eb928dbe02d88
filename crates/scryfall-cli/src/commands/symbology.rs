use anyhow::Result;

use scryfall_client::ScryfallClient;
use scryfall_core::vocab::Color;
use scryfall_core::{CardSymbol, ManaCost};

use super::output::print_json;

pub async fn run_symbols(client: &ScryfallClient, json: bool) -> Result<()> {
    let symbols = client.symbology().await?;
    if json {
        return print_json(&symbols);
    }
    for symbol in &symbols {
        println!("{}", symbol_line(symbol));
    }
    Ok(())
}

pub async fn run_parse_mana(client: &ScryfallClient, cost: &str, json: bool) -> Result<()> {
    let parsed = client.parse_mana(cost).await?;
    if json {
        return print_json(&parsed);
    }
    println!("{}", describe_cost(&parsed));
    Ok(())
}

fn symbol_line(symbol: &CardSymbol) -> String {
    let value = symbol
        .value()
        .map(|value| format!("  [{value}]"))
        .unwrap_or_default();
    format!("{:<8} {}{value}", symbol.symbol, symbol.english)
}

fn describe_cost(cost: &ManaCost) -> String {
    let colors = if cost.colorless {
        "colorless".to_string()
    } else {
        cost.colors
            .iter()
            .map(Color::name)
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!("{}  (mana value {}, {colors})", cost.cost, cost.cmc)
}
