use anyhow::Result;

use scryfall_client::ScryfallClient;
use scryfall_core::vocab::{SortDirection, SortOrder, UniqueMode};
use scryfall_core::Card;

use super::output::{card_line, print_json};

/// Flags of the `search` command.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub unique: Option<UniqueMode>,
    pub order: Option<SortOrder>,
    pub dir: Option<SortDirection>,
    pub extras: bool,
    pub multilingual: bool,
    pub variations: bool,
    pub page: Option<u32>,
    pub all: bool,
}

pub async fn run_search(
    client: &ScryfallClient,
    query: &str,
    options: &SearchOptions,
    json: bool,
) -> Result<()> {
    let mut route = client.cards().search(query);
    if let Some(unique) = options.unique {
        route = route.unique(unique);
    }
    if let Some(order) = options.order {
        route = route.order(order);
    }
    if let Some(dir) = options.dir {
        route = route.dir(dir);
    }
    if options.extras {
        route = route.include_extras();
    }
    if options.multilingual {
        route = route.include_multilingual();
    }
    if options.variations {
        route = route.include_variations();
    }
    if let Some(page) = options.page {
        route = route.page(page);
    }

    // A query matching nothing comes back as a 404
    let (cards, total, more) = if options.all {
        match route.send_all().await {
            Ok(cards) => {
                let total = cards.len();
                (cards, Some(total), false)
            }
            Err(err) if err.is_not_found() => (Vec::new(), Some(0), false),
            Err(err) => return Err(err.into()),
        }
    } else {
        match route.send().await {
            Ok(list) => {
                for warning in &list.warnings {
                    log::warn!("Scryfall: {warning}");
                }
                let more = list.has_more;
                let total = list.total_cards.and_then(|t| usize::try_from(t).ok());
                (list.into_data(), total, more)
            }
            Err(err) if err.is_not_found() => (Vec::new(), Some(0), false),
            Err(err) => return Err(err.into()),
        }
    };

    if json {
        return print_json(&cards);
    }
    if cards.is_empty() {
        println!("No cards found for {query:?}");
        return Ok(());
    }
    print_cards(&cards);
    println!();
    println!("{}", search_footer(cards.len(), total, more));
    Ok(())
}

pub async fn run_autocomplete(
    client: &ScryfallClient,
    query: &str,
    extras: bool,
    json: bool,
) -> Result<()> {
    let mut route = client.cards().autocomplete(query);
    if extras {
        route = route.include_extras();
    }
    let catalog = route.send().await?;

    if json {
        return print_json(&catalog);
    }
    if catalog.data.is_empty() {
        println!("No card names start with {query:?}");
    }
    for name in catalog.iter() {
        println!("{name}");
    }
    Ok(())
}

pub fn print_cards(cards: &[Card]) {
    for card in cards {
        println!("{}", card_line(card));
    }
}

fn search_footer(shown: usize, total: Option<usize>, more: bool) -> String {
    let mut footer = match total {
        Some(total) if total != shown => format!("Showing {shown} of {total} cards"),
        _ => format!("{shown} cards"),
    };
    if more {
        footer.push_str(" (use --all or --page to see more)");
    }
    footer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_footer() {
        assert_eq!(search_footer(3, Some(3), false), "3 cards");
        assert_eq!(search_footer(4, None, false), "4 cards");
        assert_eq!(
            search_footer(175, Some(412), true),
            "Showing 175 of 412 cards (use --all or --page to see more)"
        );
    }
}
