use scryfall_core::{Card, Ruling, ScryfallId, ScryfallList};

use crate::client::{Params, ScryfallClient};
use crate::error::ScryfallResult;
use crate::routes::CardLookup;

impl ScryfallClient {
    /// Rulings for the card a lookup names.
    pub async fn rulings(&self, lookup: &CardLookup) -> ScryfallResult<Vec<Ruling>> {
        lookup.validate()?;
        let first: ScryfallList<Ruling> =
            self.get_json(&lookup.rulings_path(), &Params::new()).await?;
        self.all_pages(first).await
    }

    pub async fn rulings_by_id(&self, id: ScryfallId) -> ScryfallResult<Vec<Ruling>> {
        self.rulings(&CardLookup::Id(id)).await
    }

    pub async fn rulings_by_multiverse_id(&self, id: u32) -> ScryfallResult<Vec<Ruling>> {
        self.rulings(&CardLookup::Multiverse(id)).await
    }

    pub async fn rulings_by_mtgo_id(&self, id: u32) -> ScryfallResult<Vec<Ruling>> {
        self.rulings(&CardLookup::Mtgo(id)).await
    }

    pub async fn rulings_by_arena_id(&self, id: u32) -> ScryfallResult<Vec<Ruling>> {
        self.rulings(&CardLookup::Arena(id)).await
    }

    pub async fn rulings_by_code_and_number(
        &self,
        set: &str,
        collector_number: &str,
    ) -> ScryfallResult<Vec<Ruling>> {
        self.rulings(&CardLookup::CodeAndNumber {
            set: set.to_string(),
            number: collector_number.to_string(),
            lang: None,
        })
        .await
    }

    /// Rulings for a card already fetched, via its `rulings_uri`.
    pub async fn card_rulings(&self, card: &Card) -> ScryfallResult<Vec<Ruling>> {
        if card.rulings_uri.is_empty() {
            self.rulings_by_id(card.id).await
        } else {
            self.all_pages_from(&card.rulings_uri).await
        }
    }
}
