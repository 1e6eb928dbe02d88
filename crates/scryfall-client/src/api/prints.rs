use scryfall_core::vocab::{SortOrder, UniqueMode};
use scryfall_core::Card;

use crate::client::ScryfallClient;
use crate::error::{ScryfallError, ScryfallResult};

impl ScryfallClient {
    /// Every printing of a card, via its `prints_search_uri` or, failing
    /// that, a search on its Oracle ID.
    pub async fn card_prints(&self, card: &Card) -> ScryfallResult<Vec<Card>> {
        if !card.prints_search_uri.is_empty() {
            return self.all_pages_from(&card.prints_search_uri).await;
        }
        let oracle_id = card
            .oracle_id
            .ok_or(ScryfallError::MissingParameter("prints_search_uri"))?;
        self.cards()
            .search(format!("oracleid:{oracle_id}"))
            .unique(UniqueMode::Prints)
            .order(SortOrder::Released)
            .include_extras()
            .include_variations()
            .send_all()
            .await
    }
}
