use scryfall_core::vocab::{SortOrder, UniqueMode};
use scryfall_core::{Card, ScryfallList, Set, SetId};

use crate::client::{Params, ScryfallClient};
use crate::error::ScryfallResult;
use crate::routes::required;

impl ScryfallClient {
    /// Every set Scryfall knows about.
    pub async fn sets(&self) -> ScryfallResult<Vec<Set>> {
        let first: ScryfallList<Set> = self.get_json("sets", &Params::new()).await?;
        self.all_pages(first).await
    }

    /// A set by its three to six letter code.
    pub async fn set_by_code(&self, code: &str) -> ScryfallResult<Set> {
        let code = required(code, "code")?;
        self.get_json(&format!("sets/{code}"), &Params::new()).await
    }

    pub async fn set_by_id(&self, id: SetId) -> ScryfallResult<Set> {
        self.get_json(&format!("sets/{id}"), &Params::new()).await
    }

    pub async fn set_by_tcgplayer_id(&self, id: u32) -> ScryfallResult<Set> {
        self.get_json(&format!("sets/tcgplayer/{id}"), &Params::new())
            .await
    }

    /// Every card in a set, following the set's own search link. A set with
    /// no cards yields an empty list rather than an error.
    pub async fn set_cards(&self, set: &Set) -> ScryfallResult<Vec<Card>> {
        let result = if set.search_uri.is_empty() {
            self.cards()
                .search(format!("e:{}", set.code))
                .unique(UniqueMode::Prints)
                .order(SortOrder::Set)
                .send_all()
                .await
        } else {
            self.all_pages_from(&set.search_uri).await
        };
        match result {
            Err(err) if err.is_not_found() => {
                log::debug!("set {} has no cards", set.code);
                Ok(Vec::new())
            }
            other => other,
        }
    }
}
