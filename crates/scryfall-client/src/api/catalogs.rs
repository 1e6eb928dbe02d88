use scryfall_core::vocab::CatalogName;
use scryfall_core::Catalog;

use crate::client::{Params, ScryfallClient};
use crate::error::ScryfallResult;

impl ScryfallClient {
    pub async fn catalog(&self, name: CatalogName) -> ScryfallResult<Catalog> {
        self.get_json(&format!("catalog/{name}"), &Params::new())
            .await
    }
}
