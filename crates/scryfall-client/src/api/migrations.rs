use uuid::Uuid;

use scryfall_core::{CardMigration, ScryfallList};

use crate::client::{Params, ScryfallClient};
use crate::error::ScryfallResult;

impl ScryfallClient {
    /// Every card migration, oldest pages first.
    pub async fn migrations(&self) -> ScryfallResult<Vec<CardMigration>> {
        let first: ScryfallList<CardMigration> =
            self.get_json("migrations", &Params::new()).await?;
        self.all_pages(first).await
    }

    pub async fn migration(&self, id: Uuid) -> ScryfallResult<CardMigration> {
        self.get_json(&format!("migrations/{id}"), &Params::new())
            .await
    }
}
