use scryfall_core::{CardSymbol, ManaCost, ScryfallList};

use crate::client::{Params, ScryfallClient};
use crate::error::ScryfallResult;
use crate::routes::required;

impl ScryfallClient {
    /// Every card symbol.
    pub async fn symbology(&self) -> ScryfallResult<Vec<CardSymbol>> {
        let first: ScryfallList<CardSymbol> = self.get_json("symbology", &Params::new()).await?;
        self.all_pages(first).await
    }

    /// Normalize a mana cost such as `2ww` or `{X}{R}` and compute its mana
    /// value and colors.
    pub async fn parse_mana(&self, cost: &str) -> ScryfallResult<ManaCost> {
        let mut params = Params::new();
        params.insert("cost", required(cost, "cost")?.to_string());
        self.get_json("symbology/parse-mana", &params).await
    }
}
