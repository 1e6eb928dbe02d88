use scryfall_core::vocab::{SortDirection, SortOrder, UniqueMode};
use scryfall_core::{Card, Catalog, ScryfallList};

use crate::client::{Params, ScryfallClient};
use crate::error::ScryfallResult;
use crate::routes::required;

/// `cards/search`
#[derive(Debug, Clone)]
#[must_use]
pub struct SearchRoute<'a> {
    client: &'a ScryfallClient,
    query: String,
    unique: Option<UniqueMode>,
    order: Option<SortOrder>,
    dir: Option<SortDirection>,
    include_extras: bool,
    include_multilingual: bool,
    include_variations: bool,
    page: Option<u32>,
}

impl<'a> SearchRoute<'a> {
    pub(crate) fn new(client: &'a ScryfallClient, query: String) -> Self {
        Self {
            client,
            query,
            unique: None,
            order: None,
            dir: None,
            include_extras: false,
            include_multilingual: false,
            include_variations: false,
            page: None,
        }
    }

    /// How duplicates are collapsed (API default: `cards`).
    pub fn unique(mut self, unique: UniqueMode) -> Self {
        self.unique = Some(unique);
        self
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub fn dir(mut self, dir: SortDirection) -> Self {
        self.dir = Some(dir);
        self
    }

    /// Include tokens, planes and other extras.
    pub fn include_extras(mut self) -> Self {
        self.include_extras = true;
        self
    }

    /// Include cards in every language.
    pub fn include_multilingual(mut self) -> Self {
        self.include_multilingual = true;
        self
    }

    /// Include rare variant printings.
    pub fn include_variations(mut self) -> Self {
        self.include_variations = true;
        self
    }

    /// Start at a given page (1-based).
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn path(&self) -> &'static str {
        "cards/search"
    }

    pub fn params(&self) -> Params {
        let mut params = Params::new();
        params.insert("q", self.query.trim().to_string());
        if let Some(unique) = self.unique {
            params.insert("unique", unique.as_str().to_string());
        }
        if let Some(order) = self.order {
            params.insert("order", order.as_str().to_string());
        }
        if let Some(dir) = self.dir {
            params.insert("dir", dir.as_str().to_string());
        }
        for (name, set) in [
            ("include_extras", self.include_extras),
            ("include_multilingual", self.include_multilingual),
            ("include_variations", self.include_variations),
        ] {
            if set {
                params.insert(name, "true".to_string());
            }
        }
        if let Some(page) = self.page {
            params.insert("page", page.to_string());
        }
        params
    }

    /// Fetch one page of results.
    pub async fn send(&self) -> ScryfallResult<ScryfallList<Card>> {
        required(&self.query, "q")?;
        self.client.get_json(self.path(), &self.params()).await
    }

    /// Fetch this page and every page after it.
    pub async fn send_all(&self) -> ScryfallResult<Vec<Card>> {
        let first = self.send().await?;
        self.client.all_pages(first).await
    }
}

/// `cards/autocomplete`
#[derive(Debug, Clone)]
#[must_use]
pub struct AutocompleteRoute<'a> {
    client: &'a ScryfallClient,
    query: String,
    include_extras: bool,
}

impl<'a> AutocompleteRoute<'a> {
    pub(crate) fn new(client: &'a ScryfallClient, query: String) -> Self {
        Self {
            client,
            query,
            include_extras: false,
        }
    }

    pub fn include_extras(mut self) -> Self {
        self.include_extras = true;
        self
    }

    pub fn path(&self) -> &'static str {
        "cards/autocomplete"
    }

    pub fn params(&self) -> Params {
        let mut params = Params::new();
        params.insert("q", self.query.trim().to_string());
        if self.include_extras {
            params.insert("include_extras", "true".to_string());
        }
        params
    }

    /// Up to 20 card names starting with the query.
    pub async fn send(&self) -> ScryfallResult<Catalog> {
        required(&self.query, "q")?;
        self.client.get_json(self.path(), &self.params()).await
    }
}
