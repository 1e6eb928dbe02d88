use serde::Serialize;

use scryfall_core::model::MAX_COLLECTION_IDENTIFIERS;
use scryfall_core::{CardCollection, CardIdentifier};

use crate::client::ScryfallClient;
use crate::error::{ScryfallError, ScryfallResult};

#[derive(Debug, Serialize)]
struct CollectionBody<'b> {
    identifiers: &'b [CardIdentifier],
}

/// `POST cards/collection`
#[derive(Debug, Clone)]
#[must_use]
pub struct CollectionRoute<'a> {
    client: &'a ScryfallClient,
    identifiers: Vec<CardIdentifier>,
}

impl<'a> CollectionRoute<'a> {
    pub(crate) fn new(client: &'a ScryfallClient) -> Self {
        Self {
            client,
            identifiers: Vec::new(),
        }
    }

    pub fn identifier(mut self, identifier: CardIdentifier) -> Self {
        self.identifiers.push(identifier);
        self
    }

    pub fn identifiers(mut self, identifiers: impl IntoIterator<Item = CardIdentifier>) -> Self {
        self.identifiers.extend(identifiers);
        self
    }

    pub fn path(&self) -> &'static str {
        "cards/collection"
    }

    /// The JSON request body.
    pub fn body(&self) -> serde_json::Value {
        serde_json::json!({ "identifiers": self.identifiers })
    }

    fn validate(&self) -> ScryfallResult<()> {
        match self.identifiers.len() {
            0 => Err(ScryfallError::MissingParameter("identifiers")),
            count if count > MAX_COLLECTION_IDENTIFIERS => Err(ScryfallError::TooManyIdentifiers {
                count,
                max: MAX_COLLECTION_IDENTIFIERS,
            }),
            _ => Ok(()),
        }
    }

    /// Send one request. Fails without a request when there are no
    /// identifiers or more than the API accepts.
    pub async fn send(&self) -> ScryfallResult<CardCollection> {
        self.validate()?;
        let body = CollectionBody {
            identifiers: &self.identifiers,
        };
        self.client.post_json(self.path(), &body).await
    }

    /// Send as many requests as needed, in batches of the largest allowed
    /// size, and merge the results in order.
    pub async fn send_chunked(&self) -> ScryfallResult<CardCollection> {
        if self.identifiers.is_empty() {
            return Err(ScryfallError::MissingParameter("identifiers"));
        }
        let mut merged = CardCollection::default();
        for chunk in self.identifiers.chunks(MAX_COLLECTION_IDENTIFIERS) {
            let body = CollectionBody { identifiers: chunk };
            let page: CardCollection = self.client.post_json(self.path(), &body).await?;
            merged.data.extend(page.data);
            merged.not_found.extend(page.not_found);
            merged.warnings.extend(page.warnings);
        }
        Ok(merged)
    }
}
