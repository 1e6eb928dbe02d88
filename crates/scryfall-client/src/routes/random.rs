use scryfall_core::vocab::ImageSize;
use scryfall_core::Card;

use crate::client::{Params, ScryfallClient};
use crate::error::ScryfallResult;
use crate::routes::{Presentation, ResponseFormat};

/// `cards/random`
#[derive(Debug, Clone)]
#[must_use]
pub struct RandomRoute<'a> {
    client: &'a ScryfallClient,
    query: Option<String>,
    presentation: Presentation,
}

impl<'a> RandomRoute<'a> {
    pub(crate) fn new(client: &'a ScryfallClient) -> Self {
        Self {
            client,
            query: None,
            presentation: Presentation::default(),
        }
    }

    /// Only pick among cards matching a search query.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn face_back(mut self) -> Self {
        self.presentation.face_back = true;
        self
    }

    pub fn image_version(mut self, size: ImageSize) -> Self {
        self.presentation.version = Some(size);
        self
    }

    pub fn path(&self) -> &'static str {
        "cards/random"
    }

    pub fn params(&self) -> Params {
        self.params_for(ResponseFormat::Json)
    }

    pub fn params_for(&self, format: ResponseFormat) -> Params {
        let mut params = Params::new();
        if let Some(query) = self.query.as_deref().map(str::trim) {
            if !query.is_empty() {
                params.insert("q", query.to_string());
            }
        }
        self.presentation.apply(&mut params, format);
        params
    }

    pub async fn send(&self) -> ScryfallResult<Card> {
        self.client.get_json(self.path(), &self.params()).await
    }

    pub async fn text(&self) -> ScryfallResult<String> {
        let params = self.params_for(ResponseFormat::Text);
        self.client.get_text(self.path(), &params).await
    }

    pub async fn image(&self) -> ScryfallResult<Vec<u8>> {
        let params = self.params_for(ResponseFormat::Image);
        self.client.get_bytes(self.path(), &params).await
    }
}
