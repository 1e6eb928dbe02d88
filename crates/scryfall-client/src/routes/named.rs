use scryfall_core::vocab::{ImageSize, NameMatch};
use scryfall_core::Card;

use crate::client::{Params, ScryfallClient};
use crate::error::{ScryfallError, ScryfallResult};
use crate::routes::{required, Presentation, ResponseFormat};

/// `cards/named`
///
/// Exactly one of [`exact`](Self::exact) or [`fuzzy`](Self::fuzzy) must be
/// given; the later call wins.
#[derive(Debug, Clone)]
#[must_use]
pub struct NamedRoute<'a> {
    client: &'a ScryfallClient,
    name: Option<(NameMatch, String)>,
    set: Option<String>,
    presentation: Presentation,
}

impl<'a> NamedRoute<'a> {
    pub(crate) fn new(client: &'a ScryfallClient) -> Self {
        Self {
            client,
            name: None,
            set: None,
            presentation: Presentation::default(),
        }
    }

    /// Match the name exactly (case-insensitive).
    pub fn exact(self, name: impl Into<String>) -> Self {
        self.matching(NameMatch::Exact, name)
    }

    /// Match the name fuzzily; typos and partial words are accepted as long
    /// as one card matches.
    pub fn fuzzy(self, name: impl Into<String>) -> Self {
        self.matching(NameMatch::Fuzzy, name)
    }

    pub fn matching(mut self, mode: NameMatch, name: impl Into<String>) -> Self {
        self.name = Some((mode, name.into()));
        self
    }

    /// Limit the lookup to one set code.
    pub fn set(mut self, code: impl Into<String>) -> Self {
        self.set = Some(code.into());
        self
    }

    /// Render the back face (images only).
    pub fn face_back(mut self) -> Self {
        self.presentation.face_back = true;
        self
    }

    pub fn image_version(mut self, size: ImageSize) -> Self {
        self.presentation.version = Some(size);
        self
    }

    pub fn path(&self) -> &'static str {
        "cards/named"
    }

    pub fn params(&self) -> Params {
        self.params_for(ResponseFormat::Json)
    }

    pub fn params_for(&self, format: ResponseFormat) -> Params {
        let mut params = Params::new();
        if let Some((mode, name)) = &self.name {
            params.insert(mode.as_str(), name.trim().to_string());
        }
        if let Some(set) = &self.set {
            params.insert("set", set.trim().to_string());
        }
        self.presentation.apply(&mut params, format);
        params
    }

    fn validate(&self) -> ScryfallResult<()> {
        match &self.name {
            Some((_, name)) => required(name, "exact or fuzzy").map(|_| ()),
            None => Err(ScryfallError::MissingParameter("exact or fuzzy")),
        }
    }

    pub async fn send(&self) -> ScryfallResult<Card> {
        self.validate()?;
        self.client.get_json(self.path(), &self.params()).await
    }

    /// The card rendered as plain text.
    pub async fn text(&self) -> ScryfallResult<String> {
        self.validate()?;
        let params = self.params_for(ResponseFormat::Text);
        self.client.get_text(self.path(), &params).await
    }

    /// The card image as raw bytes.
    pub async fn image(&self) -> ScryfallResult<Vec<u8>> {
        self.validate()?;
        let params = self.params_for(ResponseFormat::Image);
        self.client.get_bytes(self.path(), &params).await
    }
}
