//! Card query routes.
//!
//! Each route is a builder obtained from [`ScryfallClient::cards`]. Builders
//! expose `path()` and `params()` so a request can be inspected before it is
//! sent.

mod collection;
mod lookup;
mod named;
mod random;
mod search;

pub use collection::CollectionRoute;
pub use lookup::{CardLookup, CardRoute};
pub use named::NamedRoute;
pub use random::RandomRoute;
pub use search::{AutocompleteRoute, SearchRoute};

use scryfall_core::vocab::ImageSize;
use scryfall_core::ScryfallId;

use crate::client::{Params, ScryfallClient};

/// Representation a card route is asked to respond with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
    Text,
    Image,
}

impl ResponseFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::Image => "image",
        }
    }
}

/// Which face and image version a single-card route renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Presentation {
    pub(crate) face_back: bool,
    pub(crate) version: Option<ImageSize>,
}

impl Presentation {
    /// Add the parameters for `format`. JSON is the API default and needs
    /// none; face and version only apply to images.
    pub(crate) fn apply(self, params: &mut Params, format: ResponseFormat) {
        if format == ResponseFormat::Json {
            return;
        }
        params.insert("format", format.as_str().to_string());
        if format == ResponseFormat::Image {
            if let Some(version) = self.version {
                params.insert("version", version.as_str().to_string());
            }
            if self.face_back {
                params.insert("face", "back".to_string());
            }
        }
    }
}

/// Entry point for the card routes.
#[derive(Debug, Clone, Copy)]
pub struct Cards<'a> {
    client: &'a ScryfallClient,
}

impl ScryfallClient {
    /// Card routes: search, named lookup, random, collection and the id
    /// lookups.
    pub fn cards(&self) -> Cards<'_> {
        Cards { client: self }
    }
}

impl<'a> Cards<'a> {
    /// Full-text search using Scryfall's search syntax.
    pub fn search(self, query: impl Into<String>) -> SearchRoute<'a> {
        SearchRoute::new(self.client, query.into())
    }

    /// Lookup by name; choose [`NamedRoute::exact`] or
    /// [`NamedRoute::fuzzy`].
    pub fn named(self) -> NamedRoute<'a> {
        NamedRoute::new(self.client)
    }

    /// Name suggestions for a partial query.
    pub fn autocomplete(self, query: impl Into<String>) -> AutocompleteRoute<'a> {
        AutocompleteRoute::new(self.client, query.into())
    }

    pub fn random(self) -> RandomRoute<'a> {
        RandomRoute::new(self.client)
    }

    /// Fetch many cards at once by identifier.
    pub fn collection(self) -> CollectionRoute<'a> {
        CollectionRoute::new(self.client)
    }

    pub fn by_code_and_number(
        self,
        set: impl Into<String>,
        collector_number: impl Into<String>,
    ) -> CardRoute<'a> {
        CardRoute::new(
            self.client,
            CardLookup::CodeAndNumber {
                set: set.into(),
                number: collector_number.into(),
                lang: None,
            },
        )
    }

    pub fn by_id(self, id: ScryfallId) -> CardRoute<'a> {
        CardRoute::new(self.client, CardLookup::Id(id))
    }

    pub fn by_multiverse_id(self, id: u32) -> CardRoute<'a> {
        CardRoute::new(self.client, CardLookup::Multiverse(id))
    }

    pub fn by_mtgo_id(self, id: u32) -> CardRoute<'a> {
        CardRoute::new(self.client, CardLookup::Mtgo(id))
    }

    pub fn by_arena_id(self, id: u32) -> CardRoute<'a> {
        CardRoute::new(self.client, CardLookup::Arena(id))
    }

    pub fn by_tcgplayer_id(self, id: u32) -> CardRoute<'a> {
        CardRoute::new(self.client, CardLookup::Tcgplayer(id))
    }

    pub fn by_cardmarket_id(self, id: u32) -> CardRoute<'a> {
        CardRoute::new(self.client, CardLookup::Cardmarket(id))
    }

    /// Lookup by any [`CardLookup`].
    pub fn lookup(self, lookup: CardLookup) -> CardRoute<'a> {
        CardRoute::new(self.client, lookup)
    }
}

/// A parameter value that must be present and not blank.
pub(crate) fn required<'s>(value: &'s str, name: &'static str) -> crate::ScryfallResult<&'s str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(crate::ScryfallError::MissingParameter(name))
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_adds_nothing() {
        let mut params = Params::new();
        Presentation {
            face_back: true,
            version: Some(ImageSize::Png),
        }
        .apply(&mut params, ResponseFormat::Json);
        assert!(params.is_empty());
    }

    #[test]
    fn test_image_adds_version_and_face() {
        let mut params = Params::new();
        Presentation {
            face_back: true,
            version: Some(ImageSize::ArtCrop),
        }
        .apply(&mut params, ResponseFormat::Image);
        assert_eq!(params.get("format").map(String::as_str), Some("image"));
        assert_eq!(params.get("version").map(String::as_str), Some("art_crop"));
        assert_eq!(params.get("face").map(String::as_str), Some("back"));
    }

    #[test]
    fn test_text_ignores_image_options() {
        let mut params = Params::new();
        Presentation {
            face_back: true,
            version: Some(ImageSize::Small),
        }
        .apply(&mut params, ResponseFormat::Text);
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("format").map(String::as_str), Some("text"));
    }

    #[test]
    fn test_required_trims() {
        assert_eq!(required("  bolt ", "q").unwrap(), "bolt");
        assert!(matches!(
            required(" \t", "q"),
            Err(crate::ScryfallError::MissingParameter("q"))
        ));
    }
}
