use std::fmt;

use scryfall_core::vocab::ImageSize;
use scryfall_core::{Card, ScryfallId};

use crate::client::{Params, ScryfallClient};
use crate::error::ScryfallResult;
use crate::routes::{required, Presentation, ResponseFormat};

/// The ways a single card can be addressed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CardLookup {
    Id(ScryfallId),
    Multiverse(u32),
    Mtgo(u32),
    Arena(u32),
    Tcgplayer(u32),
    Cardmarket(u32),
    /// Set code and collector number, optionally in a given language.
    CodeAndNumber {
        set: String,
        number: String,
        lang: Option<String>,
    },
}

impl CardLookup {
    /// Route of the card itself.
    pub fn path(&self) -> String {
        match self {
            Self::Id(id) => format!("cards/{id}"),
            Self::Multiverse(id) => format!("cards/multiverse/{id}"),
            Self::Mtgo(id) => format!("cards/mtgo/{id}"),
            Self::Arena(id) => format!("cards/arena/{id}"),
            Self::Tcgplayer(id) => format!("cards/tcgplayer/{id}"),
            Self::Cardmarket(id) => format!("cards/cardmarket/{id}"),
            Self::CodeAndNumber { set, number, lang } => {
                let base = format!("cards/{}/{}", set.trim(), number.trim());
                match lang.as_deref().map(str::trim) {
                    Some(lang) if !lang.is_empty() => format!("{base}/{lang}"),
                    _ => base,
                }
            }
        }
    }

    /// Route of the card's rulings. Rulings are not localized, so a
    /// language is dropped.
    pub fn rulings_path(&self) -> String {
        match self {
            Self::CodeAndNumber { set, number, .. } => {
                format!("cards/{}/{}/rulings", set.trim(), number.trim())
            }
            other => format!("{}/rulings", other.path()),
        }
    }

    pub(crate) fn validate(&self) -> ScryfallResult<()> {
        if let Self::CodeAndNumber { set, number, .. } = self {
            required(set, "set")?;
            required(number, "collector_number")?;
        }
        Ok(())
    }
}

impl fmt::Display for CardLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id {id}"),
            Self::Multiverse(id) => write!(f, "multiverse id {id}"),
            Self::Mtgo(id) => write!(f, "MTGO id {id}"),
            Self::Arena(id) => write!(f, "Arena id {id}"),
            Self::Tcgplayer(id) => write!(f, "TCGplayer id {id}"),
            Self::Cardmarket(id) => write!(f, "Cardmarket id {id}"),
            Self::CodeAndNumber { set, number, lang } => {
                write!(f, "{set} #{number}")?;
                if let Some(lang) = lang {
                    write!(f, " ({lang})")?;
                }
                Ok(())
            }
        }
    }
}

/// A lookup of one card by identifier, or by set code and collector number.
#[derive(Debug, Clone)]
#[must_use]
pub struct CardRoute<'a> {
    client: &'a ScryfallClient,
    lookup: CardLookup,
    presentation: Presentation,
}

impl<'a> CardRoute<'a> {
    pub(crate) fn new(client: &'a ScryfallClient, lookup: CardLookup) -> Self {
        Self {
            client,
            lookup,
            presentation: Presentation::default(),
        }
    }

    /// Print language for set-and-number lookups. Other lookups already
    /// name a single printing and ignore it.
    pub fn lang(mut self, code: impl Into<String>) -> Self {
        if let CardLookup::CodeAndNumber { lang, .. } = &mut self.lookup {
            *lang = Some(code.into());
        }
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

    pub fn lookup(&self) -> &CardLookup {
        &self.lookup
    }

    pub fn path(&self) -> String {
        self.lookup.path()
    }

    pub fn params(&self) -> Params {
        self.params_for(ResponseFormat::Json)
    }

    pub fn params_for(&self, format: ResponseFormat) -> Params {
        let mut params = Params::new();
        self.presentation.apply(&mut params, format);
        params
    }

    pub async fn send(&self) -> ScryfallResult<Card> {
        self.lookup.validate()?;
        self.client.get_json(&self.path(), &self.params()).await
    }

    pub async fn text(&self) -> ScryfallResult<String> {
        self.lookup.validate()?;
        let params = self.params_for(ResponseFormat::Text);
        self.client.get_text(&self.path(), &params).await
    }

    pub async fn image(&self) -> ScryfallResult<Vec<u8>> {
        self.lookup.validate()?;
        let params = self.params_for(ResponseFormat::Image);
        self.client.get_bytes(&self.path(), &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_paths() {
        assert_eq!(CardLookup::Multiverse(409_574).path(), "cards/multiverse/409574");
        assert_eq!(CardLookup::Mtgo(54957).path(), "cards/mtgo/54957");
        assert_eq!(CardLookup::Arena(67330).path(), "cards/arena/67330");
        assert_eq!(CardLookup::Tcgplayer(162_145).path(), "cards/tcgplayer/162145");
        assert_eq!(CardLookup::Cardmarket(379_041).path(), "cards/cardmarket/379041");
    }

    #[test]
    fn test_code_and_number_paths() {
        let lookup = CardLookup::CodeAndNumber {
            set: "xln".to_string(),
            number: "96".to_string(),
            lang: Some("ja".to_string()),
        };
        assert_eq!(lookup.path(), "cards/xln/96/ja");
        assert_eq!(lookup.rulings_path(), "cards/xln/96/rulings");
        assert_eq!(lookup.to_string(), "xln #96 (ja)");
    }

    #[test]
    fn test_blank_code_rejected() {
        let lookup = CardLookup::CodeAndNumber {
            set: " ".to_string(),
            number: "96".to_string(),
            lang: None,
        };
        assert!(lookup.validate().is_err());
    }
}
