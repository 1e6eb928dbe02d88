use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::ids::{IllustrationId, OracleId, ScryfallId, SetId};
use crate::model::{CardFace, ImageUris, Legalities, Preview, Prices, RelatedCard};
use crate::type_line::TypeLine;
use crate::vocab::{
    BorderColor, Color, Finish, Format, Frame, FrameEffect, Game, ImageSize, ImageStatus, Layout,
    Rarity, SecurityStamp, SetType,
};

/// A single card printing.
///
/// Gameplay fields describe the card's Oracle identity and are shared by
/// every printing; print fields describe this particular printing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    // --- Identifiers ---
    pub id: ScryfallId,
    pub oracle_id: Option<OracleId>,
    #[serde(default, deserialize_with = "crate::serde_util::nullable")]
    pub multiverse_ids: Vec<u32>,
    pub mtgo_id: Option<u32>,
    pub mtgo_foil_id: Option<u32>,
    pub arena_id: Option<u32>,
    pub tcgplayer_id: Option<u32>,
    pub tcgplayer_etched_id: Option<u32>,
    pub cardmarket_id: Option<u32>,
    pub lang: String,
    pub layout: Layout,

    // --- Links ---
    /// API link to this card object.
    #[serde(default)]
    pub uri: String,
    /// Human-readable page on scryfall.com.
    #[serde(default)]
    pub scryfall_uri: String,
    /// Search link listing every printing of this card.
    #[serde(default)]
    pub prints_search_uri: String,
    #[serde(default)]
    pub rulings_uri: String,
    #[serde(default)]
    pub set_uri: String,
    #[serde(default)]
    pub set_search_uri: String,
    #[serde(default)]
    pub scryfall_set_uri: String,

    // --- Gameplay ---
    pub name: String,
    #[serde(default, deserialize_with = "crate::serde_util::nullable")]
    pub all_parts: Vec<RelatedCard>,
    #[serde(default, deserialize_with = "crate::serde_util::nullable")]
    pub card_faces: Vec<CardFace>,
    /// Mana value. Absent on reversible cards.
    pub cmc: Option<f64>,
    #[serde(default, deserialize_with = "crate::serde_util::nullable")]
    pub colors: Vec<Color>,
    #[serde(default, deserialize_with = "crate::serde_util::nullable")]
    pub color_identity: Vec<Color>,
    #[serde(default, deserialize_with = "crate::serde_util::nullable")]
    pub color_indicator: Vec<Color>,
    pub defense: Option<String>,
    pub edhrec_rank: Option<u32>,
    pub penny_rank: Option<u32>,
    /// Vanguard hand size modifier.
    pub hand_modifier: Option<String>,
    /// Vanguard life total modifier.
    pub life_modifier: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_util::nullable")]
    pub keywords: Vec<String>,
    #[serde(default, deserialize_with = "crate::serde_util::nullable")]
    pub legalities: Legalities,
    pub loyalty: Option<String>,
    pub mana_cost: Option<String>,
    pub oracle_text: Option<String>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_util::nullable")]
    pub produced_mana: Vec<Color>,
    #[serde(default)]
    pub reserved: bool,
    /// Absent on reversible cards, whose faces carry their own.
    pub type_line: Option<String>,

    // --- Print ---
    pub artist: Option<String>,
    #[serde(default, deserialize_with = "crate::serde_util::nullable")]
    pub artist_ids: Vec<Uuid>,
    #[serde(default)]
    pub booster: bool,
    pub border_color: Option<BorderColor>,
    pub card_back_id: Option<Uuid>,
    pub collector_number: String,
    #[serde(default)]
    pub content_warning: bool,
    #[serde(default)]
    pub digital: bool,
    #[serde(default, deserialize_with = "crate::serde_util::nullable")]
    pub finishes: Vec<Finish>,
    pub flavor_name: Option<String>,
    pub flavor_text: Option<String>,
    pub frame: Option<Frame>,
    #[serde(default, deserialize_with = "crate::serde_util::nullable")]
    pub frame_effects: Vec<FrameEffect>,
    #[serde(default)]
    pub full_art: bool,
    #[serde(default, deserialize_with = "crate::serde_util::nullable")]
    pub games: Vec<Game>,
    #[serde(default)]
    pub highres_image: bool,
    pub illustration_id: Option<IllustrationId>,
    pub image_status: Option<ImageStatus>,
    pub image_uris: Option<ImageUris>,
    #[serde(default)]
    pub oversized: bool,
    #[serde(default, deserialize_with = "crate::serde_util::nullable")]
    pub prices: Prices,
    pub printed_name: Option<String>,
    pub printed_text: Option<String>,
    pub printed_type_line: Option<String>,
    #[serde(default)]
    pub promo: bool,
    #[serde(default, deserialize_with = "crate::serde_util::nullable")]
    pub promo_types: Vec<String>,
    /// Store name to purchase link.
    #[serde(default, deserialize_with = "crate::serde_util::nullable")]
    pub purchase_uris: BTreeMap<String, String>,
    pub rarity: Option<Rarity>,
    /// Resource name to link (Gatherer, EDHREC and so on).
    #[serde(default, deserialize_with = "crate::serde_util::nullable")]
    pub related_uris: BTreeMap<String, String>,
    pub released_at: Option<NaiveDate>,
    #[serde(default)]
    pub reprint: bool,
    /// Set code.
    pub set: String,
    pub set_id: Option<SetId>,
    #[serde(default)]
    pub set_name: String,
    pub set_type: Option<SetType>,
    #[serde(default)]
    pub story_spotlight: bool,
    #[serde(default)]
    pub textless: bool,
    #[serde(default)]
    pub variation: bool,
    pub variation_of: Option<ScryfallId>,
    pub security_stamp: Option<SecurityStamp>,
    pub watermark: Option<String>,
    pub preview: Option<Preview>,
}

impl Card {
    /// Whether the faces carry their own images instead of the card.
    #[must_use]
    pub fn has_multiple_faces(&self) -> bool {
        self.image_uris.is_none() && self.card_faces.iter().any(|f| f.image_uris.is_some())
    }

    /// Image link of the given size: the card's own, else its first face's.
    #[must_use]
    pub fn image_uri(&self, size: ImageSize) -> Option<&str> {
        self.image_uris
            .as_ref()
            .and_then(|uris| uris.get(size))
            .or_else(|| {
                self.card_faces
                    .first()
                    .and_then(|face| face.image_uris.as_ref())
                    .and_then(|uris| uris.get(size))
            })
    }

    /// The parsed type line. Cards without a top-level type line are parsed
    /// from their faces.
    #[must_use]
    pub fn parsed_type_line(&self) -> TypeLine {
        match &self.type_line {
            Some(line) => TypeLine::parse(line),
            None => self
                .card_faces
                .iter()
                .filter_map(|face| face.type_line.as_deref())
                .map(TypeLine::parse)
                .fold(TypeLine::default(), TypeLine::merge),
        }
    }

    #[must_use]
    pub fn supertypes(&self) -> Vec<String> {
        self.parsed_type_line().supertypes
    }

    #[must_use]
    pub fn types(&self) -> Vec<String> {
        self.parsed_type_line().types
    }

    #[must_use]
    pub fn subtypes(&self) -> Vec<String> {
        self.parsed_type_line().subtypes
    }

    /// Whether the card may be played in `format` (legal or restricted).
    #[must_use]
    pub fn is_legal_in(&self, format: &Format) -> bool {
        self.legalities.get(format).is_playable()
    }

    /// Names of each face, or the card name for single-faced cards.
    #[must_use]
    pub fn face_names(&self) -> Vec<&str> {
        if self.card_faces.is_empty() {
            vec![self.name.as_str()]
        } else {
            self.card_faces.iter().map(|face| face.name.as_str()).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::Legality;

    fn bolt() -> Card {
        serde_json::from_str(
            r#"{
                "object": "card",
                "id": "e3285e6b-3e79-4d7c-bf96-d920f973b122",
                "oracle_id": "4457ed35-7c10-48c8-9776-456485fdf070",
                "multiverse_ids": [442130],
                "lang": "en",
                "layout": "normal",
                "name": "Lightning Bolt",
                "mana_cost": "{R}",
                "cmc": 1.0,
                "type_line": "Instant",
                "oracle_text": "Lightning Bolt deals 3 damage to any target.",
                "colors": ["R"],
                "color_identity": ["R"],
                "keywords": [],
                "legalities": {"modern": "legal", "standard": "not_legal", "vintage": "legal"},
                "games": ["paper", "mtgo"],
                "set": "a25",
                "set_name": "Masters 25",
                "set_type": "masters",
                "collector_number": "141",
                "rarity": "uncommon",
                "frame": "2015",
                "border_color": "black",
                "image_uris": {"small": "https://cards.scryfall.io/small/front/e/3/bolt.jpg"},
                "prices": {"usd": "2.04", "eur": null, "tix": "0.02"},
                "released_at": "2018-03-16"
            }"#,
        )
        .unwrap()
    }

    fn delver() -> Card {
        serde_json::from_str(
            r#"{
                "object": "card",
                "id": "11bf83bb-c95b-4b4f-9a56-ce7a1816307a",
                "lang": "en",
                "layout": "transform",
                "name": "Delver of Secrets // Insectile Aberration",
                "cmc": 1.0,
                "type_line": "Creature — Human Wizard // Creature — Human Insect",
                "set": "isd",
                "collector_number": "51",
                "card_faces": [
                    {
                        "object": "card_face",
                        "name": "Delver of Secrets",
                        "mana_cost": "{U}",
                        "type_line": "Creature — Human Wizard",
                        "image_uris": {"normal": "https://cards.scryfall.io/normal/front/1/1/delver.jpg"}
                    },
                    {
                        "object": "card_face",
                        "name": "Insectile Aberration",
                        "mana_cost": "",
                        "type_line": "Creature — Human Insect",
                        "color_indicator": ["U"],
                        "image_uris": {"normal": "https://cards.scryfall.io/normal/back/1/1/delver.jpg"}
                    }
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_decode_single_faced_card() {
        let card = bolt();
        assert_eq!(card.name, "Lightning Bolt");
        assert_eq!(card.multiverse_ids, vec![442130]);
        assert_eq!(card.colors, vec![Color::Red]);
        assert_eq!(card.frame, Some(Frame::M15));
        assert_eq!(card.rarity, Some(Rarity::Uncommon));
        assert_eq!(card.set_type, Some(SetType::Masters));
        assert_eq!(card.released_at, NaiveDate::from_ymd_opt(2018, 3, 16));
        assert_eq!(card.prices.usd_value(), Some(2.04));
        assert!(card.card_faces.is_empty());
        assert!(!card.has_multiple_faces());
    }

    #[test]
    fn test_legality_helpers() {
        let card = bolt();
        assert!(card.is_legal_in(&Format::Modern));
        assert!(!card.is_legal_in(&Format::Standard));
        assert!(!card.is_legal_in(&Format::Pauper));
        assert_eq!(card.legalities.get(&Format::Pauper), Legality::NotLegal);
    }

    #[test]
    fn test_image_uri_prefers_card_level() {
        let card = bolt();
        assert_eq!(
            card.image_uri(ImageSize::Small),
            Some("https://cards.scryfall.io/small/front/e/3/bolt.jpg")
        );
        assert_eq!(card.image_uri(ImageSize::Large), None);
    }

    #[test]
    fn test_double_faced_card() {
        let card = delver();
        assert!(card.has_multiple_faces());
        assert_eq!(
            card.image_uri(ImageSize::Normal),
            Some("https://cards.scryfall.io/normal/front/1/1/delver.jpg")
        );
        assert_eq!(
            card.face_names(),
            vec!["Delver of Secrets", "Insectile Aberration"]
        );
        assert_eq!(card.card_faces[1].color_indicator, vec![Color::Blue]);
        assert_eq!(card.card_faces[1].mana_cost, "");
    }

    #[test]
    fn test_type_parts_across_faces() {
        let card = delver();
        assert!(card.supertypes().is_empty());
        assert_eq!(card.types(), vec!["Creature"]);
        assert_eq!(card.subtypes(), vec!["Human", "Wizard", "Insect"]);
    }

    #[test]
    fn test_type_line_from_faces_when_missing() {
        let mut card = delver();
        card.type_line = None;
        assert_eq!(card.subtypes(), vec!["Human", "Wizard", "Insect"]);
    }

    #[test]
    fn test_face_names_single_faced() {
        assert_eq!(bolt().face_names(), vec!["Lightning Bolt"]);
    }
}
