use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ids::{IllustrationId, OracleId};
use crate::model::ImageUris;
use crate::vocab::{Color, Layout};

/// One face of a multi-face card (split, flip, transform, modal and so on).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardFace {
    pub name: String,
    /// Mana cost; empty for faces without one.
    #[serde(default)]
    pub mana_cost: String,
    pub type_line: Option<String>,
    pub oracle_text: Option<String>,

    pub artist: Option<String>,
    pub artist_id: Option<Uuid>,
    pub cmc: Option<f64>,
    #[serde(default, deserialize_with = "crate::serde_util::nullable")]
    pub colors: Vec<Color>,
    #[serde(default, deserialize_with = "crate::serde_util::nullable")]
    pub color_indicator: Vec<Color>,
    pub defense: Option<String>,
    pub flavor_text: Option<String>,
    pub illustration_id: Option<IllustrationId>,
    pub image_uris: Option<ImageUris>,
    pub layout: Option<Layout>,
    pub loyalty: Option<String>,
    pub oracle_id: Option<OracleId>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    pub printed_name: Option<String>,
    pub printed_text: Option<String>,
    pub printed_type_line: Option<String>,
    pub watermark: Option<String>,
}
