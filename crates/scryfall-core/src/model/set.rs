use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::SetId;
use crate::vocab::SetType;

/// A group of related cards released together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Set {
    pub id: SetId,
    /// Unique three to six letter code.
    pub code: String,
    pub mtgo_code: Option<String>,
    pub arena_code: Option<String>,
    pub tcgplayer_id: Option<u32>,
    pub name: String,
    pub set_type: SetType,
    pub released_at: Option<NaiveDate>,
    pub block_code: Option<String>,
    pub block: Option<String>,
    pub parent_set_code: Option<String>,
    #[serde(default)]
    pub card_count: u32,
    pub printed_size: Option<u32>,
    #[serde(default)]
    pub digital: bool,
    #[serde(default)]
    pub foil_only: bool,
    #[serde(default)]
    pub nonfoil_only: bool,
    #[serde(default)]
    pub scryfall_uri: String,
    /// API link to this set object.
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub icon_svg_uri: String,
    /// Search link listing every card in the set.
    #[serde(default)]
    pub search_uri: String,
}
