use serde::{Deserialize, Serialize};

use crate::ids::{IllustrationId, OracleId, ScryfallId};
use crate::model::Card;

/// Most identifiers the collection route accepts in one request.
pub const MAX_COLLECTION_IDENTIFIERS: usize = 75;

/// One way of naming a card in a `cards/collection` request.
///
/// Serialized untagged: each variant becomes a JSON object with exactly its
/// own fields. Variants with more fields come first so that decoding picks
/// the most specific shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CardIdentifier {
    SetAndCollectorNumber { set: String, collector_number: String },
    NameAndSet { name: String, set: String },
    Id { id: ScryfallId },
    MtgoId { mtgo_id: u32 },
    MultiverseId { multiverse_id: u32 },
    Oracle { oracle_id: OracleId },
    Illustration { illustration_id: IllustrationId },
    Name { name: String },
}

impl CardIdentifier {
    pub fn id(id: ScryfallId) -> Self {
        Self::Id { id }
    }

    pub fn mtgo_id(mtgo_id: u32) -> Self {
        Self::MtgoId { mtgo_id }
    }

    pub fn multiverse_id(multiverse_id: u32) -> Self {
        Self::MultiverseId { multiverse_id }
    }

    pub fn oracle_id(oracle_id: OracleId) -> Self {
        Self::Oracle { oracle_id }
    }

    pub fn illustration_id(illustration_id: IllustrationId) -> Self {
        Self::Illustration { illustration_id }
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self::Name { name: name.into() }
    }

    pub fn name_and_set(name: impl Into<String>, set: impl Into<String>) -> Self {
        Self::NameAndSet {
            name: name.into(),
            set: set.into(),
        }
    }

    pub fn set_and_number(set: impl Into<String>, collector_number: impl Into<String>) -> Self {
        Self::SetAndCollectorNumber {
            set: set.into(),
            collector_number: collector_number.into(),
        }
    }
}

/// Response of the collection route: the cards found and the identifiers
/// that matched nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardCollection {
    #[serde(default, deserialize_with = "crate::serde_util::nullable")]
    pub data: Vec<Card>,
    #[serde(default, deserialize_with = "crate::serde_util::nullable")]
    pub not_found: Vec<CardIdentifier>,
    #[serde(default, deserialize_with = "crate::serde_util::nullable")]
    pub warnings: Vec<String>,
}
