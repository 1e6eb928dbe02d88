use serde::{Deserialize, Serialize};

use crate::model::{
    ApiError, BulkData, Card, CardFace, CardMigration, CardSymbol, Catalog, ManaCost, RelatedCard,
    Ruling, ScryfallList, Set,
};

/// Any API object, decoded by its `object` field.
///
/// Useful when the kind of a payload is not known up front, such as a
/// response that may be either a list or an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "object", rename_all = "snake_case")]
pub enum ScryfallObject {
    Card(Box<Card>),
    CardFace(Box<CardFace>),
    RelatedCard(RelatedCard),
    Set(Set),
    Ruling(Ruling),
    CardSymbol(CardSymbol),
    ManaCost(ManaCost),
    Catalog(Catalog),
    BulkData(BulkData),
    Migration(CardMigration),
    Error(ApiError),
    List(ScryfallList<ScryfallObject>),
}

impl ScryfallObject {
    /// The `object` tag of this value.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Card(_) => "card",
            Self::CardFace(_) => "card_face",
            Self::RelatedCard(_) => "related_card",
            Self::Set(_) => "set",
            Self::Ruling(_) => "ruling",
            Self::CardSymbol(_) => "card_symbol",
            Self::ManaCost(_) => "mana_cost",
            Self::Catalog(_) => "catalog",
            Self::BulkData(_) => "bulk_data",
            Self::Migration(_) => "migration",
            Self::Error(_) => "error",
            Self::List(_) => "list",
        }
    }

    #[must_use]
    pub fn as_card(&self) -> Option<&Card> {
        match self {
            Self::Card(card) => Some(card.as_ref()),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_card(self) -> Option<Card> {
        match self {
            Self::Card(card) => Some(*card),
            _ => None,
        }
    }

    /// The error, when this object is one.
    #[must_use]
    pub fn as_error(&self) -> Option<&ApiError> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }
}

impl ScryfallList<ScryfallObject> {
    /// The cards of a heterogeneous list, skipping every other object kind.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.data.iter().filter_map(ScryfallObject::as_card)
    }
}
