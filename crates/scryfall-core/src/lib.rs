//! Core data model for the Scryfall card API.
//!
//! This crate defines every object the API returns (cards, sets, rulings,
//! symbols, catalogs, bulk-data descriptors, migrations, lists and errors),
//! the controlled vocabularies their fields draw from, and a few pure helpers
//! such as type-line parsing. It performs no I/O.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

#[macro_use]
mod macros;

pub mod error;
pub mod ids;
pub mod model;
pub mod type_line;
pub mod vocab;

mod serde_util;

pub use error::{Error, Result};
pub use ids::{IllustrationId, OracleId, ScryfallId, SetId};
pub use model::{
    ApiError, BulkData, Card, CardCollection, CardFace, CardIdentifier, CardMigration, CardSymbol,
    Catalog, ImageUris, Legalities, ManaCost, Preview, Prices, RelatedCard, Ruling, ScryfallList,
    ScryfallObject, Set,
};
pub use type_line::TypeLine;
