//! Object types returned by the API.
//!
//! Every type decodes from the JSON the API sends. Fields the API may omit
//! are `Option`s or empty collections, and unknown fields are ignored, so a
//! payload from a newer API version still decodes.

mod api_error;
mod bulk_data;
mod card;
mod card_face;
mod catalog;
mod collection;
mod images;
mod legalities;
mod list;
mod migration;
mod object;
mod preview;
mod prices;
mod related_card;
mod ruling;
mod set;
mod symbol;

pub use api_error::ApiError;
pub use bulk_data::BulkData;
pub use card::Card;
pub use card_face::CardFace;
pub use catalog::Catalog;
pub use collection::{CardCollection, CardIdentifier, MAX_COLLECTION_IDENTIFIERS};
pub use images::ImageUris;
pub use legalities::Legalities;
pub use list::ScryfallList;
pub use migration::CardMigration;
pub use object::ScryfallObject;
pub use preview::Preview;
pub use prices::Prices;
pub use related_card::RelatedCard;
pub use ruling::Ruling;
pub use set::Set;
pub use symbol::{CardSymbol, ManaCost};
