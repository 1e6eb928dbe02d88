//! Controlled vocabularies used by Scryfall objects and requests.

pub mod card;
pub mod color;
pub mod data;
pub mod format;
pub mod request;

pub use card::{
    BorderColor, Component, Finish, Frame, FrameEffect, Game, ImageStatus, Layout, Rarity,
    SecurityStamp, SetType,
};
pub use color::Color;
pub use data::{BulkDataKind, MigrationStrategy, RulingSource};
pub use format::{Format, Legality};
pub use request::{CatalogName, ImageSize, NameMatch, SortDirection, SortOrder, UniqueMode};
