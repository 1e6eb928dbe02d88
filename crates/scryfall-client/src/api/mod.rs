//! Endpoints other than the card query routes.
//!
//! Each module adds methods to [`ScryfallClient`](crate::ScryfallClient).
//! List endpoints follow every page and return plain vectors.

pub mod bulk;
mod catalogs;
mod images;
mod migrations;
mod prints;
mod rulings;
mod sets;
mod symbology;

pub use bulk::read_bulk_cards;
