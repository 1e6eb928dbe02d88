//! Async client for the Scryfall Magic: The Gathering card API.
//!
//! [`ScryfallClient`] wraps the HTTP transport (rate limiting, retries,
//! error decoding). Card queries are builders under [`routes`], obtained from
//! [`ScryfallClient::cards`]; the other endpoints (sets, rulings, symbology,
//! catalogs, bulk data, migrations) are methods on the client itself.
//!
//! ```no_run
//! # async fn demo() -> scryfall_client::ScryfallResult<()> {
//! let client = scryfall_client::ScryfallClient::new()?;
//! let card = client.cards().named().fuzzy("lightning bolt").send().await?;
//! println!("{} ({})", card.name, card.set_name);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod paging;
pub mod resilience;
pub mod routes;

pub use client::{Params, ScryfallClient};
pub use config::ClientConfig;
pub use error::{ScryfallError, ScryfallResult};
pub use resilience::RateLimiter;
pub use routes::{CardLookup, ResponseFormat};

/// The data model, re-exported for convenience.
pub use scryfall_core as model;
