use anyhow::{Context, Result};
use std::future::Future;
use std::path::PathBuf;

use scryfall_client::{CardLookup, ScryfallClient, ScryfallError, ScryfallResult};
use scryfall_core::vocab::ImageSize;
use scryfall_core::{Card, ScryfallId};

use super::output::{card_details, print_json};

/// How a looked-up card is shown.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ImageArgs {
    /// Save the card image to this file instead of printing the card
    #[arg(long, value_name = "FILE")]
    pub image: Option<PathBuf>,

    /// Image version: small, normal, large, png, art_crop, border_crop
    #[arg(long, requires = "image")]
    pub size: Option<ImageSize>,

    /// Use the back face (image only)
    #[arg(long, requires = "image")]
    pub back: bool,

    /// Print Scryfall's plain-text rendering of the card
    #[arg(long, conflicts_with = "image")]
    pub text: bool,
}

/// Identifier kinds accepted by `card id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum IdKind {
    Scryfall,
    Multiverse,
    Mtgo,
    Arena,
    Tcgplayer,
    Cardmarket,
}

impl IdKind {
    pub fn lookup(self, id: &str) -> Result<CardLookup> {
        let id = id.trim();
        Ok(match self {
            Self::Scryfall => CardLookup::Id(id.parse::<ScryfallId>()?),
            Self::Multiverse => CardLookup::Multiverse(self.number(id)?),
            Self::Mtgo => CardLookup::Mtgo(self.number(id)?),
            Self::Arena => CardLookup::Arena(self.number(id)?),
            Self::Tcgplayer => CardLookup::Tcgplayer(self.number(id)?),
            Self::Cardmarket => CardLookup::Cardmarket(self.number(id)?),
        })
    }

    fn number(self, id: &str) -> Result<u32> {
        id.parse()
            .with_context(|| format!("Invalid {self:?} id: {id:?} (expected a number)"))
    }
}

/// Look up a card by name.
pub async fn run_named(
    client: &ScryfallClient,
    name: &str,
    exact: bool,
    set: Option<&str>,
    args: &ImageArgs,
    json: bool,
) -> Result<()> {
    let mut route = client.cards().named();
    route = if exact { route.exact(name) } else { route.fuzzy(name) };
    if let Some(set) = set {
        route = route.set(set);
    }
    if args.back {
        route = route.face_back();
    }
    if let Some(size) = args.size {
        route = route.image_version(size);
    }

    show(args, json, route.send(), route.text(), route.image())
        .await
        .map_err(|err| explain_ambiguous(err, name))
}

/// Look up a card by identifier or by set code and collector number.
pub async fn run_lookup(
    client: &ScryfallClient,
    lookup: CardLookup,
    args: &ImageArgs,
    json: bool,
) -> Result<()> {
    let mut route = client.cards().lookup(lookup);
    if args.back {
        route = route.face_back();
    }
    if let Some(size) = args.size {
        route = route.image_version(size);
    }
    log::debug!("looking up card by {}", route.lookup());

    show(args, json, route.send(), route.text(), route.image()).await
}

/// A random card, optionally restricted by a search query.
pub async fn run_random(
    client: &ScryfallClient,
    query: Option<&str>,
    args: &ImageArgs,
    json: bool,
) -> Result<()> {
    let mut route = client.cards().random();
    if let Some(query) = query {
        route = route.query(query);
    }
    if args.back {
        route = route.face_back();
    }
    if let Some(size) = args.size {
        route = route.image_version(size);
    }

    show(args, json, route.send(), route.text(), route.image()).await
}

/// Await only the representation that was asked for.
async fn show(
    args: &ImageArgs,
    json: bool,
    card: impl Future<Output = ScryfallResult<Card>>,
    text: impl Future<Output = ScryfallResult<String>>,
    image: impl Future<Output = ScryfallResult<Vec<u8>>>,
) -> Result<()> {
    if let Some(path) = &args.image {
        let bytes = image.await?;
        tokio::fs::write(path, &bytes)
            .await
            .with_context(|| format!("Failed to write image to {}", path.display()))?;
        println!("✓ Saved image ({} bytes) to {}", bytes.len(), path.display());
    } else if args.text {
        let text = text.await?;
        println!("{}", text.trim_end());
    } else {
        let card = card.await?;
        if json {
            print_json(&card)?;
        } else {
            println!("{}", card_details(&card));
        }
    }
    Ok(())
}

fn explain_ambiguous(err: anyhow::Error, name: &str) -> anyhow::Error {
    let ambiguous = err
        .downcast_ref::<ScryfallError>()
        .and_then(ScryfallError::api_error)
        .is_some_and(|api| api.is_ambiguous());
    if ambiguous {
        err.context(format!(
            "More than one card matches {name:?}. Try `scryfall autocomplete {name:?}` to list them."
        ))
    } else {
        err
    }
}
