use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use scryfall_client::{ClientConfig, ScryfallClient};
use scryfall_core::vocab::{BulkDataKind, CatalogName, SortDirection, SortOrder, UniqueMode};

mod commands;

use commands::card::{IdKind, ImageArgs};

#[derive(Debug, Parser)]
#[command(name = "scryfall", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Print raw API objects as JSON instead of a summary
    #[arg(long, global = true)]
    json: bool,

    /// Config file to load (default: ~/.config/scryfall/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the API root
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Override the request rate limit (requests per second)
    #[arg(long, global = true)]
    rate: Option<u32>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Look up a single card
    Card {
        #[command(subcommand)]
        command: CardCommands,
    },
    /// Search cards with Scryfall's query syntax
    ///
    /// The query uses the same syntax as the scryfall.com search box, for
    /// example `t:goblin c:r cmc<=2`. Without --all only the first page
    /// (up to 175 cards) is printed.
    Search {
        /// Search query
        query: String,

        /// Collapse duplicates: cards, art or prints
        #[arg(long)]
        unique: Option<UniqueMode>,

        /// Sort field, e.g. name, set, released, cmc, usd
        #[arg(long)]
        order: Option<SortOrder>,

        /// Sort direction: auto, asc or desc
        #[arg(long)]
        dir: Option<SortDirection>,

        /// Include tokens, planes and other extras
        #[arg(long)]
        extras: bool,

        /// Include prints in every language
        #[arg(long)]
        multilingual: bool,

        /// Include rare card variants
        #[arg(long)]
        variations: bool,

        /// Page to start from
        #[arg(long)]
        page: Option<u32>,

        /// Follow every page of results
        #[arg(long)]
        all: bool,
    },
    /// Suggest card names for a partial name
    Autocomplete {
        /// Partial card name
        query: String,

        /// Include tokens and other extras
        #[arg(long)]
        extras: bool,
    },
    /// Fetch many cards at once
    ///
    /// Each entry is either a card name or `set/number`, e.g. `mrd/150`.
    /// Requests are split into batches of 75 identifiers.
    Collection {
        /// Card names or set/number pairs
        entries: Vec<String>,

        /// Read entries from a file, one per line
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Show the rulings for a card
    Rulings {
        /// Card name (fuzzy match)
        name: Option<String>,

        /// Look up by Scryfall id instead of name
        #[arg(long, conflicts_with = "name")]
        id: Option<String>,
    },
    /// Show one set
    Set {
        /// Set code, e.g. mh2
        code: String,

        /// Also list every card in the set
        #[arg(long)]
        cards: bool,
    },
    /// List every set
    Sets {
        /// Only sets of this type, e.g. expansion, core, masters
        #[arg(long = "type")]
        set_type: Option<String>,
    },
    /// List every card symbol
    Symbols,
    /// Parse a mana cost into canonical form
    ParseMana {
        /// Mana cost, e.g. "2WW" or "{2}{W}{W}"
        cost: String,
    },
    /// Show a catalog of names or values
    Catalog {
        /// Catalog name, e.g. creature-types, keyword-abilities
        name: CatalogName,
    },
    /// Bulk data files
    Bulk {
        #[command(subcommand)]
        command: BulkCommands,
    },
    /// List card migrations (merges and deletions)
    Migrations {
        /// Show at most this many
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Debug, clap::Subcommand)]
enum CardCommands {
    /// Look up a card by name
    Named {
        /// Card name
        name: String,

        /// Require an exact name match instead of a fuzzy one
        #[arg(long)]
        exact: bool,

        /// Restrict to a set code
        #[arg(long)]
        set: Option<String>,

        #[command(flatten)]
        image: ImageArgs,
    },
    /// Look up a card by one of its identifiers
    Id {
        /// Identifier value
        id: String,

        /// Which identifier this is
        #[arg(long, value_enum, default_value_t = IdKind::Scryfall)]
        kind: IdKind,

        #[command(flatten)]
        image: ImageArgs,
    },
    /// Look up a card by set code and collector number
    Code {
        /// Set code
        set: String,

        /// Collector number
        number: String,

        /// Print language, e.g. ja
        #[arg(long)]
        lang: Option<String>,

        #[command(flatten)]
        image: ImageArgs,
    },
    /// A random card, optionally matching a query
    Random {
        /// Search query the card must match
        #[arg(long, short)]
        query: Option<String>,

        #[command(flatten)]
        image: ImageArgs,
    },
}

#[derive(Debug, clap::Subcommand)]
enum BulkCommands {
    /// List available bulk files
    List,
    /// Download a bulk file
    Download {
        /// Bulk file type, e.g. oracle_cards, default_cards, rulings
        kind: BulkDataKind,

        /// Output path (default: ./<type>.json)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigCommands {
    /// Show current effective configuration
    Show,
    /// Get a config value (or show entire config file if no key specified)
    Get {
        /// Config key (e.g., base_url, requests_per_second)
        key: Option<String>,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,

        /// Config value
        value: String,
    },
    /// Show config file path
    Path,
    /// Show example configuration
    Example,
    /// Initialize config file with defaults
    Init,
}

impl Cli {
    /// Effective client configuration: file and environment, then flags.
    fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::load_from(path)?,
            None => ClientConfig::load()?,
        };
        if let Some(base_url) = &self.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(rate) = self.rate {
            config.requests_per_second = rate;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Config commands work on the file itself and need no client
    if let Commands::Config { command } = &cli.command {
        return match command {
            ConfigCommands::Show => commands::config::show_config(cli.config.as_deref()),
            ConfigCommands::Get { key } => {
                commands::config::get_config(cli.config.as_deref(), key.as_deref())
            }
            ConfigCommands::Set { key, value } => {
                commands::config::set_config(cli.config.as_deref(), key, value)
            }
            ConfigCommands::Path => commands::config::show_path(cli.config.as_deref()),
            ConfigCommands::Example => commands::config::show_example(),
            ConfigCommands::Init => commands::config::init_config(cli.config.as_deref()),
        };
    }

    let config = cli.client_config()?;
    let client = ScryfallClient::from_config(&config).context("Failed to build API client")?;
    let json = cli.json;

    match cli.command {
        Commands::Card { command } => match command {
            CardCommands::Named {
                name,
                exact,
                set,
                image,
            } => {
                commands::card::run_named(&client, &name, exact, set.as_deref(), &image, json)
                    .await?;
            }
            CardCommands::Id { id, kind, image } => {
                let lookup = kind.lookup(&id)?;
                commands::card::run_lookup(&client, lookup, &image, json).await?;
            }
            CardCommands::Code {
                set,
                number,
                lang,
                image,
            } => {
                let lookup = scryfall_client::CardLookup::CodeAndNumber { set, number, lang };
                commands::card::run_lookup(&client, lookup, &image, json).await?;
            }
            CardCommands::Random { query, image } => {
                commands::card::run_random(&client, query.as_deref(), &image, json).await?;
            }
        },
        Commands::Search {
            query,
            unique,
            order,
            dir,
            extras,
            multilingual,
            variations,
            page,
            all,
        } => {
            let options = commands::search::SearchOptions {
                unique,
                order,
                dir,
                extras,
                multilingual,
                variations,
                page,
                all,
            };
            commands::search::run_search(&client, &query, &options, json).await?;
        }
        Commands::Autocomplete { query, extras } => {
            commands::search::run_autocomplete(&client, &query, extras, json).await?;
        }
        Commands::Collection { entries, file } => {
            commands::collection::run_collection(&client, entries, file.as_deref(), json)
                .await?;
        }
        Commands::Rulings { name, id } => {
            commands::rulings::run_rulings(&client, name.as_deref(), id.as_deref(), json).await?;
        }
        Commands::Set { code, cards } => {
            commands::sets::run_set(&client, &code, cards, json).await?;
        }
        Commands::Sets { set_type } => {
            commands::sets::run_sets(&client, set_type.as_deref(), json).await?;
        }
        Commands::Symbols => {
            commands::symbology::run_symbols(&client, json).await?;
        }
        Commands::ParseMana { cost } => {
            commands::symbology::run_parse_mana(&client, &cost, json).await?;
        }
        Commands::Catalog { name } => {
            commands::catalog::run_catalog(&client, name, json).await?;
        }
        Commands::Bulk { command } => match command {
            BulkCommands::List => commands::bulk::run_list(&client, json).await?,
            BulkCommands::Download { kind, output } => {
                commands::bulk::run_download(&client, &kind, output, json).await?;
            }
        },
        Commands::Migrations { limit } => {
            commands::migrations::run_migrations(&client, limit, json).await?;
        }
        Commands::Config { .. } => unreachable!("handled before the client is built"),
    }

    Ok(())
}
