use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.scryfall.com/";

/// Client configuration.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (SCRYFALL_* prefix)
/// 3. Config file (~/.config/scryfall/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API root every relative route is resolved against.
    ///
    /// Can be set via:
    /// - ENV: SCRYFALL_BASE_URL
    /// - Config: base_url = "..."
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// `User-Agent` sent with every request. Scryfall asks clients to
    /// identify themselves.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Upper bound on requests per second. Scryfall asks for 50-100 ms
    /// between requests.
    #[serde(default = "default_requests_per_second", deserialize_with = "number_or_string")]
    pub requests_per_second: u32,

    /// Timeout for ordinary API requests.
    #[serde(default = "default_timeout_secs", deserialize_with = "number_or_string")]
    pub timeout_secs: u64,

    /// Timeout for bulk-data downloads, which can run to hundreds of
    /// megabytes.
    #[serde(default = "default_download_timeout_secs", deserialize_with = "number_or_string")]
    pub download_timeout_secs: u64,

    /// How many times a transient failure is retried.
    #[serde(default = "default_max_retries", deserialize_with = "number_or_string")]
    pub max_retries: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            requests_per_second: default_requests_per_second(),
            timeout_secs: default_timeout_secs(),
            download_timeout_secs: default_download_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from the default config file and environment
    /// variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from `path` (if it exists) and environment
    /// variables with the `SCRYFALL_` prefix.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if path.exists() {
            let path_str = path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .with_context(|| format!("Failed to load config file {}", path.display()))?;
        }

        let env_opts = env::Options::with_top_level("scryfall");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;
        log::debug!("loaded client configuration: {config:?}");
        Ok(config)
    }
}

/// Environment overrides reach the config as TOML strings, so numeric
/// settings accept `5` as well as `'5'`.
fn number_or_string<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Deserialize<'de>,
    T::Err: Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<N> {
        Number(N),
        Text(String),
    }

    match Raw::<T>::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text
            .trim()
            .parse()
            .map_err(|err| de::Error::custom(format!("invalid number {text:?}: {err}"))),
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    concat!("scryfall-rs/", env!("CARGO_PKG_VERSION")).to_string()
}

const fn default_requests_per_second() -> u32 {
    10
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_download_timeout_secs() -> u64 {
    600
}

const fn default_max_retries() -> usize {
    3
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/scryfall/config.toml
/// - macOS: ~/Library/Application Support/scryfall/config.toml
/// - Windows: %APPDATA%\scryfall\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("scryfall")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Scryfall client configuration
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (SCRYFALL_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# API root
#
# Can also be set via:
# - Environment: SCRYFALL_BASE_URL=https://api.scryfall.com/
base_url = "https://api.scryfall.com/"

# User-Agent sent with every request
#user_agent = "my-app/1.0"

# Maximum requests per second (Scryfall asks for 50-100 ms between requests)
requests_per_second = 10

# Request timeout in seconds
timeout_secs = 30

# Bulk-data download timeout in seconds
download_timeout_secs = 600

# Retries for transient failures (HTTP 429, 5xx, timeouts)
max_retries = 3
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    ensure_config_file_at(&config_file_path())
}

/// Write the example config to `path` unless a file is already there.
pub fn ensure_config_file_at(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
