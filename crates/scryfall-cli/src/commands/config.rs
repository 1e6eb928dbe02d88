use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use toml_edit::DocumentMut;

use scryfall_client::config::{self, ClientConfig};

/// Keys `config get` and `config set` understand.
const KEYS: [&str; 6] = [
    "base_url",
    "user_agent",
    "requests_per_second",
    "timeout_secs",
    "download_timeout_secs",
    "max_retries",
];

fn resolve_path(path: Option<&Path>) -> PathBuf {
    path.map_or_else(config::config_file_path, Path::to_path_buf)
}

fn load(path: Option<&Path>) -> Result<ClientConfig> {
    match path {
        Some(path) => ClientConfig::load_from(path),
        None => ClientConfig::load(),
    }
}

/// Show the current effective configuration.
pub fn show_config(path: Option<&Path>) -> Result<()> {
    let config = load(path)?;
    let config_path = resolve_path(path);

    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config_path.display());
    let exists = config_path.exists();
    println!("File exists: {}\n", if exists { "yes" } else { "no (using defaults)" });

    println!("Settings:");
    for key in KEYS {
        println!("  {key}: {}", value_of(&config, key)?);
    }

    println!("\nPriority: CLI args > ENV vars (SCRYFALL_*) > Config file > Defaults");

    Ok(())
}

/// Get a specific config value.
pub fn get_config(path: Option<&Path>, key: Option<&str>) -> Result<()> {
    if let Some(key) = key {
        let config = load(path)?;
        println!("{}", value_of(&config, key)?);
    } else {
        // No key provided, show entire config file contents
        let config_path = resolve_path(path);

        if config_path.exists() {
            let contents =
                std::fs::read_to_string(&config_path).context("Failed to read config file")?;
            print!("{contents}");
        } else {
            println!("Config file does not exist: {}", config_path.display());
            println!("\nRun 'scryfall config init' to create it.");
        }
    }

    Ok(())
}

/// Set a config value, keeping the rest of the file and its comments.
pub fn set_config(path: Option<&Path>, key: &str, value: &str) -> Result<()> {
    let config_path = resolve_path(path);

    config::ensure_config_file_at(&config_path)?;

    let contents = std::fs::read_to_string(&config_path).context("Failed to read config file")?;
    let updated = set_key(&contents, key, value)?;

    std::fs::write(&config_path, updated).context("Failed to write config file")?;

    println!("✓ Updated {key} = {value}");
    println!("  in {}", config_path.display());

    Ok(())
}

/// Show the config file path.
pub fn show_path(path: Option<&Path>) -> Result<()> {
    println!("{}", resolve_path(path).display());
    Ok(())
}

/// Show example configuration.
pub fn show_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}

/// Initialize config file with defaults.
pub fn init_config(path: Option<&Path>) -> Result<()> {
    let config_path = resolve_path(path);
    let created = config::ensure_config_file_at(&config_path)?;

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure the Scryfall client.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}

fn unknown_key(key: &str) -> anyhow::Error {
    anyhow::anyhow!("Unknown config key: {key}\n\nValid keys: {}", KEYS.join(", "))
}

fn value_of(config: &ClientConfig, key: &str) -> Result<String> {
    Ok(match key {
        "base_url" => config.base_url.clone(),
        "user_agent" => config.user_agent.clone(),
        "requests_per_second" => config.requests_per_second.to_string(),
        "timeout_secs" => config.timeout_secs.to_string(),
        "download_timeout_secs" => config.download_timeout_secs.to_string(),
        "max_retries" => config.max_retries.to_string(),
        _ => return Err(unknown_key(key)),
    })
}

/// Return `contents` with `key` set to `value`, validated for the key's type.
fn set_key(contents: &str, key: &str, value: &str) -> Result<String> {
    let mut doc = contents
        .parse::<DocumentMut>()
        .context("Failed to parse config file")?;

    let item = match key {
        "base_url" | "user_agent" => {
            if value.trim().is_empty() {
                anyhow::bail!("{key} cannot be empty");
            }
            toml_edit::value(value.trim())
        }
        "requests_per_second" | "timeout_secs" | "download_timeout_secs" | "max_retries" => {
            let number: u32 = value
                .trim()
                .parse()
                .with_context(|| format!("{key} must be a non-negative whole number, got {value:?}"))?;
            if number == 0 && key != "max_retries" {
                anyhow::bail!("{key} must be at least 1");
            }
            toml_edit::value(i64::from(number))
        }
        _ => return Err(unknown_key(key)),
    };

    doc[key] = item;
    Ok(doc.to_string())
}
