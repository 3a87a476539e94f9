//! Configuration commands.

use clap::Subcommand;

use brainflow_core::{Config, ConfigError};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "extractor.dedupe", "logging.level")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// List every key with its current value
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the config file location
    Path,
    /// Reset config to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            let value = config.get(&key).ok_or(ConfigError::UnknownKey(key))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            let previous = config.get(&key).unwrap_or_default();
            config.set(&key, &value)?;
            config.save()?;
            tracing::debug!(%key, %previous, "config updated");
            println!("{key}: {previous} -> {value}");
        }
        ConfigAction::List { json } => {
            let config = Config::load()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                for (key, value) in config.entries() {
                    println!("{key} = {value}");
                }
            }
        }
        ConfigAction::Path => {
            println!("{}", Config::path()?.display());
        }
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
