use anyhow::{Context, Result};
use std::env;

/// Default number of characters of gazette text sent to the model.
/// Keeps token cost bounded for large gazettes.
pub const DEFAULT_TRUNCATE_CHARS: usize = 12_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub truncate_chars: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Try to load .env from multiple locations
        Self::try_load_dotenv();

        let anthropic_api_key = env::var("ANTHROPIC_API_KEY")
            .context(
                "ANTHROPIC_API_KEY not found.\n\n\
                To fix this, create ~/.config/gazette-brief/.env with:\n  \
                ANTHROPIC_API_KEY=your_key_here\n\n\
                Get your Anthropic API key from: https://console.anthropic.com/settings/keys"
            )?;

        let truncate_chars = match env::var("GAZETTE_TRUNCATE_CHARS") {
            Ok(value) => value.parse().with_context(|| {
                format!("GAZETTE_TRUNCATE_CHARS must be a positive number, got '{}'", value)
            })?,
            Err(_) => DEFAULT_TRUNCATE_CHARS,
        };

        Ok(Self {
            anthropic_api_key,
            truncate_chars,
        })
    }

    fn try_load_dotenv() {
        // Try locations in order of preference:

        // 1. Current directory (for development)
        if dotenvy::dotenv().is_ok() {
            return;
        }

        // 2. ~/.config/gazette-brief/.env (standard config location)
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("gazette-brief").join(".env");
            if config_path.exists() {
                if dotenvy::from_path(&config_path).is_ok() {
                    return;
                }
            }
        }

        // 3. ~/.env (home directory)
        if let Some(home_dir) = dirs::home_dir() {
            let home_path = home_dir.join(".env");
            if home_path.exists() {
                if dotenvy::from_path(&home_path).is_ok() {
                    return;
                }
            }
        }

        // If none found, that's okay - environment variables might be set system-wide
    }
}
