use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::layout::FontFamily;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub font_path: PathBuf,
    pub font_family: FontFamily,
    /// Translation used by `/api/image` when the request names none.
    pub default_version: String,
    pub biblegateway_base_url: String,
    pub fetch_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            font_path: PathBuf::from(env_or("FONT_PATH", "assets/fonts/Montserrat-Light.ttf")),
            font_family: env_or("FONT_FAMILY", "montserrat")
                .parse::<FontFamily>()
                .map_err(anyhow::Error::msg)
                .context("FONT_FAMILY must be 'montserrat' or 'dejavu'")?,
            default_version: env_or("DEFAULT_VERSION", "RSVCE"),
            biblegateway_base_url: env_or("BIBLEGATEWAY_BASE_URL", "https://www.biblegateway.com"),
            fetch_timeout: Duration::from_secs(
                env_or("FETCH_TIMEOUT_SECS", "10")
                    .parse::<u64>()
                    .context("FETCH_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            font_path: PathBuf::from("assets/fonts/Montserrat-Light.ttf"),
            font_family: FontFamily::Montserrat,
            default_version: "RSVCE".to_string(),
            biblegateway_base_url: "https://www.biblegateway.com".to_string(),
            fetch_timeout: Duration::from_secs(10),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
