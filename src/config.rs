use std::env;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

pub const DEFAULT_API_URL: &str = "https://v6.exchangerate-api.com";
pub const DEFAULT_BASE_CURRENCY: &str = "USD";

/// Settings for one run, built once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_currency: String,
    pub api_url: String,
}

impl Config {
    /// Loads `.env` from the working directory into the process environment,
    /// then reads the settings. A missing `.env` is fatal.
    pub fn load() -> Result<Self> {
        Self::load_from(".env")
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        dotenv::from_path(path).map_err(Error::ConfigLoad)?;
        debug!(path = %path.display(), "Loaded .env");
        Self::from_env()
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // An empty key is passed through; the service rejects it.
        let api_key = lookup("API_KEY").ok_or(Error::MissingApiKey)?;
        let base_currency = lookup("BASE_CURRENCY")
            .map(|code| code.trim().to_uppercase())
            .filter(|code| !code.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_CURRENCY.to_string());
        let api_url = lookup("EXCHANGE_RATE_API_URL")
            .filter(|url| !url.is_empty())
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Config {
            api_key,
            base_currency,
            api_url,
        })
    }
}
