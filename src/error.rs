//! Error types for the converter.

/// Every failure that can end a conversion run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not load .env file: {0}")]
    ConfigLoad(#[source] dotenv::Error),

    #[error("API_KEY is not set")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("failed to read response: {0}")]
    Io(#[source] reqwest::Error),

    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("API returned an error: {result}{}", detail(.error_type))]
    Api {
        result: String,
        error_type: Option<String>,
    },

    #[error("currency {0} not found")]
    UnknownCurrency(String),

    #[error("invalid argument: {0}")]
    Argument(String),

    #[error("could not start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

fn detail(error_type: &Option<String>) -> String {
    match error_type {
        Some(kind) => format!(" ({kind})"),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, Error>;
