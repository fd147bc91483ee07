pub mod api;
pub mod config;
pub mod convert;
pub mod error;
pub mod log;
pub mod models;

pub use api::RateFetcher;
pub use config::Config;
pub use convert::convert;
pub use error::{Error, Result};
pub use models::{Conversion, ConversionRequest, ExchangeRateSnapshot};

/// Fetches rates for the configured base currency and converts `request`.
pub async fn run(config: &Config, request: ConversionRequest) -> Result<Conversion> {
    let fetcher = RateFetcher::from_config(config);
    let snapshot = fetcher.fetch(&config.api_key, &config.base_currency).await?;
    request.convert(&snapshot)
}
