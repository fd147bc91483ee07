use tracing::{debug, instrument};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::ExchangeRateSnapshot;

/// Fetches `/latest` rate snapshots from ExchangeRate-API.
pub struct RateFetcher {
    client: reqwest::Client,
    api_url: String,
}

impl RateFetcher {
    pub fn new(api_url: &str) -> Self {
        RateFetcher {
            client: reqwest::Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.api_url)
    }

    fn latest_url(&self, api_key: &str, base_currency: &str) -> String {
        format!("{}/v6/{}/latest/{}", self.api_url, api_key, base_currency)
    }

    /// Issues one GET and returns the snapshot if the service reported success.
    ///
    /// The HTTP status is only logged: the service puts failures in the body.
    #[instrument(name = "RateFetch", skip(self, api_key))]
    pub async fn fetch(&self, api_key: &str, base_currency: &str) -> Result<ExchangeRateSnapshot> {
        let url = self.latest_url(api_key, base_currency);
        debug!(url = %self.latest_url("***", base_currency), "Requesting exchange rates");

        let response = self.client.get(&url).send().await.map_err(|e| {
            // reqwest embeds the URL, and with it the key, in its errors.
            Error::Network(e.without_url())
        })?;
        debug!(status = %response.status(), "Received response");

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Io(e.without_url()))?;

        let snapshot: ExchangeRateSnapshot = serde_json::from_slice(&body)?;

        if !snapshot.is_success() {
            return Err(Error::Api {
                result: snapshot.result,
                error_type: snapshot.error_type,
            });
        }

        debug!(
            base = %snapshot.base_code,
            updated = snapshot.time_last_update_unix,
            rates = snapshot.conversion_rates.len(),
            "Fetched exchange rates"
        );
        Ok(snapshot)
    }
}
