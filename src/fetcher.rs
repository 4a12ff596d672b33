//! HTTP client for the city weather data source
//!
//! Issues a single GET to the configured URL and deserializes the body as a
//! JSON array of [`WeatherRecord`]s. No retry and no caching: every failure
//! is returned to the caller as a [`CityWeatherError`].

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, info, instrument, warn};

use crate::config::SourceConfig;
use crate::models::WeatherRecord;
use crate::{CityWeatherError, Result};

/// Source of city weather records
#[async_trait]
pub trait WeatherFetcher: Send + Sync {
    /// Fetch all records in the order the source lists them
    async fn fetch(&self) -> Result<Vec<WeatherRecord>>;
}

/// Fetches records from a fixed HTTP(S) endpoint
#[derive(Debug, Clone)]
pub struct HttpWeatherFetcher {
    client: Client,
    url: String,
}

impl HttpWeatherFetcher {
    /// Create a fetcher from the source configuration
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                CityWeatherError::config(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl WeatherFetcher for HttpWeatherFetcher {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<Vec<WeatherRecord>> {
        info!("Fetching city weather records");
        let start_time = Instant::now();

        let response = self.client.get(&self.url).send().await.map_err(|e| {
            error!("Request failed: {}", e);
            CityWeatherError::network(format!("Request to {} failed: {}", self.url, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Data source answered with {}", status);
            let message = match status.canonical_reason() {
                Some(reason) => reason.to_string(),
                None => response.text().await.unwrap_or_default().trim().to_string(),
            };
            return Err(CityWeatherError::status(status.as_u16(), message));
        }

        let body = response.text().await.map_err(|e| {
            CityWeatherError::network(format!("Failed to read response body: {e}"))
        })?;
        debug!("Received {} bytes", body.len());

        let records = parse_records(&body)?;

        let total_duration = start_time.elapsed();
        info!(
            "Fetched {} records in {:.3}s",
            records.len(),
            total_duration.as_secs_f64()
        );

        if total_duration.as_secs() > 5 {
            warn!(
                "Slow data source response detected: {:.3}s",
                total_duration.as_secs_f64()
            );
        }

        Ok(records)
    }
}

/// Parse a response body; one malformed record fails the whole list.
pub fn parse_records(body: &str) -> Result<Vec<WeatherRecord>> {
    serde_json::from_str(body).map_err(|e| {
        error!("Failed to parse weather records: {}", e);
        CityWeatherError::parse(format!("Invalid weather data: {e}"))
    })
}
