//! HTTP source for a remote places feed.
//!
//! Wraps `reqwest` with a configured timeout and user agent, asserts a 2xx
//! status, decodes the body as a JSON array of places and validates it
//! before handing it to the caller.

use std::time::Duration;

use async_trait::async_trait;
use fomo_core::Place;
use reqwest::{Client, Url};

use crate::error::SourceError;
use crate::source::{validate_places, PlacesSource};

pub struct HttpPlacesSource {
    client: Client,
    endpoint: Url,
}

impl HttpPlacesSource {
    /// Creates a source reading places from `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SourceError::InvalidEndpoint`] if
    /// `endpoint` is not an absolute http(s) URL.
    pub fn new(endpoint: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let parsed = Url::parse(endpoint).map_err(|e| SourceError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SourceError::InvalidEndpoint {
                endpoint: endpoint.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        Ok(Self {
            client,
            endpoint: parsed,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl PlacesSource for HttpPlacesSource {
    async fn fetch(&self) -> Result<Vec<Place>, SourceError> {
        tracing::debug!(endpoint = %self.endpoint, "fetching places");

        let response = self.client.get(self.endpoint.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.endpoint.to_string(),
            });
        }

        let body = response.text().await?;
        let places: Vec<Place> =
            serde_json::from_str(&body).map_err(|e| SourceError::Deserialize {
                context: self.endpoint.to_string(),
                source: e,
            })?;
        validate_places(&places)?;

        tracing::info!(endpoint = %self.endpoint, count = places.len(), "fetched places");
        Ok(places)
    }
}
