//! Dog images from the dog.ceo API.
//!
//! Images come from the Stanford Dogs dataset, see <https://dog.ceo/dog-api/>.
//! Repeated fetches may return the same image; nothing here deduplicates.

use std::time::Duration;

use reqwest::blocking::Client;

use super::Source;
use crate::config::SourceConfig;
use crate::error::{LabelError, Result};
use crate::model::{Datum, DogImage, Value};

/// Endpoint returning one random dog image
pub const DEFAULT_DOG_API_URL: &str = "https://dog.ceo/api/breeds/image/random";

/// Parse a dog.ceo response body into a typed payload
pub fn parse_dog_response(body: &str) -> Result<DogImage> {
    serde_json::from_str(body).map_err(|e| LabelError::Fetch(format!("Malformed dog API response: {}", e)))
}

/// Blocking HTTP source of dog images
pub struct DogSource {
    client: Client,
    url: String,
}

impl DogSource {
    /// Create a source with its own HTTP client
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| LabelError::Fetch(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(client, config.url.clone()))
    }

    /// Create a source with a caller-built client, e.g. one configured
    /// with proxies or a custom CA bundle
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self { client, url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// The underlying HTTP client, for reuse by image downloads
    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl Source for DogSource {
    fn fetch(&mut self) -> Result<Datum> {
        log::debug!("Fetching dog from {}", self.url);
        let body = self
            .client
            .get(&self.url)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.text())
            .map_err(|e| LabelError::Fetch(format!("Request to {} failed: {}", self.url, e)))?;

        let dog = parse_dog_response(&body)?;
        log::info!("Fetched dog {}", dog.message);
        Ok(Datum::new(Value::Image(dog)))
    }
}
