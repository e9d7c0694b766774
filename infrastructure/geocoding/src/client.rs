use std::time::Duration;

use reqwest::Client;
use url::Url;

use business::domain::address::model::Coordinates;

pub const DEFAULT_BASE_URL: &str = "https://api.opencagedata.com";

/// Shared OpenCage HTTP client configuration.
pub struct OpenCageClient {
    pub client: Client,
    pub api_key: Option<String>,
    pub base_url: String,
}

impl OpenCageClient {
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Returns the reverse geocoding URL for `coordinates`.
    pub fn reverse_url(&self, coordinates: Coordinates) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&format!("{}/geocode/v1/json", self.base_url))?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair(
                "q",
                &format!("{},{}", coordinates.latitude, coordinates.longitude),
            );
            if let Some(key) = &self.api_key {
                query.append_pair("key", key);
            }
        }
        Ok(url)
    }
}
