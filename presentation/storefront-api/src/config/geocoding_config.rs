use geocoding::client::DEFAULT_BASE_URL;

use super::env::process_env;

/// Configuration for OpenCage reverse geocoding.
pub struct GeocodingConfig {
    /// Requests are still sent without a key; OpenCage then rejects them and
    /// autofill reports the lookup failure.
    pub api_key: Option<String>,
    pub base_url: String,
}

impl GeocodingConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup("OPENCAGE_API_KEY").filter(|key| !key.trim().is_empty());
        let base_url = lookup("OPENCAGE_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { api_key, base_url }
    }
}
