use async_trait::async_trait;
use serde::Deserialize;

use business::domain::address::errors::GeocodingError;
use business::domain::address::model::{AddressSuggestion, Coordinates};
use business::domain::address::services::ReverseGeocoder;

use crate::client::OpenCageClient;

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    #[serde(default)]
    components: Components,
}

#[derive(Debug, Default, Deserialize)]
struct Components {
    road: Option<String>,
    suburb: Option<String>,
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    state: Option<String>,
    postcode: Option<String>,
}

impl Components {
    fn into_suggestion(self) -> AddressSuggestion {
        let address_line1 = format!(
            "{} {}",
            self.road.unwrap_or_default(),
            self.suburb.unwrap_or_default()
        )
        .trim()
        .to_string();

        AddressSuggestion {
            address_line1,
            city: self
                .city
                .or(self.town)
                .or(self.village)
                .unwrap_or_default(),
            state: self.state.unwrap_or_default(),
            pincode: self.postcode.unwrap_or_default(),
        }
    }
}

/// Reverse geocoder backed by the OpenCage API. One request per lookup.
pub struct OpenCageReverseGeocoder {
    client: OpenCageClient,
}

impl OpenCageReverseGeocoder {
    pub fn new(client: OpenCageClient) -> Self {
        Self { client }
    }

    fn parse_response(body: &str) -> Result<AddressSuggestion, GeocodingError> {
        let response: GeocodeResponse = serde_json::from_str(body)
            .map_err(|e| GeocodingError::InvalidResponse(e.to_string()))?;

        response
            .results
            .into_iter()
            .next()
            .map(|result| result.components.into_suggestion())
            .ok_or(GeocodingError::NoResults)
    }
}

#[async_trait]
impl ReverseGeocoder for OpenCageReverseGeocoder {
    async fn reverse(&self, coordinates: Coordinates) -> Result<AddressSuggestion, GeocodingError> {
        let url = self
            .client
            .reverse_url(coordinates)
            .map_err(|e| GeocodingError::Request(e.to_string()))?;

        let response = self
            .client
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| GeocodingError::Request(e.to_string()))?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "geocoding request rejected");
            return Err(GeocodingError::Request(format!(
                "status {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeocodingError::Request(e.to_string()))?;

        Self::parse_response(&body)
    }
}
