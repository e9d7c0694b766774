use async_trait::async_trait;

use super::errors::GeocodingError;
use super::model::{AddressSuggestion, Coordinates};

/// Service port for turning a position into address fields.
#[async_trait]
pub trait ReverseGeocoder: Send + Sync {
    async fn reverse(&self, coordinates: Coordinates) -> Result<AddressSuggestion, GeocodingError>;
}
