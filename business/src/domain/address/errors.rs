use crate::domain::errors::StorageError;
use crate::domain::shared::validation::FieldErrors;

/// Shown to the user whenever autofill cannot produce an address.
pub const LOCATION_LOOKUP_FAILED_MESSAGE: &str =
    "Failed to fetch location details. Please enter manually.";

#[derive(Debug, thiserror::Error)]
pub enum AddressError {
    #[error("address.invalid")]
    Validation(FieldErrors),
    #[error("address.invalid_coordinates")]
    InvalidCoordinates,
    #[error("address.location_lookup_failed")]
    LocationLookupFailed(#[source] GeocodingError),
    #[error("address.not_found")]
    NotFound,
    #[error("storage.unavailable")]
    Storage(#[from] StorageError),
}

#[derive(Debug, thiserror::Error)]
pub enum GeocodingError {
    #[error("geocoding.request_failed")]
    Request(String),
    #[error("geocoding.invalid_response")]
    InvalidResponse(String),
    #[error("geocoding.no_results")]
    NoResults,
}

impl From<GeocodingError> for AddressError {
    fn from(error: GeocodingError) -> Self {
        AddressError::LocationLookupFailed(error)
    }
}
