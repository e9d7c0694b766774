use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::address::errors::{AddressError, LOCATION_LOOKUP_FAILED_MESSAGE};

use crate::api::error::{ErrorResponse, IntoErrorResponse, storage_failure};

impl IntoErrorResponse for AddressError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        match self {
            AddressError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::validation(message, &errors)),
            ),
            AddressError::InvalidCoordinates => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("ValidationError", message)),
            ),
            AddressError::LocationLookupFailed(_) => (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse::new(
                    "LocationLookupFailed",
                    LOCATION_LOOKUP_FAILED_MESSAGE,
                )),
            ),
            AddressError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("NotFound", message)),
            ),
            AddressError::Storage(_) => storage_failure(message),
        }
    }
}
