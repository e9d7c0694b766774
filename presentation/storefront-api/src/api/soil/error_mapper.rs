use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::soil::errors::SoilError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, storage_failure};

impl IntoErrorResponse for SoilError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        match self {
            SoilError::AddressRequired => (
                StatusCode::CONFLICT,
                Json(ErrorResponse::new("AddressRequired", message)),
            ),
            SoilError::MonitorUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse::new("ServiceUnavailable", message)),
            ),
            SoilError::Storage(_) => storage_failure(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_ask_for_address_before_reporting() {
        let (status, json) = SoilError::AddressRequired.into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json.0.message, "soil.address_required");
    }
}
