use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::profile::errors::ProfileError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, storage_failure};

impl IntoErrorResponse for ProfileError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        match self {
            ProfileError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::validation(message, &errors)),
            ),
            ProfileError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("NotFound", message)),
            ),
            ProfileError::Storage(_) => storage_failure(message),
        }
    }
}
