use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::catalog::errors::CatalogError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, storage_failure};

impl IntoErrorResponse for CatalogError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            CatalogError::ProductNotFound => (StatusCode::NOT_FOUND, "NotFound"),
            CatalogError::InvalidPriceRange => (StatusCode::BAD_REQUEST, "ValidationError"),
            CatalogError::Storage(_) => return storage_failure(self.to_string()),
        };

        (status, Json(ErrorResponse::new(name, self.to_string())))
    }
}
