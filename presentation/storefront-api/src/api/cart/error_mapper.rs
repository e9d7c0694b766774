use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, storage_failure};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            CartError::InvalidQuantity
            | CartError::NegativePrice
            | CartError::ProductKeyEmpty
            | CartError::DuplicateProduct => (StatusCode::BAD_REQUEST, "ValidationError"),
            CartError::ProductNotFound => (StatusCode::NOT_FOUND, "NotFound"),
            CartError::Storage(_) => return storage_failure(self.to_string()),
        };

        (status, Json(ErrorResponse::new(name, self.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_invalid_quantity_to_bad_request() {
        let (status, json) = CartError::InvalidQuantity.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "cart.invalid_quantity");
    }

    #[test]
    fn should_map_unknown_product_to_not_found() {
        let (status, _) = CartError::ProductNotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
