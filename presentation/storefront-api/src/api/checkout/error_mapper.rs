use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::checkout::errors::{CheckoutError, PaymentError};

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CheckoutError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        match self {
            CheckoutError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::validation(message, &errors)),
            ),
            CheckoutError::EmptyCart => (
                StatusCode::CONFLICT,
                Json(ErrorResponse::new("Conflict", message)),
            ),
            CheckoutError::PaymentFailed(PaymentError::Declined(_)) => (
                StatusCode::PAYMENT_REQUIRED,
                Json(ErrorResponse::new("PaymentDeclined", message)),
            ),
            CheckoutError::PaymentFailed(PaymentError::Unavailable(_)) => (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse::new("PaymentUnavailable", message)),
            ),
        }
    }
}
