use std::collections::BTreeMap;

use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::shared::validation::FieldErrors;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
    /// Message per form field, present on validation failures.
    #[oai(skip_serializing_if_is_none)]
    pub fields: Option<BTreeMap<String, String>>,
}

impl ErrorResponse {
    pub fn new(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            message: message.into(),
            fields: None,
        }
    }

    pub fn validation(message: impl Into<String>, errors: &FieldErrors) -> Self {
        Self {
            fields: Some(
                errors
                    .iter()
                    .map(|(field, msg)| (field.to_string(), msg.to_string()))
                    .collect(),
            ),
            ..Self::new("ValidationError", message)
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

pub fn storage_failure(message: String) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("InternalError", message)),
    )
}
