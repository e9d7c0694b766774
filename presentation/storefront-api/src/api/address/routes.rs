use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::address::use_cases::autofill::{
    AutofillAddressParams, AutofillAddressUseCase,
};
use business::domain::address::use_cases::get::GetAddressUseCase;
use business::domain::address::use_cases::submit::{SubmitAddressParams, SubmitAddressUseCase};

use crate::api::address::dto::{AddressFormDto, AddressSuggestionResponse, AutofillRequest};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct AddressApi {
    get_use_case: Arc<dyn GetAddressUseCase>,
    submit_use_case: Arc<dyn SubmitAddressUseCase>,
    autofill_use_case: Arc<dyn AutofillAddressUseCase>,
}

impl AddressApi {
    pub fn new(
        get_use_case: Arc<dyn GetAddressUseCase>,
        submit_use_case: Arc<dyn SubmitAddressUseCase>,
        autofill_use_case: Arc<dyn AutofillAddressUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            submit_use_case,
            autofill_use_case,
        }
    }
}

/// Farm address API
#[OpenApi]
impl AddressApi {
    /// Get the saved farm address
    #[oai(path = "/address", method = "get", tag = "ApiTags::Address")]
    async fn get(&self) -> GetAddressResponse {
        match self.get_use_case.execute() {
            Ok(address) => GetAddressResponse::Ok(Json(address.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetAddressResponse::NotFound(json),
                    _ => GetAddressResponse::InternalError(json),
                }
            }
        }
    }

    /// Save the farm address
    ///
    /// Validation failures list a message per field.
    #[oai(path = "/address", method = "put", tag = "ApiTags::Address")]
    async fn submit(&self, body: Json<AddressFormDto>) -> SubmitAddressResponse {
        let params = SubmitAddressParams {
            address: body.0.into(),
        };

        match self.submit_use_case.execute(params) {
            Ok(address) => SubmitAddressResponse::Ok(Json(address.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SubmitAddressResponse::BadRequest(json),
                    _ => SubmitAddressResponse::InternalError(json),
                }
            }
        }
    }

    /// Suggest an address from the device position
    #[oai(path = "/address/autofill", method = "post", tag = "ApiTags::Address")]
    async fn autofill(&self, body: Json<AutofillRequest>) -> AutofillAddressResponse {
        let params = AutofillAddressParams {
            coordinates: body.0.into(),
        };

        match self.autofill_use_case.execute(params).await {
            Ok(suggestion) => AutofillAddressResponse::Ok(Json(suggestion.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AutofillAddressResponse::BadRequest(json),
                    _ => AutofillAddressResponse::BadGateway(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAddressResponse {
    #[oai(status = 200)]
    Ok(Json<AddressFormDto>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SubmitAddressResponse {
    #[oai(status = 200)]
    Ok(Json<AddressFormDto>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AutofillAddressResponse {
    #[oai(status = 200)]
    Ok(Json<AddressSuggestionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
