use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::profile::use_cases::get::GetProfileUseCase;
use business::domain::profile::use_cases::update::{UpdateProfileParams, UpdateProfileUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::profile::dto::{ProfileResponse, UpdateProfileRequest};
use crate::api::tags::ApiTags;

pub struct ProfileApi {
    get_use_case: Arc<dyn GetProfileUseCase>,
    update_use_case: Arc<dyn UpdateProfileUseCase>,
}

impl ProfileApi {
    pub fn new(
        get_use_case: Arc<dyn GetProfileUseCase>,
        update_use_case: Arc<dyn UpdateProfileUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            update_use_case,
        }
    }
}

/// Shopper profile API
#[OpenApi]
impl ProfileApi {
    /// Get the profile
    #[oai(path = "/profile", method = "get", tag = "ApiTags::Profile")]
    async fn get(&self) -> GetProfileResponse {
        match self.get_use_case.execute() {
            Ok(profile) => GetProfileResponse::Ok(Json(profile.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProfileResponse::NotFound(json),
                    _ => GetProfileResponse::InternalError(json),
                }
            }
        }
    }

    /// Save the profile
    ///
    /// The first save also records the member-since date.
    #[oai(path = "/profile", method = "put", tag = "ApiTags::Profile")]
    async fn update(&self, body: Json<UpdateProfileRequest>) -> UpdateProfileResponse {
        let params = UpdateProfileParams {
            details: body.0.into(),
        };

        match self.update_use_case.execute(params) {
            Ok(profile) => UpdateProfileResponse::Ok(Json(profile.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProfileResponse::BadRequest(json),
                    _ => UpdateProfileResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProfileResponse {
    #[oai(status = 200)]
    Ok(Json<ProfileResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProfileResponse {
    #[oai(status = 200)]
    Ok(Json<ProfileResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
