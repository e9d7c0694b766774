use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::soil::use_cases::report::GetSoilReportUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::soil::dto::SoilReportResponse;
use crate::api::tags::ApiTags;

pub struct SoilApi {
    report_use_case: Arc<dyn GetSoilReportUseCase>,
}

impl SoilApi {
    pub fn new(report_use_case: Arc<dyn GetSoilReportUseCase>) -> Self {
        Self { report_use_case }
    }
}

/// Soil monitoring API
#[OpenApi]
impl SoilApi {
    /// Soil report for the saved farm address
    ///
    /// Current sensor reading with crops ranked by how well they fit it.
    #[oai(path = "/soil/report", method = "get", tag = "ApiTags::Soil")]
    async fn report(&self) -> SoilReportEnvelope {
        match self.report_use_case.execute().await {
            Ok(report) => SoilReportEnvelope::Ok(Json(report.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    409 => SoilReportEnvelope::Conflict(json),
                    503 => SoilReportEnvelope::ServiceUnavailable(json),
                    _ => SoilReportEnvelope::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SoilReportEnvelope {
    #[oai(status = 200)]
    Ok(Json<SoilReportResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
