use async_trait::async_trait;

use crate::domain::soil::errors::SoilError;
use crate::domain::soil::model::SoilReport;

#[async_trait]
pub trait GetSoilReportUseCase: Send + Sync {
    async fn execute(&self) -> Result<SoilReport, SoilError>;
}
