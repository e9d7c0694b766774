use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::address::repository::AddressRepository;
use crate::domain::logger::Logger;
use crate::domain::soil::advisor::{CropProfile, recommend};
use crate::domain::soil::errors::SoilError;
use crate::domain::soil::model::SoilReport;
use crate::domain::soil::services::SoilMonitor;
use crate::domain::soil::use_cases::report::GetSoilReportUseCase;

pub struct GetSoilReportUseCaseImpl {
    pub address_repository: Arc<dyn AddressRepository>,
    pub monitor: Arc<dyn SoilMonitor>,
    pub crop_profiles: Vec<CropProfile>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetSoilReportUseCase for GetSoilReportUseCaseImpl {
    async fn execute(&self) -> Result<SoilReport, SoilError> {
        let address = self
            .address_repository
            .get()?
            .ok_or(SoilError::AddressRequired)?;

        let reading = self.monitor.read(&address).await?;
        let crops = recommend(&reading, &self.crop_profiles);

        self.logger.info(&format!(
            "Soil report for {}: moisture {}%, pH {}, best crop {}",
            address.city,
            reading.moisture_percent,
            reading.ph,
            crops.first().map(|c| c.name.as_str()).unwrap_or("none")
        ));
        Ok(SoilReport {
            address,
            reading,
            crops,
        })
    }
}
