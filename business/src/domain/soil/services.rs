use async_trait::async_trait;

use super::errors::SoilError;
use super::model::SoilReading;
use crate::domain::address::model::AddressForm;

/// Service port for the field sensors at a farm address.
#[async_trait]
pub trait SoilMonitor: Send + Sync {
    async fn read(&self, address: &AddressForm) -> Result<SoilReading, SoilError>;
}
