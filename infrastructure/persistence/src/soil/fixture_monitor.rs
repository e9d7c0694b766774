use async_trait::async_trait;

use business::domain::address::model::AddressForm;
use business::domain::soil::errors::SoilError;
use business::domain::soil::model::{NutrientLevel, Nutrients, SoilReading};
use business::domain::soil::services::SoilMonitor;

/// Soil monitor that answers every address with one configured reading.
/// Stands in for the field sensors until a real feed exists.
pub struct FixtureSoilMonitor {
    reading: SoilReading,
}

impl FixtureSoilMonitor {
    pub fn new(reading: SoilReading) -> Self {
        Self { reading }
    }

    /// The sample reading shown on the monitoring dashboard.
    pub fn sample() -> Self {
        Self::new(SoilReading {
            moisture_percent: 65.0,
            temperature_celsius: 28.0,
            ph: 6.8,
            nutrients: Nutrients {
                nitrogen: NutrientLevel::Medium,
                phosphorus: NutrientLevel::High,
                potassium: NutrientLevel::Low,
            },
        })
    }
}

#[async_trait]
impl SoilMonitor for FixtureSoilMonitor {
    async fn read(&self, address: &AddressForm) -> Result<SoilReading, SoilError> {
        tracing::debug!(city = %address.city, "serving fixture soil reading");
        Ok(self.reading)
    }
}
