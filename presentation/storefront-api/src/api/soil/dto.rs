use poem_openapi::Object;

use business::domain::soil::model::{CropRecommendation, Nutrients, SoilReport};

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct NutrientsResponse {
    pub nitrogen: String,
    pub phosphorus: String,
    pub potassium: String,
}

impl From<Nutrients> for NutrientsResponse {
    fn from(nutrients: Nutrients) -> Self {
        Self {
            nitrogen: nutrients.nitrogen.to_string(),
            phosphorus: nutrients.phosphorus.to_string(),
            potassium: nutrients.potassium.to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CropRecommendationResponse {
    pub name: String,
    /// High, Medium or Low
    pub suitability: String,
    pub image: String,
}

impl From<CropRecommendation> for CropRecommendationResponse {
    fn from(crop: CropRecommendation) -> Self {
        Self {
            name: crop.name,
            suitability: crop.suitability.to_string(),
            image: crop.image_ref,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct SoilReportResponse {
    pub farm_owner: String,
    /// Saved farm address on one line
    pub location: String,
    pub moisture_percent: f64,
    pub temperature_celsius: f64,
    pub ph: f64,
    pub nutrients: NutrientsResponse,
    /// Best suited first
    pub crops: Vec<CropRecommendationResponse>,
}

impl From<SoilReport> for SoilReportResponse {
    fn from(report: SoilReport) -> Self {
        Self {
            location: report.address.summary_line(),
            farm_owner: report.address.full_name,
            moisture_percent: report.reading.moisture_percent,
            temperature_celsius: report.reading.temperature_celsius,
            ph: report.reading.ph,
            nutrients: report.reading.nutrients.into(),
            crops: report.crops.into_iter().map(Into::into).collect(),
        }
    }
}
