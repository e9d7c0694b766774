use std::ops::RangeInclusive;

use super::model::{CropRecommendation, SoilReading, Suitability};

const CROP_IMAGE: &str = "https://images.unsplash.com/photo-1625246333195-78d9c38ad449";

/// Growing conditions a crop prefers.
#[derive(Debug, Clone, PartialEq)]
pub struct CropProfile {
    pub name: String,
    pub ph: RangeInclusive<f64>,
    pub moisture_percent: RangeInclusive<f64>,
    pub image_ref: String,
}

impl CropProfile {
    pub fn new(
        name: impl Into<String>,
        ph: RangeInclusive<f64>,
        moisture_percent: RangeInclusive<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            ph,
            moisture_percent,
            image_ref: CROP_IMAGE.to_string(),
        }
    }

    pub fn suitability(&self, reading: &SoilReading) -> Suitability {
        let ph_fits = self.ph.contains(&reading.ph);
        let moisture_fits = self.moisture_percent.contains(&reading.moisture_percent);
        match (ph_fits, moisture_fits) {
            (true, true) => Suitability::High,
            (true, false) | (false, true) => Suitability::Medium,
            (false, false) => Suitability::Low,
        }
    }
}

pub fn default_crop_profiles() -> Vec<CropProfile> {
    vec![
        CropProfile::new("Rice", 5.5..=7.0, 60.0..=100.0),
        CropProfile::new("Wheat", 6.0..=7.5, 40.0..=60.0),
        CropProfile::new("Maize", 5.8..=7.0, 50.0..=75.0),
    ]
}

/// Ranks `profiles` against `reading`, best first. Equal ranks keep profile order.
pub fn recommend(reading: &SoilReading, profiles: &[CropProfile]) -> Vec<CropRecommendation> {
    let mut crops: Vec<CropRecommendation> = profiles
        .iter()
        .map(|profile| CropRecommendation {
            name: profile.name.clone(),
            suitability: profile.suitability(reading),
            image_ref: profile.image_ref.clone(),
        })
        .collect();
    crops.sort_by_key(|crop| crop.suitability);
    crops
}
