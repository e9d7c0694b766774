use crate::domain::address::model::AddressForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NutrientLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for NutrientLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NutrientLevel::Low => write!(f, "Low"),
            NutrientLevel::Medium => write!(f, "Medium"),
            NutrientLevel::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nutrients {
    pub nitrogen: NutrientLevel,
    pub phosphorus: NutrientLevel,
    pub potassium: NutrientLevel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoilReading {
    pub moisture_percent: f64,
    pub temperature_celsius: f64,
    pub ph: f64,
    pub nutrients: Nutrients,
}

/// How well a crop fits a reading. Variants are declared best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suitability {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Suitability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Suitability::High => write!(f, "High"),
            Suitability::Medium => write!(f, "Medium"),
            Suitability::Low => write!(f, "Low"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CropRecommendation {
    pub name: String,
    pub suitability: Suitability,
    pub image_ref: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SoilReport {
    pub address: AddressForm,
    pub reading: SoilReading,
    pub crops: Vec<CropRecommendation>,
}
