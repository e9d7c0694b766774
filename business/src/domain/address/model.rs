use serde::{Deserialize, Serialize};

use crate::domain::shared::validation::{
    FieldErrors, is_valid_email, is_valid_phone, is_valid_pincode,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    #[default]
    Home,
    Work,
    Other,
}

impl std::fmt::Display for AddressType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddressType::Home => write!(f, "home"),
            AddressType::Work => write!(f, "work"),
            AddressType::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for AddressType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(AddressType::Home),
            "work" => Ok(AddressType::Work),
            "other" => Ok(AddressType::Other),
            _ => Err(format!("Invalid address type: {}", s)),
        }
    }
}

/// Farm address used to locate the soil sensors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address_line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub pincode: String,
    #[serde(default)]
    pub address_type: AddressType,
}

impl AddressForm {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        errors.require("fullName", &self.full_name, "Full name is required");
        if errors.require("email", &self.email, "Email is required")
            && !is_valid_email(&self.email)
        {
            errors.add("email", "Please enter a valid email");
        }
        if errors.require("phone", &self.phone, "Phone number is required")
            && !is_valid_phone(&self.phone)
        {
            errors.add("phone", "Please enter a valid 10-digit phone number");
        }
        errors.require("addressLine1", &self.address_line1, "Address is required");
        errors.require("city", &self.city, "City is required");
        errors.require("state", &self.state, "State is required");
        if errors.require("pincode", &self.pincode, "PIN code is required")
            && !is_valid_pincode(&self.pincode)
        {
            errors.add("pincode", "Please enter a valid 6-digit PIN code");
        }

        errors.into_result()
    }

    /// One-line rendering used in the soil report header.
    pub fn summary_line(&self) -> String {
        let mut parts = vec![self.address_line1.trim()];
        if let Some(line2) = self.address_line2.as_deref().map(str::trim)
            && !line2.is_empty()
        {
            parts.push(line2);
        }
        parts.extend([self.city.trim(), self.state.trim(), self.pincode.trim()]);
        parts.retain(|part| !part.is_empty());
        parts.join(", ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Address fields recovered from a position. Missing components are empty strings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AddressSuggestion {
    pub address_line1: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}
