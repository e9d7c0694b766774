use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::shared::validation::{
    FieldErrors, is_valid_email, is_valid_phone, is_valid_pincode, normalize_phone,
};

pub const INDIAN_STATES: [&str; 36] = [
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Andaman and Nicobar Islands",
    "Chandigarh",
    "Dadra and Nagar Haveli and Daman and Diu",
    "Delhi",
    "Jammu and Kashmir",
    "Ladakh",
    "Lakshadweep",
    "Puducherry",
];

const AVATAR_SERVICE: &str = "https://ui-avatars.com/api/";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileAddress {
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub pin_code: String,
}

/// Editable part of a profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub avatar: Option<String>,
    pub address: ProfileAddress,
}

impl ProfileDetails {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        errors.require("firstName", &self.first_name, "First name is required");
        if errors.require("email", &self.email, "Email is required")
            && !is_valid_email(&self.email)
        {
            errors.add("email", "Please enter a valid email");
        }
        if errors.require("phone", &self.phone, "Phone number is required")
            && !is_valid_phone(&normalize_phone(&self.phone))
        {
            errors.add("phone", "Please enter a valid 10-digit phone number");
        }

        let pin_code = self.address.pin_code.trim();
        if !pin_code.is_empty() && !is_valid_pincode(pin_code) {
            errors.add("pinCode", "Please enter a valid 6-digit PIN code");
        }
        let state = self.address.state.trim();
        if !state.is_empty() && !INDIAN_STATES.contains(&state) {
            errors.add("state", "Please select a valid state");
        }

        errors.into_result()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Ten digits, without country code.
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub member_since: NaiveDate,
    #[serde(default)]
    pub address: ProfileAddress,
}

impl UserProfile {
    /// Builds a stored profile from validated details.
    pub fn from_details(details: ProfileDetails, member_since: NaiveDate) -> Self {
        Self {
            first_name: details.first_name.trim().to_string(),
            last_name: details.last_name.trim().to_string(),
            email: details.email.trim().to_string(),
            phone: normalize_phone(&details.phone),
            avatar: details.avatar.filter(|a| !a.trim().is_empty()),
            member_since,
            address: ProfileAddress {
                state: details.address.state.trim().to_string(),
                pin_code: details.address.pin_code.trim().to_string(),
                ..details.address
            },
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .collect()
    }

    pub fn avatar_url(&self) -> String {
        if let Some(avatar) = &self.avatar {
            return avatar.clone();
        }
        let name: String =
            url::form_urlencoded::byte_serialize(self.display_name().as_bytes()).collect();
        format!(
            "{}?name={}&background=34d399&color=fff&size=128",
            AVATAR_SERVICE, name
        )
    }
}
