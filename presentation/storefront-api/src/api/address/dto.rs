use poem_openapi::{Enum, Object};

use business::domain::address::model::{AddressForm, AddressSuggestion, AddressType, Coordinates};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
#[oai(rename_all = "lowercase")]
pub enum AddressTypeDto {
    Home,
    Work,
    Other,
}

impl From<AddressTypeDto> for AddressType {
    fn from(dto: AddressTypeDto) -> Self {
        match dto {
            AddressTypeDto::Home => AddressType::Home,
            AddressTypeDto::Work => AddressType::Work,
            AddressTypeDto::Other => AddressType::Other,
        }
    }
}

impl From<AddressType> for AddressTypeDto {
    fn from(kind: AddressType) -> Self {
        match kind {
            AddressType::Home => AddressTypeDto::Home,
            AddressType::Work => AddressTypeDto::Work,
            AddressType::Other => AddressTypeDto::Other,
        }
    }
}

fn default_address_type() -> AddressTypeDto {
    AddressTypeDto::Home
}

/// Farm address form. Field names match the keys of validation messages.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AddressFormDto {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address_line1: String,
    #[oai(skip_serializing_if_is_none)]
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub pincode: String,
    #[oai(default = "default_address_type")]
    pub address_type: AddressTypeDto,
}

impl From<AddressFormDto> for AddressForm {
    fn from(dto: AddressFormDto) -> Self {
        Self {
            full_name: dto.full_name,
            email: dto.email,
            phone: dto.phone,
            address_line1: dto.address_line1,
            address_line2: dto.address_line2.filter(|line| !line.trim().is_empty()),
            city: dto.city,
            state: dto.state,
            pincode: dto.pincode,
            address_type: dto.address_type.into(),
        }
    }
}

impl From<AddressForm> for AddressFormDto {
    fn from(form: AddressForm) -> Self {
        Self {
            full_name: form.full_name,
            email: form.email,
            phone: form.phone,
            address_line1: form.address_line1,
            address_line2: form.address_line2,
            city: form.city,
            state: form.state,
            pincode: form.pincode,
            address_type: form.address_type.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AutofillRequest {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<AutofillRequest> for Coordinates {
    fn from(request: AutofillRequest) -> Self {
        Self {
            latitude: request.latitude,
            longitude: request.longitude,
        }
    }
}

/// Fields recovered from the position. Anything not found is empty.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AddressSuggestionResponse {
    pub address_line1: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

impl From<AddressSuggestion> for AddressSuggestionResponse {
    fn from(suggestion: AddressSuggestion) -> Self {
        Self {
            address_line1: suggestion.address_line1,
            city: suggestion.city,
            state: suggestion.state,
            pincode: suggestion.pincode,
        }
    }
}
