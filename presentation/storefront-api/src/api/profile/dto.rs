use chrono::NaiveDate;
use poem_openapi::Object;

use business::domain::profile::model::{ProfileAddress, ProfileDetails, UserProfile};

#[derive(Debug, Clone, Default, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProfileAddressDto {
    #[oai(default)]
    pub address_line1: String,
    #[oai(default)]
    pub address_line2: String,
    #[oai(default)]
    pub city: String,
    /// One of the Indian states or union territories
    #[oai(default)]
    pub state: String,
    /// Six digits
    #[oai(default)]
    pub pin_code: String,
}

impl From<ProfileAddressDto> for ProfileAddress {
    fn from(dto: ProfileAddressDto) -> Self {
        Self {
            address_line1: dto.address_line1,
            address_line2: dto.address_line2,
            city: dto.city,
            state: dto.state,
            pin_code: dto.pin_code,
        }
    }
}

impl From<ProfileAddress> for ProfileAddressDto {
    fn from(address: ProfileAddress) -> Self {
        Self {
            address_line1: address.address_line1,
            address_line2: address.address_line2,
            city: address.city,
            state: address.state,
            pin_code: address.pin_code,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub first_name: String,
    #[oai(default)]
    pub last_name: String,
    pub email: String,
    /// Ten digits, optionally prefixed with +91
    pub phone: String,
    /// Avatar image URL; a generated initials avatar is used when absent
    #[oai(skip_serializing_if_is_none)]
    pub avatar: Option<String>,
    #[oai(default)]
    pub address: ProfileAddressDto,
}

impl From<UpdateProfileRequest> for ProfileDetails {
    fn from(request: UpdateProfileRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone: request.phone,
            avatar: request.avatar,
            address: request.address.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub first_name: String,
    pub last_name: String,
    pub display_name: String,
    pub initials: String,
    pub email: String,
    pub phone: String,
    pub avatar_url: String,
    pub member_since: NaiveDate,
    pub address: ProfileAddressDto,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            display_name: profile.display_name(),
            initials: profile.initials(),
            avatar_url: profile.avatar_url(),
            first_name: profile.first_name,
            last_name: profile.last_name,
            email: profile.email,
            phone: profile.phone,
            member_since: profile.member_since,
            address: profile.address.into(),
        }
    }
}
