use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::model::{ProfileDetails, UserProfile};

pub struct UpdateProfileParams {
    pub details: ProfileDetails,
}

pub trait UpdateProfileUseCase: Send + Sync {
    fn execute(&self, params: UpdateProfileParams) -> Result<UserProfile, ProfileError>;
}
