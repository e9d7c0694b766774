use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::model::UserProfile;

pub trait GetProfileUseCase: Send + Sync {
    fn execute(&self) -> Result<UserProfile, ProfileError>;
}
