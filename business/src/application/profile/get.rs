use std::sync::Arc;

use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::model::UserProfile;
use crate::domain::profile::repository::ProfileRepository;
use crate::domain::profile::use_cases::get::GetProfileUseCase;

pub struct GetProfileUseCaseImpl {
    pub repository: Arc<dyn ProfileRepository>,
}

impl GetProfileUseCase for GetProfileUseCaseImpl {
    fn execute(&self) -> Result<UserProfile, ProfileError> {
        self.repository.get()?.ok_or(ProfileError::NotFound)
    }
}
