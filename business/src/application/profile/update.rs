use std::sync::Arc;

use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::model::UserProfile;
use crate::domain::profile::repository::ProfileRepository;
use crate::domain::profile::use_cases::update::{UpdateProfileParams, UpdateProfileUseCase};

pub struct UpdateProfileUseCaseImpl {
    pub repository: Arc<dyn ProfileRepository>,
    pub logger: Arc<dyn Logger>,
}

impl UpdateProfileUseCase for UpdateProfileUseCaseImpl {
    fn execute(&self, params: UpdateProfileParams) -> Result<UserProfile, ProfileError> {
        params
            .details
            .validate()
            .map_err(ProfileError::Validation)?;

        let member_since = match self.repository.get()? {
            Some(existing) => existing.member_since,
            None => {
                self.logger.info("Creating profile");
                Utc::now().date_naive()
            }
        };

        let profile = UserProfile::from_details(params.details, member_since);
        self.repository.save(&profile)?;

        self.logger
            .info(&format!("Profile saved for {}", profile.display_name()));
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use mockall::mock;

    use super::*;
    use crate::domain::errors::StorageError;
    use crate::domain::profile::model::{ProfileAddress, ProfileDetails};

    mock! {
        pub ProfileRepo {}

        impl ProfileRepository for ProfileRepo {
            fn get(&self) -> Result<Option<UserProfile>, StorageError>;
            fn save(&self, profile: &UserProfile) -> Result<(), StorageError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn details() -> ProfileDetails {
        ProfileDetails {
            first_name: "Meera".to_string(),
            last_name: "Iyer".to_string(),
            email: "meera@example.com".to_string(),
            phone: "98450 12345".to_string(),
            avatar: None,
            address: ProfileAddress {
                city: "Coimbatore".to_string(),
                state: "Tamil Nadu".to_string(),
                pin_code: "641001".to_string(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn should_keep_member_since_of_existing_profile() {
        let joined = NaiveDate::from_ymd_opt(2023, 4, 15).unwrap();
        let mut repo = MockProfileRepo::new();
        repo.expect_get()
            .returning(move || Ok(Some(UserProfile::from_details(details(), joined))));
        repo.expect_save()
            .withf(move |profile| profile.member_since == joined)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateProfileUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let profile = use_case
            .execute(UpdateProfileParams {
                details: ProfileDetails {
                    last_name: "Iyer-Rao".to_string(),
                    ..details()
                },
            })
            .unwrap();

        assert_eq!(profile.last_name, "Iyer-Rao");
        assert_eq!(profile.phone, "9845012345");
    }

    #[test]
    fn should_stamp_today_for_new_profile() {
        let mut repo = MockProfileRepo::new();
        repo.expect_get().returning(|| Ok(None));
        repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = UpdateProfileUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let profile = use_case
            .execute(UpdateProfileParams { details: details() })
            .unwrap();

        assert_eq!(profile.member_since, Utc::now().date_naive());
    }

    #[test]
    fn should_reject_invalid_details_without_saving() {
        let mut repo = MockProfileRepo::new();
        repo.expect_get().times(0);
        repo.expect_save().times(0);

        let use_case = UpdateProfileUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(UpdateProfileParams {
            details: ProfileDetails {
                email: "not-an-email".to_string(),
                ..details()
            },
        });

        assert!(matches!(result, Err(ProfileError::Validation(_))));
    }
}
