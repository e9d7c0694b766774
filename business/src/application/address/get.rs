use std::sync::Arc;

use crate::domain::address::errors::AddressError;
use crate::domain::address::model::AddressForm;
use crate::domain::address::repository::AddressRepository;
use crate::domain::address::use_cases::get::GetAddressUseCase;

pub struct GetAddressUseCaseImpl {
    pub repository: Arc<dyn AddressRepository>,
}

impl GetAddressUseCase for GetAddressUseCaseImpl {
    fn execute(&self) -> Result<AddressForm, AddressError> {
        self.repository.get()?.ok_or(AddressError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::errors::StorageError;

    mock! {
        pub AddressRepo {}

        impl AddressRepository for AddressRepo {
            fn get(&self) -> Result<Option<AddressForm>, StorageError>;
            fn save(&self, address: &AddressForm) -> Result<(), StorageError>;
        }
    }

    #[test]
    fn should_fail_when_no_address_saved() {
        let mut repo = MockAddressRepo::new();
        repo.expect_get().returning(|| Ok(None));

        let use_case = GetAddressUseCaseImpl {
            repository: Arc::new(repo),
        };

        assert!(matches!(use_case.execute(), Err(AddressError::NotFound)));
    }
}
