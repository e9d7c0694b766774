use std::sync::Arc;

use crate::domain::address::errors::AddressError;
use crate::domain::address::model::AddressForm;
use crate::domain::address::repository::AddressRepository;
use crate::domain::address::use_cases::submit::{SubmitAddressParams, SubmitAddressUseCase};
use crate::domain::logger::Logger;

pub struct SubmitAddressUseCaseImpl {
    pub repository: Arc<dyn AddressRepository>,
    pub logger: Arc<dyn Logger>,
}

impl SubmitAddressUseCase for SubmitAddressUseCaseImpl {
    fn execute(&self, params: SubmitAddressParams) -> Result<AddressForm, AddressError> {
        let address = params.address;
        address.validate().map_err(|errors| {
            self.logger
                .debug(&format!("Address rejected: {}", errors));
            AddressError::Validation(errors)
        })?;

        self.repository.save(&address)?;

        self.logger.info(&format!(
            "Farm address saved ({}, {})",
            address.city, address.state
        ));
        Ok(address)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::address::model::AddressType;
    use crate::domain::errors::StorageError;

    mock! {
        pub AddressRepo {}

        impl AddressRepository for AddressRepo {
            fn get(&self) -> Result<Option<AddressForm>, StorageError>;
            fn save(&self, address: &AddressForm) -> Result<(), StorageError>;
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

    fn form() -> AddressForm {
        AddressForm {
            full_name: "Ravi Kumar".to_string(),
            email: "ravi@example.com".to_string(),
            phone: "9876543210".to_string(),
            address_line1: "Plot 7, Canal Road".to_string(),
            address_line2: None,
            city: "Nashik".to_string(),
            state: "Maharashtra".to_string(),
            pincode: "422001".to_string(),
            address_type: AddressType::Work,
        }
    }

    #[test]
    fn should_save_valid_address() {
        let mut repo = MockAddressRepo::new();
        repo.expect_save()
            .withf(|address| address.city == "Nashik")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = SubmitAddressUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(SubmitAddressParams { address: form() });

        assert_eq!(result.unwrap(), form());
    }

    #[test]
    fn should_not_save_invalid_address() {
        let mut repo = MockAddressRepo::new();
        repo.expect_save().times(0);

        let use_case = SubmitAddressUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(SubmitAddressParams {
            address: AddressForm {
                state: String::new(),
                ..form()
            },
        });

        match result {
            Err(AddressError::Validation(errors)) => {
                assert_eq!(errors.get("state"), Some("State is required"))
            }
            _ => panic!("expected validation failure"),
        }
    }

    #[test]
    fn should_propagate_write_failure() {
        let mut repo = MockAddressRepo::new();
        repo.expect_save().returning(|_| Err(StorageError::Write));

        let use_case = SubmitAddressUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(SubmitAddressParams { address: form() });

        assert!(matches!(result, Err(AddressError::Storage(_))));
    }
}
