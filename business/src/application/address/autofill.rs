use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::address::errors::AddressError;
use crate::domain::address::model::AddressSuggestion;
use crate::domain::address::services::ReverseGeocoder;
use crate::domain::address::use_cases::autofill::{AutofillAddressParams, AutofillAddressUseCase};
use crate::domain::logger::Logger;

pub struct AutofillAddressUseCaseImpl {
    pub geocoder: Arc<dyn ReverseGeocoder>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AutofillAddressUseCase for AutofillAddressUseCaseImpl {
    async fn execute(
        &self,
        params: AutofillAddressParams,
    ) -> Result<AddressSuggestion, AddressError> {
        let coordinates = params.coordinates;
        if !coordinates.is_valid() {
            return Err(AddressError::InvalidCoordinates);
        }

        self.logger.debug(&format!(
            "Reverse geocoding {:.4},{:.4}",
            coordinates.latitude, coordinates.longitude
        ));
        let suggestion = self
            .geocoder
            .reverse(coordinates)
            .await
            .inspect_err(|e| self.logger.warn(&format!("Location lookup failed: {:?}", e)))?;

        self.logger.info(&format!(
            "Location resolved to {}, {}",
            suggestion.city, suggestion.state
        ));
        Ok(suggestion)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::address::errors::GeocodingError;
    use crate::domain::address::model::Coordinates;

    mock! {
        pub Geocoder {}

        #[async_trait]
        impl ReverseGeocoder for Geocoder {
            async fn reverse(&self, coordinates: Coordinates) -> Result<AddressSuggestion, GeocodingError>;
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

    #[tokio::test]
    async fn should_return_geocoded_fields() {
        let mut geocoder = MockGeocoder::new();
        geocoder.expect_reverse().times(1).returning(|_| {
            Ok(AddressSuggestion {
                address_line1: "Gangapur Road".to_string(),
                city: "Nashik".to_string(),
                state: "Maharashtra".to_string(),
                pincode: "422013".to_string(),
            })
        });

        let use_case = AutofillAddressUseCaseImpl {
            geocoder: Arc::new(geocoder),
            logger: mock_logger(),
        };

        let suggestion = use_case
            .execute(AutofillAddressParams {
                coordinates: Coordinates {
                    latitude: 20.01,
                    longitude: 73.76,
                },
            })
            .await
            .unwrap();

        assert_eq!(suggestion.pincode, "422013");
    }

    #[tokio::test]
    async fn should_attempt_lookup_once_and_surface_failure() {
        let mut geocoder = MockGeocoder::new();
        geocoder
            .expect_reverse()
            .times(1)
            .returning(|_| Err(GeocodingError::Request("timed out".to_string())));

        let use_case = AutofillAddressUseCaseImpl {
            geocoder: Arc::new(geocoder),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AutofillAddressParams {
                coordinates: Coordinates {
                    latitude: 20.01,
                    longitude: 73.76,
                },
            })
            .await;

        assert!(matches!(result, Err(AddressError::LocationLookupFailed(_))));
    }

    #[tokio::test]
    async fn should_reject_out_of_range_coordinates_without_lookup() {
        let mut geocoder = MockGeocoder::new();
        geocoder.expect_reverse().times(0);

        let use_case = AutofillAddressUseCaseImpl {
            geocoder: Arc::new(geocoder),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AutofillAddressParams {
                coordinates: Coordinates {
                    latitude: 120.0,
                    longitude: 73.76,
                },
            })
            .await;

        assert!(matches!(result, Err(AddressError::InvalidCoordinates)));
    }
}
