use async_trait::async_trait;

use crate::domain::address::errors::AddressError;
use crate::domain::address::model::{AddressSuggestion, Coordinates};

pub struct AutofillAddressParams {
    pub coordinates: Coordinates,
}

#[async_trait]
pub trait AutofillAddressUseCase: Send + Sync {
    async fn execute(&self, params: AutofillAddressParams)
    -> Result<AddressSuggestion, AddressError>;
}
