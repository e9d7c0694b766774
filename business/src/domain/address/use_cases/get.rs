use crate::domain::address::errors::AddressError;
use crate::domain::address::model::AddressForm;

pub trait GetAddressUseCase: Send + Sync {
    fn execute(&self) -> Result<AddressForm, AddressError>;
}
