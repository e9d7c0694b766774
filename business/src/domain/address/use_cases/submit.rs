use crate::domain::address::errors::AddressError;
use crate::domain::address::model::AddressForm;

pub struct SubmitAddressParams {
    pub address: AddressForm,
}

pub trait SubmitAddressUseCase: Send + Sync {
    fn execute(&self, params: SubmitAddressParams) -> Result<AddressForm, AddressError>;
}
