use super::model::AddressForm;
use crate::domain::errors::StorageError;

pub trait AddressRepository: Send + Sync {
    fn get(&self) -> Result<Option<AddressForm>, StorageError>;
    fn save(&self, address: &AddressForm) -> Result<(), StorageError>;
}
