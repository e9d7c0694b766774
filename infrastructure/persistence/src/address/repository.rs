use std::sync::Arc;

use business::domain::address::model::AddressForm;
use business::domain::address::repository::AddressRepository;
use business::domain::errors::StorageError;
use business::domain::storage::{FARM_ADDRESS_KEY, KeyValueStore};

use crate::documents::JsonDocument;

pub struct AddressRepositoryKv {
    document: JsonDocument,
}

impl AddressRepositoryKv {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            document: JsonDocument::new(store, FARM_ADDRESS_KEY),
        }
    }
}

impl AddressRepository for AddressRepositoryKv {
    fn get(&self) -> Result<Option<AddressForm>, StorageError> {
        self.document.load()
    }

    fn save(&self, address: &AddressForm) -> Result<(), StorageError> {
        self.document.save(address)
    }
}
