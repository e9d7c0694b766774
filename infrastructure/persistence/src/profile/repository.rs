use std::sync::Arc;

use business::domain::errors::StorageError;
use business::domain::profile::model::UserProfile;
use business::domain::profile::repository::ProfileRepository;
use business::domain::storage::{KeyValueStore, PROFILE_KEY};

use crate::documents::JsonDocument;

pub struct ProfileRepositoryKv {
    document: JsonDocument,
}

impl ProfileRepositoryKv {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            document: JsonDocument::new(store, PROFILE_KEY),
        }
    }
}

impl ProfileRepository for ProfileRepositoryKv {
    fn get(&self) -> Result<Option<UserProfile>, StorageError> {
        self.document.load()
    }

    fn save(&self, profile: &UserProfile) -> Result<(), StorageError> {
        self.document.save(profile)
    }
}
