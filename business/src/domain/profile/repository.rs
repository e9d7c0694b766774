use super::model::UserProfile;
use crate::domain::errors::StorageError;

pub trait ProfileRepository: Send + Sync {
    fn get(&self) -> Result<Option<UserProfile>, StorageError>;
    fn save(&self, profile: &UserProfile) -> Result<(), StorageError>;
}
