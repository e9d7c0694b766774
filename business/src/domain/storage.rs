use super::errors::StorageError;

/// Well-known key of the cart snapshot.
pub const CART_SNAPSHOT_KEY: &str = "cart";
/// Key of the saved user profile document.
pub const PROFILE_KEY: &str = "profile";
/// Key of the saved farm address document.
pub const FARM_ADDRESS_KEY: &str = "farm_address";

/// Local key-value store holding serialized documents.
///
/// All methods take `&self`; implementations use interior mutability.
/// `set` overwrites, `remove` succeeds for absent keys.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
