use super::model::Product;
use crate::domain::errors::StorageError;
use crate::domain::shared::value_objects::ProductKey;

/// Read-only source of the products on sale, in catalog order.
pub trait CatalogRepository: Send + Sync {
    fn all(&self) -> Result<Vec<Product>, StorageError>;
    fn find(&self, key: &ProductKey) -> Result<Option<Product>, StorageError>;
}
