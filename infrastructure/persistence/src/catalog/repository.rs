use business::domain::catalog::model::Product;
use business::domain::catalog::repository::CatalogRepository;
use business::domain::errors::StorageError;
use business::domain::shared::value_objects::ProductKey;

use super::entity::SEED;

/// In-process catalog built from the bundled product list.
pub struct SeededCatalogRepository {
    products: Vec<Product>,
}

impl SeededCatalogRepository {
    pub fn new() -> Self {
        Self::from_products(SEED.into_iter().map(|entity| entity.into_domain()).collect())
    }

    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl Default for SeededCatalogRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogRepository for SeededCatalogRepository {
    fn all(&self) -> Result<Vec<Product>, StorageError> {
        Ok(self.products.clone())
    }

    fn find(&self, key: &ProductKey) -> Result<Option<Product>, StorageError> {
        Ok(self.products.iter().find(|p| &p.key == key).cloned())
    }
}
