#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.product_not_found")]
    ProductNotFound,
    #[error("catalog.invalid_price_range")]
    InvalidPriceRange,
    #[error("storage.unavailable")]
    Storage(#[from] crate::domain::errors::StorageError),
}
