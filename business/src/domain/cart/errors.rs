#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("cart.negative_price")]
    NegativePrice,
    #[error("cart.product_key_empty")]
    ProductKeyEmpty,
    #[error("cart.duplicate_product")]
    DuplicateProduct,
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("storage.unavailable")]
    Storage(#[from] crate::domain::errors::StorageError),
}

/// Why a stored cart snapshot could not be restored.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("cart.snapshot_malformed")]
    Malformed(#[from] serde_json::Error),
    #[error("cart.snapshot_invalid")]
    Invalid(#[source] CartError),
}
