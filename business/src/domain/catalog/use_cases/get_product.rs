use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::shared::value_objects::ProductKey;

pub struct GetProductParams {
    pub key: ProductKey,
}

pub trait GetProductUseCase: Send + Sync {
    fn execute(&self, params: GetProductParams) -> Result<Product, CatalogError>;
}
