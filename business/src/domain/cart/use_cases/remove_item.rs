use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSummary;
use crate::domain::shared::value_objects::ProductKey;

pub struct RemoveCartItemParams {
    pub product_key: ProductKey,
}

pub trait RemoveCartItemUseCase: Send + Sync {
    fn execute(&self, params: RemoveCartItemParams) -> Result<CartSummary, CartError>;
}
