use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSummary;
use crate::domain::shared::value_objects::ProductKey;

pub struct AddCartItemParams {
    pub product_key: ProductKey,
    pub quantity: u32,
}

pub trait AddCartItemUseCase: Send + Sync {
    fn execute(&self, params: AddCartItemParams) -> Result<CartSummary, CartError>;
}
