use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartSummary, QuantityUpdate};
use crate::domain::shared::value_objects::ProductKey;

pub struct UpdateCartItemQuantityParams {
    pub product_key: ProductKey,
    /// Zero or negative removes the line.
    pub quantity: i64,
}

pub struct UpdateCartItemQuantityResult {
    pub outcome: QuantityUpdate,
    pub cart: CartSummary,
}

pub trait UpdateCartItemQuantityUseCase: Send + Sync {
    fn execute(
        &self,
        params: UpdateCartItemQuantityParams,
    ) -> Result<UpdateCartItemQuantityResult, CartError>;
}
