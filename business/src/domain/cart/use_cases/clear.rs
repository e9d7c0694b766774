use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSummary;

pub trait ClearCartUseCase: Send + Sync {
    fn execute(&self) -> Result<CartSummary, CartError>;
}
