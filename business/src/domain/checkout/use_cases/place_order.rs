use async_trait::async_trait;

use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::{CardDetails, OrderConfirmation, ShippingDetails};

pub struct PlaceOrderParams {
    pub shipping: ShippingDetails,
    pub card: CardDetails,
}

#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    async fn execute(&self, params: PlaceOrderParams) -> Result<OrderConfirmation, CheckoutError>;
}
