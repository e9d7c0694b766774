use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::{CheckoutQuote, ShippingDetails};

pub struct QuoteCheckoutParams {
    pub shipping: ShippingDetails,
}

pub trait QuoteCheckoutUseCase: Send + Sync {
    fn execute(&self, params: QuoteCheckoutParams) -> Result<CheckoutQuote, CheckoutError>;
}
