use crate::domain::shared::validation::FieldErrors;

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout.invalid_details")]
    Validation(FieldErrors),
    #[error("checkout.empty_cart")]
    EmptyCart,
    #[error("checkout.payment_failed")]
    PaymentFailed(#[source] PaymentError),
}

#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("payment.declined")]
    Declined(String),
    #[error("payment.unavailable")]
    Unavailable(String),
}

impl From<PaymentError> for CheckoutError {
    fn from(error: PaymentError) -> Self {
        CheckoutError::PaymentFailed(error)
    }
}
