use async_trait::async_trait;

use super::errors::PaymentError;
use super::model::{PaymentReceipt, PaymentRequest};

/// Service port for collecting an order's payment. Called once per order, never retried.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, request: PaymentRequest) -> Result<PaymentReceipt, PaymentError>;
}
