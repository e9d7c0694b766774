use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use business::domain::checkout::errors::PaymentError;
use business::domain::checkout::model::{PaymentReceipt, PaymentRequest};
use business::domain::checkout::services::PaymentGateway;

pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_secs(2);

/// Gateway that approves every charge after a fixed processing delay.
/// No money moves; the reference is only unique.
pub struct SimulatedPaymentGateway {
    delay: Duration,
}

impl SimulatedPaymentGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedPaymentGateway {
    fn default() -> Self {
        Self::new(DEFAULT_PROCESSING_DELAY)
    }
}

#[async_trait]
impl PaymentGateway for SimulatedPaymentGateway {
    async fn charge(&self, request: PaymentRequest) -> Result<PaymentReceipt, PaymentError> {
        tracing::debug!(
            amount = %request.amount,
            card = %request.card.last_four(),
            "processing simulated payment"
        );
        tokio::time::sleep(self.delay).await;

        let reference = format!("PAY-{}", Uuid::new_v4());
        tracing::info!(%reference, "simulated payment approved");
        Ok(PaymentReceipt { reference })
    }
}
