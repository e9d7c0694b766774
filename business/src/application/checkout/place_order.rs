use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::application::cart::session::CartSession;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::{OrderConfirmation, PaymentRequest, order_id_at};
use crate::domain::checkout::services::PaymentGateway;
use crate::domain::checkout::use_cases::place_order::{PlaceOrderParams, PlaceOrderUseCase};
use crate::domain::logger::Logger;

pub struct PlaceOrderUseCaseImpl {
    pub session: Arc<CartSession>,
    pub payment_gateway: Arc<dyn PaymentGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self, params: PlaceOrderParams) -> Result<OrderConfirmation, CheckoutError> {
        let mut errors = params
            .shipping
            .validate()
            .err()
            .unwrap_or_default();
        if let Err(card_errors) = params.card.validate() {
            errors.merge(card_errors);
        }
        errors.into_result().map_err(CheckoutError::Validation)?;

        let ledger = self.session.snapshot();
        if ledger.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let totals = ledger.compute_totals(self.session.policy());

        self.logger.info(&format!(
            "Charging {} to card ending {}",
            totals.grand_total,
            params.card.last_four()
        ));
        let receipt = self
            .payment_gateway
            .charge(PaymentRequest {
                amount: totals.grand_total.clone(),
                card: params.card,
                customer_email: params.shipping.email.clone(),
            })
            .await
            .inspect_err(|e| self.logger.warn(&format!("Payment failed: {:?}", e)))?;

        let placed_at = Utc::now();
        let order_id = order_id_at(placed_at);
        self.session.mutate(|cart| cart.settle(ledger.items()));

        self.logger.info(&format!(
            "Order {} placed (payment {})",
            order_id, receipt.reference
        ));
        Ok(OrderConfirmation {
            order_id,
            payment_reference: receipt.reference,
            placed_at,
            shipping: params.shipping,
            items: ledger.into_items(),
            totals,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use mockall::mock;

    use super::*;
    use crate::application::cart::session::tests::{RecordingStore, mock_logger, session_over};
    use crate::domain::cart::model::CartProduct;
    use crate::domain::checkout::errors::PaymentError;
    use crate::domain::checkout::model::{CardDetails, PaymentReceipt, ShippingDetails};
    use crate::domain::shared::value_objects::ProductKey;

    mock! {
        pub Gateway {}

        #[async_trait]
        impl PaymentGateway for Gateway {
            async fn charge(&self, request: PaymentRequest) -> Result<PaymentReceipt, PaymentError>;
        }
    }

    fn shipping() -> ShippingDetails {
        ShippingDetails {
            name: "Asha Patil".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            address: "12 Mill Road".to_string(),
            city: "Pune".to_string(),
            pincode: "411001".to_string(),
        }
    }

    fn card() -> CardDetails {
        CardDetails {
            number: "4111 1111 1111 1111".to_string(),
            expiry: "09/27".to_string(),
            cvv: "123".to_string(),
        }
    }

    fn session_with_cart(store: Arc<RecordingStore>) -> Arc<CartSession> {
        let session = session_over(store);
        session.mutate(|ledger| {
            ledger.add_item(
                CartProduct::new(ProductKey::new("Guava"), "Guava", BigDecimal::from(100)),
                2,
            );
            ledger.add_item(
                CartProduct::new(ProductKey::new("Rice"), "Rice", BigDecimal::from(60)),
                1,
            );
        });
        Arc::new(session)
    }

    #[tokio::test]
    async fn should_charge_grand_total_once_and_clear_cart() {
        let store = Arc::new(RecordingStore::default());
        let session = session_with_cart(store.clone());
        let mut gateway = MockGateway::new();
        gateway
            .expect_charge()
            .withf(|request| request.amount == BigDecimal::from_str("346.80").unwrap())
            .times(1)
            .returning(|_| {
                Ok(PaymentReceipt {
                    reference: "PAY-test".to_string(),
                })
            });

        let use_case = PlaceOrderUseCaseImpl {
            session: session.clone(),
            payment_gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let confirmation = use_case
            .execute(PlaceOrderParams {
                shipping: shipping(),
                card: card(),
            })
            .await
            .unwrap();

        assert!(confirmation.order_id.starts_with("ORD-"));
        assert_eq!(confirmation.payment_reference, "PAY-test");
        assert_eq!(confirmation.items.len(), 2);
        assert!(session.summary().items.is_empty());
        assert_eq!(
            store.entries.lock().unwrap().get("cart").map(String::as_str),
            Some("[]")
        );
    }

    #[tokio::test]
    async fn should_keep_lines_added_while_payment_in_flight() {
        let session = session_with_cart(Arc::new(RecordingStore::default()));
        let shopper = session.clone();
        let mut gateway = MockGateway::new();
        gateway.expect_charge().times(1).returning(move |_| {
            shopper.mutate(|ledger| {
                ledger.add_item(
                    CartProduct::new(ProductKey::new("Onion"), "Onion", BigDecimal::from(90)),
                    1,
                );
                ledger.add_item(
                    CartProduct::new(ProductKey::new("Guava"), "Guava", BigDecimal::from(100)),
                    1,
                );
            });
            Ok(PaymentReceipt {
                reference: "PAY-test".to_string(),
            })
        });

        let use_case = PlaceOrderUseCaseImpl {
            session: session.clone(),
            payment_gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let confirmation = use_case
            .execute(PlaceOrderParams {
                shipping: shipping(),
                card: card(),
            })
            .await
            .unwrap();

        let ordered: Vec<(&str, u32)> = confirmation
            .items
            .iter()
            .map(|item| (item.title.as_str(), item.quantity))
            .collect();
        assert_eq!(ordered, vec![("Guava", 2), ("Rice", 1)]);
        let left: Vec<(String, u32)> = session
            .summary()
            .items
            .into_iter()
            .map(|item| (item.title, item.quantity))
            .collect();
        assert_eq!(
            left,
            vec![("Guava".to_string(), 1), ("Onion".to_string(), 1)]
        );
    }

    #[tokio::test]
    async fn should_keep_cart_when_payment_declined() {
        let session = session_with_cart(Arc::new(RecordingStore::default()));
        let mut gateway = MockGateway::new();
        gateway
            .expect_charge()
            .times(1)
            .returning(|_| Err(PaymentError::Declined("insufficient funds".to_string())));

        let use_case = PlaceOrderUseCaseImpl {
            session: session.clone(),
            payment_gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(PlaceOrderParams {
                shipping: shipping(),
                card: card(),
            })
            .await;

        assert!(matches!(result, Err(CheckoutError::PaymentFailed(_))));
        assert_eq!(session.summary().item_count, 3);
    }

    #[tokio::test]
    async fn should_report_shipping_and_card_errors_together() {
        let gateway = MockGateway::new();
        let use_case = PlaceOrderUseCaseImpl {
            session: session_with_cart(Arc::new(RecordingStore::default())),
            payment_gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(PlaceOrderParams {
                shipping: ShippingDetails {
                    pincode: "12".to_string(),
                    ..shipping()
                },
                card: CardDetails {
                    cvv: "1".to_string(),
                    ..card()
                },
            })
            .await;

        match result {
            Err(CheckoutError::Validation(errors)) => {
                assert!(errors.contains("pincode"));
                assert!(errors.contains("cvv"));
            }
            _ => panic!("expected validation failure"),
        }
    }

    #[tokio::test]
    async fn should_not_charge_for_empty_cart() {
        let use_case = PlaceOrderUseCaseImpl {
            session: Arc::new(session_over(Arc::new(RecordingStore::default()))),
            payment_gateway: Arc::new(MockGateway::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(PlaceOrderParams {
                shipping: shipping(),
                card: card(),
            })
            .await;

        assert!(matches!(result, Err(CheckoutError::EmptyCart)));
    }
}
