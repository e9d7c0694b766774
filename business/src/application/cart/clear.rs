use std::sync::Arc;

use super::session::CartSession;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSummary;
use crate::domain::cart::use_cases::clear::ClearCartUseCase;
use crate::domain::logger::Logger;

pub struct ClearCartUseCaseImpl {
    pub session: Arc<CartSession>,
    pub logger: Arc<dyn Logger>,
}

impl ClearCartUseCase for ClearCartUseCaseImpl {
    fn execute(&self) -> Result<CartSummary, CartError> {
        let (_, summary) = self.session.mutate(|ledger| ledger.clear());
        self.logger.info("Cart cleared");
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use bigdecimal::BigDecimal;

    use super::*;
    use crate::application::cart::session::tests::{RecordingStore, mock_logger, session_over};
    use crate::domain::cart::model::CartProduct;
    use crate::domain::cart::totals::OrderTotals;
    use crate::domain::shared::value_objects::ProductKey;

    #[test]
    fn should_zero_totals_and_persist_empty_snapshot() {
        let store = Arc::new(RecordingStore::default());
        let session = session_over(store.clone());
        session.mutate(|ledger| {
            ledger.add_item(
                CartProduct::new(ProductKey::new("Carrot"), "Carrot", BigDecimal::from(100)),
                1,
            )
        });
        let use_case = ClearCartUseCaseImpl {
            session: Arc::new(session),
            logger: mock_logger(),
        };

        let summary = use_case.execute().unwrap();

        assert_eq!(summary.totals, OrderTotals::zero());
        assert_eq!(summary.item_count, 0);
        assert_eq!(
            store.entries.lock().unwrap().get("cart").map(String::as_str),
            Some("[]")
        );
    }
}
