use std::sync::Arc;

use super::session::CartSession;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSummary;
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::logger::Logger;

pub struct RemoveCartItemUseCaseImpl {
    pub session: Arc<CartSession>,
    pub logger: Arc<dyn Logger>,
}

impl RemoveCartItemUseCase for RemoveCartItemUseCaseImpl {
    fn execute(&self, params: RemoveCartItemParams) -> Result<CartSummary, CartError> {
        let (removed, summary) = self
            .session
            .mutate(|ledger| ledger.remove_item(&params.product_key));

        if removed {
            self.logger
                .info(&format!("Removed {} from cart", params.product_key));
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use bigdecimal::BigDecimal;

    use super::*;
    use crate::application::cart::session::tests::{RecordingStore, mock_logger, session_over};
    use crate::domain::cart::model::CartProduct;
    use crate::domain::shared::value_objects::ProductKey;

    #[test]
    fn should_treat_second_remove_as_no_op() {
        let session = session_over(Arc::new(RecordingStore::default()));
        session.mutate(|ledger| {
            ledger.add_item(
                CartProduct::new(ProductKey::new("Onion"), "Onion", BigDecimal::from(90)),
                3,
            )
        });
        let use_case = RemoveCartItemUseCaseImpl {
            session: Arc::new(session),
            logger: mock_logger(),
        };
        let params = || RemoveCartItemParams {
            product_key: ProductKey::new("Onion"),
        };

        let once = use_case.execute(params()).unwrap();
        let twice = use_case.execute(params()).unwrap();

        assert!(once.items.is_empty());
        assert_eq!(once, twice);
    }
}
