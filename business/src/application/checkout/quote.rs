use std::sync::Arc;

use crate::application::cart::session::CartSession;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::CheckoutQuote;
use crate::domain::checkout::use_cases::quote::{QuoteCheckoutParams, QuoteCheckoutUseCase};
use crate::domain::logger::Logger;

pub struct QuoteCheckoutUseCaseImpl {
    pub session: Arc<CartSession>,
    pub logger: Arc<dyn Logger>,
}

impl QuoteCheckoutUseCase for QuoteCheckoutUseCaseImpl {
    fn execute(&self, params: QuoteCheckoutParams) -> Result<CheckoutQuote, CheckoutError> {
        params
            .shipping
            .validate()
            .map_err(CheckoutError::Validation)?;

        let ledger = self.session.snapshot();
        if ledger.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let totals = ledger.compute_totals(self.session.policy());
        self.logger.info(&format!(
            "Checkout quote for {}: {} line items, grand total {}",
            params.shipping.city,
            ledger.len(),
            totals.grand_total
        ));

        Ok(CheckoutQuote {
            shipping: params.shipping,
            items: ledger.into_items(),
            totals,
        })
    }
}
