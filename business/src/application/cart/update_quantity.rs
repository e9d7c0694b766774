use std::sync::Arc;

use super::session::CartSession;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::QuantityUpdate;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartItemQuantityParams, UpdateCartItemQuantityResult, UpdateCartItemQuantityUseCase,
};
use crate::domain::logger::Logger;

pub struct UpdateCartItemQuantityUseCaseImpl {
    pub session: Arc<CartSession>,
    pub logger: Arc<dyn Logger>,
}

impl UpdateCartItemQuantityUseCase for UpdateCartItemQuantityUseCaseImpl {
    fn execute(
        &self,
        params: UpdateCartItemQuantityParams,
    ) -> Result<UpdateCartItemQuantityResult, CartError> {
        let (outcome, cart) = self
            .session
            .mutate(|ledger| ledger.update_quantity(&params.product_key, params.quantity));

        match outcome {
            QuantityUpdate::Updated => self.logger.info(&format!(
                "Set quantity of {} to {}",
                params.product_key, params.quantity
            )),
            QuantityUpdate::Removed => self
                .logger
                .info(&format!("Removed {} from cart", params.product_key)),
            QuantityUpdate::NotFound => self.logger.debug(&format!(
                "Quantity update for {} ignored, not in cart",
                params.product_key
            )),
        }

        Ok(UpdateCartItemQuantityResult { outcome, cart })
    }
}
