use std::sync::Arc;

use super::session::CartSession;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSummary;
use crate::domain::cart::use_cases::get::GetCartUseCase;

pub struct GetCartUseCaseImpl {
    pub session: Arc<CartSession>,
}

impl GetCartUseCase for GetCartUseCaseImpl {
    fn execute(&self) -> Result<CartSummary, CartError> {
        Ok(self.session.summary())
    }
}
