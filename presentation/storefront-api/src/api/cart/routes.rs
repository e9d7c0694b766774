use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::clear::ClearCartUseCase;
use business::domain::cart::use_cases::get::GetCartUseCase;
use business::domain::cart::use_cases::remove_item::{
    RemoveCartItemParams, RemoveCartItemUseCase,
};
use business::domain::cart::use_cases::update_quantity::{
    UpdateCartItemQuantityParams, UpdateCartItemQuantityUseCase,
};
use business::domain::shared::value_objects::ProductKey;

use crate::api::cart::dto::{
    AddCartItemRequest, CartResponse, UpdateQuantityRequest, UpdateQuantityResponse, outcome_name,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_use_case: Arc<dyn GetCartUseCase>,
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    update_quantity_use_case: Arc<dyn UpdateCartItemQuantityUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
}

impl CartApi {
    pub fn new(
        get_use_case: Arc<dyn GetCartUseCase>,
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        update_quantity_use_case: Arc<dyn UpdateCartItemQuantityUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
    ) -> Self {
        Self {
            get_use_case,
            add_item_use_case,
            update_quantity_use_case,
            remove_item_use_case,
            clear_use_case,
        }
    }
}

/// Shopping cart API
///
/// Every response carries the whole cart with its totals, so the UI never
/// prices anything itself.
#[OpenApi]
impl CartApi {
    /// Get the cart
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get(&self) -> CartResponseEnvelope {
        match self.get_use_case.execute() {
            Ok(summary) => CartResponseEnvelope::Ok(Json(summary.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CartResponseEnvelope::InternalError(json)
            }
        }
    }

    /// Add a product to the cart
    ///
    /// Adding a product already in the cart increases its quantity.
    #[oai(path = "/cart/items", method = "post", tag = "ApiTags::Cart")]
    async fn add_item(&self, body: Json<AddCartItemRequest>) -> AddCartItemResponse {
        let params = AddCartItemParams {
            product_key: ProductKey::new(body.0.product_key),
            quantity: body.0.quantity,
        };

        match self.add_item_use_case.execute(params) {
            Ok(summary) => AddCartItemResponse::Ok(Json(summary.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddCartItemResponse::BadRequest(json),
                    404 => AddCartItemResponse::NotFound(json),
                    _ => AddCartItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Set a line's quantity
    ///
    /// A quantity of zero or less removes the line. Unknown products are
    /// ignored and reported as `not_found`.
    #[oai(path = "/cart/items/:key", method = "put", tag = "ApiTags::Cart")]
    async fn update_quantity(
        &self,
        key: Path<String>,
        body: Json<UpdateQuantityRequest>,
    ) -> UpdateQuantityEnvelope {
        let params = UpdateCartItemQuantityParams {
            product_key: ProductKey::new(key.0),
            quantity: body.0.quantity,
        };

        match self.update_quantity_use_case.execute(params) {
            Ok(result) => UpdateQuantityEnvelope::Ok(Json(UpdateQuantityResponse {
                outcome: outcome_name(result.outcome).to_string(),
                cart: result.cart.into(),
            })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                UpdateQuantityEnvelope::InternalError(json)
            }
        }
    }

    /// Remove a line
    ///
    /// Removing a product that is not in the cart changes nothing.
    #[oai(path = "/cart/items/:key", method = "delete", tag = "ApiTags::Cart")]
    async fn remove_item(&self, key: Path<String>) -> CartResponseEnvelope {
        let params = RemoveCartItemParams {
            product_key: ProductKey::new(key.0),
        };

        match self.remove_item_use_case.execute(params) {
            Ok(summary) => CartResponseEnvelope::Ok(Json(summary.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CartResponseEnvelope::InternalError(json)
            }
        }
    }

    /// Empty the cart
    #[oai(path = "/cart", method = "delete", tag = "ApiTags::Cart")]
    async fn clear(&self) -> CartResponseEnvelope {
        match self.clear_use_case.execute() {
            Ok(summary) => CartResponseEnvelope::Ok(Json(summary.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CartResponseEnvelope::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartResponseEnvelope {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddCartItemResponse {
    #[oai(status = 200)]
    Ok(Json<CartResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateQuantityEnvelope {
    #[oai(status = 200)]
    Ok(Json<UpdateQuantityResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
