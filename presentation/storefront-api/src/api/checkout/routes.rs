use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::checkout::use_cases::place_order::{PlaceOrderParams, PlaceOrderUseCase};
use business::domain::checkout::use_cases::quote::{QuoteCheckoutParams, QuoteCheckoutUseCase};

use crate::api::checkout::dto::{
    OrderConfirmationResponse, PlaceOrderRequest, QuoteRequest, QuoteResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CheckoutApi {
    quote_use_case: Arc<dyn QuoteCheckoutUseCase>,
    place_order_use_case: Arc<dyn PlaceOrderUseCase>,
}

impl CheckoutApi {
    pub fn new(
        quote_use_case: Arc<dyn QuoteCheckoutUseCase>,
        place_order_use_case: Arc<dyn PlaceOrderUseCase>,
    ) -> Self {
        Self {
            quote_use_case,
            place_order_use_case,
        }
    }
}

/// Checkout API
#[OpenApi]
impl CheckoutApi {
    /// Quote the order
    ///
    /// Validates the shipping details and prices the current cart.
    #[oai(path = "/checkout/quote", method = "post", tag = "ApiTags::Checkout")]
    async fn quote(&self, body: Json<QuoteRequest>) -> QuoteCheckoutResponse {
        let params = QuoteCheckoutParams {
            shipping: body.0.shipping.into(),
        };

        match self.quote_use_case.execute(params) {
            Ok(quote) => QuoteCheckoutResponse::Ok(Json(quote.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => QuoteCheckoutResponse::BadRequest(json),
                    _ => QuoteCheckoutResponse::Conflict(json),
                }
            }
        }
    }

    /// Place the order
    ///
    /// Charges the grand total once and empties the cart on success. A
    /// failed payment leaves the cart as it was.
    #[oai(path = "/checkout/orders", method = "post", tag = "ApiTags::Checkout")]
    async fn place_order(&self, body: Json<PlaceOrderRequest>) -> PlaceOrderResponse {
        let params = PlaceOrderParams {
            shipping: body.0.shipping.into(),
            card: body.0.card.into(),
        };

        match self.place_order_use_case.execute(params).await {
            Ok(order) => PlaceOrderResponse::Created(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => PlaceOrderResponse::BadRequest(json),
                    402 => PlaceOrderResponse::PaymentRequired(json),
                    409 => PlaceOrderResponse::Conflict(json),
                    _ => PlaceOrderResponse::BadGateway(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum QuoteCheckoutResponse {
    #[oai(status = 200)]
    Ok(Json<QuoteResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum PlaceOrderResponse {
    #[oai(status = 201)]
    Created(Json<OrderConfirmationResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 402)]
    PaymentRequired(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
}
