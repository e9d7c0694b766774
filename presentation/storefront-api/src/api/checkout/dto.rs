use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::checkout::model::{
    CardDetails, CheckoutQuote, OrderConfirmation, ShippingDetails,
};

use crate::api::cart::dto::{LineItemResponse, TotalsResponse};

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ShippingDetailsDto {
    pub name: String,
    pub email: String,
    /// Ten digits
    pub phone: String,
    pub address: String,
    pub city: String,
    /// Six digits
    pub pincode: String,
}

impl From<ShippingDetailsDto> for ShippingDetails {
    fn from(dto: ShippingDetailsDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            phone: dto.phone,
            address: dto.address,
            city: dto.city,
            pincode: dto.pincode,
        }
    }
}

impl From<ShippingDetails> for ShippingDetailsDto {
    fn from(details: ShippingDetails) -> Self {
        Self {
            name: details.name,
            email: details.email,
            phone: details.phone,
            address: details.address,
            city: details.city,
            pincode: details.pincode,
        }
    }
}

// Not Debug: carries the full card number.
#[derive(Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CardDetailsDto {
    /// 16 digits, spaces allowed
    pub number: String,
    /// MM/YY
    pub expiry: String,
    pub cvv: String,
}

impl From<CardDetailsDto> for CardDetails {
    fn from(dto: CardDetailsDto) -> Self {
        Self {
            number: dto.number,
            expiry: dto.expiry,
            cvv: dto.cvv,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub shipping: ShippingDetailsDto,
}

#[derive(Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub shipping: ShippingDetailsDto,
    pub card: CardDetailsDto,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub shipping: ShippingDetailsDto,
    pub items: Vec<LineItemResponse>,
    pub totals: TotalsResponse,
}

impl From<CheckoutQuote> for QuoteResponse {
    fn from(quote: CheckoutQuote) -> Self {
        Self {
            totals: (&quote.totals).into(),
            shipping: quote.shipping.into(),
            items: quote.items.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct OrderConfirmationResponse {
    /// ORD-<unix millis>
    pub order_id: String,
    pub payment_reference: String,
    pub placed_at: DateTime<Utc>,
    pub shipping: ShippingDetailsDto,
    pub items: Vec<LineItemResponse>,
    pub totals: TotalsResponse,
}

impl From<OrderConfirmation> for OrderConfirmationResponse {
    fn from(order: OrderConfirmation) -> Self {
        Self {
            totals: (&order.totals).into(),
            order_id: order.order_id,
            payment_reference: order.payment_reference,
            placed_at: order.placed_at,
            shipping: order.shipping.into(),
            items: order.items.into_iter().map(Into::into).collect(),
        }
    }
}
