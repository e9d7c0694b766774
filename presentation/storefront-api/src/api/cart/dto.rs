use poem_openapi::Object;

use business::domain::cart::model::{CartSummary, LineItem, QuantityUpdate};
use business::domain::cart::totals::OrderTotals;

use crate::api::money::format_amount;

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AddCartItemRequest {
    /// Catalog product key
    pub product_key: String,
    /// Units to add (default: 1)
    #[oai(default = "default_quantity")]
    pub quantity: u32,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateQuantityRequest {
    /// New quantity. Zero or less removes the line.
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct LineItemResponse {
    pub product_key: String,
    pub title: String,
    pub unit_price: String,
    pub quantity: u32,
    pub line_total: String,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

impl From<LineItem> for LineItemResponse {
    fn from(item: LineItem) -> Self {
        Self {
            line_total: format_amount(&item.line_total()),
            product_key: item.product_key.to_string(),
            title: item.title,
            unit_price: format_amount(&item.unit_price),
            quantity: item.quantity,
            image: item.image_ref,
            description: item.description,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct TotalsResponse {
    pub subtotal: String,
    /// GST on the subtotal
    pub tax: String,
    pub shipping_charge: String,
    pub grand_total: String,
}

impl From<&OrderTotals> for TotalsResponse {
    fn from(totals: &OrderTotals) -> Self {
        Self {
            subtotal: format_amount(&totals.subtotal),
            tax: format_amount(&totals.tax),
            shipping_charge: format_amount(&totals.shipping_charge),
            grand_total: format_amount(&totals.grand_total),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CartResponse {
    /// Line items in insertion order
    pub items: Vec<LineItemResponse>,
    /// Sum of quantities, for the header badge
    pub item_count: u64,
    pub totals: TotalsResponse,
    /// How much more to spend for free delivery
    #[oai(skip_serializing_if_is_none)]
    pub amount_to_free_shipping: Option<String>,
}

impl From<CartSummary> for CartResponse {
    fn from(summary: CartSummary) -> Self {
        Self {
            totals: (&summary.totals).into(),
            items: summary.items.into_iter().map(Into::into).collect(),
            item_count: summary.item_count,
            amount_to_free_shipping: summary.amount_to_free_shipping.as_ref().map(format_amount),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateQuantityResponse {
    /// updated, removed or not_found
    pub outcome: String,
    pub cart: CartResponse,
}

pub fn outcome_name(outcome: QuantityUpdate) -> &'static str {
    match outcome {
        QuantityUpdate::Updated => "updated",
        QuantityUpdate::Removed => "removed",
        QuantityUpdate::NotFound => "not_found",
    }
}
