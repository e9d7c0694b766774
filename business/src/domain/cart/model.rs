use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::totals::OrderTotals;
use crate::domain::shared::value_objects::ProductKey;

/// One product entry in the cart with its quantity.
///
/// Field names follow the stored snapshot format (camelCase). Unknown fields
/// make a snapshot unreadable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LineItem {
    pub product_key: ProductKey,
    pub title: String,
    pub unit_price: BigDecimal,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LineItem {
    pub fn line_total(&self) -> BigDecimal {
        &self.unit_price * BigDecimal::from(self.quantity)
    }
}

/// What the ledger needs to know about a product to put it in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartProduct {
    pub product_key: ProductKey,
    pub title: String,
    pub unit_price: BigDecimal,
    pub image_ref: Option<String>,
    pub description: Option<String>,
}

impl CartProduct {
    pub fn new(product_key: ProductKey, title: impl Into<String>, unit_price: BigDecimal) -> Self {
        Self {
            product_key,
            title: title.into(),
            unit_price,
            image_ref: None,
            description: None,
        }
    }

    pub(crate) fn into_line_item(self, quantity: u32) -> LineItem {
        LineItem {
            product_key: self.product_key,
            title: self.title,
            unit_price: self.unit_price,
            quantity,
            image_ref: self.image_ref,
            description: self.description,
        }
    }
}

/// Outcome of a quantity update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUpdate {
    Updated,
    Removed,
    NotFound,
}

/// Cart state handed to the presentation layer after every operation.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    pub items: Vec<LineItem>,
    /// Sum of quantities, shown as the cart badge.
    pub item_count: u64,
    pub totals: OrderTotals,
    /// How much more the customer must spend before shipping is waived.
    pub amount_to_free_shipping: Option<BigDecimal>,
}
