use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::cart::model::LineItem;
use crate::domain::cart::totals::OrderTotals;
use crate::domain::shared::validation::{
    FieldErrors, is_valid_email, is_valid_phone, is_valid_pincode,
};

/// Where the order is delivered. Every field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub pincode: String,
}

impl ShippingDetails {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
            ("city", &self.city),
            ("pincode", &self.pincode),
        ];
        for (field, value) in required {
            errors.require(field, value, "Please fill all required fields.");
        }

        if !errors.contains("email") && !is_valid_email(&self.email) {
            errors.add("email", "Please enter a valid email address.");
        }
        if !errors.contains("phone") && !is_valid_phone(&self.phone) {
            errors.add("phone", "Please enter a valid 10-digit phone number.");
        }
        if !errors.contains("pincode") && !is_valid_pincode(&self.pincode) {
            errors.add("pincode", "Please enter a valid 6-digit pincode.");
        }

        errors.into_result()
    }
}

#[derive(Clone, PartialEq)]
pub struct CardDetails {
    /// Digits, optionally grouped with spaces.
    pub number: String,
    /// `MM/YY`.
    pub expiry: String,
    pub cvv: String,
}

impl CardDetails {
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        let digits = self.digits();
        if digits.len() != 16 || !digits.chars().all(|c| c.is_ascii_digit()) {
            errors.add("number", "Please enter a valid 16-digit card number");
        }
        if !is_valid_expiry(self.expiry.trim()) {
            errors.add("expiry", "Please enter a valid expiry date (MM/YY)");
        }
        let cvv = self.cvv.trim();
        if cvv.len() != 3 || !cvv.chars().all(|c| c.is_ascii_digit()) {
            errors.add("cvv", "Please enter a valid 3-digit CVV");
        }

        errors.into_result()
    }

    pub fn digits(&self) -> String {
        self.number.chars().filter(|c| !c.is_whitespace()).collect()
    }

    /// Last four digits, the only part of the number that is ever logged.
    pub fn last_four(&self) -> String {
        let digits = self.digits();
        digits
            .get(digits.len().saturating_sub(4)..)
            .unwrap_or_default()
            .to_string()
    }
}

impl std::fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardDetails")
            .field("number", &format!("**** {}", self.last_four()))
            .field("expiry", &self.expiry)
            .field("cvv", &"***")
            .finish()
    }
}

fn is_valid_expiry(expiry: &str) -> bool {
    let Some((month, year)) = expiry.split_once('/') else {
        return false;
    };
    month.len() == 2
        && year.len() == 2
        && month.chars().chain(year.chars()).all(|c| c.is_ascii_digit())
        && matches!(month.parse::<u8>(), Ok(1..=12))
}

/// Priced view of the cart for the shipping step.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutQuote {
    pub shipping: ShippingDetails,
    pub items: Vec<LineItem>,
    pub totals: OrderTotals,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    /// `ORD-<unix millis>`.
    pub order_id: String,
    pub payment_reference: String,
    pub placed_at: DateTime<Utc>,
    pub shipping: ShippingDetails,
    pub items: Vec<LineItem>,
    pub totals: OrderTotals,
}

pub fn order_id_at(placed_at: DateTime<Utc>) -> String {
    format!("ORD-{}", placed_at.timestamp_millis())
}

/// What the payment gateway is asked to collect.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRequest {
    pub amount: BigDecimal,
    pub card: CardDetails,
    pub customer_email: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentReceipt {
    pub reference: String,
}
