use bigdecimal::{BigDecimal, RoundingMode};
use num_traits::Zero;

use super::model::LineItem;

/// How the delivery charge is applied to a non-empty cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShippingRule {
    /// Charge delivery only while the subtotal is below the threshold.
    #[default]
    Threshold,
    /// Charge delivery on every non-empty cart.
    Flat,
}

impl std::fmt::Display for ShippingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShippingRule::Threshold => write!(f, "threshold"),
            ShippingRule::Flat => write!(f, "flat"),
        }
    }
}

impl std::str::FromStr for ShippingRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "threshold" => Ok(ShippingRule::Threshold),
            "flat" => Ok(ShippingRule::Flat),
            _ => Err(format!("Invalid shipping rule: {}", s)),
        }
    }
}

/// Tax and delivery parameters used to price a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingPolicy {
    pub gst_percent: BigDecimal,
    pub delivery_threshold: BigDecimal,
    pub delivery_charge: BigDecimal,
    pub shipping_rule: ShippingRule,
}

impl PricingPolicy {
    pub fn new(
        gst_percent: BigDecimal,
        delivery_threshold: BigDecimal,
        delivery_charge: BigDecimal,
    ) -> Self {
        Self {
            gst_percent,
            delivery_threshold,
            delivery_charge,
            shipping_rule: ShippingRule::Threshold,
        }
    }

    pub fn flat(gst_percent: BigDecimal, delivery_charge: BigDecimal) -> Self {
        Self {
            gst_percent,
            delivery_threshold: BigDecimal::zero(),
            delivery_charge,
            shipping_rule: ShippingRule::Flat,
        }
    }

    pub fn shipping_charge(&self, subtotal: &BigDecimal, cart_is_empty: bool) -> BigDecimal {
        if cart_is_empty {
            return BigDecimal::zero();
        }
        match self.shipping_rule {
            ShippingRule::Flat => self.delivery_charge.clone(),
            ShippingRule::Threshold if *subtotal < self.delivery_threshold => {
                self.delivery_charge.clone()
            }
            ShippingRule::Threshold => BigDecimal::zero(),
        }
    }

    /// Remaining spend before delivery becomes free, when that can happen at all.
    pub fn amount_to_free_shipping(
        &self,
        subtotal: &BigDecimal,
        cart_is_empty: bool,
    ) -> Option<BigDecimal> {
        if cart_is_empty || self.shipping_rule == ShippingRule::Flat {
            return None;
        }
        if *subtotal < self.delivery_threshold {
            Some(&self.delivery_threshold - subtotal)
        } else {
            None
        }
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self::new(
            BigDecimal::from(18),
            BigDecimal::from(500),
            BigDecimal::from(40),
        )
    }
}

/// Derived totals of a cart at one point in time. Never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderTotals {
    pub subtotal: BigDecimal,
    pub tax: BigDecimal,
    pub shipping_charge: BigDecimal,
    pub grand_total: BigDecimal,
}

impl OrderTotals {
    pub fn zero() -> Self {
        Self {
            subtotal: BigDecimal::zero(),
            tax: BigDecimal::zero(),
            shipping_charge: BigDecimal::zero(),
            grand_total: BigDecimal::zero(),
        }
    }

    pub fn compute(items: &[LineItem], policy: &PricingPolicy) -> Self {
        let subtotal = items
            .iter()
            .fold(BigDecimal::zero(), |acc, item| acc + item.line_total());
        let tax = round_currency(&(&subtotal * &policy.gst_percent / BigDecimal::from(100)));
        let shipping_charge = policy.shipping_charge(&subtotal, items.is_empty());
        let grand_total = &subtotal + &tax + &shipping_charge;

        Self {
            subtotal,
            tax,
            shipping_charge,
            grand_total,
        }
    }
}

/// Rounds an amount to two decimal places, half-up.
pub fn round_currency(amount: &BigDecimal) -> BigDecimal {
    amount.with_scale_round(2, RoundingMode::HalfUp)
}
