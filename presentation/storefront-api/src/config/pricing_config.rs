use bigdecimal::{BigDecimal, Signed};
use business::domain::cart::totals::{PricingPolicy, ShippingRule};

use super::env::{ConfigError, parse_or, process_env};

/// Loads the cart pricing policy.
///
/// Environment variables:
/// - GST_PERCENT (default: 18)
/// - DELIVERY_THRESHOLD: subtotal from which delivery is free (default: 500)
/// - DELIVERY_CHARGE (default: 40)
/// - SHIPPING_RULE: "threshold" or "flat" (default: "threshold")
pub fn pricing_from_env() -> Result<PricingPolicy, ConfigError> {
    pricing_from_lookup(process_env)
}

pub fn pricing_from_lookup(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<PricingPolicy, ConfigError> {
    let defaults = PricingPolicy::default();

    let gst_percent = non_negative(
        "GST_PERCENT",
        parse_or(&lookup, "GST_PERCENT", defaults.gst_percent)?,
    )?;
    let delivery_threshold = non_negative(
        "DELIVERY_THRESHOLD",
        parse_or(&lookup, "DELIVERY_THRESHOLD", defaults.delivery_threshold)?,
    )?;
    let delivery_charge = non_negative(
        "DELIVERY_CHARGE",
        parse_or(&lookup, "DELIVERY_CHARGE", defaults.delivery_charge)?,
    )?;
    let shipping_rule: ShippingRule = parse_or(&lookup, "SHIPPING_RULE", defaults.shipping_rule)?;

    Ok(match shipping_rule {
        ShippingRule::Threshold => {
            PricingPolicy::new(gst_percent, delivery_threshold, delivery_charge)
        }
        ShippingRule::Flat => PricingPolicy::flat(gst_percent, delivery_charge),
    })
}

fn non_negative(var: &'static str, value: BigDecimal) -> Result<BigDecimal, ConfigError> {
    if value.is_negative() {
        return Err(ConfigError::InvalidValue {
            var,
            value: value.to_string(),
            reason: "must not be negative".to_string(),
        });
    }
    Ok(value)
}
