use std::str::FromStr;

use bigdecimal::BigDecimal;
use business::domain::cart::totals::round_currency;

/// Renders an amount with two decimals, as shown to shoppers.
pub fn format_amount(amount: &BigDecimal) -> String {
    round_currency(amount).to_string()
}

pub fn parse_amount(raw: &str) -> Option<BigDecimal> {
    BigDecimal::from_str(raw.trim()).ok()
}
