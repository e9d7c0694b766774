use std::time::Duration;

use super::env::{ConfigError, parse_or, process_env};

/// Configuration for the simulated payment gateway.
pub struct PaymentConfig {
    pub processing_delay: Duration,
}

impl PaymentConfig {
    /// - PAYMENT_DELAY_MS: simulated processing time in milliseconds (default: 2000)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let millis: u64 = parse_or(&lookup, "PAYMENT_DELAY_MS", 2000)?;
        Ok(Self {
            processing_delay: Duration::from_millis(millis),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env::tests::lookup_from;

    #[test]
    fn should_parse_delay_in_milliseconds() {
        let config = PaymentConfig::from_lookup(lookup_from(&[("PAYMENT_DELAY_MS", "250")])).unwrap();

        assert_eq!(config.processing_delay, Duration::from_millis(250));
    }
}
