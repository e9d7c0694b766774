use std::fmt::Display;
use std::str::FromStr;

/// Raised when an environment variable is set but cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value {value:?}: {reason}")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Reads a variable through `lookup`, falling back to `default` when unset or blank.
pub fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(var) {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidValue {
                    var,
                    value: raw.clone(),
                    reason: e.to_string(),
                })
        }
        _ => Ok(default),
    }
}

pub fn process_env(var: &str) -> Option<String> {
    std::env::var(var).ok()
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;

    use super::*;

    pub(crate) fn lookup_from(
        pairs: &[(&str, &str)],
    ) -> impl Fn(&str) -> Option<String> + use<> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn should_use_default_when_variable_is_unset_or_blank() {
        let lookup = lookup_from(&[("PAYMENT_DELAY_MS", "  ")]);

        assert_eq!(parse_or(&lookup, "PAYMENT_DELAY_MS", 2000u64).unwrap(), 2000);
        assert_eq!(parse_or(&lookup, "SERVICE_PORT", 8080u16).unwrap(), 8080);
    }

    #[test]
    fn should_name_the_variable_in_parse_errors() {
        let lookup = lookup_from(&[("PAYMENT_DELAY_MS", "soon")]);

        let err = parse_or(&lookup, "PAYMENT_DELAY_MS", 2000u64).unwrap_err();

        assert!(err.to_string().starts_with("PAYMENT_DELAY_MS has an invalid value \"soon\""));
    }
}
