use serde::{Deserialize, Serialize};

/// Identifies a distinct product in the catalog and in the cart.
/// The storefront uses the product title as the key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductKey(String);

impl ProductKey {
    /// Creates a new ProductKey from any type that can be converted into a String.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for ProductKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
