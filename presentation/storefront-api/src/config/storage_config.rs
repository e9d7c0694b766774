use std::path::PathBuf;

use super::env::process_env;

/// Data directory value that keeps every document in memory instead.
pub const IN_MEMORY: &str = ":memory:";

/// Where the key-value mirror keeps its documents.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    /// - STOREFRONT_DATA_DIR: directory for `<key>.json` documents (default: ".storefront").
    ///   `:memory:` keeps nothing across restarts.
    pub fn from_env() -> Self {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = lookup("STOREFRONT_DATA_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or_else(|| ".storefront".to_string());
        Self {
            data_dir: PathBuf::from(data_dir),
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.data_dir.as_os_str() == IN_MEMORY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env::tests::lookup_from;

    #[test]
    fn should_default_to_hidden_directory() {
        let config = StorageConfig::from_lookup(lookup_from(&[]));

        assert_eq!(config.data_dir, PathBuf::from(".storefront"));
    }

    #[test]
    fn should_read_data_dir_from_environment() {
        let config = StorageConfig::from_lookup(lookup_from(&[(
            "STOREFRONT_DATA_DIR",
            "/var/lib/storefront",
        )]));

        assert_eq!(config.data_dir, PathBuf::from("/var/lib/storefront"));
        assert!(!config.is_in_memory());
    }

    #[test]
    fn should_recognise_in_memory_marker() {
        let config = StorageConfig::from_lookup(lookup_from(&[("STOREFRONT_DATA_DIR", ":memory:")]));

        assert!(config.is_in_memory());
    }
}
