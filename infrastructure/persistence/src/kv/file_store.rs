use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use business::domain::errors::StorageError;
use business::domain::storage::KeyValueStore;
use tracing::{debug, warn};

const EXTENSION: &str = "json";
const PARTIAL_EXTENSION: &str = "json.partial";

/// Key-value store keeping one `<key>.json` file per key in a directory.
///
/// Writes go to a sibling `.partial` file first and are renamed into place, so
/// a crash mid-write leaves the previous value intact.
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    /// Opens the store, creating `root` when it does not exist yet.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            warn!(path = %root.display(), error = %e, "cannot create storage directory");
            StorageError::write()
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str, extension: &str) -> Result<PathBuf, StorageError> {
        if !is_valid_key(key) {
            warn!(key, "rejected storage key");
            return Err(StorageError::write());
        }
        Ok(self.root.join(format!("{key}.{extension}")))
    }
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key, EXTENSION)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "storage read failed");
                Err(StorageError::read())
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key, EXTENSION)?;
        let partial = self.path_for(key, PARTIAL_EXTENSION)?;

        fs::write(&partial, value)
            .and_then(|_| fs::rename(&partial, &path))
            .map_err(|e| {
                warn!(path = %path.display(), error = %e, "storage write failed");
                let _ = fs::remove_file(&partial);
                StorageError::write()
            })?;

        debug!(key, bytes = value.len(), "stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key, EXTENSION)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "storage remove failed");
                Err(StorageError::write())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn should_return_none_for_missing_key() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::open(dir.path()).unwrap();

        assert_eq!(store.get("cart").unwrap(), None);
    }

    #[test]
    fn should_overwrite_and_read_back() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::open(dir.path()).unwrap();

        store.set("cart", "[1]").unwrap();
        store.set("cart", "[2]").unwrap();

        assert_eq!(store.get("cart").unwrap().as_deref(), Some("[2]"));
        assert!(dir.path().join("cart.json").exists());
        assert!(!dir.path().join("cart.json.partial").exists());
    }

    #[test]
    fn should_survive_reopen() {
        let dir = tempdir().unwrap();
        FileKeyValueStore::open(dir.path())
            .unwrap()
            .set("profile", "{}")
            .unwrap();

        let reopened = FileKeyValueStore::open(dir.path()).unwrap();

        assert_eq!(reopened.get("profile").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn should_treat_removing_missing_key_as_success() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::open(dir.path()).unwrap();
        store.set("cart", "[]").unwrap();

        store.remove("cart").unwrap();
        store.remove("cart").unwrap();

        assert_eq!(store.get("cart").unwrap(), None);
    }

    #[test]
    fn should_create_missing_root() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        let store = FileKeyValueStore::open(&nested).unwrap();

        assert!(store.root().is_dir());
    }

    #[test]
    fn should_reject_path_like_keys() {
        let dir = tempdir().unwrap();
        let store = FileKeyValueStore::open(dir.path()).unwrap();

        assert!(matches!(store.set("../cart", "[]"), Err(StorageError::Write)));
        assert!(store.get("").is_err());
    }
}
