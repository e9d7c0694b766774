use std::sync::Arc;

use super::errors::SnapshotError;
use super::ledger::CartLedger;
use super::model::LineItem;
use crate::domain::logger::Logger;
use crate::domain::storage::{CART_SNAPSHOT_KEY, KeyValueStore};

/// Keeps a serialized snapshot of the cart in a key-value store.
///
/// Reads fall back to an empty cart and writes are best-effort: the cart must
/// stay usable when the store is corrupt, full or unavailable.
pub struct CartMirror {
    store: Arc<dyn KeyValueStore>,
    logger: Arc<dyn Logger>,
    key: String,
}

impl CartMirror {
    pub fn new(store: Arc<dyn KeyValueStore>, logger: Arc<dyn Logger>) -> Self {
        Self::with_key(store, logger, CART_SNAPSHOT_KEY)
    }

    pub fn with_key(
        store: Arc<dyn KeyValueStore>,
        logger: Arc<dyn Logger>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            store,
            logger,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Restores the last snapshot, or an empty cart when there is none or it is unreadable.
    pub fn hydrate(&self) -> CartLedger {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                self.logger.debug("No cart snapshot found, starting empty");
                return CartLedger::new();
            }
            Err(e) => {
                self.logger
                    .warn(&format!("Failed to read cart snapshot: {}", e));
                return CartLedger::new();
            }
        };

        match decode(&raw) {
            Ok(ledger) => {
                self.logger.info(&format!(
                    "Restored cart snapshot with {} line items",
                    ledger.len()
                ));
                ledger
            }
            Err(e) => {
                self.logger
                    .warn(&format!("Discarding corrupt cart snapshot: {}", e));
                self.discard();
                CartLedger::new()
            }
        }
    }

    /// Overwrites the snapshot with the full current collection. Failures are logged only.
    pub fn persist(&self, ledger: &CartLedger) {
        let raw = match encode(ledger) {
            Ok(raw) => raw,
            Err(e) => {
                self.logger
                    .error(&format!("Failed to serialize cart snapshot: {}", e));
                return;
            }
        };

        if let Err(e) = self.store.set(&self.key, &raw) {
            self.logger
                .warn(&format!("Failed to write cart snapshot: {}", e));
        }
    }

    pub fn discard(&self) {
        if let Err(e) = self.store.remove(&self.key) {
            self.logger
                .warn(&format!("Failed to remove cart snapshot: {}", e));
        }
    }
}

pub fn encode(ledger: &CartLedger) -> Result<String, serde_json::Error> {
    serde_json::to_string(ledger.items())
}

pub fn decode(raw: &str) -> Result<CartLedger, SnapshotError> {
    let items: Vec<LineItem> = serde_json::from_str(raw)?;
    CartLedger::from_items(items).map_err(SnapshotError::Invalid)
}
