use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::cart::ledger::CartLedger;
use crate::domain::cart::mirror::CartMirror;
use crate::domain::cart::model::CartSummary;
use crate::domain::cart::totals::PricingPolicy;
use crate::domain::logger::Logger;

/// The single owner of the live cart.
///
/// Every mutation runs under the lock and writes the snapshot before the lock
/// is released, so the stored snapshot always matches some state the cart
/// actually went through.
pub struct CartSession {
    ledger: Mutex<CartLedger>,
    mirror: CartMirror,
    policy: PricingPolicy,
    logger: Arc<dyn Logger>,
}

impl CartSession {
    /// Builds the session from whatever the mirror holds.
    pub fn hydrate(mirror: CartMirror, policy: PricingPolicy, logger: Arc<dyn Logger>) -> Self {
        let ledger = mirror.hydrate();
        logger.info(&format!(
            "Cart session ready with {} line items ({} shipping)",
            ledger.len(),
            policy.shipping_rule
        ));
        Self {
            ledger: Mutex::new(ledger),
            mirror,
            policy,
            logger,
        }
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    pub fn summary(&self) -> CartSummary {
        self.lock().summarize(&self.policy)
    }

    /// Copy of the current ledger, for callers that price it outside the lock.
    pub fn snapshot(&self) -> CartLedger {
        self.lock().clone()
    }

    /// Applies `change` to the ledger, persists the result and returns the
    /// closure's value along with the new summary.
    pub fn mutate<T>(&self, change: impl FnOnce(&mut CartLedger) -> T) -> (T, CartSummary) {
        let mut ledger = self.lock();
        let outcome = change(&mut ledger);
        self.mirror.persist(&ledger);
        (outcome, ledger.summarize(&self.policy))
    }

    fn lock(&self) -> MutexGuard<'_, CartLedger> {
        // A panic inside `mutate` cannot leave the ledger half-updated: every
        // ledger operation either completes or does nothing.
        self.ledger.lock().unwrap_or_else(|poisoned| {
            self.logger.warn("Cart lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }
}
