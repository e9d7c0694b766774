use std::collections::HashSet;

use bigdecimal::BigDecimal;
use num_traits::Zero;

use super::errors::CartError;
use super::model::{CartProduct, CartSummary, LineItem, QuantityUpdate};
use super::totals::{OrderTotals, PricingPolicy};
use crate::domain::shared::value_objects::ProductKey;

/// Ordered, key-unique collection of line items.
///
/// Invariants:
/// - at most one line item per product key
/// - every quantity is at least 1
/// - insertion order is display order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartLedger {
    items: Vec<LineItem>,
}

impl CartLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a ledger from stored items, rejecting anything that breaks the invariants.
    pub fn from_items(items: Vec<LineItem>) -> Result<Self, CartError> {
        let mut seen = HashSet::new();
        for item in &items {
            if item.product_key.is_blank() {
                return Err(CartError::ProductKeyEmpty);
            }
            if item.quantity == 0 {
                return Err(CartError::InvalidQuantity);
            }
            if item.unit_price < BigDecimal::zero() {
                return Err(CartError::NegativePrice);
            }
            if !seen.insert(item.product_key.clone()) {
                return Err(CartError::DuplicateProduct);
            }
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<LineItem> {
        self.items
    }

    pub fn get(&self, key: &ProductKey) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.product_key == key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all line items.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Adds `quantity` units of `product`, merging with an existing line for the same key.
    /// A zero quantity is ignored.
    pub fn add_item(&mut self, product: CartProduct, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self
            .items
            .iter_mut()
            .find(|item| item.product_key == product.product_key)
        {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(quantity),
            None => self.items.push(product.into_line_item(quantity)),
        }
    }

    /// Sets the quantity of a line. Zero or negative removes the line.
    pub fn update_quantity(&mut self, key: &ProductKey, new_quantity: i64) -> QuantityUpdate {
        let Some(index) = self.position(key) else {
            return QuantityUpdate::NotFound;
        };
        if new_quantity <= 0 {
            self.items.remove(index);
            return QuantityUpdate::Removed;
        }
        self.items[index].quantity = u32::try_from(new_quantity).unwrap_or(u32::MAX);
        QuantityUpdate::Updated
    }

    /// Removes the line for `key`. Returns whether something was removed.
    pub fn remove_item(&mut self, key: &ProductKey) -> bool {
        match self.position(key) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Takes away the units of an order that has been paid for.
    /// Units added since `charged` was taken stay in the cart.
    pub fn settle(&mut self, charged: &[LineItem]) {
        for line in charged {
            if let Some(current) = self.get(&line.product_key) {
                let remaining = i64::from(current.quantity) - i64::from(line.quantity);
                self.update_quantity(&line.product_key, remaining);
            }
        }
    }

    pub fn compute_totals(&self, policy: &PricingPolicy) -> OrderTotals {
        OrderTotals::compute(&self.items, policy)
    }

    pub fn summarize(&self, policy: &PricingPolicy) -> CartSummary {
        let totals = self.compute_totals(policy);
        let amount_to_free_shipping =
            policy.amount_to_free_shipping(&totals.subtotal, self.is_empty());
        CartSummary {
            items: self.items.clone(),
            item_count: self.item_count(),
            totals,
            amount_to_free_shipping,
        }
    }

    fn position(&self, key: &ProductKey) -> Option<usize> {
        self.items.iter().position(|item| &item.product_key == key)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use proptest::prelude::*;

    use super::*;

    fn product(key: &str, price: &str) -> CartProduct {
        CartProduct::new(
            ProductKey::new(key),
            key,
            BigDecimal::from_str(price).unwrap(),
        )
    }

    fn guava_and_rice() -> CartLedger {
        let mut ledger = CartLedger::new();
        ledger.add_item(product("Guava", "100"), 2);
        ledger.add_item(product("Rice", "60"), 1);
        ledger
    }

    #[test]
    fn should_merge_repeated_adds_into_one_line() {
        let mut ledger = CartLedger::new();

        ledger.add_item(product("Guava", "100"), 1);
        ledger.add_item(product("Guava", "100"), 1);

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get(&ProductKey::new("Guava")).unwrap().quantity, 2);
    }

    #[test]
    fn should_append_new_products_at_the_end() {
        let mut ledger = guava_and_rice();

        ledger.add_item(product("Onion", "90"), 3);

        let keys: Vec<&str> = ledger
            .items()
            .iter()
            .map(|i| i.product_key.as_str())
            .collect();
        assert_eq!(keys, vec!["Guava", "Rice", "Onion"]);
    }

    #[test]
    fn should_ignore_zero_quantity_add() {
        let mut ledger = CartLedger::new();

        ledger.add_item(product("Carrot", "100"), 0);

        assert!(ledger.is_empty());
    }

    #[test]
    fn should_set_quantity_when_positive() {
        let mut ledger = guava_and_rice();

        let outcome = ledger.update_quantity(&ProductKey::new("Rice"), 5);

        assert_eq!(outcome, QuantityUpdate::Updated);
        assert_eq!(ledger.get(&ProductKey::new("Rice")).unwrap().quantity, 5);
    }

    #[test]
    fn should_remove_line_when_quantity_goes_negative() {
        let mut ledger = guava_and_rice();

        let outcome = ledger.update_quantity(&ProductKey::new("Rice"), -1);

        assert_eq!(outcome, QuantityUpdate::Removed);
        assert_eq!(ledger.len(), 1);
        assert!(ledger.get(&ProductKey::new("Rice")).is_none());
    }

    #[test]
    fn should_report_not_found_for_unknown_key() {
        let mut ledger = guava_and_rice();

        let outcome = ledger.update_quantity(&ProductKey::new("Mango"), 3);

        assert_eq!(outcome, QuantityUpdate::NotFound);
        assert_eq!(ledger, guava_and_rice());
    }

    #[test]
    fn should_treat_remove_of_absent_key_as_no_op() {
        let mut ledger = guava_and_rice();

        assert!(ledger.remove_item(&ProductKey::new("Guava")));
        assert!(!ledger.remove_item(&ProductKey::new("Guava")));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn should_count_units_across_lines() {
        assert_eq!(guava_and_rice().item_count(), 3);
    }

    #[test]
    fn should_reject_duplicate_keys_when_rebuilding() {
        let items = guava_and_rice().into_items();
        let mut doubled = items.clone();
        doubled.extend(items);

        let result = CartLedger::from_items(doubled);

        assert!(matches!(result, Err(CartError::DuplicateProduct)));
    }

    #[test]
    fn should_reject_zero_quantity_when_rebuilding() {
        let mut items = guava_and_rice().into_items();
        items[0].quantity = 0;

        assert!(matches!(
            CartLedger::from_items(items),
            Err(CartError::InvalidQuantity)
        ));
    }

    #[test]
    fn should_reject_negative_price_when_rebuilding() {
        let mut items = guava_and_rice().into_items();
        items[1].unit_price = BigDecimal::from(-5);

        assert!(matches!(
            CartLedger::from_items(items),
            Err(CartError::NegativePrice)
        ));
    }

    #[test]
    fn should_zero_totals_after_clear() {
        let mut ledger = guava_and_rice();

        ledger.clear();
        ledger.clear();

        assert_eq!(
            ledger.compute_totals(&PricingPolicy::default()),
            OrderTotals::zero()
        );
    }

    #[test]
    fn should_settle_only_the_charged_units() {
        let charged = guava_and_rice();
        let mut ledger = charged.clone();
        ledger.add_item(product("Guava", "100"), 1);
        ledger.add_item(product("Onion", "90"), 2);

        ledger.settle(charged.items());

        let remaining: Vec<(&str, u32)> = ledger
            .items()
            .iter()
            .map(|item| (item.title.as_str(), item.quantity))
            .collect();
        assert_eq!(remaining, vec![("Guava", 1), ("Onion", 2)]);
    }

    #[test]
    fn should_settle_to_empty_when_cart_unchanged() {
        let mut ledger = guava_and_rice();
        let charged = ledger.clone();

        ledger.settle(charged.items());

        assert!(ledger.is_empty());
    }

    #[test]
    fn should_summarize_badge_count_and_free_shipping_gap() {
        let summary = guava_and_rice().summarize(&PricingPolicy::default());

        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.items.len(), 2);
        assert_eq!(summary.totals.subtotal, BigDecimal::from(260));
        assert_eq!(summary.amount_to_free_shipping, Some(BigDecimal::from(240)));
    }

    fn key_strategy() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["Guava", "Rice", "Onion", "Carrot"]).prop_map(String::from)
    }

    proptest! {
        #[test]
        fn repeated_adds_sum_quantities(quantities in prop::collection::vec(1u32..50, 1..20)) {
            let mut ledger = CartLedger::new();
            for quantity in &quantities {
                ledger.add_item(product("Guava", "100"), *quantity);
            }

            prop_assert_eq!(ledger.len(), 1);
            let total: u32 = quantities.iter().sum();
            prop_assert_eq!(ledger.get(&ProductKey::new("Guava")).unwrap().quantity, total);
        }

        #[test]
        fn update_to_zero_matches_remove(
            adds in prop::collection::vec((key_strategy(), 1u32..10), 1..12),
            target in key_strategy(),
        ) {
            let mut ledger = CartLedger::new();
            for (key, quantity) in adds {
                ledger.add_item(product(&key, "10"), quantity);
            }
            let key = ProductKey::new(target);
            prop_assume!(ledger.get(&key).is_some());

            let mut updated = ledger.clone();
            updated.update_quantity(&key, 0);
            let mut removed = ledger.clone();
            removed.remove_item(&key);

            prop_assert_eq!(updated, removed);
        }

        #[test]
        fn remove_is_idempotent(
            adds in prop::collection::vec((key_strategy(), 1u32..10), 0..12),
            target in key_strategy(),
        ) {
            let mut ledger = CartLedger::new();
            for (key, quantity) in adds {
                ledger.add_item(product(&key, "10"), quantity);
            }
            let key = ProductKey::new(target);

            let mut once = ledger.clone();
            once.remove_item(&key);
            let mut twice = ledger;
            twice.remove_item(&key);
            twice.remove_item(&key);

            prop_assert_eq!(once, twice);
        }

        #[test]
        fn keys_stay_unique(adds in prop::collection::vec((key_strategy(), 1u32..10), 0..30)) {
            let mut ledger = CartLedger::new();
            for (key, quantity) in adds {
                ledger.add_item(product(&key, "10"), quantity);
            }

            let unique: HashSet<_> = ledger.items().iter().map(|i| i.product_key.clone()).collect();
            prop_assert_eq!(unique.len(), ledger.len());
            prop_assert!(ledger.items().iter().all(|i| i.quantity > 0));
        }
    }
}
