//! The growing worth table.

use crate::item::ItemId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Externally assigned seed prices for items with no derivable recipe cost.
pub type BasePrices = BTreeMap<ItemId, f64>;

/// Append-only mapping from item id to its worth.
///
/// Two invariants hold for every stored entry: the value is rounded to the
/// nearest integer-valued float and clamped to a minimum of 1.0, and an
/// entry, once present, is never overwritten.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorthTable {
    values: BTreeMap<ItemId, f64>,
}

impl WorthTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a table from externally assigned base prices, scaling each by the
    /// inflation multiplier with the same round-and-floor rule as derived
    /// entries.
    pub fn seed(base: &BasePrices, inflation: f64) -> Self {
        let mut table = Self::new();
        for (id, price) in base {
            table.values.insert(id.clone(), store_value(price * inflation));
        }
        table
    }

    /// Store a computed worth, rounding and clamping. Returns false (keeping
    /// the existing entry) if the item was already priced.
    pub fn insert(&mut self, id: ItemId, value: f64) -> bool {
        if self.values.contains_key(id.as_str()) {
            return false;
        }
        self.values.insert(id, store_value(value));
        true
    }

    /// Copy an already-stored worth onto an alias id. No-op if the source is
    /// unpriced or the alias is already present.
    pub fn alias(&mut self, from: &str, to: ItemId) -> bool {
        let Some(value) = self.get(from) else {
            return false;
        };
        if self.values.contains_key(to.as_str()) {
            return false;
        }
        self.values.insert(to, value);
        true
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.values.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, f64)> {
        self.values.iter().map(|(id, value)| (id, *value))
    }
}

/// Rounding and floor rule applied to every stored worth.
fn store_value(value: f64) -> f64 {
    value.round().max(1.0)
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_round_to_integer_floats() {
        let mut worth = WorthTable::new();
        worth.insert(ItemId::from("A"), 2.4);
        worth.insert(ItemId::from("B"), 2.5);
        assert_eq!(worth.get("A"), Some(2.0));
        assert_eq!(worth.get("B"), Some(3.0));
    }

    #[test]
    fn values_clamp_to_minimum_one() {
        let mut worth = WorthTable::new();
        worth.insert(ItemId::from("A"), 0.2);
        worth.insert(ItemId::from("B"), 0.0);
        assert_eq!(worth.get("A"), Some(1.0));
        assert_eq!(worth.get("B"), Some(1.0));
    }

    #[test]
    fn insert_never_overwrites() {
        let mut worth = WorthTable::new();
        assert!(worth.insert(ItemId::from("A"), 5.0));
        assert!(!worth.insert(ItemId::from("A"), 99.0));
        assert_eq!(worth.get("A"), Some(5.0));
    }

    #[test]
    fn seed_applies_inflation_with_floor() {
        let mut base = BasePrices::new();
        base.insert(ItemId::from("OAK_LOG"), 20.0);
        base.insert(ItemId::from("DIRT"), 0.2);

        let worth = WorthTable::seed(&base, 1.65);
        assert_eq!(worth.get("OAK_LOG"), Some(33.0));
        // 0.2 * 1.65 rounds to zero, then floors to the minimum.
        assert_eq!(worth.get("DIRT"), Some(1.0));
    }

    #[test]
    fn alias_copies_without_overwriting() {
        let mut worth = WorthTable::new();
        worth.insert(ItemId::from("MELON"), 17.0);

        assert!(worth.alias("MELON", ItemId::from("MELON_BLOCK")));
        assert_eq!(worth.get("MELON_BLOCK"), Some(17.0));

        // A second copy onto the same alias is refused.
        worth.insert(ItemId::from("PUMPKIN"), 9.0);
        assert!(!worth.alias("PUMPKIN", ItemId::from("MELON_BLOCK")));
        assert_eq!(worth.get("MELON_BLOCK"), Some(17.0));
    }

    #[test]
    fn alias_from_unpriced_source_is_noop() {
        let mut worth = WorthTable::new();
        assert!(!worth.alias("MELON", ItemId::from("MELON_BLOCK")));
        assert!(worth.is_empty());
    }
}
