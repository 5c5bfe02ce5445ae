//! Fixed-point worth propagation.
//!
//! The driver seeds the worth table, synthesizes the brewing recipes into the
//! item table once, then scans the full table repeatedly. A pass prices every
//! item whose prerequisites are available; an item with missing prerequisites
//! is deferred, not failed. The first pass that adds nothing is the fixed
//! point: whatever is still unpriced can never be priced from the seed set
//! and is reported as a diagnostic.
//!
//! There is no cycle detection beyond this natural convergence. Two items
//! that only reference each other stay unpriced, which is the correct
//! outcome, not an error.

use crate::item::{ItemId, ItemTable, Recipe};
use crate::normalize::normalize_ingredient;
use crate::potion::synthesize_potion_recipes;
use crate::rules::{legacy_alias, standard_rules, ValuationRule};
use crate::valuate::{valuate, ValuationError};
use crate::worth::{BasePrices, WorthTable};

/// Tunables for a generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Multiplier applied to externally assigned base prices at seed time,
    /// compensating for drift between the hand-maintained price list and the
    /// in-game economy.
    pub inflation: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { inflation: 1.65 }
    }
}

/// An item the run could not price, with the recipe it would have used.
#[derive(Debug, Clone)]
pub struct UnresolvedItem {
    pub item: ItemId,
    /// The first listed recipe, or None for a base item nobody seeded.
    pub recipe: Option<Recipe>,
}

/// Outcome of a generation run.
#[derive(Debug, Clone, Default)]
pub struct ConvergenceReport {
    /// Full scanning passes executed, including the final one that added
    /// nothing.
    pub passes: u32,
    /// Items that are unreachable from the seed set.
    pub unresolved: Vec<UnresolvedItem>,
    /// Priced items whose stored value is exactly zero. The storage clamp
    /// should make this impossible; listed if it ever happens.
    pub zero_valued: Vec<ItemId>,
}

/// The fixed-point propagation driver.
///
/// Owns the derived-item rules and the run configuration; the worth table it
/// produces is append-only for the duration of one generation run.
pub struct WorthGenerator {
    config: GeneratorConfig,
    rules: Vec<Box<dyn ValuationRule>>,
}

impl WorthGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            rules: standard_rules(),
        }
    }

    /// Run a full generation: seed the worth table from base prices, enrich
    /// the item table with the synthesized brewing recipes (the only mutation
    /// it ever sees), and scan to the fixed point.
    pub fn generate(
        &self,
        items: &mut ItemTable,
        base: &BasePrices,
    ) -> Result<(WorthTable, ConvergenceReport), ValuationError> {
        let mut worth = WorthTable::seed(base, self.config.inflation);
        synthesize_potion_recipes(items);
        let report = self.propagate(items, &mut worth)?;
        Ok((worth, report))
    }

    /// Scan an already-seeded worth table to its fixed point and collect the
    /// leftover diagnostics.
    pub fn propagate(
        &self,
        items: &ItemTable,
        worth: &mut WorthTable,
    ) -> Result<ConvergenceReport, ValuationError> {
        let mut report = ConvergenceReport::default();

        loop {
            let added = self.scan_pass(items, worth)?;
            report.passes += 1;
            tracing::debug!(
                pass = report.passes,
                added,
                priced = worth.len(),
                "scan pass complete"
            );
            if added == 0 {
                break;
            }
        }

        for (id, recipes) in items.iter() {
            match worth.get(id.as_str()) {
                None => {
                    match recipes.first() {
                        Some(recipe) => tracing::warn!(
                            item = %id, ?recipe, "item could not be priced"
                        ),
                        None => tracing::warn!(
                            item = %id, "item has no recipe and was never seeded"
                        ),
                    }
                    report.unresolved.push(UnresolvedItem {
                        item: id.clone(),
                        recipe: recipes.first().cloned(),
                    });
                }
                Some(value) if value == 0.0 => {
                    tracing::warn!(item = %id, "item priced at zero");
                    report.zero_valued.push(id.clone());
                }
                Some(_) => {}
            }
        }

        Ok(report)
    }

    /// One full pass over the item table. Returns how many entries it added.
    fn scan_pass(
        &self,
        items: &ItemTable,
        worth: &mut WorthTable,
    ) -> Result<usize, ValuationError> {
        let mut added = 0;

        'items: for (id, recipes) in items.iter() {
            if worth.contains(id.as_str()) {
                continue;
            }

            // Derived-item families take priority over the item's own recipe.
            // A matching rule either prices the item or defers it; it never
            // falls through to the generic path.
            for rule in &self.rules {
                if rule.matches(id.as_str()) {
                    if let Some(value) = rule.try_value(id.as_str(), worth) {
                        worth.insert(id.clone(), value);
                        added += 1;
                    }
                    continue 'items;
                }
            }

            // Base item: only a seed can price it.
            let Some(recipe) = recipes.first() else {
                continue;
            };

            if !ingredients_priced(recipe, worth) {
                continue;
            }

            let value = valuate(items, worth, id.as_str())?;
            worth.insert(id.clone(), value);
            added += 1;

            if let Some(alias) = legacy_alias(id.as_str()) {
                worth.alias(id.as_str(), alias);
            }
        }

        Ok(added)
    }
}

impl Default for WorthGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

/// Pre-check making deferrable conditions visible before valuation, so the
/// scan never turns a missing dependency into a hard failure.
fn ingredients_priced(recipe: &Recipe, worth: &WorthTable) -> bool {
    if recipe.pattern.style() == Some("brewing")
        && !worth.contains(normalize_ingredient("BLAZE_POWDER").as_str())
    {
        return false;
    }
    recipe
        .ingredients
        .keys()
        .all(|tag| worth.contains(normalize_ingredient(tag.as_str()).as_str()))
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use proptest::prelude::*;

    fn run(items: &ItemTable, worth: &mut WorthTable) -> ConvergenceReport {
        WorthGenerator::default().propagate(items, worth).unwrap()
    }

    // -----------------------------------------------------------------------
    // Single-recipe derivation
    // -----------------------------------------------------------------------

    #[test]
    fn plank_batch_amortization() {
        let items = table([
            ("OAK_LOG", vec![]),
            ("OAK_PLANKS", vec![recipe(4, &[("OAK_LOG", 1)], "generic")]),
        ]);
        let mut worth = priced(&[("OAK_LOG", 10.0)]);

        run(&items, &mut worth);
        assert_eq!(worth.get("OAK_PLANKS"), Some(3.0));
    }

    #[test]
    fn two_ingredient_discount() {
        let items = table([("C", vec![recipe(1, &[("A", 1), ("B", 1)], "generic")])]);
        let mut worth = priced(&[("A", 10.0), ("B", 10.0)]);

        run(&items, &mut worth);
        assert_eq!(worth.get("C"), Some(20.0));
    }

    // -----------------------------------------------------------------------
    // Derived-item rules inside the scan
    // -----------------------------------------------------------------------

    #[test]
    fn ore_rule_prices_recipeless_ore() {
        let items = table([("IRON_ORE", vec![])]);
        let mut worth = priced(&[("RAW_IRON", 20.0)]);

        run(&items, &mut worth);
        assert_eq!(worth.get("IRON_ORE"), Some(15.0));
    }

    #[test]
    fn rule_match_shadows_generic_recipe() {
        // The ore rule claims the item even though a recipe exists.
        let items = table([("IRON_ORE", vec![recipe(1, &[("RAW_IRON", 9)], "generic")])]);
        let mut worth = priced(&[("RAW_IRON", 20.0)]);

        run(&items, &mut worth);
        assert_eq!(worth.get("IRON_ORE"), Some(15.0));
    }

    #[test]
    fn copper_and_anvil_rules_defer_until_base_priced() {
        let items = table([
            ("ANVIL", vec![recipe(1, &[("IRON_BLOCK", 3), ("IRON_INGOT", 4)], "generic")]),
            ("CHIPPED_ANVIL", vec![]),
            ("DAMAGED_ANVIL", vec![]),
            ("IRON_BLOCK", vec![recipe(1, &[("IRON_INGOT", 9)], "generic")]),
        ]);
        let mut worth = priced(&[("IRON_INGOT", 30.0)]);

        let report = run(&items, &mut worth);
        // IRON_BLOCK: 270 * 0.92 = 248.4 -> 248
        // ANVIL: (3*248 + 4*30) * 0.94 = 812.16 -> 812
        assert_eq!(worth.get("IRON_BLOCK"), Some(248.0));
        assert_eq!(worth.get("ANVIL"), Some(812.0));
        assert_eq!(worth.get("CHIPPED_ANVIL"), Some(406.0));
        assert_eq!(worth.get("DAMAGED_ANVIL"), Some(203.0));
        assert!(report.unresolved.is_empty());
    }

    // -----------------------------------------------------------------------
    // Deferral and convergence
    // -----------------------------------------------------------------------

    #[test]
    fn brewing_defers_until_blaze_powder_priced() {
        // Scans alphabetically, so the brew is visited before BLAZE_POWDER
        // exists and must wait for the next pass.
        let items = table([
            ("APOTHECARY_BREW", vec![recipe(1, &[("WATER_BOTTLE", 1)], "brewing")]),
            ("BLAZE_POWDER", vec![recipe(2, &[("BLAZE_ROD", 1)], "generic")]),
        ]);
        let mut worth = priced(&[("WATER_BOTTLE", 2.0), ("BLAZE_ROD", 10.0)]);

        let report = run(&items, &mut worth);
        assert_eq!(worth.get("BLAZE_POWDER"), Some(5.0));
        // 2.0 + 5/20 = 2.25 -> 2
        assert_eq!(worth.get("APOTHECARY_BREW"), Some(2.0));
        assert_eq!(report.passes, 3);
    }

    #[test]
    fn dependency_chain_resolves_across_passes() {
        // Named so the dependents are scanned before their dependencies.
        let items = table([
            ("A_FINAL", vec![recipe(1, &[("B_MID", 2)], "generic")]),
            ("B_MID", vec![recipe(1, &[("C_BASE", 2)], "generic")]),
            ("C_BASE", vec![]),
        ]);
        let mut worth = priced(&[("C_BASE", 5.0)]);

        let report = run(&items, &mut worth);
        // B_MID: 10 * 0.99 = 9.9 -> 10; A_FINAL: 20 * 0.99 = 19.8 -> 20
        assert_eq!(worth.get("B_MID"), Some(10.0));
        assert_eq!(worth.get("A_FINAL"), Some(20.0));
        assert_eq!(report.passes, 3);
    }

    #[test]
    fn mutual_dependency_stays_unpriced() {
        let items = table([
            ("PING", vec![recipe(1, &[("PONG", 1)], "generic")]),
            ("PONG", vec![recipe(1, &[("PING", 1)], "generic")]),
            ("UNSEEDED_BASE", vec![]),
        ]);
        let mut worth = WorthTable::new();

        let report = run(&items, &mut worth);
        assert!(worth.is_empty());
        assert_eq!(report.passes, 1);
        assert_eq!(report.unresolved.len(), 3);

        let unseeded = report
            .unresolved
            .iter()
            .find(|u| u.item.as_str() == "UNSEEDED_BASE")
            .unwrap();
        assert!(unseeded.recipe.is_none());
        let ping = report
            .unresolved
            .iter()
            .find(|u| u.item.as_str() == "PING")
            .unwrap();
        assert!(ping.recipe.is_some());
        assert!(report.zero_valued.is_empty());
    }

    #[test]
    fn legacy_alias_applied_on_generic_pricing() {
        let items = table([("MELON", vec![recipe(1, &[("MELON_SLICE", 9)], "generic")])]);
        let mut worth = priced(&[("MELON_SLICE", 2.0)]);

        run(&items, &mut worth);
        // 18 * 0.92 = 16.56 -> 17, copied to the legacy block id.
        assert_eq!(worth.get("MELON"), Some(17.0));
        assert_eq!(worth.get("MELON_BLOCK"), Some(17.0));
    }

    // -----------------------------------------------------------------------
    // Full generation
    // -----------------------------------------------------------------------

    #[test]
    fn generate_seeds_with_inflation_and_synthesizes_brews() {
        let mut items = table([
            ("BLAZE_POWDER", vec![]),
            ("NETHER_WART", vec![]),
        ]);
        let base = seed(&[
            ("BLAZE_POWDER", 20.0),
            ("NETHER_WART", 10.0),
            ("POTION{potion:water}", 1.0),
        ]);

        let generator = WorthGenerator::new(GeneratorConfig { inflation: 1.0 });
        let (worth, _report) = generator.generate(&mut items, &base).unwrap();

        // The brewing tree was synthesized into the table...
        assert!(items.contains("POTION{potion:awkward}"));
        // ...and priced: (1 + 10) * 0.99 + 20/20 = 11.89 -> 12.
        assert_eq!(worth.get("POTION{potion:awkward}"), Some(12.0));
    }

    #[test]
    fn generate_applies_inflation_multiplier() {
        let mut items = table([("OAK_LOG", vec![])]);
        let base = seed(&[("OAK_LOG", 20.0)]);

        let generator = WorthGenerator::default();
        let (worth, _) = generator.generate(&mut items, &base).unwrap();
        assert_eq!(worth.get("OAK_LOG"), Some(33.0));
    }

    // -----------------------------------------------------------------------
    // Idempotence and monotonicity
    // -----------------------------------------------------------------------

    #[test]
    fn propagation_is_idempotent() {
        let items = table([
            ("OAK_LOG", vec![]),
            ("OAK_PLANKS", vec![recipe(4, &[("OAK_LOG", 1)], "generic")]),
            ("STICK", vec![recipe(4, &[("PLANKS", 2)], "generic")]),
        ]);
        let mut worth = priced(&[("OAK_LOG", 10.0)]);

        run(&items, &mut worth);
        let first = worth.clone();

        let report = run(&items, &mut worth);
        assert_eq!(worth, first);
        assert_eq!(report.passes, 1);
    }

    #[test]
    fn seeded_entries_are_never_overwritten() {
        // The seed disagrees with what the recipe would derive; the seed wins.
        let items = table([
            ("OAK_LOG", vec![]),
            ("OAK_PLANKS", vec![recipe(4, &[("OAK_LOG", 1)], "generic")]),
        ]);
        let mut worth = priced(&[("OAK_LOG", 10.0), ("OAK_PLANKS", 50.0)]);

        run(&items, &mut worth);
        assert_eq!(worth.get("OAK_PLANKS"), Some(50.0));
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    proptest! {
        #[test]
        fn stored_values_are_integral_and_floored(
            entries in proptest::collection::vec(
                (0.01f64..500.0, 1u32..=4, 1u32..=5),
                1..6,
            )
        ) {
            let mut items = ItemTable::new();
            let mut base = crate::worth::BasePrices::new();
            let patterns = ["generic", "axe", "furnace"];

            for (i, (price, count, quantity)) in entries.iter().enumerate() {
                let raw = format!("RAW_{i}");
                items.insert(raw.as_str(), vec![]);
                base.insert(raw.as_str().into(), *price);
                items.insert(
                    format!("CRAFTED_{i}"),
                    vec![recipe(*count, &[(raw.as_str(), *quantity)], patterns[i % 3])],
                );
            }

            let mut worth = WorthTable::seed(&base, 1.65);
            let seeded: Vec<(String, f64)> = worth
                .iter()
                .map(|(id, value)| (id.to_string(), value))
                .collect();

            let report = run(&items, &mut worth);

            // Every item was reachable from the seed set.
            prop_assert!(report.unresolved.is_empty());
            prop_assert_eq!(worth.len(), items.len());

            // Floor and integrality hold for every stored entry.
            for (_, value) in worth.iter() {
                prop_assert!(value >= 1.0);
                prop_assert_eq!(value.fract(), 0.0);
            }

            // Seeded entries were not touched by the scan.
            for (id, value) in seeded {
                prop_assert_eq!(worth.get(&id), Some(value));
            }

            // A second run changes nothing.
            let before = worth.clone();
            run(&items, &mut worth);
            prop_assert_eq!(worth, before);
        }
    }
}
