//! Derived-item valuation rules.
//!
//! Some item families are not priced through their own recipes: ores derive
//! from the raw material they drop, oxidation stages from the clean copper
//! item, damaged anvils from the pristine anvil. Each rule matches a family
//! by id shape and prices a member once its prerequisite entry exists.
//! Rules are checked in a fixed priority order before the generic recipe
//! path; a match that cannot be priced yet defers the item to a later pass.

use crate::item::ItemId;
use crate::worth::WorthTable;

/// One derived-item family.
pub trait ValuationRule {
    /// Whether this rule prices the given item.
    fn matches(&self, item_id: &str) -> bool;

    /// The derived value, or None while the prerequisite entry is still
    /// unpriced (the driver retries on a later pass).
    fn try_value(&self, item_id: &str, worth: &WorthTable) -> Option<f64>;
}

/// The derived-item rules in their fixed priority order.
pub fn standard_rules() -> Vec<Box<dyn ValuationRule>> {
    vec![
        Box::new(OreRule),
        Box::new(OxidizedCopperRule),
        Box::new(DamagedAnvilRule),
    ]
}

// ---------------------------------------------------------------------------
// Ores
// ---------------------------------------------------------------------------

/// Ore blocks are worth a fixed fraction of the raw material they drop.
pub struct OreRule;

const ORE_RATIO: f64 = 0.75;

impl ValuationRule for OreRule {
    fn matches(&self, item_id: &str) -> bool {
        item_id.ends_with("_ORE")
    }

    fn try_value(&self, item_id: &str, worth: &WorthTable) -> Option<f64> {
        let material = raw_material(item_id);
        worth.get(&material).map(|unit| unit * ORE_RATIO)
    }
}

/// The dropped material an ore id is priced against: strip the
/// dimension/depth prefix, take the leading token, and resolve metals to
/// their raw form.
fn raw_material(ore_id: &str) -> String {
    let stripped = ore_id
        .trim_start_matches("NETHER_")
        .trim_start_matches("DEEPSLATE_");
    let leading = stripped.split('_').next().unwrap_or(stripped);
    match leading {
        "IRON" | "COPPER" | "GOLD" => format!("RAW_{leading}"),
        "LAPIS" => "LAPIS_LAZULI".to_string(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Oxidized copper
// ---------------------------------------------------------------------------

/// Oxidation stages of copper blocks and doors, priced as decaying fractions
/// of their un-oxidized counterpart.
pub struct OxidizedCopperRule;

impl ValuationRule for OxidizedCopperRule {
    fn matches(&self, item_id: &str) -> bool {
        ["EXPOSED_COPPER", "WEATHERED_COPPER", "OXIDIZED_COPPER"]
            .iter()
            .any(|prefix| item_id.starts_with(prefix))
    }

    fn try_value(&self, item_id: &str, worth: &WorthTable) -> Option<f64> {
        let ratio = if item_id.starts_with("EXPOSED") {
            0.5
        } else if item_id.starts_with("WEATHERED") {
            0.4
        } else {
            0.3
        };
        worth
            .get(&base_copper_item(item_id))
            .map(|unit| unit * ratio)
    }
}

/// The item an oxidation stage is priced against: the cut copper block for
/// blocks, the copper-prefixed counterpart for doors and trapdoors.
fn base_copper_item(item_id: &str) -> String {
    if item_id.contains("DOOR")
        && let Some((_, suffix)) = item_id.split_once("_COPPER_")
    {
        return format!("COPPER_{suffix}");
    }
    "CUT_COPPER".to_string()
}

// ---------------------------------------------------------------------------
// Damaged anvils
// ---------------------------------------------------------------------------

/// Damage states of the anvil, priced as fractions of the pristine one.
pub struct DamagedAnvilRule;

impl ValuationRule for DamagedAnvilRule {
    fn matches(&self, item_id: &str) -> bool {
        item_id.ends_with("_ANVIL")
    }

    fn try_value(&self, item_id: &str, worth: &WorthTable) -> Option<f64> {
        let ratio = if item_id == "CHIPPED_ANVIL" { 0.5 } else { 0.25 };
        worth.get("ANVIL").map(|unit| unit * ratio)
    }
}

// ---------------------------------------------------------------------------
// Legacy aliases
// ---------------------------------------------------------------------------

/// Legacy/alternate id that receives a copy of a freshly priced item's worth,
/// if any. Applied only after pricing through the generic recipe path.
pub fn legacy_alias(item_id: &str) -> Option<ItemId> {
    if item_id.starts_with("END_STONE_BRICK") && item_id != "END_STONE_BRICKS" {
        return Some(ItemId::new(item_id.replace("_BRICK", "")));
    }
    match item_id {
        "MELON" => Some(ItemId::from("MELON_BLOCK")),
        "SKULL_BANNER_PATTERN" => Some(ItemId::from("SKELETON_BANNER_PATTERN")),
        _ => None,
    }
}

// ===========================================================================
// Tests
// ===========================================================================
