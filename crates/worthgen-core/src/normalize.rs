//! Ingredient tag normalization.
//!
//! Recipe ingredients frequently name a category ("any plank", "any coal")
//! or a pluralized group tag rather than a concrete item. Worth lookup needs
//! exactly one priced representative per tag, so every ingredient goes
//! through [`normalize_ingredient`] before it is resolved against the worth
//! table.

use crate::item::ItemId;

/// Map a raw ingredient tag to the concrete item id it is priced as.
///
/// Resolution order:
/// 1. the fixed category table (a generic tag maps to one representative,
///    e.g. any plank is priced as the oak plank),
/// 2. `A/B` alternative lists, which resolve to the first alternative,
/// 3. pluralized group suffixes, rewritten to their singular form.
///
/// Total: a tag matching none of the above passes through unchanged.
pub fn normalize_ingredient(tag: &str) -> ItemId {
    let remapped = match tag {
        "PLANKS" | "WOODEN_TOOL_MATERIALS" => Some("OAK_PLANKS"),
        "LOGS" | "LOGS_THAT_BURN" => Some("OAK_LOG"),
        "WOODEN_SLABS" => Some("OAK_SLAB"),
        "WOODEN_FENCES" => Some("OAK_FENCE"),
        "COALS" => Some("COAL"),
        "WOOL" => Some("WHITE_WOOL"),
        "LEAVES" => Some("OAK_LEAVES"),
        "EGGS" => Some("EGG"),
        "SOUL_FIRE_BASE_BLOCKS" => Some("SOUL_SOIL"),
        "STONE_CRAFTING_MATERIALS" | "FURNACE_MATERIALS" | "STONE_TOOL_MATERIALS" => {
            Some("COBBLESTONE")
        }
        "CHISELED_QUARTZ_BLOCK/QUARTZ_PILLAR" => Some("QUARTZ_PILLAR"),
        "IRON_TOOL_MATERIALS" => Some("IRON_INGOT"),
        "GOLD_TOOL_MATERIALS" => Some("GOLD_INGOT"),
        "DIAMOND_TOOL_MATERIALS" => Some("DIAMOND"),
        _ => None,
    };
    if let Some(concrete) = remapped {
        return ItemId::from(concrete);
    }

    if let Some((first, _)) = tag.split_once('/') {
        return ItemId::from(first);
    }

    for (plural, singular) in [
        ("_LOGS", "_LOG"),
        ("_STEMS", "_STEM"),
        ("_BLOCKS", "_BLOCK"),
    ] {
        if let Some(stem) = tag.strip_suffix(plural) {
            return ItemId::new(format!("{stem}{singular}"));
        }
    }

    ItemId::from(tag)
}

// ===========================================================================
// Tests
// ===========================================================================
