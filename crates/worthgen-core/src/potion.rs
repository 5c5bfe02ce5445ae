//! Brewing-stand recipe synthesis.
//!
//! Potions are not expressed as ordinary recipes in the extracted item data,
//! so the brewing tree is described here as a declarative family table and
//! expanded into full recipe entries before propagation begins. Each family
//! yields its plain potion plus splash, lingering, and tipped-arrow forms;
//! families flagged as extended or upgraded additionally yield their
//! redstone/glowstone variants, including the fermented-spider-eye
//! corruptions from opposite effects.

use crate::item::{ItemId, ItemTable, Pattern, Recipe};

/// A brewing stand fills one to three bottles per operation; each batch size
/// is emitted as an alternate recipe, smallest batch first.
const MAX_BREW_BATCH: u32 = 3;

/// One potion effect family and how it is brewed.
struct PotionFamily {
    name: &'static str,
    /// `(base family, reagent)` pairs. The first listed brew is the one worth
    /// derivation sees.
    brews: &'static [(&'static str, &'static str)],
    /// Has a redstone-extended variant.
    extended: bool,
    /// Has a glowstone-upgraded (level II) variant.
    upgraded: bool,
    /// Families whose variants corrupt into this one with a fermented
    /// spider eye.
    opposites: &'static [&'static str],
}

const FAMILIES: &[PotionFamily] = &[
    PotionFamily {
        name: "water",
        brews: &[],
        extended: false,
        upgraded: false,
        opposites: &[],
    },
    PotionFamily {
        name: "awkward",
        brews: &[("water", "NETHER_WART")],
        extended: false,
        upgraded: false,
        opposites: &[],
    },
    PotionFamily {
        name: "mundane",
        brews: &[("water", "REDSTONE")],
        extended: false,
        upgraded: false,
        opposites: &[],
    },
    PotionFamily {
        name: "thick",
        brews: &[("water", "GLOWSTONE_DUST")],
        extended: false,
        upgraded: false,
        opposites: &[],
    },
    PotionFamily {
        name: "weakness",
        brews: &[("water", "FERMENTED_SPIDER_EYE")],
        extended: true,
        upgraded: false,
        opposites: &[],
    },
    PotionFamily {
        name: "swiftness",
        brews: &[("awkward", "SUGAR")],
        extended: true,
        upgraded: true,
        opposites: &["slowness"],
    },
    PotionFamily {
        name: "leaping",
        brews: &[("awkward", "RABBIT_FOOT")],
        extended: true,
        upgraded: true,
        opposites: &["slowness"],
    },
    PotionFamily {
        name: "healing",
        brews: &[("awkward", "GLISTERING_MELON_SLICE")],
        extended: false,
        upgraded: true,
        opposites: &["harming"],
    },
    PotionFamily {
        name: "poison",
        brews: &[("awkward", "SPIDER_EYE")],
        extended: true,
        upgraded: true,
        opposites: &["harming"],
    },
    PotionFamily {
        name: "water_breathing",
        brews: &[("awkward", "PUFFERFISH")],
        extended: true,
        upgraded: false,
        opposites: &[],
    },
    PotionFamily {
        name: "fire_resistance",
        brews: &[("awkward", "MAGMA_CREAM")],
        extended: true,
        upgraded: false,
        opposites: &[],
    },
    PotionFamily {
        name: "night_vision",
        brews: &[("awkward", "GOLDEN_CARROT")],
        extended: true,
        upgraded: false,
        opposites: &["invisibility"],
    },
    PotionFamily {
        name: "strength",
        brews: &[("awkward", "BLAZE_POWDER")],
        extended: true,
        upgraded: true,
        opposites: &[],
    },
    PotionFamily {
        name: "regeneration",
        brews: &[("awkward", "GHAST_TEAR")],
        extended: true,
        upgraded: true,
        opposites: &[],
    },
    PotionFamily {
        name: "turtle_master",
        brews: &[("awkward", "TURTLE_HELMET")],
        extended: true,
        upgraded: true,
        opposites: &[],
    },
    PotionFamily {
        name: "slow_falling",
        brews: &[("awkward", "PHANTOM_MEMBRANE")],
        extended: true,
        upgraded: false,
        opposites: &[],
    },
    PotionFamily {
        name: "wind_charged",
        brews: &[("awkward", "BREEZE_ROD")],
        extended: false,
        upgraded: false,
        opposites: &[],
    },
    PotionFamily {
        name: "infested",
        brews: &[("awkward", "STONE")],
        extended: false,
        upgraded: false,
        opposites: &[],
    },
    PotionFamily {
        name: "weaving",
        brews: &[("awkward", "COBWEB")],
        extended: false,
        upgraded: false,
        opposites: &[],
    },
    PotionFamily {
        name: "oozing",
        brews: &[("awkward", "SLIME_BLOCK")],
        extended: false,
        upgraded: false,
        opposites: &[],
    },
    PotionFamily {
        name: "slowness",
        brews: &[
            ("swiftness", "FERMENTED_SPIDER_EYE"),
            ("leaping", "FERMENTED_SPIDER_EYE"),
        ],
        extended: true,
        upgraded: true,
        opposites: &["swiftness", "leaping"],
    },
    PotionFamily {
        name: "harming",
        brews: &[
            ("healing", "FERMENTED_SPIDER_EYE"),
            ("poison", "FERMENTED_SPIDER_EYE"),
        ],
        extended: false,
        upgraded: true,
        opposites: &["healing", "poison"],
    },
    PotionFamily {
        name: "invisibility",
        brews: &[("night_vision", "FERMENTED_SPIDER_EYE")],
        extended: true,
        upgraded: false,
        opposites: &["night_vision"],
    },
];

fn family_by_name(name: &str) -> Option<&'static PotionFamily> {
    FAMILIES.iter().find(|family| family.name == name)
}

// ---------------------------------------------------------------------------
// Id construction
// ---------------------------------------------------------------------------

/// The plain potion id for an effect family (`POTION{potion:awkward}`).
pub fn potion_item(family: &str) -> ItemId {
    ItemId::new(format!("POTION{{potion:{family}}}"))
}

/// The splash form (`SPLASH_POTION{potion:...}`).
pub fn splash_item(family: &str) -> ItemId {
    ItemId::new(format!("SPLASH_POTION{{potion:{family}}}"))
}

/// The lingering form (`LINGERING_POTION{potion:...}`).
pub fn lingering_item(family: &str) -> ItemId {
    ItemId::new(format!("LINGERING_POTION{{potion:{family}}}"))
}

/// The tipped arrow carrying the effect (`TIPPED_ARROW{potion:...}`).
pub fn tipped_arrow_item(family: &str) -> ItemId {
    ItemId::new(format!("TIPPED_ARROW{{potion:{family}}}"))
}

// ---------------------------------------------------------------------------
// Recipe construction
// ---------------------------------------------------------------------------

/// One brewing operation: `batch` base potions plus one reagent.
fn brew(batch: u32, base: ItemId, reagent: &str) -> Recipe {
    Recipe::new(
        batch,
        [(base, batch), (ItemId::from(reagent), 1)],
        Pattern::tag("brewing"),
    )
}

/// Brews of `base` with a single reagent at every batch size.
fn reagent_brews(base: &ItemId, reagent: &str) -> Vec<Recipe> {
    (1..=MAX_BREW_BATCH)
        .map(|batch| brew(batch, base.clone(), reagent))
        .collect()
}

/// Tipped arrows: eight arrows around one lingering potion on the bench.
fn tipped_arrow(lingering: &ItemId) -> Recipe {
    let arrow = "ARROW".to_string();
    Recipe::new(
        8,
        [(ItemId::from("ARROW"), 8), (lingering.clone(), 1)],
        Pattern::Shape(vec![
            vec![arrow.clone(), arrow.clone(), arrow.clone()],
            vec![arrow.clone(), lingering.to_string(), arrow.clone()],
            vec![arrow.clone(), arrow.clone(), arrow],
        ]),
    )
}

// ---------------------------------------------------------------------------
// Expansion
// ---------------------------------------------------------------------------

/// Expand the potion family table into recipe entries, enriching `items` in
/// place. Called exactly once before propagation.
///
/// The water potion itself gets no recipe; it is a base item whose price must
/// be seeded, and the rest of the tree prices from there.
pub fn synthesize_potion_recipes(items: &mut ItemTable) {
    for family in FAMILIES {
        let full = potion_item(family.name);
        let splash = splash_item(family.name);
        let lingering = lingering_item(family.name);

        if family.name != "water" {
            let mut brews = Vec::new();
            for batch in 1..=MAX_BREW_BATCH {
                for (base, reagent) in family.brews {
                    brews.push(brew(batch, potion_item(base), reagent));
                }
            }
            items.insert(full.clone(), brews);
        }

        items.insert(splash, reagent_brews(&full, "GUNPOWDER"));
        items.insert(lingering.clone(), reagent_brews(&full, "DRAGON_BREATH"));
        items.insert(tipped_arrow_item(family.name), vec![tipped_arrow(&lingering)]);

        if family.extended {
            expand_modifier(items, family, "long", "REDSTONE", |f| f.extended);
        }
        if family.upgraded {
            expand_modifier(items, family, "strong", "GLOWSTONE_DUST", |f| f.upgraded);
        }
    }
}

/// Emit the `long`/`strong` variant set of one family: each form brews from
/// its plain counterpart with the modifier reagent, plus corruptions from the
/// matching variant of each opposite effect.
fn expand_modifier(
    items: &mut ItemTable,
    family: &PotionFamily,
    modifier: &str,
    reagent: &str,
    has_variant: fn(&PotionFamily) -> bool,
) {
    let modified = format!("{modifier}{}", family.name);

    let mut full_brews = reagent_brews(&potion_item(family.name), reagent);
    let mut splash_brews = reagent_brews(&splash_item(family.name), reagent);
    let mut lingering_brews = reagent_brews(&lingering_item(family.name), reagent);

    for opposite in family.opposites {
        if family_by_name(opposite).is_some_and(has_variant) {
            let opposite_modified = format!("{modifier}{opposite}");
            full_brews.extend(reagent_brews(
                &potion_item(&opposite_modified),
                "FERMENTED_SPIDER_EYE",
            ));
            splash_brews.extend(reagent_brews(
                &splash_item(&opposite_modified),
                "FERMENTED_SPIDER_EYE",
            ));
            lingering_brews.extend(reagent_brews(
                &lingering_item(&opposite_modified),
                "FERMENTED_SPIDER_EYE",
            ));
        }
    }

    let modified_lingering = lingering_item(&modified);
    items.insert(potion_item(&modified), full_brews);
    items.insert(splash_item(&modified), splash_brews);
    items.insert(modified_lingering.clone(), lingering_brews);
    items.insert(tipped_arrow_item(&modified), vec![tipped_arrow(&modified_lingering)]);
}

// ===========================================================================
// Tests
// ===========================================================================
