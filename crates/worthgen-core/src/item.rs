//! Item identifiers, recipes, and the recipe table.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

/// Identifies an item in the recipe and worth tables.
///
/// Ids are the uppercase registry names used by the game's item database
/// (`OAK_PLANKS`, `IRON_INGOT`, ...). Synthesized brewing entries carry a
/// state suffix in braces (`POTION{potion:awkward}`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// Allows `&str` lookups in maps keyed by ItemId.
impl Borrow<str> for ItemId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The crafting method of a recipe: either a named style tag driving a
/// valuation adjustment (`"axe"`, `"furnace"`, `"brewing"`, `"generic"`, ...)
/// or an explicit grid shape for shaped bench recipes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Pattern {
    Shape(Vec<Vec<String>>),
    Tag(String),
}

impl Pattern {
    pub fn tag(name: impl Into<String>) -> Self {
        Pattern::Tag(name.into())
    }

    pub fn generic() -> Self {
        Pattern::Tag("generic".to_string())
    }

    /// The named style tag, or None for grid shapes.
    pub fn style(&self) -> Option<&str> {
        match self {
            Pattern::Tag(tag) => Some(tag),
            Pattern::Shape(_) => None,
        }
    }
}

/// One way to craft an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Batch yield: how many items one craft produces.
    pub count: u32,
    /// Raw ingredient tags and their quantities. Tags may name categories
    /// ("any plank"); they are normalized at valuation time.
    pub ingredients: BTreeMap<ItemId, u32>,
    pub pattern: Pattern,
}

impl Recipe {
    pub fn new(
        count: u32,
        ingredients: impl IntoIterator<Item = (ItemId, u32)>,
        pattern: Pattern,
    ) -> Self {
        Self {
            count,
            ingredients: ingredients.into_iter().collect(),
            pattern,
        }
    }
}

/// The full recipe table, keyed by item id.
///
/// An item mapped to an empty recipe list is a base item: it can only be
/// priced by an external seed, never derived. Items may carry several
/// alternate recipes; the first listed one is the one worth derivation uses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemTable {
    items: BTreeMap<ItemId, Vec<Recipe>>,
}

impl ItemTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<ItemId>, recipes: Vec<Recipe>) {
        self.items.insert(id.into(), recipes);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// All alternate recipes for an item, or None if the id is unknown.
    pub fn recipes(&self, id: &str) -> Option<&[Recipe]> {
        self.items.get(id).map(Vec::as_slice)
    }

    /// The recipe worth derivation uses: the first listed one.
    pub fn first_recipe(&self, id: &str) -> Option<&Recipe> {
        self.items.get(id).and_then(|recipes| recipes.first())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ItemId, &[Recipe])> {
        self.items.iter().map(|(id, recipes)| (id, recipes.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
