//! Serde structs for the on-disk inputs.
//!
//! These types define the file format for the extracted item/recipe table,
//! the hand-maintained base price list, and the optional generator
//! configuration. They are deserialized from RON, JSON, or TOML files and
//! then resolved into engine types.

use serde::Deserialize;
use std::collections::BTreeMap;
use worthgen_core::item::{ItemId, ItemTable, Pattern, Recipe};
use worthgen_core::worth::BasePrices;

// ===========================================================================
// Item table
// ===========================================================================

/// The item table file: item id to its recipe set. An empty set marks a base
/// item with no derivable cost.
pub type ItemTableData = BTreeMap<String, RecipeSetData>;

/// Recipes for one item: either a list of alternates or a single recipe.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecipeSetData {
    Many(Vec<RecipeData>),
    One(RecipeData),
}

/// A recipe definition in a data file.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeData {
    pub count: u32,
    pub ingredients: BTreeMap<String, u32>,
    #[serde(default)]
    pub pattern: PatternData,
}

/// A recipe pattern: a named style tag, or an explicit grid shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PatternData {
    Tag(String),
    Shape(Vec<Vec<String>>),
}

impl Default for PatternData {
    fn default() -> Self {
        PatternData::Tag("generic".to_string())
    }
}

// ===========================================================================
// Base prices
// ===========================================================================

/// The base price file: a flat mapping from item id to its hand-assigned
/// price.
pub type BasePricesData = BTreeMap<String, f64>;

// ===========================================================================
// Generator configuration
// ===========================================================================

/// Optional generator configuration file. Every field has a default, so the
/// file may be absent or partial.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfigData {
    /// Multiplier applied to base prices at seed time.
    pub inflation: f64,
    /// Rewrite output ids to the consuming plugin's convention (separators
    /// stripped, lowercase) instead of the game's registry names.
    pub flat_names: bool,
    /// Replacement for the default descriptive header of the output file.
    pub header: Option<String>,
}

impl Default for GeneratorConfigData {
    fn default() -> Self {
        Self {
            inflation: 1.65,
            flat_names: true,
            header: None,
        }
    }
}

// ===========================================================================
// Resolution into engine types
// ===========================================================================

impl From<PatternData> for Pattern {
    fn from(data: PatternData) -> Self {
        match data {
            PatternData::Tag(tag) => Pattern::Tag(tag),
            PatternData::Shape(rows) => Pattern::Shape(rows),
        }
    }
}

impl RecipeData {
    pub fn into_recipe(self) -> Recipe {
        Recipe::new(
            self.count,
            self.ingredients
                .into_iter()
                .map(|(tag, quantity)| (ItemId::from(tag), quantity)),
            self.pattern.into(),
        )
    }
}

impl RecipeSetData {
    fn into_recipes(self) -> Vec<Recipe> {
        match self {
            RecipeSetData::Many(recipes) => {
                recipes.into_iter().map(RecipeData::into_recipe).collect()
            }
            RecipeSetData::One(recipe) => vec![recipe.into_recipe()],
        }
    }
}

/// Resolve the raw item table file into the engine's recipe table.
pub fn resolve_item_table(data: ItemTableData) -> ItemTable {
    let mut items = ItemTable::new();
    for (id, recipes) in data {
        items.insert(id, recipes.into_recipes());
    }
    items
}

/// Resolve the raw base price file into the engine's seed map.
pub fn resolve_base_prices(data: BasePricesData) -> BasePrices {
    data.into_iter()
        .map(|(id, price)| (ItemId::from(id), price))
        .collect()
}

// ===========================================================================
// Tests
// ===========================================================================
