//! Shared test helpers for unit tests, integration tests, and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so these helpers
//! are available in unit tests, integration tests, and benchmarks (via the
//! `test-utils` feature).

use crate::item::{ItemId, ItemTable, Pattern, Recipe};
use crate::worth::{BasePrices, WorthTable};

/// Build a recipe from `(ingredient, quantity)` pairs and a named pattern.
pub fn recipe(count: u32, ingredients: &[(&str, u32)], pattern: &str) -> Recipe {
    Recipe::new(
        count,
        ingredients
            .iter()
            .map(|(tag, quantity)| (ItemId::from(*tag), *quantity)),
        Pattern::tag(pattern),
    )
}

/// Build a shaped recipe with an explicit grid pattern.
pub fn shaped_recipe(count: u32, ingredients: &[(&str, u32)], grid: Vec<Vec<&str>>) -> Recipe {
    Recipe::new(
        count,
        ingredients
            .iter()
            .map(|(tag, quantity)| (ItemId::from(*tag), *quantity)),
        Pattern::Shape(
            grid.into_iter()
                .map(|row| row.into_iter().map(str::to_string).collect())
                .collect(),
        ),
    )
}

/// Build an item table from `(id, recipes)` pairs.
pub fn table<'a>(entries: impl IntoIterator<Item = (&'a str, Vec<Recipe>)>) -> ItemTable {
    let mut items = ItemTable::new();
    for (id, recipes) in entries {
        items.insert(id, recipes);
    }
    items
}

/// Build a worth table with the given entries already stored.
pub fn priced(entries: &[(&str, f64)]) -> WorthTable {
    let mut worth = WorthTable::new();
    for (id, value) in entries {
        worth.insert(ItemId::from(*id), *value);
    }
    worth
}

/// Build a base-price seed map.
pub fn seed(entries: &[(&str, f64)]) -> BasePrices {
    entries
        .iter()
        .map(|(id, price)| (ItemId::from(*id), *price))
        .collect()
}
