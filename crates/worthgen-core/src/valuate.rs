//! Recipe valuation.

use crate::item::{ItemId, ItemTable, Recipe};
use crate::normalize::normalize_ingredient;
use crate::worth::WorthTable;

/// Fraction of the blaze powder worth added per brewing operation.
const BREWING_SURCHARGE_DIVISOR: f64 = 20.0;

/// Errors from valuating a single item's recipe.
#[derive(Debug, thiserror::Error)]
pub enum ValuationError {
    /// The item id is absent from the item table entirely. Unlike the other
    /// variants this is a configuration error, never a deferrable condition.
    #[error("item {0} not found")]
    UnknownItem(ItemId),

    /// The item exists but has no recipe; its worth must come from a seed.
    #[error("item {0} has no recipe")]
    NoRecipe(ItemId),

    /// A required (normalized) ingredient has no worth entry yet.
    #[error("ingredient {0} is not yet priced")]
    UnpricedIngredient(ItemId),
}

/// Compute the raw worth of `item_id` from its first listed recipe.
///
/// Requires every normalized ingredient to already be priced. The result is
/// the per-unit ingredient cost with the economy-of-scale discount and the
/// pattern adjustment applied; rounding and clamping are the caller's
/// concern.
pub fn valuate(
    items: &ItemTable,
    worth: &WorthTable,
    item_id: &str,
) -> Result<f64, ValuationError> {
    let recipe = first_recipe(items, item_id)?;

    let mut value = 0.0;
    let mut ingredient_count: u32 = 0;
    for (tag, &quantity) in &recipe.ingredients {
        let ingredient = normalize_ingredient(tag.as_str());
        let Some(unit) = worth.get(ingredient.as_str()) else {
            return Err(ValuationError::UnpricedIngredient(ingredient));
        };
        value += unit * f64::from(quantity);
        ingredient_count += quantity;
    }

    // Economy of scale: each ingredient beyond the first shaves 1% off the
    // batch value; dividing by the yield amortizes the cost per output item.
    let discount = 1.0 - (f64::from(ingredient_count) - 1.0) / 100.0;
    let mut result = value * discount / f64::from(recipe.count);

    match recipe.pattern.style() {
        Some("axe" | "shovel" | "hoe") => result *= 0.9,
        Some("furnace" | "stonecutter") => result *= 1.25,
        Some("brewing") => {
            let blaze = normalize_ingredient("BLAZE_POWDER");
            let Some(unit) = worth.get(blaze.as_str()) else {
                return Err(ValuationError::UnpricedIngredient(blaze));
            };
            result += unit / BREWING_SURCHARGE_DIVISOR;
        }
        _ => {}
    }

    Ok(result)
}

fn first_recipe<'a>(items: &'a ItemTable, item_id: &str) -> Result<&'a Recipe, ValuationError> {
    match items.recipes(item_id) {
        None => Err(ValuationError::UnknownItem(ItemId::from(item_id))),
        Some([]) => Err(ValuationError::NoRecipe(ItemId::from(item_id))),
        Some([first, ..]) => Ok(first),
    }
}

// ===========================================================================
// Tests
// ===========================================================================
