//! Worthgen Core -- derives an economic worth value for every craftable item
//! in a game's recipe database.
//!
//! A small set of items carries hand-assigned base prices; every other value
//! is computed by propagating ingredient costs through the recipe graph until
//! a fixed point is reached.
//!
//! # Generation Pipeline
//!
//! A call to [`propagate::WorthGenerator::generate`] runs three stages:
//!
//! 1. **Seeding** -- The worth table is initialized from base prices (scaled
//!    by the inflation multiplier), and brewing recipes are synthesized into
//!    the item table exactly once.
//! 2. **Scanning** -- Full passes over the item table. Each pass prices every
//!    item whose prerequisites are available: derived-item rules (ores,
//!    oxidized copper, damaged anvils) are checked first, then the item's own
//!    recipe is valuated. Items with missing prerequisites are deferred to a
//!    later pass.
//! 3. **Converged** -- The first pass that adds no new entry terminates the
//!    run. Whatever is still unpriced is reported as a diagnostic, not an
//!    error; mutually dependent items with no priced entry point stay
//!    unpriced by design.
//!
//! # Key Types
//!
//! - [`item::ItemTable`] -- Recipe table keyed by item id; an empty recipe
//!   list marks a base item that can only be priced by a seed.
//! - [`worth::WorthTable`] -- Append-only worth mapping. Every stored value
//!   is rounded to an integer-valued float and clamped to a minimum of 1.0;
//!   entries are never overwritten.
//! - [`valuate`] -- Per-recipe valuation with the economy-of-scale discount
//!   and pattern adjustments (tool discount, furnace premium, brewing
//!   surcharge).
//! - [`rules::ValuationRule`] -- Ordered derived-item strategies checked
//!   before the generic recipe path.
//! - [`potion`] -- Declarative brewing tree expanded into recipe entries.
//! - [`propagate::WorthGenerator`] -- The fixed-point driver.

pub mod item;
pub mod normalize;
pub mod potion;
pub mod propagate;
pub mod rules;
pub mod valuate;
pub mod worth;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
