//! Criterion benchmarks for the worth propagation driver.
//!
//! Two table shapes:
//! - `wide_table`: many independent two-step chains; converges in few passes
//! - `deep_chain`: one long chain scanned against its dependency order, the
//!   worst case where every pass prices a single link

use criterion::{criterion_group, criterion_main, Criterion};
use worthgen_core::item::ItemTable;
use worthgen_core::propagate::WorthGenerator;
use worthgen_core::test_utils::*;
use worthgen_core::worth::{BasePrices, WorthTable};

/// Many short chains: `ROOT_c` -> `CRAFT_c_0` -> ... -> `CRAFT_c_{depth-1}`.
/// Crafted names sort after their dependencies, so a pass prices whole chains.
fn build_wide_table(chains: usize, depth: usize) -> (ItemTable, BasePrices) {
    let mut items = ItemTable::new();
    let mut base = BasePrices::new();

    for c in 0..chains {
        let root = format!("AA_ROOT_{c:04}");
        items.insert(root.as_str(), vec![]);
        base.insert(root.as_str().into(), 10.0);

        let mut previous = root;
        for d in 0..depth {
            let id = format!("CRAFT_{c:04}_{d:02}");
            items.insert(id.as_str(), vec![recipe(1, &[(previous.as_str(), 2)], "generic")]);
            previous = id;
        }
    }

    (items, base)
}

/// One long chain named against its dependency order: `ITEM_000` depends on
/// `ITEM_001`, which depends on `ITEM_002`, and so on down to the seeded
/// root. Each pass can only price the deepest unpriced link.
fn build_deep_chain(depth: usize) -> (ItemTable, BasePrices) {
    let mut items = ItemTable::new();
    let mut base = BasePrices::new();

    let root = "ZZ_ROOT".to_string();
    items.insert(root.as_str(), vec![]);
    base.insert(root.as_str().into(), 10.0);

    for d in 0..depth {
        let dependency = if d + 1 == depth {
            root.clone()
        } else {
            format!("ITEM_{:03}", d + 1)
        };
        items.insert(
            format!("ITEM_{d:03}"),
            vec![recipe(1, &[(dependency.as_str(), 1)], "generic")],
        );
    }

    (items, base)
}

fn bench_wide_table(c: &mut Criterion) {
    let (items, base) = build_wide_table(500, 4);
    let generator = WorthGenerator::default();

    c.bench_function("wide_table_500x4", |b| {
        b.iter(|| {
            let mut worth = WorthTable::seed(&base, 1.65);
            generator.propagate(&items, &mut worth).unwrap();
            worth.len()
        })
    });
}

fn bench_deep_chain(c: &mut Criterion) {
    let (items, base) = build_deep_chain(200);
    let generator = WorthGenerator::default();

    c.bench_function("deep_chain_200", |b| {
        b.iter(|| {
            let mut worth = WorthTable::seed(&base, 1.65);
            generator.propagate(&items, &mut worth).unwrap();
            worth.len()
        })
    });
}

criterion_group!(benches, bench_wide_table, bench_deep_chain);
criterion_main!(benches);
