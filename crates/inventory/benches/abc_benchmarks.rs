use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use forgeabc_core::{Money, Quantity};
use forgeabc_inventory::{
    AnalysisConfigPatch, InventoryItem, ItemType, PrimaryCriteria, analyze_inventory, validate_config,
};
use rust_decimal::Decimal;

fn synthetic_items(n: usize) -> Vec<InventoryItem> {
    (0..n)
        .map(|i| {
            let item_type = match i % 3 {
                0 => ItemType::Measurable,
                1 => ItemType::Countable,
                _ => ItemType::Elaborated,
            };
            InventoryItem::new(
                format!("sku-{i}"),
                format!("Item {i}"),
                format!("category-{}", i % 7),
                item_type,
                Quantity::new(Decimal::new(((i * 37) % 500 + 1) as i64, 1)),
                Money::new(Decimal::new(((i * 91) % 10_000 + 5) as i64, 2)),
            )
        })
        .collect()
}

fn bench_analyze_inventory(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_inventory");

    for size in [1_000usize, 10_000].iter() {
        let items = synthetic_items(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("revenue", size), &items, |b, items| {
            let patch = AnalysisConfigPatch::default();
            b.iter(|| analyze_inventory(black_box(items), &patch));
        });

        group.bench_with_input(BenchmarkId::new("quantity", size), &items, |b, items| {
            let patch = AnalysisConfigPatch::default().with_primary_criteria(PrimaryCriteria::Quantity);
            b.iter(|| analyze_inventory(black_box(items), &patch));
        });
    }

    group.finish();
}

fn bench_validate_config(c: &mut Criterion) {
    let patch = AnalysisConfigPatch::default();
    c.bench_function("validate_config_defaults", |b| {
        b.iter(|| validate_config(black_box(&patch)));
    });
}

criterion_group!(benches, bench_analyze_inventory, bench_validate_config);
criterion_main!(benches);
