// Performance benchmarks for the fused aggregation pass and end-to-end diffs
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use driftx::{
    Asset, ComparisonEngine, Dataset, ExtractOptions, Extractor, Field, FusedAggregator,
    MemorySource, StandardDistance, StatsReducerFactory, TableRef,
};
use serde_json::{json, Value};

fn generate_dataset(rows: usize, numeric_cols: usize) -> Dataset {
    let mut cols = vec![Field::new("category")];
    for c in 0..numeric_cols {
        cols.push(Field::new(format!("metric_{}", c)));
    }

    let rows = (0..rows)
        .map(|i| {
            let mut row: Vec<Value> = vec![json!(format!("group_{}", i % 17))];
            for c in 0..numeric_cols {
                row.push(json!((i * (c + 3)) as f64 % 97.0));
            }
            row
        })
        .collect();

    Dataset::new(cols, rows)
}

fn benchmark_fused_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("fused_aggregation");
    let factory = StatsReducerFactory;
    let options = ExtractOptions::default();

    for cols in [2, 8, 32].iter() {
        let dataset = generate_dataset(10_000, *cols);
        group.bench_with_input(BenchmarkId::new("10k_rows", cols), cols, |b, _| {
            b.iter(|| {
                FusedAggregator::new(&factory, &options, &dataset.cols)
                    .run(black_box(&dataset.rows))
            })
        });
    }
    group.finish();
}

fn benchmark_table_diff(c: &mut Criterion) {
    let source = MemorySource::new()
        .with_table("before", generate_dataset(10_000, 8))
        .with_table("after", generate_dataset(10_000, 8));
    let factory = StatsReducerFactory;
    let distance = StandardDistance::default();
    let engine = ComparisonEngine::new(Extractor::new(&source, &factory), &distance);
    let options = ExtractOptions::default();

    c.bench_function("table_diff_10k_x8", |b| {
        b.iter(|| {
            engine
                .compare(
                    black_box(&options),
                    &Asset::table(TableRef::new("before")),
                    &Asset::table(TableRef::new("after")),
                )
                .unwrap()
        })
    });
}

criterion_group!(benches, benchmark_fused_aggregation, benchmark_table_diff);
criterion_main!(benches);
