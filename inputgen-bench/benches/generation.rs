//! Generation benchmarks.
//!
//! Run with: cargo bench -p inputgen-bench --bench generation

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use inputgen_bench::{synthetic_asset, synthetic_schema};
use inputgen_codegen::{Generator, GeneratorConfig, generate_from_json};
use inputgen_schema::parse_schema;
use std::hint::black_box;

fn benchmark_parse(c: &mut Criterion) {
    let asset = synthetic_asset(4, 16);

    c.bench_function("parse_asset_4x16", |b| {
        b.iter(|| parse_schema(black_box(&asset)))
    });
}

fn benchmark_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for (groups, bindings) in [(1, 8), (4, 16), (16, 64)] {
        let schema = synthetic_schema(groups, bindings);
        group.throughput(Throughput::Elements((groups * bindings) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{groups}x{bindings}")),
            &schema,
            |b, schema| {
                b.iter(|| Generator::new(black_box(schema), GeneratorConfig::default()).generate())
            },
        );
    }

    group.finish();
}

fn benchmark_end_to_end(c: &mut Criterion) {
    let asset = synthetic_asset(4, 16);

    c.bench_function("generate_from_json_4x16", |b| {
        b.iter(|| generate_from_json(black_box(&asset), GeneratorConfig::default()))
    });
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_generate,
    benchmark_end_to_end
);
criterion_main!(benches);
