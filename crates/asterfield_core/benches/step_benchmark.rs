//! # Field Step Benchmark
//!
//! The per-frame pass must fit comfortably inside a 120 FPS frame budget
//! at the sample fan-out (150 children).
//!
//! Run with: `cargo bench --package asterfield_core`

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use asterfield_core::{AsteroidField, FieldConfig, FieldSeed};

const FRAME_DT: f32 = 1.0 / 120.0;

/// Benchmark: one frame of the hierarchical field at increasing fan-out.
fn bench_field_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("field_step");

    for child_count in [16, 150, 1024] {
        let config = FieldConfig {
            child_count,
            ..FieldConfig::default()
        };
        let mut field = AsteroidField::new(config, FieldSeed::new(1));

        group.bench_with_input(
            BenchmarkId::from_parameter(child_count),
            &child_count,
            |b, _| {
                b.iter(|| {
                    field.step(black_box(FRAME_DT));
                });
            },
        );
    }

    group.finish();
}

/// Benchmark: full teardown + rebuild (the config-change path).
fn bench_field_rebuild(c: &mut Criterion) {
    let config = FieldConfig::default();
    c.bench_function("field_rebuild_150", |b| {
        let mut field = AsteroidField::new(config, FieldSeed::new(1));
        b.iter(|| {
            field.rebuild(black_box(config), FieldSeed::new(1));
        });
    });
}

criterion_group!(benches, bench_field_step, bench_field_rebuild);
criterion_main!(benches);
