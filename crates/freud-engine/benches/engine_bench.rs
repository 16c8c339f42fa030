//! Criterion benchmarks for the simulation engine.
//!
//! Run with:
//! ```bash
//! cargo bench -p freud-engine
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use freud_engine::run_simulation;
use freud_graph::SimParams;

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/run");

    group.bench_function("baseline_24", |b| {
        let params = SimParams::default();
        b.iter(|| run_simulation(&params).unwrap());
    });

    for &nodes in &[40usize, 60] {
        group.bench_with_input(BenchmarkId::new("nodes", nodes), &nodes, |b, &nodes| {
            let params = SimParams {
                node_count: nodes,
                recursion_depth: 16,
                beam_width: 10,
                ..Default::default()
            };
            b.iter(|| run_simulation(&params).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_full_run);
criterion_main!(benches);
