//! Criterion benchmarks for whole-agent runs.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sweep_agent::PhaseKind;
use sweep_bench::{agent_for, reference_world};
use sweep_test_utils::{fixtures, run_episode};

/// Benchmark: discover a 16x16 open room from its centre.
fn bench_discover_open_room_16(c: &mut Criterion) {
    c.bench_function("discover_open_room_16", |b| {
        b.iter(|| {
            let mut world = fixtures::open_room(16);
            let mut agent = agent_for(&world);
            while agent.phase() == PhaseKind::Discovering {
                run_episode(&mut agent, &mut world, 1);
            }
            black_box(agent.metrics().ticks);
        });
    });
}

/// Benchmark: 1000 coverage ticks on the reference world.
fn bench_coverage_1000(c: &mut Criterion) {
    let mut world = reference_world(42);
    let mut agent = agent_for(&world);
    while agent.phase() == PhaseKind::Discovering {
        run_episode(&mut agent, &mut world, 1);
    }

    c.bench_function("coverage_1000_ticks", |b| {
        b.iter(|| {
            let actions = run_episode(&mut agent, &mut world, 1000);
            black_box(actions);
        });
    });
}

criterion_group!(benches, bench_discover_open_room_16, bench_coverage_1000);
criterion_main!(benches);
