//! Benchmarks for the simulator tick and view rendering
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use pulseboard::dashboard::{generate_chart, DashboardSession, TrendMode, UiEvent};
use pulseboard::metrics::{MetricsSimulator, MetricsSnapshot, StdRandom};

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulator");

    for ticks in [1u64, 100, 10_000] {
        group.throughput(Throughput::Elements(ticks));

        group.bench_function(format!("tick_{}", ticks), |b| {
            let mut simulator =
                MetricsSimulator::new(MetricsSnapshot::default(), Box::new(StdRandom::seeded(1)))
                    .unwrap();

            b.iter(|| {
                for _ in 0..ticks {
                    black_box(simulator.tick());
                }
            })
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for mode in [TrendMode::Static, TrendMode::Derived] {
        let mut random = StdRandom::seeded(2);
        let session = DashboardSession::new(&mut random, mode);
        let mut simulator =
            MetricsSimulator::new(MetricsSnapshot::default(), Box::new(random)).unwrap();
        let update = simulator.tick();

        group.bench_function(format!("view_{}", mode), |b| {
            b.iter(|| session.render(black_box(&update)))
        });

        group.bench_function(format!("view_json_{}", mode), |b| {
            b.iter(|| serde_json::to_string(&session.render(black_box(&update))).unwrap())
        });
    }

    group.bench_function("toggle_and_render", |b| {
        let mut random = StdRandom::seeded(3);
        let mut session = DashboardSession::new(&mut random, TrendMode::Static);
        let mut simulator =
            MetricsSimulator::new(MetricsSnapshot::default(), Box::new(random)).unwrap();
        let update = simulator.tick();

        b.iter(|| {
            session.apply(UiEvent::ToggleSidebar);
            session.render(black_box(&update))
        })
    });

    group.bench_function("generate_chart", |b| {
        let mut random = StdRandom::seeded(4);
        b.iter(|| generate_chart(black_box(&mut random)))
    });

    group.finish();
}

criterion_group!(benches, bench_tick, bench_render);
criterion_main!(benches);
