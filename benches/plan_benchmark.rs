//! Performance benchmarks for the planner and replay engine
//!
//! Three measurements per disc count:
//!
//! 1. **Recursive** - materialise the plan with `generate_plan`
//! 2. **Streamed** - walk the same moves through `PlanIter`
//! 3. **Replay** - start a session and apply every planned move

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hanoi_forge_rs::{
    core::{generate_plan, move_count, PegTriple, PlanIter},
    game::Session,
};

const DISC_COUNTS: [u32; 3] = [8, 12, 16];

fn bench_planner(c: &mut Criterion) {
    let mut group = c.benchmark_group("planner");

    for &n in &DISC_COUNTS {
        let moves = move_count(n).unwrap_or(0) as u64;
        group.throughput(Throughput::Elements(moves));

        group.bench_with_input(BenchmarkId::new("recursive", n), &n, |b, &n| {
            b.iter(|| generate_plan(black_box(n), PegTriple::STANDARD))
        });

        group.bench_with_input(BenchmarkId::new("streamed", n), &n, |b, &n| {
            b.iter(|| PlanIter::new(black_box(n), PegTriple::STANDARD).count())
        });
    }

    group.finish();
}

fn bench_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay");

    for &n in &DISC_COUNTS {
        let moves = move_count(n).unwrap_or(0) as u64;
        group.throughput(Throughput::Elements(moves));

        group.bench_with_input(BenchmarkId::new("run_to_completion", n), &n, |b, &n| {
            b.iter(|| {
                let mut session = Session::new(black_box(n)).expect("disc count within limits");
                session.run_to_completion()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_planner, bench_replay);
criterion_main!(benches);
