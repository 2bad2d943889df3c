//! Profiling binary for plan generation and replay
//!
//! This binary plans and replays sessions in a tight loop for profiling
//! with cargo-flamegraph. Unlike the Criterion benchmarks, this has minimal
//! overhead and produces cleaner flamegraphs.
//!
//! Usage:
//!   cargo flamegraph --bin profile

use anyhow::Context;
use hanoi_forge_rs::{
    core::{PegTriple, PlanIter},
    game::Session,
};
use std::time::Instant;

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn main() -> anyhow::Result<()> {
    // Allow overriding via environment variables
    let iterations: usize = env_or("PROFILE_ITERATIONS", 200);
    let discs: u32 = env_or("PROFILE_DISCS", 16);

    println!("Profiling plan generation and replay...");
    println!("Running {} sessions with {} discs", iterations, discs);
    println!();

    let start = Instant::now();
    let mut total_moves = 0usize;

    for i in 0..iterations {
        let mut session = Session::new(discs)
            .with_context(|| format!("failed to start session {i} with {discs} discs"))?;
        total_moves += session.run_to_completion();
        anyhow::ensure!(
            session.all_on_target(),
            "session {i} finished without every disc on the last peg"
        );
    }

    let replay_time = start.elapsed();

    let start = Instant::now();
    let streamed: usize = (0..iterations)
        .map(|_| PlanIter::new(discs, PegTriple::STANDARD).count())
        .sum();
    let stream_time = start.elapsed();

    println!(
        "Replay:   {} moves in {:.2?} ({:.0} moves/sec)",
        total_moves,
        replay_time,
        total_moves as f64 / replay_time.as_secs_f64()
    );
    println!(
        "Streamed: {} moves in {:.2?} ({:.0} moves/sec)",
        streamed,
        stream_time,
        streamed as f64 / stream_time.as_secs_f64()
    );

    Ok(())
}
