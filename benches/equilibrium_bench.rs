//! Benchmarks for the exact solver.

use akq_solver::algebra::{int, ratio, Symbols};
use akq_solver::game::symbolic_expected_value;
use akq_solver::simulation::Simulator;
use akq_solver::sweep::{bet_sizes, sweep};
use akq_solver::{find_equilibrium, GameConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn expected_value_benchmark(c: &mut Criterion) {
    let config = GameConfig::default();
    let symbols = Symbols::new();

    c.bench_function("symbolic_expected_value", |b| {
        b.iter(|| symbolic_expected_value(black_box(&symbols), black_box(&config)))
    });
}

fn equilibrium_benchmark(c: &mut Criterion) {
    let config = GameConfig::default();

    c.bench_function("find_equilibrium_default", |b| {
        b.iter(|| find_equilibrium(black_box(&config)))
    });
}

fn sweep_benchmark(c: &mut Criterion) {
    let base = GameConfig::default();
    let sizes = bet_sizes(ratio(1, 4), int(4), 64);

    c.bench_function("sweep_65_sizes", |b| {
        b.iter(|| sweep(black_box(&base), black_box(&sizes), false))
    });
}

fn simulation_benchmark(c: &mut Criterion) {
    let eq = match find_equilibrium(&GameConfig::default()) {
        Ok(eq) => eq,
        Err(e) => panic!("default game failed to solve: {}", e),
    };
    let mut sim = match Simulator::from_equilibrium(&eq, Some(42)) {
        Ok(sim) => sim,
        Err(e) => panic!("simulator setup failed: {}", e),
    };

    c.bench_function("simulate_10000_hands", |b| {
        b.iter(|| black_box(sim.run(10_000)))
    });
}

criterion_group!(
    benches,
    expected_value_benchmark,
    equilibrium_benchmark,
    sweep_benchmark,
    simulation_benchmark
);
criterion_main!(benches);
