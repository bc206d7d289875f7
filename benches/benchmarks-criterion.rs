#![allow(dead_code)]

use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};

use ndtm_sim::accepting_set::AcceptingSet;
use ndtm_sim::config::RuntimeConfig;
use ndtm_sim::engine;
use ndtm_sim::machine::Machine;
use ndtm_sim::symbol::Symbol;
use ndtm_sim::transition::{Move, Transition};
use ndtm_sim::transition_table::TransitionTable;

const WARM_UP_TIME_MS: u64 = 500;
const MEASUREMENT_TIME_MS: u64 = 2000;

criterion_group!(
    benches,
    benchmark_deterministic_sweep,
    benchmark_nondeterministic_branching,
    benchmark_benign_loop_pruning,
);
criterion_main!(benches);

fn sym(c: char) -> Symbol {
    Symbol::from_char(c).unwrap()
}

fn input(s: &str) -> Vec<Symbol> {
    s.chars().map(sym).collect()
}

/// A machine that just walks right over its own input rewriting every cell, never
/// branching: the best case for the tape's in-place mutation path (each successor
/// tape is uniquely owned).
fn machine_deterministic_sweep() -> Machine {
    let mut table = TransitionTable::new();
    table.add(0, sym('a').index(), Transition::new(sym('b'), Move::Right, 0));
    table.add(0, sym('b').index(), Transition::new(sym('b'), Move::Right, 0));
    table.add(0, sym('_').index(), Transition::new(sym('_'), Move::Right, 1));
    let mut accepting = AcceptingSet::new();
    accepting.add(1);
    accepting.finalize();
    Machine::new(table, accepting)
}

/// A machine with two live transitions per `(state, read)` pair: every step forks
/// the branching frontier, exercising copy-on-write duplication.
fn machine_nondeterministic_branching() -> Machine {
    let mut table = TransitionTable::new();
    table.add(0, sym('a').index(), Transition::new(sym('a'), Move::Right, 0));
    table.add(0, sym('a').index(), Transition::new(sym('b'), Move::Right, 0));
    let accepting = AcceptingSet::new();
    Machine::new(table, accepting)
}

/// A machine that immediately enters a benign self-loop on blanks, exercising the
/// pruning path instead of queue growth.
fn machine_benign_loop() -> Machine {
    let mut table = TransitionTable::new();
    table.add(0, sym('_').index(), Transition::new(sym('_'), Move::Right, 0));
    let accepting = AcceptingSet::new();
    Machine::new(table, accepting)
}

fn benchmark_deterministic_sweep(c: &mut Criterion) {
    let machine = machine_deterministic_sweep();
    let config = RuntimeConfig::new_default();
    let tape_input = input(&"a".repeat(2_000));

    let mut group = c.benchmark_group("Engine Deterministic Sweep");
    group.warm_up_time(Duration::from_millis(WARM_UP_TIME_MS));
    group.measurement_time(Duration::from_millis(MEASUREMENT_TIME_MS));

    group.bench_function("2000-cell rewrite sweep", |b| {
        b.iter(|| engine::run(&machine, &tape_input, 10_000, &config).unwrap())
    });

    group.finish();
}

fn benchmark_nondeterministic_branching(c: &mut Criterion) {
    let machine = machine_nondeterministic_branching();
    let config = RuntimeConfig::builder().queue_capacity(500_000).build();
    let tape_input = input(&"a".repeat(12));

    let mut group = c.benchmark_group("Engine Nondeterministic Branching");
    group.warm_up_time(Duration::from_millis(WARM_UP_TIME_MS));
    group.measurement_time(Duration::from_millis(MEASUREMENT_TIME_MS));
    group.sample_size(10);

    group.bench_function("binary branching over 12 cells", |b| {
        b.iter(|| engine::run(&machine, &tape_input, 24, &config).unwrap())
    });

    group.finish();
}

fn benchmark_benign_loop_pruning(c: &mut Criterion) {
    let machine = machine_benign_loop();
    let config = RuntimeConfig::new_default();
    let tape_input = input("_");

    let mut group = c.benchmark_group("Engine Benign Loop Pruning");
    group.warm_up_time(Duration::from_millis(WARM_UP_TIME_MS));
    group.measurement_time(Duration::from_millis(MEASUREMENT_TIME_MS));

    group.bench_function("immediate blank self-loop", |b| {
        b.iter(|| engine::run(&machine, &tape_input, 1_000, &config).unwrap())
    });

    group.finish();
}
