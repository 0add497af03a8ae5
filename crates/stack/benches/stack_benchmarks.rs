//! Push/pop workload benchmarks
//!
//! Separates the steady-state path (no resizes) from the staircase path
//! that exercises the grow/shrink policy end to end.

use cairn_stack::{BoundedStack, INITIAL_CAPACITY, TextStack};
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Benchmark push/pop cycles that never trigger a resize
fn bench_steady_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("steady_state");
    group.throughput(Throughput::Elements(INITIAL_CAPACITY as u64));

    group.bench_function("push_pop_16", |b| {
        let mut stack = BoundedStack::new().unwrap();

        b.iter(|| {
            for i in 0..INITIAL_CAPACITY {
                stack.push(i).unwrap();
            }
            for _ in 0..INITIAL_CAPACITY {
                black_box(stack.pop().unwrap());
            }
        });
    });

    group.finish();
}

/// Benchmark the full grow/shrink staircase
fn bench_resize_staircase(c: &mut Criterion) {
    let mut group = c.benchmark_group("resize_staircase");
    group.throughput(Throughput::Elements(512));

    group.bench_function("fill_drain_512", |b| {
        b.iter(|| {
            let mut stack = BoundedStack::new().unwrap();
            for i in 0..512u64 {
                stack.push(i).unwrap();
            }
            while !stack.is_empty() {
                black_box(stack.pop().unwrap());
            }
        });
    });

    group.finish();
}

/// Benchmark the owned-copy text path against the generic core
fn bench_text_copies(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_copies");
    group.throughput(Throughput::Elements(INITIAL_CAPACITY as u64));

    group.bench_function("push_pop_16x64b", |b| {
        let payload = "x".repeat(64);
        let mut stack = TextStack::new().unwrap();

        b.iter(|| {
            for _ in 0..INITIAL_CAPACITY {
                stack.push(&payload).unwrap();
            }
            for _ in 0..INITIAL_CAPACITY {
                black_box(stack.pop().unwrap());
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_steady_state,
    bench_resize_staircase,
    bench_text_copies
);
criterion_main!(benches);
