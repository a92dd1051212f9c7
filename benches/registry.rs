// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for registry operations.
//!
//! Measures the performance of:
//! - Enqueueing toasts through the public surface
//! - The per-position display read path (filter, truncate, reverse)
//! - Add/dismiss churn at a steady registry size

use criterion::{criterion_group, criterion_main, Criterion};
use iced_toaster::api::Container;
use iced_toaster::options::{ContainerOptions, Position, ToastOptions};
use std::hint::black_box;

/// Benchmark creating toasts through the bus.
fn bench_create(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    group.bench_function("create_100", |b| {
        b.iter(|| {
            let container = Container::new(ContainerOptions::default());
            let toaster = container.toaster();
            for _ in 0..100 {
                black_box(toaster.create("benchmark", ToastOptions::new()));
            }
            black_box(container.registry().len());
        });
    });

    group.finish();
}

/// Benchmark the display read path over a populated registry.
fn bench_position_toasts(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    let container = Container::new(ContainerOptions::default());
    let toaster = container.toaster();
    for i in 0..100 {
        let position = if i % 2 == 0 {
            Position::TopRight
        } else {
            Position::BottomLeft
        };
        toaster.create("benchmark", ToastOptions::new().position(position));
    }

    group.bench_function("position_toasts", |b| {
        b.iter(|| {
            black_box(container.registry().position_toasts(Position::TopRight));
        });
    });

    group.finish();
}

/// Benchmark add/dismiss churn at a steady size.
fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry");

    let container = Container::new(ContainerOptions::default());
    let toaster = container.toaster();
    for _ in 0..20 {
        toaster.create("warmup", ToastOptions::new());
    }

    group.bench_function("add_dismiss_churn", |b| {
        b.iter(|| {
            let id = toaster.create("churn", ToastOptions::new());
            toaster.dismiss(black_box(id));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_create, bench_position_toasts, bench_churn);
criterion_main!(benches);
