// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_snackbar::ui::notifications::{compute_layout, SnackbarOptions, Stack, Store};
use std::hint::black_box;
use std::time::Instant;

fn layout_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack_layout");

    group.bench_function("compute_layout_50", |b| {
        b.iter(|| {
            for index in 0..50 {
                black_box(compute_layout(black_box(index), 50, false, false, None));
            }
        });
    });

    let mut store = Store::new();
    for i in 0..50 {
        store.add(SnackbarOptions::info(format!("snackbar {i}")));
    }
    let mut stack = Stack::default();

    group.bench_function("reconcile_50", |b| {
        b.iter(|| stack.reconcile(black_box(&store), Instant::now()));
    });

    group.bench_function("layouts_50", |b| {
        b.iter(|| black_box(stack.layouts(&store)));
    });

    group.finish();
}

criterion_group!(benches, layout_benchmark);
criterion_main!(benches);
