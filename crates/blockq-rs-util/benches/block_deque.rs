use blockq_rs_util::collections::BlockDeque;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::VecDeque;

fn bench_churn(c: &mut Criterion) {
    let n = 4096;
    let mut group = c.benchmark_group("push_back then pop_front (4096)");
    group.bench_function("std::collections::VecDeque", |b| {
        b.iter(|| {
            let mut d = VecDeque::new();
            for i in 0..n {
                d.push_back(black_box(i));
            }
            while let Some(v) = d.pop_front() {
                black_box(v);
            }
        })
    });
    group.bench_function("BlockDeque", |b| {
        b.iter(|| {
            let mut d = BlockDeque::new();
            for i in 0..n {
                d.push_back(black_box(i));
            }
            while let Some(v) = d.pop_front() {
                black_box(v);
            }
        })
    });
    group.finish();
}

fn bench_both_ends(c: &mut Criterion) {
    let n = 4096;
    let mut group = c.benchmark_group("alternate push_front/push_back (4096)");
    group.bench_function("std::collections::VecDeque", |b| {
        b.iter(|| {
            let mut d = VecDeque::new();
            for i in 0..n {
                if i % 2 == 0 {
                    d.push_front(black_box(i));
                } else {
                    d.push_back(black_box(i));
                }
            }
            d
        })
    });
    group.bench_function("BlockDeque", |b| {
        b.iter(|| {
            let mut d = BlockDeque::new();
            for i in 0..n {
                if i % 2 == 0 {
                    d.push_front(black_box(i));
                } else {
                    d.push_back(black_box(i));
                }
            }
            d
        })
    });
    group.finish();
}

fn bench_window(c: &mut Criterion) {
    let window = 100;
    let n = 10_000;
    let mut group = c.benchmark_group("sliding window of 100 over 10000 pushes");
    group.bench_function("std::collections::VecDeque", |b| {
        b.iter(|| {
            let mut d = VecDeque::with_capacity(window);
            for i in 0..n {
                if d.len() == window {
                    d.pop_front();
                }
                d.push_back(black_box(i));
            }
            d
        })
    });
    group.bench_function("BlockDeque", |b| {
        b.iter(|| {
            let mut d = BlockDeque::with_max_len(window);
            for i in 0..n {
                d.push_back(black_box(i));
            }
            d
        })
    });
    group.finish();
}

criterion_group!(benches, bench_churn, bench_both_ends, bench_window);
criterion_main!(benches);
