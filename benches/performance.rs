use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use growvec::GrowVec;

fn bench_sequential_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_push");

    for size in [10, 100, 1000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("push_back", size), size, |b, &size| {
            b.iter(|| {
                let mut v = GrowVec::new();
                for i in 0..size {
                    v.push_back(black_box(i));
                }
                black_box(v.len())
            });
        });
        group.bench_with_input(
            BenchmarkId::new("push_back_reserved", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let mut v = GrowVec::new();
                    v.reserve(size);
                    for i in 0..size {
                        v.push_back(black_box(i));
                    }
                    black_box(v.len())
                });
            },
        );
    }
    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_access");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("at", size), size, |b, &size| {
            let v: GrowVec<usize> = (0..size).collect();

            b.iter(|| {
                for i in 0..size {
                    let _ = black_box(v.at(i));
                }
            });
        });
        group.bench_with_input(BenchmarkId::new("index", size), size, |b, &size| {
            let v: GrowVec<usize> = (0..size).collect();

            b.iter(|| {
                for i in 0..size {
                    black_box(v[i]);
                }
            });
        });
    }
    group.finish();
}

fn bench_iterator_performance(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterator");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("full_iteration", size),
            size,
            |b, &size| {
                let v: GrowVec<String> = (0..size).map(|i| format!("element_{i}")).collect();

                b.iter(|| {
                    for item in black_box(&v) {
                        black_box(item);
                    }
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("reverse_iteration", size),
            size,
            |b, &size| {
                let v: GrowVec<String> = (0..size).map(|i| format!("element_{i}")).collect();

                b.iter(|| {
                    for item in black_box(v.iter_rev()) {
                        black_box(item);
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_insert_erase(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_erase");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(
            BenchmarkId::new("front_insert_cycle", size),
            size,
            |b, &size| {
                b.iter(|| {
                    let mut v = GrowVec::new();
                    for i in 0..size {
                        v.insert(v.begin(), black_box(i));
                    }
                    for _ in 0..size {
                        v.erase(v.begin());
                    }
                    black_box(v.capacity())
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("insert_range_middle", size),
            size,
            |b, &size| {
                let chunk: Vec<u64> = (0..16).collect();
                b.iter(|| {
                    let mut v: GrowVec<u64> = GrowVec::from_elem(size, 0);
                    for _ in 0..10 {
                        let middle = v.cursor(v.len() / 2);
                        v.insert_slice(middle, black_box(&chunk));
                    }
                    black_box(v.len())
                });
            },
        );
    }
    group.finish();
}

fn bench_push_pop_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("push_pop_cycle", size), size, |b, &size| {
            b.iter(|| {
                let mut v = GrowVec::new();
                for i in 0..size {
                    v.push_back(format!("element_{i}"));
                }
                for _ in 0..size {
                    black_box(v.pop_back());
                }
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sequential_push,
    bench_random_access,
    bench_iterator_performance,
    bench_insert_erase,
    bench_push_pop_cycle
);
criterion_main!(benches);
