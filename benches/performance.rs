use countrange::{count, rcount};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_forward_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("forward_traversal");

    for size in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("count", size), size, |b, &size| {
            let data: Vec<u64> = (0..size as u64).collect();

            b.iter(|| {
                let mut sum = 0u64;
                for (value, index) in count(black_box(&data)) {
                    sum = sum.wrapping_add(*value).wrapping_add(index as u64);
                }
                black_box(sum)
            });
        });
    }
    group.finish();
}

fn bench_reverse_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse_traversal");

    for size in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("rcount", size), size, |b, &size| {
            let data: Vec<u64> = (0..size as u64).collect();

            b.iter(|| {
                let mut sum = 0u64;
                for (value, index) in rcount(black_box(&data)) {
                    sum = sum.wrapping_add(*value).wrapping_add(index as u64);
                }
                black_box(sum)
            });
        });
    }
    group.finish();
}

fn bench_countdown_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("countdown_index");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("reverse_index", size), size, |b, &size| {
            let data: Vec<u64> = (0..size as u64).collect();

            b.iter(|| {
                let mut sum = 0u64;
                for (value, index) in count(black_box(&data)).reverse_index() {
                    sum = sum.wrapping_add(*value).wrapping_add(index as u64);
                }
                black_box(sum)
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_forward_traversal,
    bench_reverse_traversal,
    bench_countdown_index
);
criterion_main!(benches);
