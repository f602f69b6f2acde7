use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dyn_bitset::DynBitset;
use std::hint::black_box;

fn bench_bit_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("bit_access");

    group.bench_function("set", |b| {
        let mut bits: DynBitset = DynBitset::zeroed(1024);
        let mut i = 0;
        b.iter(|| {
            bits.set(i % 1024, black_box(true));
            i += 1;
        });
    });

    group.bench_function("test", |b| {
        let mut bits: DynBitset = DynBitset::zeroed(1024);
        for i in (0..1024).step_by(3) {
            bits.set(i, true);
        }
        let mut i = 0;
        b.iter(|| {
            black_box(bits.test(i % 1024));
            i += 1;
        });
    });

    group.bench_function("push", |b| {
        let mut bits: DynBitset = DynBitset::new();
        b.iter(|| {
            bits.push(black_box(true));
            if bits.len() >= 1 << 20 {
                bits.clear();
            }
        });
    });

    group.finish();
}

fn bench_range_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_ops");

    for size in &[64usize, 1024, 16384] {
        group.bench_with_input(BenchmarkId::new("set_range", size), size, |b, &size| {
            let mut bits: DynBitset = DynBitset::zeroed(size);
            b.iter(|| {
                bits.set_range(1, black_box(size - 2), true);
            });
        });

        group.bench_with_input(BenchmarkId::new("flip_range", size), size, |b, &size| {
            let mut bits: DynBitset = DynBitset::zeroed(size);
            b.iter(|| {
                bits.flip_range(1, black_box(size - 2));
            });
        });
    }

    group.finish();
}

fn bench_bulk_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_ops");

    let mut a: DynBitset = DynBitset::zeroed(16384);
    let mut b_set: DynBitset = DynBitset::zeroed(16384);
    for i in (0..16384).step_by(7) {
        a.set(i, true);
    }
    for i in (0..16384).step_by(5) {
        b_set.set(i, true);
    }

    group.bench_function("union_with", |bench| {
        let mut dst = a.clone();
        bench.iter(|| {
            dst.union_with(black_box(&b_set));
        });
    });

    group.bench_function("count_ones", |bench| {
        bench.iter(|| black_box(a.count_ones()));
    });

    group.bench_function("shift_left", |bench| {
        let mut bits = a.clone();
        bench.iter(|| {
            bits.shift_left(black_box(67));
        });
    });

    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    for size in &[256usize, 4096] {
        let mut bits: DynBitset = DynBitset::zeroed(*size);
        for i in (0..*size).step_by(2) {
            bits.set(i, true);
        }

        group.bench_with_input(BenchmarkId::new("ones", size), &bits, |b, bits| {
            b.iter(|| {
                for pos in bits.ones() {
                    black_box(pos);
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("find_scan", size), &bits, |b, bits| {
            b.iter(|| {
                let mut cursor = bits.find_first();
                while let Some(pos) = cursor {
                    black_box(pos);
                    cursor = bits.find_next(pos);
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_bit_access,
    bench_range_ops,
    bench_bulk_ops,
    bench_iteration
);
criterion_main!(benches);
