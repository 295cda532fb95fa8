use criterion::{black_box, criterion_group, criterion_main, Criterion};
use permuteseq::{mix32, DynamicPermutation, Permuteseq};

fn hash_benchmark(c: &mut Criterion) {
    c.bench_function("mix32", |b| {
        b.iter(|| {
            black_box(mix32(black_box(0xdead_beef)));
        })
    });
}

fn fixed_range_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Fixed Range");
    let key = 123456789012345;

    let small = Permuteseq::new(key, 0i64, 1000, 7).unwrap();
    let full: Permuteseq = Permuteseq::with_key(key);
    // 2^32 + 1 values need 17-bit half-blocks; about three candidates in four fall outside.
    let walking = Permuteseq::new(key, 0i64, 1 << 32, 7).unwrap();

    group.bench_function("Small Encode", |b| {
        b.iter(|| {
            black_box(small.encode(black_box(500)).unwrap());
        })
    });
    group.bench_function("Small Decode", |b| {
        let encoded = small.encode(500).unwrap();
        b.iter(|| {
            black_box(small.decode(black_box(encoded)).unwrap());
        })
    });
    group.bench_function("Full Encode", |b| {
        b.iter(|| {
            black_box(full.encode(black_box(1_000_000_007)).unwrap());
        })
    });
    group.bench_function("Full Decode", |b| {
        let encoded = full.encode(1_000_000_007).unwrap();
        b.iter(|| {
            black_box(full.decode(black_box(encoded)).unwrap());
        })
    });
    group.bench_function("Cycle Walking Encode", |b| {
        let mut n = 0i64;
        b.iter(|| {
            n = (n + 1) & 0xffff_ffff;
            black_box(walking.encode(black_box(n)).unwrap());
        })
    });
}

fn dynamic_range_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Dynamic Range");
    let dynamic = DynamicPermutation::dynamic(123456789012345, 4, 7).unwrap();

    group.bench_function("Encode", |b| {
        b.iter(|| {
            black_box(dynamic.encode(black_box(123_456)).unwrap());
        })
    });
    group.bench_function("Decode", |b| {
        let encoded = dynamic.encode(123_456).unwrap();
        b.iter(|| {
            black_box(dynamic.decode(black_box(encoded)).unwrap());
        })
    });
}

fn key_generation_benchmark(c: &mut Criterion) {
    c.bench_function("Key Generation", |b| {
        b.iter(|| {
            black_box(Permuteseq::<i64>::generate_key());
        })
    });
}

criterion_group!(
    benches,
    hash_benchmark,
    fixed_range_benchmark,
    dynamic_range_benchmark,
    key_generation_benchmark
);
criterion_main!(benches);
