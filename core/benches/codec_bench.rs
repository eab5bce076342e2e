use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use std::hint::black_box;
use zstd_bridge_core::bridge::{compress, decompress};

// Per-call session setup dominates small inputs; large inputs show codec throughput.
fn bench_bridge(c: &mut Criterion) {
    let mut rng = rand::thread_rng();

    let sizes = vec![
        ("Empty", 0usize),
        ("Tiny", 64),
        ("Small", 16 * 1024),
        ("Medium", 1024 * 1024),
        ("Large", 8 * 1024 * 1024),
    ];

    for (size_name, size) in sizes {
        let input: Vec<u8> = (0..size).map(|_| b"ACGT"[rng.gen_range(0..4)]).collect();

        let mut group = c.benchmark_group(format!("Bridge_{size_name}"));
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("compress", size), &input, |b, i| {
            b.iter(|| compress(black_box(i)).unwrap())
        });

        let frame = compress(&input).unwrap();
        group.bench_with_input(BenchmarkId::new("decompress", size), &frame, |b, f| {
            b.iter(|| decompress(black_box(f)).unwrap())
        });
        group.finish();
    }
}

criterion_group!(benches, bench_bridge);
criterion_main!(benches);
