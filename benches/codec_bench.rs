//! Performance benchmarks for zframe.
//!
//! Measures one-shot and streaming throughput across data patterns with very
//! different compressibility.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use zframe::{Compressor, Decompressor, Level, compress, decompress};

/// Generate test data patterns for benchmarking.
mod test_data {
    /// Uniform data - all bytes are the same.
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// Random data - no patterns (worst compression).
    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            // Linear congruential generator
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Repetitive pattern - common in text files.
    pub fn repetitive(size: usize) -> Vec<u8> {
        let pattern = b"TOBEORNOTTOBEORTOBEORNOT";
        let mut data = Vec::with_capacity(size);
        while data.len() < size {
            let take = pattern.len().min(size - data.len());
            data.extend_from_slice(&pattern[..take]);
        }
        data
    }
}

const SIZE: usize = 1 << 20;

fn bench_oneshot(c: &mut Criterion) {
    let patterns: [(&str, Vec<u8>); 3] = [
        ("uniform", test_data::uniform(SIZE)),
        ("random", test_data::random(SIZE)),
        ("repetitive", test_data::repetitive(SIZE)),
    ];

    let mut group = c.benchmark_group("oneshot_compress");
    for (name, data) in &patterns {
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), data, |b, data| {
            b.iter(|| compress(black_box(data), Level::DEFAULT).unwrap());
        });
    }
    group.finish();

    let mut group = c.benchmark_group("oneshot_decompress");
    for (name, data) in &patterns {
        let compressed = compress(data, Level::DEFAULT).unwrap();
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &compressed,
            |b, compressed| {
                b.iter(|| decompress(black_box(compressed), SIZE + 1).unwrap());
            },
        );
    }
    group.finish();
}

fn bench_streaming(c: &mut Criterion) {
    let data = test_data::repetitive(SIZE);

    let mut group = c.benchmark_group("streaming");
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("compress_64k_chunks", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            let mut compressor = Compressor::new(Level::DEFAULT).unwrap();
            for chunk in data.chunks(64 * 1024) {
                compressor
                    .feed(black_box(chunk), |c| out.extend_from_slice(c))
                    .unwrap();
            }
            compressor.finish(|c| out.extend_from_slice(c)).unwrap();
            out
        });
    });

    let compressed = compress(&data, Level::DEFAULT).unwrap();
    group.bench_function("decompress_64k_chunks", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            let mut decompressor = Decompressor::new();
            for chunk in compressed.chunks(64 * 1024) {
                decompressor
                    .feed(black_box(chunk), |c| out.extend_from_slice(c))
                    .unwrap();
            }
            decompressor.finish(|c| out.extend_from_slice(c)).unwrap();
            out
        });
    });
    group.finish();
}

criterion_group!(benches, bench_oneshot, bench_streaming);
criterion_main!(benches);
