//! Bounded selection benchmark.
//!
//! Compares the streaming algorithm against the size-aware slice entry
//! point (which switches to a full sort at the 10% threshold), and both
//! against a sort-everything baseline.
//!
//! Pre-generated Vec is reused via clone() in setup to avoid regeneration
//! overhead and ensure consistent benchmark data across iterations.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use seqops::select::{BoundedSelect, bounded_min};
use std::hint::black_box;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];
const COUNTS: [usize; 3] = [8, 64, 512];

/// Pseudo-random but deterministic data, identical across runs.
fn generate_shuffled_vec(size: usize) -> Vec<u64> {
    (0..size as u64).map(|n| n.wrapping_mul(0x9E37_79B9_7F4A_7C15)).collect()
}

fn batch_size_for(size: usize) -> BatchSize {
    if size < 10_000 {
        BatchSize::SmallInput
    } else {
        BatchSize::LargeInput
    }
}

fn benchmark_streaming_min(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("bounded_select_streaming_min");

    for size in SIZES {
        let base_vec = generate_shuffled_vec(size);
        for count in COUNTS {
            group.bench_with_input(
                BenchmarkId::new(format!("n{size}"), count),
                &count,
                |bencher, &count| {
                    bencher.iter_batched(
                        || base_vec.clone(),
                        |elements| black_box(bounded_min(black_box(elements), count)),
                        batch_size_for(size),
                    );
                },
            );
        }
    }

    group.finish();
}

fn benchmark_adaptive_slice_min(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("bounded_select_adaptive_min");

    for size in SIZES {
        let base_vec = generate_shuffled_vec(size);
        for count in COUNTS {
            group.bench_with_input(
                BenchmarkId::new(format!("n{size}"), count),
                &count,
                |bencher, &count| {
                    bencher.iter(|| black_box(base_vec.bounded_min(black_box(count))));
                },
            );
        }
    }

    group.finish();
}

fn benchmark_full_sort_baseline(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("bounded_select_sort_baseline");

    for size in SIZES {
        let base_vec = generate_shuffled_vec(size);
        group.bench_with_input(BenchmarkId::new("sort_truncate", size), &size, |bencher, _| {
            bencher.iter_batched(
                || base_vec.clone(),
                |mut elements| {
                    elements.sort_unstable();
                    elements.truncate(64);
                    black_box(elements)
                },
                batch_size_for(size),
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_streaming_min,
    benchmark_adaptive_slice_min,
    benchmark_full_sort_baseline
);
criterion_main!(benches);
