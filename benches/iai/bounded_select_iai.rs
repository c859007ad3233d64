//! IAI-Callgrind benchmark for bounded selection.
//!
//! Measures instruction counts for the streaming algorithm vs the adaptive
//! slice entry point at counts below and above the 10% switchover.

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use seqops::select::{BoundedSelect, bounded_min};
use std::hint::black_box;

fn setup_shuffled_vec_10000() -> Vec<u64> {
    (0..10_000u64).map(|n| n.wrapping_mul(0x9E37_79B9_7F4A_7C15)).collect()
}

#[library_benchmark]
#[bench::with_setup(setup_shuffled_vec_10000())]
fn streaming_min_small_count(elements: Vec<u64>) -> Vec<u64> {
    black_box(bounded_min(black_box(elements), 16))
}

#[library_benchmark]
#[bench::with_setup(setup_shuffled_vec_10000())]
fn streaming_min_large_count(elements: Vec<u64>) -> Vec<u64> {
    black_box(bounded_min(black_box(elements), 2_000))
}

#[library_benchmark]
#[bench::with_setup(setup_shuffled_vec_10000())]
fn adaptive_min_below_threshold(elements: Vec<u64>) -> Vec<u64> {
    black_box(elements.bounded_min(black_box(16)))
}

#[library_benchmark]
#[bench::with_setup(setup_shuffled_vec_10000())]
fn adaptive_min_above_threshold(elements: Vec<u64>) -> Vec<u64> {
    black_box(elements.bounded_min(black_box(2_000)))
}

library_benchmark_group!(
    name = bounded_select;
    benchmarks =
        streaming_min_small_count,
        streaming_min_large_count,
        adaptive_min_below_threshold,
        adaptive_min_above_threshold
);

main!(library_benchmark_groups = bounded_select);
