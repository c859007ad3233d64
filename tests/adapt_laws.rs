//! Property-based tests for the single-pass adapters.

#![cfg(feature = "adapt")]

use proptest::prelude::*;
use seqops::adapt::{cycled_times, first_divergence_eq, uniqued};
use std::collections::HashSet;

// =============================================================================
// Uniquing Laws
// =============================================================================

proptest! {
    /// The output contains each distinct element exactly once, in order of
    /// first occurrence.
    #[test]
    fn prop_uniqued_matches_seen_set_reference(source in proptest::collection::vec(0..20i32, 0..64)) {
        let unique: Vec<i32> = uniqued(source.clone()).collect();

        let mut seen = HashSet::new();
        let reference: Vec<i32> = source
            .into_iter()
            .filter(|element| seen.insert(*element))
            .collect();
        prop_assert_eq!(unique, reference);
    }

    /// Uniquing is idempotent.
    #[test]
    fn prop_uniqued_is_idempotent(source in proptest::collection::vec(0..20i32, 0..64)) {
        let once: Vec<i32> = uniqued(source).collect();
        let twice: Vec<i32> = uniqued(once.clone()).collect();
        prop_assert_eq!(once, twice);
    }
}

// =============================================================================
// Cycling Laws
// =============================================================================

proptest! {
    /// Length is always times × |base|.
    #[test]
    fn prop_cycled_length(source in proptest::collection::vec(any::<i32>(), 0..16), times in 0..5usize) {
        prop_assert_eq!(
            cycled_times(source.clone(), times).count(),
            times * source.len()
        );
    }

    /// The output is the base repeated verbatim.
    #[test]
    fn prop_cycled_repeats_base(source in proptest::collection::vec(any::<i32>(), 0..16), times in 0..5usize) {
        let cycled: Vec<i32> = cycled_times(source.clone(), times).collect();
        let reference: Vec<i32> = std::iter::repeat_with(|| source.clone())
            .take(times)
            .flatten()
            .collect();
        prop_assert_eq!(cycled, reference);
    }
}

// =============================================================================
// Divergence Laws
// =============================================================================

proptest! {
    /// Agrees with a naive index-by-index reference.
    #[test]
    fn prop_divergence_matches_reference(
        first in proptest::collection::vec(0..4i32, 0..16),
        second in proptest::collection::vec(0..4i32, 0..16),
    ) {
        let naive = (0..first.len().max(second.len()))
            .find(|&index| first.get(index) != second.get(index));
        let expected = if first == second { None } else { naive };
        prop_assert_eq!(first_divergence_eq(first, second), expected);
    }

    /// A sequence never diverges from itself.
    #[test]
    fn prop_no_self_divergence(source in proptest::collection::vec(any::<i32>(), 0..32)) {
        prop_assert_eq!(first_divergence_eq(source.clone(), source), None);
    }

    /// A proper prefix diverges exactly at its length.
    #[test]
    fn prop_prefix_diverges_at_its_length(
        source in proptest::collection::vec(any::<i32>(), 1..32),
        cut in 0..31usize,
    ) {
        let cut = cut.min(source.len() - 1);
        let prefix = source[..cut].to_vec();
        prop_assert_eq!(first_divergence_eq(prefix, source), Some(cut));
    }
}
