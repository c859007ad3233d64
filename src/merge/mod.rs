//! Sorted-sequence merging and set operations.
//!
//! This module merges two sequences that are already sorted by the same
//! predicate, in a single O(m + n) pass with no auxiliary storage:
//!
//! - [`merge_sorted`] / [`merge_sorted_by`]: the full merge; every element
//!   of both inputs appears in the output
//! - [`merge_sorted_sets`] / [`merge_sorted_sets_by`]: the set-semantics
//!   variant; each element is classified by provenance (exclusive to the
//!   first input, exclusive to the second, shared) and filtered by a
//!   [`MergerSubset`] retention policy
//! - `*_to_vec` counterparts: eager materialization with exact capacity
//!
//! A hash-based set union would also be linear, but it loses ordering and
//! requires hashable elements; merging sorted input needs only the ordering
//! predicate and produces sorted output for every retention policy.
//!
//! # Examples
//!
//! ```rust
//! use seqops::merge::{MergerSubset, merge_sorted_sets};
//!
//! let first = [0, 1, 1, 2, 5, 10];
//! let second = [-1, 0, 1, 2, 2, 7, 10, 20];
//!
//! let union: Vec<i32> =
//!     merge_sorted_sets(first, second, MergerSubset::Union).collect();
//! assert_eq!(union, vec![-1, 0, 1, 1, 2, 2, 5, 7, 10, 20]);
//!
//! let difference: Vec<i32> =
//!     merge_sorted_sets(first, second, MergerSubset::FirstWithoutSecond).collect();
//! assert_eq!(difference, vec![1, 5]);
//! ```

mod sorted;
mod subset;

pub use sorted::{
    MergeSorted, MergeSortedSets, merge_sorted, merge_sorted_by, merge_sorted_sets,
    merge_sorted_sets_by, merge_sorted_sets_to_vec, merge_sorted_sets_to_vec_by,
    merge_sorted_to_vec, merge_sorted_to_vec_by,
};
pub use subset::MergerSubset;
