//! # seqops
//!
//! Sequence algorithms for Rust: bounded top-k selection, sorted-sequence
//! merging, and set operations over ordered streams.
//!
//! ## Overview
//!
//! This library extends any iterable data source with algorithms that the
//! standard library does not provide. It includes:
//!
//! - **Bounded Selection**: the `k` smallest or largest elements of a
//!   sequence, sorted and stable, without fully sorting the source
//! - **Sorted Merging**: lazy and eager two-pointer merging of two
//!   pre-sorted sequences
//! - **Set Operations**: union, intersection, difference, symmetric
//!   difference and multiset sum computed directly over sorted input,
//!   driven by a [`MergerSubset`](merge::MergerSubset) retention policy
//! - **Single-Pass Adapters**: first-occurrence deduplication, finite
//!   cyclic repetition, and first point of divergence between sequences
//!
//! All algorithms consume only an ordering (or equivalence) predicate and
//! are pure: no shared state, no I/O, no allocation beyond their documented
//! working sets.
//!
//! ## Feature Flags
//!
//! - `select`: Bounded top-k selection
//! - `merge`: Sorted merging and set operations
//! - `adapt`: Single-pass adapters (uniquing, cycling, divergence)
//! - `serde`: Serialization for [`MergerSubset`](merge::MergerSubset)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use seqops::prelude::*;
//!
//! let numbers = [7, 1, 6, 2, 8, 3, 9];
//! assert_eq!(numbers.bounded_min(3), vec![1, 2, 3]);
//!
//! let merged: Vec<i32> = merge_sorted([0, 2, 4], [1, 2, 3]).collect();
//! assert_eq!(merged, vec![0, 1, 2, 2, 3, 4]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use seqops::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "select")]
    pub use crate::select::*;

    #[cfg(feature = "merge")]
    pub use crate::merge::*;

    #[cfg(feature = "adapt")]
    pub use crate::adapt::*;
}

#[cfg(feature = "select")]
pub mod select;

#[cfg(feature = "merge")]
pub mod merge;

#[cfg(feature = "adapt")]
pub mod adapt;
