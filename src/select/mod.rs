//! Bounded top-k selection.
//!
//! This module provides selection of the `k` smallest or largest elements
//! of a sequence without fully sorting it:
//!
//! - [`bounded_min_by`] / [`bounded_max_by`]: streaming selection over any
//!   [`IntoIterator`] with a caller-supplied ordering predicate
//! - [`bounded_min`] / [`bounded_max`]: the [`Ord`] conveniences
//! - [`BoundedSelect`]: the slice entry point, which additionally knows the
//!   source length up front and switches to a full sort when `k` is a large
//!   fraction of it
//!
//! # Examples
//!
//! ```rust
//! use seqops::select::{BoundedSelect, bounded_min};
//!
//! let numbers = [7, 1, 6, 2, 8, 3, 9];
//!
//! // Streaming selection over any iterable
//! assert_eq!(bounded_min(numbers, 3), vec![1, 2, 3]);
//!
//! // Size-aware selection on slices
//! assert_eq!(numbers.bounded_max(3), vec![7, 8, 9]);
//! ```

mod bounded;

pub use bounded::{
    BoundedSelect, bounded_max, bounded_max_by, bounded_min, bounded_min_by,
};
