//! Single-pass sequence adapters.
//!
//! Small companions to the selection and merging engines, each a plain
//! left-to-right pass:
//!
//! - [`uniqued`] / [`uniqued_on`]: lazy first-occurrence deduplication
//! - [`cycled_times`]: repeats a cloneable iterator a fixed number of times
//! - [`first_divergence`] / [`first_divergence_eq`]: the first position at
//!   which two sequences stop agreeing
//!
//! # Examples
//!
//! ```rust
//! use seqops::adapt::{cycled_times, first_divergence_eq, uniqued};
//!
//! let unique: Vec<i32> = uniqued([3, 1, 3, 2, 1]).collect();
//! assert_eq!(unique, vec![3, 1, 2]);
//!
//! let repeated: Vec<i32> = cycled_times([1, 2], 3).collect();
//! assert_eq!(repeated, vec![1, 2, 1, 2, 1, 2]);
//!
//! assert_eq!(first_divergence_eq([1, 2, 3], [1, 2, 4]), Some(2));
//! ```

mod cycle;
mod divergence;
mod unique;

pub use cycle::{CycledTimes, cycled_times};
pub use divergence::{first_divergence, first_divergence_eq};
pub use unique::{Uniqued, UniquedOn, uniqued, uniqued_on};
