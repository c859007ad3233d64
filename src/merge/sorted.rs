//! Lazy two-pointer merging of pre-sorted sequences.
//!
//! [`MergeSortedSets`] is the single iterator behind every merge and set
//! operation in this module. It holds one fused, peekable cursor per input
//! and, at each step, compares the two current elements with the caller's
//! strictly-precedes predicate:
//!
//! - first's element precedes: it is exclusive to the first input
//! - second's element precedes: it is exclusive to the second input
//! - neither precedes: the elements are equivalent and form a shared pair;
//!   both cursors advance together
//!
//! The classified element is then tested against the active
//! [`MergerSubset`]; elements of a dropped class are consumed but not
//! emitted. Once one input is exhausted the other is drained with exclusive
//! provenance and no further comparisons. Under [`MergerSubset::Sum`] a
//! shared pair yields both members (first-side copy first) through a
//! one-element pending slot.
//!
//! # Invariant
//!
//! Both cursors advance monotonically and never revisit a position; for
//! sorted inputs the output is non-decreasing under the predicate for every
//! retention policy.
//!
//! # Complexity
//!
//! O(m + n) elements and at most two predicate calls per step, for both the
//! lazy iterators and the eager `_to_vec` forms. No auxiliary storage is
//! used beyond the pending slot.

use std::iter::{Fuse, FusedIterator, Peekable};

use super::subset::MergerSubset;

/// A full sorted merge: [`MergeSortedSets`] retaining everything.
pub type MergeSorted<I, J, F> = MergeSortedSets<I, J, F>;

/// Lazy merge of two sorted inputs filtered by a [`MergerSubset`].
///
/// Created by [`merge_sorted_by`], [`merge_sorted_sets_by`] and their
/// [`Ord`] conveniences. The inputs must already be sorted by the same
/// predicate; this is a caller contract and is not checked.
pub struct MergeSortedSets<I, J, F>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
{
    first: Peekable<Fuse<I>>,
    second: Peekable<Fuse<J>>,
    filter: MergerSubset,
    pending_shared: Option<I::Item>,
    is_less: F,
}

/// Outcome of one cursor comparison, decided before any cursor moves.
#[derive(Clone, Copy)]
enum Step {
    Finished,
    DrainFirst,
    DrainSecond,
    ExclusiveFirst,
    ExclusiveSecond,
    Shared,
}

impl<I, J, F> Iterator for MergeSortedSets<I, J, F>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(element) = self.pending_shared.take() {
            return Some(element);
        }

        loop {
            let step = match (self.first.peek(), self.second.peek()) {
                (None, None) => Step::Finished,
                (Some(_), None) => Step::DrainFirst,
                (None, Some(_)) => Step::DrainSecond,
                (Some(from_first), Some(from_second)) => {
                    if (self.is_less)(from_first, from_second) {
                        Step::ExclusiveFirst
                    } else if (self.is_less)(from_second, from_first) {
                        Step::ExclusiveSecond
                    } else {
                        Step::Shared
                    }
                }
            };

            match step {
                Step::Finished => return None,
                Step::DrainFirst => {
                    // The remainder is all one class; when that class is
                    // dropped there is nothing left to emit.
                    if !self.filter.emits_exclusives_to_first() {
                        return None;
                    }
                    return self.first.next();
                }
                Step::DrainSecond => {
                    if !self.filter.emits_exclusives_to_second() {
                        return None;
                    }
                    return self.second.next();
                }
                Step::ExclusiveFirst => {
                    let element = self.first.next();
                    if self.filter.emits_exclusives_to_first() {
                        return element;
                    }
                }
                Step::ExclusiveSecond => {
                    let element = self.second.next();
                    if self.filter.emits_exclusives_to_second() {
                        return element;
                    }
                }
                Step::Shared => {
                    let from_first = self.first.next();
                    let from_second = self.second.next();
                    if self.filter.emits_shared_elements() {
                        if self.filter == MergerSubset::Sum {
                            self.pending_shared = from_second;
                        }
                        return from_first;
                    }
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (first_lower, first_upper) = self.first.size_hint();
        let (second_lower, second_upper) = self.second.size_hint();

        let summed_upper = match (first_upper, second_upper) {
            (Some(first), Some(second)) => first.checked_add(second),
            _ => None,
        };

        let (lower, upper) = match self.filter {
            MergerSubset::None => (0, Some(0)),
            MergerSubset::FirstWithoutSecond => {
                let lower = second_upper
                    .map_or(0, |upper| first_lower.saturating_sub(upper));
                (lower, first_upper)
            }
            MergerSubset::SecondWithoutFirst => {
                let lower = first_upper
                    .map_or(0, |upper| second_lower.saturating_sub(upper));
                (lower, second_upper)
            }
            MergerSubset::SymmetricDifference => {
                // Each shared pair removes one element from each side, so
                // at least the imbalance between the sides survives.
                let from_first = second_upper
                    .map_or(0, |upper| first_lower.saturating_sub(upper));
                let from_second = first_upper
                    .map_or(0, |upper| second_lower.saturating_sub(upper));
                (from_first.max(from_second), summed_upper)
            }
            MergerSubset::Intersection => {
                let upper = match (first_upper, second_upper) {
                    (Some(first), Some(second)) => Some(first.min(second)),
                    (one_side, None) => one_side,
                    (None, one_side) => one_side,
                };
                (0, upper)
            }
            // Every element of the kept side produces exactly one output:
            // exclusives directly, shared ones as the pair's single copy.
            MergerSubset::First => (first_lower, first_upper),
            MergerSubset::Second => (second_lower, second_upper),
            MergerSubset::Union => (first_lower.max(second_lower), summed_upper),
            MergerSubset::Sum => (first_lower.saturating_add(second_lower), summed_upper),
        };

        let pending = usize::from(self.pending_shared.is_some());
        (
            lower.saturating_add(pending),
            upper.and_then(|bound| bound.checked_add(pending)),
        )
    }
}

impl<I, J, F> FusedIterator for MergeSortedSets<I, J, F>
where
    I: Iterator,
    J: Iterator<Item = I::Item>,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
}

impl<I, J, F> Clone for MergeSortedSets<I, J, F>
where
    I: Iterator + Clone,
    J: Iterator<Item = I::Item> + Clone,
    I::Item: Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            filter: self.filter,
            pending_shared: self.pending_shared.clone(),
            is_less: self.is_less.clone(),
        }
    }
}

/// Merges two sorted inputs into one sorted sequence, lazily.
///
/// Every element of both inputs appears in the output: this is a merge,
/// not a union, and its length is always `|first| + |second|`. Equivalent
/// elements from the first input precede their counterparts from the
/// second.
///
/// Both inputs must already be sorted by `is_less` (a strict weak
/// ordering); this is a caller contract and is not checked.
///
/// # Examples
///
/// ```rust
/// use seqops::merge::merge_sorted_by;
///
/// let merged: Vec<i32> =
///     merge_sorted_by([0, 2, 4], [1, 2, 3], |a, b| a < b).collect();
/// assert_eq!(merged, vec![0, 1, 2, 2, 3, 4]);
/// ```
pub fn merge_sorted_by<A, B, F>(
    first: A,
    second: B,
    is_less: F,
) -> MergeSorted<A::IntoIter, B::IntoIter, F>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
    F: FnMut(&A::Item, &A::Item) -> bool,
{
    merge_sorted_sets_by(first, second, MergerSubset::Sum, is_less)
}

/// Merges two sorted inputs into one sorted sequence by [`Ord`], lazily.
///
/// # Examples
///
/// ```rust
/// use seqops::merge::merge_sorted;
///
/// let merged: Vec<i32> = merge_sorted([1, 3, 5], [2, 4, 6]).collect();
/// assert_eq!(merged, vec![1, 2, 3, 4, 5, 6]);
/// ```
pub fn merge_sorted<A, B>(
    first: A,
    second: B,
) -> MergeSorted<A::IntoIter, B::IntoIter, fn(&A::Item, &A::Item) -> bool>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
    A::Item: Ord,
{
    merge_sorted_by(first, second, ordered_less)
}

/// Merges two sorted inputs, retaining the provenance classes selected by
/// `retaining`, lazily.
///
/// This computes set operations directly over sorted input in a single
/// pass: no hashing, no intermediate sets, and the output is sorted for
/// every retention policy.
///
/// Both inputs must already be sorted by `is_less` (a strict weak
/// ordering); this is a caller contract and is not checked.
///
/// # Examples
///
/// ```rust
/// use seqops::merge::{MergerSubset, merge_sorted_sets_by};
///
/// let first = [0, 1, 1, 2, 5, 10];
/// let second = [-1, 0, 1, 2, 2, 7, 10, 20];
///
/// let intersection: Vec<i32> =
///     merge_sorted_sets_by(first, second, MergerSubset::Intersection, |a, b| a < b)
///         .collect();
/// assert_eq!(intersection, vec![0, 1, 2, 10]);
/// ```
pub fn merge_sorted_sets_by<A, B, F>(
    first: A,
    second: B,
    retaining: MergerSubset,
    is_less: F,
) -> MergeSortedSets<A::IntoIter, B::IntoIter, F>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
    F: FnMut(&A::Item, &A::Item) -> bool,
{
    MergeSortedSets {
        first: first.into_iter().fuse().peekable(),
        second: second.into_iter().fuse().peekable(),
        filter: retaining,
        pending_shared: None,
        is_less,
    }
}

/// Merges two sorted inputs with a retention policy, ordered by [`Ord`],
/// lazily.
///
/// # Examples
///
/// ```rust
/// use seqops::merge::{MergerSubset, merge_sorted_sets};
///
/// let union: Vec<i32> =
///     merge_sorted_sets([1, 2, 3], [2, 3, 4], MergerSubset::Union).collect();
/// assert_eq!(union, vec![1, 2, 3, 4]);
/// ```
pub fn merge_sorted_sets<A, B>(
    first: A,
    second: B,
    retaining: MergerSubset,
) -> MergeSortedSets<A::IntoIter, B::IntoIter, fn(&A::Item, &A::Item) -> bool>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
    A::Item: Ord,
{
    merge_sorted_sets_by(first, second, retaining, ordered_less)
}

/// Eagerly merges two sorted inputs into a `Vec`.
///
/// Element-for-element identical to collecting [`merge_sorted_by`]; the
/// eager form reserves the exact output capacity up front when the input
/// sizes are known.
pub fn merge_sorted_to_vec_by<A, B, F>(first: A, second: B, is_less: F) -> Vec<A::Item>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
    F: FnMut(&A::Item, &A::Item) -> bool,
{
    collect_with_reserved_capacity(merge_sorted_by(first, second, is_less))
}

/// Eagerly merges two sorted inputs into a `Vec` by [`Ord`].
pub fn merge_sorted_to_vec<A, B>(first: A, second: B) -> Vec<A::Item>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
    A::Item: Ord,
{
    merge_sorted_to_vec_by(first, second, ordered_less)
}

/// Eagerly merges two sorted inputs into a `Vec` with a retention policy.
///
/// Element-for-element identical to collecting [`merge_sorted_sets_by`].
pub fn merge_sorted_sets_to_vec_by<A, B, F>(
    first: A,
    second: B,
    retaining: MergerSubset,
    is_less: F,
) -> Vec<A::Item>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
    F: FnMut(&A::Item, &A::Item) -> bool,
{
    collect_with_reserved_capacity(merge_sorted_sets_by(first, second, retaining, is_less))
}

/// Eagerly merges two sorted inputs into a `Vec` with a retention policy,
/// ordered by [`Ord`].
pub fn merge_sorted_sets_to_vec<A, B>(
    first: A,
    second: B,
    retaining: MergerSubset,
) -> Vec<A::Item>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
    A::Item: Ord,
{
    merge_sorted_sets_to_vec_by(first, second, retaining, ordered_less)
}

fn ordered_less<T: Ord>(left: &T, right: &T) -> bool {
    left < right
}

fn collect_with_reserved_capacity<I: Iterator>(iterator: I) -> Vec<I::Item> {
    let (lower, upper) = iterator.size_hint();
    let mut output = Vec::with_capacity(upper.unwrap_or(lower));
    output.extend(iterator);
    output
}

static_assertions::assert_impl_all!(
    MergeSortedSets<std::vec::IntoIter<i32>, std::vec::IntoIter<i32>, fn(&i32, &i32) -> bool>:
    Send, Sync, Clone
);
