//! Streaming and size-aware bounded selection.
//!
//! The selection engine maintains an ordered working buffer of at most `k`
//! elements, filled from the front of the source and then mutated by
//! replace-and-reinsert as better elements arrive. Small selections stay in
//! inline storage (`SmallVec`, up to 8 elements) and never touch the heap.
//!
//! # Invariant
//!
//! At every step the buffer holds the `k` best elements seen so far, sorted
//! by the predicate, with equivalent elements in first-occurrence order. No
//! element observed and discarded is strictly better than the buffer's
//! worst element.
//!
//! # Time Complexity
//!
//! | Operation                 | Streaming            | Slice fallback |
//! |---------------------------|----------------------|----------------|
//! | `bounded_min_by`          | O(k log k + n·k)     | n/a            |
//! | `bounded_max_by`          | O(k log k + n·k)     | n/a            |
//! | `[T]::bounded_min_by`     | O(k log k + n·k)     | O(n log n)     |
//! | `[T]::bounded_max_by`     | O(k log k + n·k)     | O(n log n)     |
//!
//! Each streaming probe is a single predicate call against the buffer
//! boundary; only improving elements pay the O(log k) binary search and the
//! O(k) shift. The slice entry points switch to one stable sort of a copy
//! when `k >= n / 10`, where the incremental algorithm stops being cheaper.

use smallvec::SmallVec;
use std::cmp::Ordering;

/// Elements up to this count are selected without heap allocation.
const INLINE_BUFFER_LEN: usize = 8;

/// Upper bound on speculative buffer preallocation for unsized sources.
const MAX_PREALLOCATION: usize = 1 << 16;

/// The ordered working buffer of a bounded selection.
type SelectionBuffer<T> = SmallVec<[T; INLINE_BUFFER_LEN]>;

/// Derives a total ordering decision from a strictly-precedes predicate.
///
/// Elements that precede in neither direction are equivalent; the stable
/// sorts and binary searches built on this keep them in source order.
fn resolve_ordering<T, F>(is_less: &mut F, left: &T, right: &T) -> Ordering
where
    F: FnMut(&T, &T) -> bool,
{
    if is_less(left, right) {
        Ordering::Less
    } else if is_less(right, left) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Consumes up to `count` elements into a freshly sorted working buffer.
fn fill_buffer<I, F>(iterator: &mut I, count: usize, is_less: &mut F) -> SelectionBuffer<I::Item>
where
    I: Iterator,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    let (_, upper_bound) = iterator.size_hint();
    let capacity = upper_bound
        .unwrap_or(MAX_PREALLOCATION)
        .min(count)
        .min(MAX_PREALLOCATION);

    let mut buffer = SelectionBuffer::with_capacity(capacity);
    buffer.extend(iterator.by_ref().take(count));
    buffer.sort_by(|left, right| resolve_ordering(is_less, left, right));
    buffer
}

/// Returns the `count` smallest elements of `source`, sorted ascending.
///
/// The result has length `min(count, |source|)`. Equivalent elements keep
/// their relative order from the source, and when more than `count`
/// elements are tied at the cutoff rank the earliest occurrences are
/// retained.
///
/// `is_less` must be a strict weak ordering ("strictly precedes"); this is
/// a caller contract and is not checked.
///
/// `count == 0` returns an empty vector without reading the source or
/// invoking the predicate.
///
/// # Complexity
///
/// O(k log k + n·k) worst case; O(n) predicate calls when most elements
/// fail the boundary probe.
///
/// # Examples
///
/// ```rust
/// use seqops::select::bounded_min_by;
///
/// let words = ["sled", "dog", "power", "at"];
/// let shortest = bounded_min_by(words, 2, |a, b| a.len() < b.len());
/// assert_eq!(shortest, vec!["at", "dog"]);
/// ```
pub fn bounded_min_by<I, F>(source: I, count: usize, mut is_less: F) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    if count == 0 {
        return Vec::new();
    }

    let mut iterator = source.into_iter();
    let mut buffer = fill_buffer(&mut iterator, count, &mut is_less);

    for element in iterator {
        // `take(count)` leaves elements behind only once the buffer is full.
        let improves = match buffer.last() {
            Some(current_worst) => is_less(&element, current_worst),
            None => false,
        };
        if !improves {
            continue;
        }

        // Upper-bound search: equivalent elements already present stay in
        // front of the newcomer.
        let insertion_index = buffer.partition_point(|existing| !is_less(&element, existing));
        debug_assert!(insertion_index < buffer.len());
        buffer.pop();
        buffer.insert(insertion_index, element);
    }

    buffer.into_vec()
}

/// Returns the `count` smallest elements of `source`, sorted ascending.
///
/// Equivalent to [`bounded_min_by`] with the order defined by [`Ord`].
///
/// # Examples
///
/// ```rust
/// use seqops::select::bounded_min;
///
/// let numbers = [7, 1, 6, 2, 8, 3, 9];
/// assert_eq!(bounded_min(numbers, 3), vec![1, 2, 3]);
/// ```
pub fn bounded_min<I>(source: I, count: usize) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Ord,
{
    bounded_min_by(source, count, |left, right| left < right)
}

/// Returns the `count` largest elements of `source`, sorted ascending.
///
/// The structural mirror of [`bounded_min_by`]: the boundary probe compares
/// against the buffer minimum, and an admitted element displaces it by
/// rotating the prefix one slot down rather than performing a separate
/// remove and insert.
///
/// The result has length `min(count, |source|)`. Equivalent elements keep
/// their relative order from the source. When more than `count` elements
/// are tied at the cutoff rank, which of the tied elements are retained is
/// unspecified.
///
/// `count == 0` returns an empty vector without reading the source or
/// invoking the predicate.
///
/// # Examples
///
/// ```rust
/// use seqops::select::bounded_max_by;
///
/// let words = ["sled", "dog", "power", "at"];
/// let longest = bounded_max_by(words, 2, |a, b| a.len() < b.len());
/// assert_eq!(longest, vec!["sled", "power"]);
/// ```
pub fn bounded_max_by<I, F>(source: I, count: usize, mut is_less: F) -> Vec<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    if count == 0 {
        return Vec::new();
    }

    let mut iterator = source.into_iter();
    let mut buffer = fill_buffer(&mut iterator, count, &mut is_less);

    for element in iterator {
        let improves = match buffer.first() {
            Some(current_least) => is_less(current_least, &element),
            None => false,
        };
        if !improves {
            continue;
        }

        let insertion_index = buffer.partition_point(|existing| !is_less(&element, existing));
        // The probe admitted `element`, so index 0 is in the prefix.
        debug_assert!(insertion_index >= 1);

        // Drop the minimum and close the gap with a single shift; removing
        // then inserting would move the same prefix twice.
        buffer[..insertion_index].rotate_left(1);
        buffer[insertion_index - 1] = element;
    }

    buffer.into_vec()
}

/// Returns the `count` largest elements of `source`, sorted ascending.
///
/// Equivalent to [`bounded_max_by`] with the order defined by [`Ord`].
///
/// # Examples
///
/// ```rust
/// use seqops::select::bounded_max;
///
/// let numbers = [7, 1, 6, 2, 8, 3, 9];
/// assert_eq!(bounded_max(numbers, 3), vec![7, 8, 9]);
/// ```
pub fn bounded_max<I>(source: I, count: usize) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Ord,
{
    bounded_max_by(source, count, |left, right| left < right)
}

/// Bounded selection over sources whose length is known up front.
///
/// Implemented for slices (and through deref coercion for `Vec<T>` and
/// arrays). Knowing the total length enables an adaptive strategy: once
/// `count` reaches 10% of the source length, one stable sort of a copy is
/// cheaper than `count`-deep incremental insertion, so these entry points
/// sort and slice instead. The output is the same either way.
///
/// # Examples
///
/// ```rust
/// use seqops::select::BoundedSelect;
///
/// let numbers = vec![7, 1, 6, 2, 8, 3, 9];
/// assert_eq!(numbers.bounded_min(3), vec![1, 2, 3]);
/// assert_eq!(numbers.bounded_max(3), vec![7, 8, 9]);
/// ```
pub trait BoundedSelect {
    /// The element type produced by selection.
    type Element;

    /// Returns the `count` smallest elements, sorted ascending by
    /// `is_less`, preserving the source order of equivalent elements.
    fn bounded_min_by<F>(&self, count: usize, is_less: F) -> Vec<Self::Element>
    where
        F: FnMut(&Self::Element, &Self::Element) -> bool;

    /// Returns the `count` largest elements, sorted ascending by
    /// `is_less`, preserving the source order of equivalent elements.
    fn bounded_max_by<F>(&self, count: usize, is_less: F) -> Vec<Self::Element>
    where
        F: FnMut(&Self::Element, &Self::Element) -> bool;

    /// Returns the `count` smallest elements in ascending [`Ord`] order.
    fn bounded_min(&self, count: usize) -> Vec<Self::Element>
    where
        Self::Element: Ord,
    {
        self.bounded_min_by(count, |left, right| left < right)
    }

    /// Returns the `count` largest elements in ascending [`Ord`] order.
    fn bounded_max(&self, count: usize) -> Vec<Self::Element>
    where
        Self::Element: Ord,
    {
        self.bounded_max_by(count, |left, right| left < right)
    }
}

impl<T: Clone> BoundedSelect for [T] {
    type Element = T;

    fn bounded_min_by<F>(&self, count: usize, mut is_less: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> bool,
    {
        if count == 0 {
            return Vec::new();
        }

        // Full-sort fallback: `len / 10` uses integer division, so sources
        // shorter than 10 elements always sort.
        if count >= self.len() / 10 {
            let mut sorted = self.to_vec();
            sorted.sort_by(|left, right| resolve_ordering(&mut is_less, left, right));
            sorted.truncate(count);
            return sorted;
        }

        bounded_min_by(self.iter().cloned(), count, is_less)
    }

    fn bounded_max_by<F>(&self, count: usize, mut is_less: F) -> Vec<T>
    where
        F: FnMut(&T, &T) -> bool,
    {
        if count == 0 {
            return Vec::new();
        }

        if count >= self.len() / 10 {
            let mut sorted = self.to_vec();
            sorted.sort_by(|left, right| resolve_ordering(&mut is_less, left, right));
            return sorted.split_off(sorted.len() - count.min(sorted.len()));
        }

        bounded_max_by(self.iter().cloned(), count, is_less)
    }
}
