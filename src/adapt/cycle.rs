//! Finite cyclic repetition.

use std::iter::FusedIterator;

/// Repeats a cloneable iterator exactly `times` full passes, lazily.
///
/// `times == 0` yields nothing; an empty source yields nothing regardless
/// of `times`. Unlike [`Iterator::cycle`], the result is finite and can be
/// collected.
///
/// # Examples
///
/// ```rust
/// use seqops::adapt::cycled_times;
///
/// let repeated: Vec<i32> = cycled_times([7, 8], 2).collect();
/// assert_eq!(repeated, vec![7, 8, 7, 8]);
///
/// assert_eq!(cycled_times([7, 8], 0).count(), 0);
/// ```
pub fn cycled_times<I>(source: I, times: usize) -> CycledTimes<I::IntoIter>
where
    I: IntoIterator,
    I::IntoIter: Clone,
{
    let iterator = source.into_iter();
    CycledTimes {
        base: iterator.clone(),
        current: iterator,
        remaining: times,
    }
}

/// Iterator returned by [`cycled_times`].
#[derive(Clone)]
pub struct CycledTimes<I: Iterator + Clone> {
    base: I,
    current: I,
    remaining: usize,
}

impl<I: Iterator + Clone> Iterator for CycledTimes<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.remaining == 0 {
            return None;
        }
        loop {
            if let Some(element) = self.current.next() {
                return Some(element);
            }
            self.remaining -= 1;
            if self.remaining == 0 {
                return None;
            }
            self.current = self.base.clone();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.remaining == 0 {
            return (0, Some(0));
        }
        let (current_lower, current_upper) = self.current.size_hint();
        let (base_lower, base_upper) = self.base.size_hint();
        let full_passes = self.remaining - 1;

        let lower = current_lower.saturating_add(base_lower.saturating_mul(full_passes));
        let upper = match (current_upper, base_upper) {
            (Some(current), Some(base)) => base
                .checked_mul(full_passes)
                .and_then(|repeats| repeats.checked_add(current)),
            _ => None,
        };
        (lower, upper)
    }
}

impl<I: Iterator + Clone> FusedIterator for CycledTimes<I> {}
