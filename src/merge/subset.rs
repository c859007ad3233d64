//! Retention policies for sorted-sequence merging.

/// Which provenance classes a sorted-sequence merge retains.
///
/// A two-pointer merge classifies every element it encounters into one of
/// three provenance classes: exclusive to the first input, exclusive to the
/// second input, or shared (present in both under the ordering predicate's
/// equivalence). The eight flag-determined variants of this enum select any
/// combination of those classes; [`MergerSubset::Sum`] additionally re-emits
/// both members of each shared pair instead of collapsing them, yielding a
/// true multiset union.
///
/// | Variant               | first-only | second-only | shared          |
/// |-----------------------|------------|-------------|-----------------|
/// | `None`                | no         | no          | no              |
/// | `FirstWithoutSecond`  | yes        | no          | no              |
/// | `SecondWithoutFirst`  | no         | yes         | no              |
/// | `SymmetricDifference` | yes        | yes         | no              |
/// | `Intersection`        | no         | no          | yes             |
/// | `First`               | yes        | no          | yes             |
/// | `Second`              | no         | yes         | yes             |
/// | `Union`               | yes        | yes         | yes             |
/// | `Sum`                 | yes        | yes         | yes, both copies |
///
/// # Examples
///
/// ```rust
/// use seqops::merge::MergerSubset;
///
/// let subset = MergerSubset::from_flags(true, true, false);
/// assert_eq!(subset, MergerSubset::SymmetricDifference);
/// assert!(subset.emits_exclusives_to_first());
/// assert!(!subset.emits_shared_elements());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MergerSubset {
    /// Retain nothing.
    None,
    /// Retain only elements exclusive to the first input.
    FirstWithoutSecond,
    /// Retain only elements exclusive to the second input.
    SecondWithoutFirst,
    /// Retain elements exclusive to either input, dropping shared ones.
    SymmetricDifference,
    /// Retain only shared elements, one copy per pair.
    Intersection,
    /// Retain every element of the first input: its exclusives plus one
    /// copy of each shared pair.
    First,
    /// Retain every element of the second input: its exclusives plus one
    /// copy of each shared pair.
    Second,
    /// Retain all three classes, collapsing each shared pair to one copy.
    Union,
    /// Retain all three classes, emitting both members of each shared pair
    /// (first-side copy first). The only variant whose output length is
    /// always `|first| + |second|`.
    Sum,
}

impl MergerSubset {
    /// Builds the variant uniquely determined by the three provenance
    /// flags.
    ///
    /// [`MergerSubset::Sum`] shares [`MergerSubset::Union`]'s flags and is
    /// therefore never returned here; it exists only as an explicit choice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqops::merge::MergerSubset;
    ///
    /// assert_eq!(MergerSubset::from_flags(false, false, true), MergerSubset::Intersection);
    /// assert_eq!(MergerSubset::from_flags(true, true, true), MergerSubset::Union);
    /// ```
    #[must_use]
    pub const fn from_flags(
        keep_exclusives_to_first: bool,
        keep_exclusives_to_second: bool,
        keep_shared_elements: bool,
    ) -> Self {
        match (
            keep_exclusives_to_first,
            keep_exclusives_to_second,
            keep_shared_elements,
        ) {
            (false, false, false) => Self::None,
            (true, false, false) => Self::FirstWithoutSecond,
            (false, true, false) => Self::SecondWithoutFirst,
            (true, true, false) => Self::SymmetricDifference,
            (false, false, true) => Self::Intersection,
            (true, false, true) => Self::First,
            (false, true, true) => Self::Second,
            (true, true, true) => Self::Union,
        }
    }

    /// Whether elements exclusive to the first input are emitted.
    #[inline]
    #[must_use]
    pub const fn emits_exclusives_to_first(self) -> bool {
        matches!(
            self,
            Self::FirstWithoutSecond
                | Self::SymmetricDifference
                | Self::First
                | Self::Union
                | Self::Sum
        )
    }

    /// Whether elements exclusive to the second input are emitted.
    #[inline]
    #[must_use]
    pub const fn emits_exclusives_to_second(self) -> bool {
        matches!(
            self,
            Self::SecondWithoutFirst
                | Self::SymmetricDifference
                | Self::Second
                | Self::Union
                | Self::Sum
        )
    }

    /// Whether shared elements are emitted.
    #[inline]
    #[must_use]
    pub const fn emits_shared_elements(self) -> bool {
        matches!(
            self,
            Self::Intersection | Self::First | Self::Second | Self::Union | Self::Sum
        )
    }
}

static_assertions::assert_impl_all!(MergerSubset: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;

    const FLAG_DETERMINED: [MergerSubset; 8] = [
        MergerSubset::None,
        MergerSubset::FirstWithoutSecond,
        MergerSubset::SecondWithoutFirst,
        MergerSubset::SymmetricDifference,
        MergerSubset::Intersection,
        MergerSubset::First,
        MergerSubset::Second,
        MergerSubset::Union,
    ];

    #[test]
    fn from_flags_round_trips_flag_determined_variants() {
        for subset in FLAG_DETERMINED {
            let rebuilt = MergerSubset::from_flags(
                subset.emits_exclusives_to_first(),
                subset.emits_exclusives_to_second(),
                subset.emits_shared_elements(),
            );
            assert_eq!(rebuilt, subset);
        }
    }

    #[test]
    fn sum_shares_union_flags_but_is_distinct() {
        assert_eq!(
            MergerSubset::Sum.emits_exclusives_to_first(),
            MergerSubset::Union.emits_exclusives_to_first()
        );
        assert_eq!(
            MergerSubset::Sum.emits_exclusives_to_second(),
            MergerSubset::Union.emits_exclusives_to_second()
        );
        assert_eq!(
            MergerSubset::Sum.emits_shared_elements(),
            MergerSubset::Union.emits_shared_elements()
        );
        assert_ne!(MergerSubset::Sum, MergerSubset::Union);
    }

    #[test]
    fn none_emits_nothing() {
        assert!(!MergerSubset::None.emits_exclusives_to_first());
        assert!(!MergerSubset::None.emits_exclusives_to_second());
        assert!(!MergerSubset::None.emits_shared_elements());
    }
}
