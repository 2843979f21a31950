//! A compact set of candidate digits.

use std::fmt::{self, Debug};

use crate::digit::Digit;

/// A set of digits 1-9, stored as a 9-bit mask.
///
/// Bit `i` represents digit `i + 1`. This is the domain representation used
/// by the solver: one `DigitSet` per cell, shrinking as constraints
/// propagate. Iteration always yields digits in ascending order, which keeps
/// candidate ordering stable across runs.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Digit, DigitSet};
///
/// let mut set = DigitSet::FULL;
/// set.remove(Digit::D4);
/// set.remove(Digit::D9);
///
/// assert_eq!(set.len(), 7);
/// assert!(!set.contains(Digit::D4));
/// assert_eq!(set.iter().next(), Some(Digit::D1));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitSet(u16);

const ALL_BITS: u16 = 0x1ff;

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing every digit 1-9.
    pub const FULL: Self = Self(ALL_BITS);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing exactly one digit.
    #[must_use]
    pub const fn singleton(digit: Digit) -> Self {
        Self(bit(digit))
    }

    /// Returns `true` if `digit` is in the set.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & bit(digit) != 0
    }

    /// Adds a digit to the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.0 |= bit(digit);
    }

    /// Removes a digit from the set.
    pub const fn remove(&mut self, digit: Digit) {
        self.0 &= !bit(digit);
    }

    /// Returns a copy of the set with `digit` removed.
    #[must_use]
    pub const fn without(self, digit: Digit) -> Self {
        Self(self.0 & !bit(digit))
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the sole member of the set, or `None` if the set does not
    /// contain exactly one digit.
    #[must_use]
    pub fn as_single(self) -> Option<Digit> {
        if self.0.count_ones() == 1 {
            #[expect(clippy::cast_possible_truncation)]
            Digit::new(self.0.trailing_zeros() as u8 + 1)
        } else {
            None
        }
    }

    /// Iterates over the digits in the set in ascending order.
    pub fn iter(self) -> Iter {
        Iter(self.0)
    }
}

const fn bit(digit: Digit) -> u16 {
    1 << (digit.value() - 1)
}

impl Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Digit::value)).finish()
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over the digits of a [`DigitSet`].
#[derive(Debug, Clone)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let digit = Digit::new(self.0.trailing_zeros() as u8 + 1)?;
        self.0 &= self.0 - 1;
        Some(digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_full() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert!(DigitSet::EMPTY.is_empty());
        assert_eq!(DigitSet::FULL.len(), 9);
        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
            assert!(!DigitSet::EMPTY.contains(digit));
        }
    }

    #[test]
    fn test_insert_remove() {
        let mut set = DigitSet::new();
        set.insert(Digit::D3);
        set.insert(Digit::D3);
        set.insert(Digit::D8);
        assert_eq!(set.len(), 2);

        set.remove(Digit::D3);
        assert!(!set.contains(Digit::D3));
        assert!(set.contains(Digit::D8));
    }

    #[test]
    fn test_without_does_not_mutate() {
        let set = DigitSet::from_iter([Digit::D1, Digit::D2]);
        let smaller = set.without(Digit::D1);
        assert_eq!(set.len(), 2);
        assert_eq!(smaller.len(), 1);
        assert!(!smaller.contains(Digit::D1));
    }

    #[test]
    fn test_as_single() {
        assert_eq!(DigitSet::EMPTY.as_single(), None);
        assert_eq!(DigitSet::FULL.as_single(), None);
        assert_eq!(DigitSet::singleton(Digit::D6).as_single(), Some(Digit::D6));
    }

    #[test]
    fn test_iteration_is_ascending() {
        let set = DigitSet::from_iter([Digit::D9, Digit::D2, Digit::D5]);
        let digits: Vec<_> = set.iter().collect();
        assert_eq!(digits, vec![Digit::D2, Digit::D5, Digit::D9]);
    }

    #[test]
    fn test_debug_lists_members() {
        let set = DigitSet::from_iter([Digit::D1, Digit::D7]);
        assert_eq!(format!("{set:?}"), "{1, 7}");
    }
}
