//! Candidate digits (1-9) for a single cell.
//!
//! [`DigitSet`] is a `u16` bitset where bits 0-8 represent digits 1-9.
//! Iteration is always in ascending digit order; search relies on that
//! order when branching over a cell's remaining candidates.
//!
//! # Examples
//!
//! ```
//! use xudoku_core::{Digit, DigitSet};
//!
//! let mut candidates = DigitSet::FULL;
//! candidates.remove(Digit::D5);
//! candidates.remove(Digit::D7);
//!
//! assert_eq!(candidates.len(), 7);
//! assert!(!candidates.contains(Digit::D5));
//! assert!(candidates.contains(Digit::D1));
//! ```

use std::{
    fmt::{self, Display},
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign},
};

use crate::digit::Digit;

/// A set of candidate digits (1-9) for a single cell.
///
/// A cell is *solved* when its set has exactly one digit; an empty set marks
/// a contradiction in the surrounding board state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

const FULL_BITS: u16 = 0x1ff;

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing all nine digits.
    pub const FULL: Self = Self(FULL_BITS);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set holding exactly one digit.
    #[must_use]
    pub const fn single_digit(digit: Digit) -> Self {
        Self(1 << (digit.value() - 1))
    }

    /// Inserts a digit into the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.0 |= 1 << (digit.value() - 1);
    }

    /// Removes a digit from the set. No-op if absent.
    pub const fn remove(&mut self, digit: Digit) {
        self.0 &= !(1 << (digit.value() - 1));
    }

    /// Returns a copy of the set with `digit` removed.
    #[must_use]
    pub const fn removed(mut self, digit: Digit) -> Self {
        self.remove(digit);
        self
    }

    /// Returns `true` if the set contains `digit`.
    #[must_use]
    pub const fn contains(&self, digit: Digit) -> bool {
        self.0 & (1 << (digit.value() - 1)) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set has no digits.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the set has exactly one digit.
    #[must_use]
    pub const fn is_single(&self) -> bool {
        self.0.count_ones() == 1
    }

    /// Returns the sole digit if the set has exactly one.
    #[must_use]
    pub fn single(&self) -> Option<Digit> {
        if !self.is_single() {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let bit = self.0.trailing_zeros() as u8;
        Some(Digit::from_value(bit + 1))
    }

    /// Iterates over the digits in ascending order.
    #[must_use]
    pub const fn iter(&self) -> Iter {
        Iter(self.0)
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl IntoIterator for &DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the digits of a [`DigitSet`], ascending.
#[derive(Debug, Clone)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let bit = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Digit::from_value(bit + 1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Display for DigitSet {
    /// Formats the set as its concatenated digit characters, e.g. `"179"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::digit::Digit::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = DigitSet::new();
        set.insert(D1);
        set.insert(D9);
        assert!(set.contains(D1));
        assert!(set.contains(D9));
        assert!(!set.contains(D5));
        assert_eq!(set.len(), 2);

        set.remove(D1);
        assert!(!set.contains(D1));
        set.remove(D1); // removing again is a no-op
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_single() {
        assert_eq!(DigitSet::EMPTY.single(), None);
        assert_eq!(DigitSet::FULL.single(), None);
        assert_eq!(DigitSet::single_digit(D7).single(), Some(D7));
        assert!(DigitSet::single_digit(D7).is_single());
    }

    #[test]
    fn test_removed_leaves_original() {
        let set = DigitSet::from_iter([D2, D3]);
        assert_eq!(set.removed(D2), DigitSet::single_digit(D3));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_iteration_ascending() {
        let set = DigitSet::from_iter([D9, D1, D5, D3]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![D1, D3, D5, D9]);
    }

    #[test]
    fn test_constants() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert_eq!(DigitSet::FULL.len(), 9);
        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(DigitSet::from_iter([D9, D1, D7]).to_string(), "179");
        assert_eq!(DigitSet::FULL.to_string(), "123456789");
        assert_eq!(DigitSet::EMPTY.to_string(), "");
    }

    #[test]
    fn test_bit_ops() {
        let a = DigitSet::from_iter([D1, D2, D3]);
        let b = DigitSet::from_iter([D2, D3, D4]);
        assert_eq!(a | b, DigitSet::from_iter([D1, D2, D3, D4]));
        assert_eq!(a & b, DigitSet::from_iter([D2, D3]));
    }

    fn arb_digit() -> impl Strategy<Value = Digit> {
        (1u8..=9).prop_map(Digit::from_value)
    }

    proptest! {
        #[test]
        fn prop_insert_then_contains(digits in prop::collection::vec(arb_digit(), 0..9)) {
            let set = DigitSet::from_iter(digits.iter().copied());
            for digit in &digits {
                prop_assert!(set.contains(*digit));
            }
            prop_assert!(set.len() <= digits.len().min(9));
        }

        #[test]
        fn prop_remove_shrinks_by_at_most_one(digits in prop::collection::vec(arb_digit(), 0..9), victim in arb_digit()) {
            let set = DigitSet::from_iter(digits);
            let removed = set.removed(victim);
            prop_assert!(!removed.contains(victim));
            prop_assert_eq!(removed.len(), set.len() - usize::from(set.contains(victim)));
        }
    }
}
