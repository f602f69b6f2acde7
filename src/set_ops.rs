//! Implementations of set operations for `DynBitset`.

use crate::{block::Block, DynBitset};

impl<B: Block> DynBitset<B> {
    #[track_caller]
    fn assert_same_len(&self, other: &Self) {
        assert!(
            self.num_bits == other.num_bits,
            "bitsets must have equal lengths ({} vs {})",
            self.num_bits,
            other.num_bits
        );
    }

    /// Performs a bitwise OR with another bitset of the same length.
    ///
    /// The padding bits of both operands are zero, so the pairwise block OR
    /// cannot disturb them.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_bitset::DynBitset;
    /// let mut a: DynBitset = DynBitset::from_value(8, 0b1100);
    /// let b: DynBitset = DynBitset::from_value(8, 0b1010);
    /// a.union_with(&b);
    /// assert_eq!(a, DynBitset::from_value(8, 0b1110));
    /// ```
    pub fn union_with(&mut self, other: &Self) {
        self.assert_same_len(other);
        for (dst, &src) in self.blocks.iter_mut().zip(&other.blocks) {
            *dst |= src;
        }
        debug_assert!(self.invariants_hold());
    }

    /// Performs a bitwise AND with another bitset of the same length.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    pub fn intersect_with(&mut self, other: &Self) {
        self.assert_same_len(other);
        for (dst, &src) in self.blocks.iter_mut().zip(&other.blocks) {
            *dst &= src;
        }
        debug_assert!(self.invariants_hold());
    }

    /// Performs a bitwise XOR with another bitset of the same length.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    pub fn symmetric_difference_with(&mut self, other: &Self) {
        self.assert_same_len(other);
        for (dst, &src) in self.blocks.iter_mut().zip(&other.blocks) {
            *dst ^= src;
        }
        debug_assert!(self.invariants_hold());
    }

    /// Removes every bit that is set in `other` (set difference).
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_bitset::DynBitset;
    /// let mut a: DynBitset = DynBitset::from_value(8, 0b1110);
    /// let b: DynBitset = DynBitset::from_value(8, 0b1010);
    /// a.difference_with(&b);
    /// assert_eq!(a, DynBitset::from_value(8, 0b0100));
    /// ```
    pub fn difference_with(&mut self, other: &Self) {
        self.assert_same_len(other);
        for (dst, &src) in self.blocks.iter_mut().zip(&other.blocks) {
            *dst &= !src;
        }
        debug_assert!(self.invariants_hold());
    }

    /// Returns `true` if every set bit of `self` is also set in `other`.
    ///
    /// Every bitset is a subset of itself.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.assert_same_len(other);
        self.blocks
            .iter()
            .zip(&other.blocks)
            .all(|(&a, &b)| a & !b == B::ZERO)
    }

    /// Returns `true` if `self` is a subset of `other` with strictly fewer
    /// set bits.
    ///
    /// # Panics
    ///
    /// Panics if the lengths differ.
    #[must_use]
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        self.is_subset(other) && self.count_ones() < other.count_ones()
    }

    /// Returns `true` if the two bitsets share at least one set bit.
    ///
    /// Unlike the subset predicates, the lengths may differ: the check is
    /// over the overlapping prefix `[0, min(len))`. The shorter operand has
    /// no bits beyond its own length, so comparing the common blocks is
    /// exact.
    ///
    /// # Examples
    ///
    /// ```
    /// # use dyn_bitset::DynBitset;
    /// let a: DynBitset = DynBitset::from_value(8, 0b0100);
    /// let mut b: DynBitset = DynBitset::zeroed(200);
    /// assert!(!a.intersects(&b));
    /// b.set(2, true);
    /// assert!(a.intersects(&b));
    /// ```
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.blocks
            .iter()
            .zip(&other.blocks)
            .any(|(&a, &b)| a & b != B::ZERO)
    }
}
