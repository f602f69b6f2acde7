//! Trait implementations for `DynBitset`.

use alloc::string::String;
use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    ops::{
        BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign,
        Index, Not, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
    },
    str::FromStr,
};

use crate::{block::Block, DynBitset};

/// Errors that can occur when parsing a binary string into a
/// [`DynBitset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBitsetError {
    /// Invalid character found in the binary string.
    InvalidChar {
        /// The invalid character found.
        ch: char,
        /// The position of the invalid character.
        pos: usize,
    },
}

impl fmt::Display for ParseBitsetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChar { ch, pos } => {
                write!(
                    f,
                    "invalid character '{ch}' at position {pos} in binary string"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseBitsetError {}

/// Error type for converting a [`DynBitset`] to a primitive integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TryFromBitsetError {
    /// A bit is set beyond the width of the target type.
    Overflow {
        /// Number of bits the target type can hold.
        max_bits: usize,
        /// Number of bits needed to represent the value.
        required_bits: usize,
    },
}

impl fmt::Display for TryFromBitsetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow {
                max_bits,
                required_bits,
            } => {
                write!(
                    f,
                    "bitset value needs {required_bits} bits but the target type holds {max_bits}"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TryFromBitsetError {}

// ============================================================================
// Formatting & parsing
// ============================================================================

impl<B: Block> fmt::Display for DynBitset<B> {
    /// Formats the bitset as a string of `len()` binary digits, the most
    /// significant bit leftmost. Round-trips exactly through [`FromStr`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_bitset::DynBitset;
    ///
    /// let bits: DynBitset = "1011".parse().unwrap();
    /// assert_eq!(bits.to_string(), "1011");
    /// assert_eq!(format!("{bits:>6}"), "  1011");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::with_capacity(self.len());
        for pos in (0..self.len()).rev() {
            s.push(if self.test(pos) { '1' } else { '0' });
        }
        f.pad(&s)
    }
}

impl<B: Block> FromStr for DynBitset<B> {
    type Err = ParseBitsetError;

    /// Parses a binary string into a [`DynBitset`].
    ///
    /// The input may start with `0b` and may contain `_` separators; the
    /// bitset's length is the number of binary digits, with the rightmost
    /// digit at position 0. The empty string parses to the empty bitset.
    ///
    /// # Errors
    ///
    /// Returns [`ParseBitsetError::InvalidChar`] for any character other
    /// than `0`, `1` or `_`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_bitset::DynBitset;
    ///
    /// let bits: DynBitset = "1011".parse().unwrap();
    /// assert_eq!(bits.len(), 4);
    /// assert!(bits.test(0) && bits.test(1) && !bits.test(2) && bits.test(3));
    /// assert_eq!(bits.count_ones(), 3);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0b").unwrap_or(s).as_bytes();

        let mut digits = 0;
        for (pos, &byte) in s.iter().enumerate() {
            match byte {
                b'0' | b'1' => digits += 1,
                b'_' => {}
                _ => {
                    return Err(ParseBitsetError::InvalidChar {
                        ch: byte as char,
                        pos,
                    });
                }
            }
        }

        let mut bits = Self::zeroed(digits);
        let mut pos = 0;
        for &byte in s.iter().rev() {
            match byte {
                b'1' => {
                    bits.set(pos, true);
                    pos += 1;
                }
                b'0' => pos += 1,
                _ => {}
            }
        }
        Ok(bits)
    }
}

impl<B: Block> fmt::Debug for DynBitset<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DynBitset(\"{self}\")")
    }
}

// ============================================================================
// Comparison & hashing
// ============================================================================

impl<B: Block> PartialEq for DynBitset<B> {
    /// Two bitsets are equal when they have the same length and the same
    /// bits.
    fn eq(&self, other: &Self) -> bool {
        self.num_bits == other.num_bits && self.blocks == other.blocks
    }
}

impl<B: Block> Eq for DynBitset<B> {}

impl<B: Block> PartialOrd for DynBitset<B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<B: Block> Ord for DynBitset<B> {
    /// Compares bit strings from the most significant bit down, independent
    /// of stored length (leading zeros are ignored), so cross-length
    /// comparison is well-defined. Equal values are ordered by length to
    /// keep the ordering consistent with [`PartialEq`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_bitset::DynBitset;
    ///
    /// let a: DynBitset = "0101".parse().unwrap();
    /// let b: DynBitset = "110".parse().unwrap();
    /// assert!(a < b);
    ///
    /// // Same value, different length: the longer form sorts after.
    /// let c: DynBitset = "101".parse().unwrap();
    /// assert!(c < a);
    /// ```
    fn cmp(&self, other: &Self) -> Ordering {
        let max = self.blocks.len().max(other.blocks.len());
        for i in (0..max).rev() {
            let a = self.blocks.get(i).copied().unwrap_or(B::ZERO);
            let b = other.blocks.get(i).copied().unwrap_or(B::ZERO);
            match a.cmp(&b) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }
        self.num_bits.cmp(&other.num_bits)
    }
}

impl<B: Block> Hash for DynBitset<B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.num_bits.hash(state);
        self.blocks.hash(state);
    }
}

// ============================================================================
// Indexing
// ============================================================================

static TRUE: bool = true;
static FALSE: bool = false;

impl<B: Block> Index<usize> for DynBitset<B> {
    type Output = bool;

    /// Reads the bit at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos >= len()`. Use [`bit_mut`](DynBitset::bit_mut) for
    /// writable access.
    #[inline]
    fn index(&self, pos: usize) -> &bool {
        if self.test(pos) {
            &TRUE
        } else {
            &FALSE
        }
    }
}

// ============================================================================
// Bitwise operator implementations
// ============================================================================

impl<B: Block> BitAndAssign<&Self> for DynBitset<B> {
    #[inline]
    fn bitand_assign(&mut self, rhs: &Self) {
        self.intersect_with(rhs);
    }
}

impl<B: Block> BitAndAssign for DynBitset<B> {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.intersect_with(&rhs);
    }
}

impl<B: Block> BitAnd for &DynBitset<B> {
    type Output = DynBitset<B>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result.intersect_with(rhs);
        result
    }
}

impl<B: Block> BitAnd for DynBitset<B> {
    type Output = Self;

    #[inline]
    fn bitand(mut self, rhs: Self) -> Self::Output {
        self.intersect_with(&rhs);
        self
    }
}

impl<B: Block> BitOrAssign<&Self> for DynBitset<B> {
    #[inline]
    fn bitor_assign(&mut self, rhs: &Self) {
        self.union_with(rhs);
    }
}

impl<B: Block> BitOrAssign for DynBitset<B> {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.union_with(&rhs);
    }
}

impl<B: Block> BitOr for &DynBitset<B> {
    type Output = DynBitset<B>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result.union_with(rhs);
        result
    }
}

impl<B: Block> BitOr for DynBitset<B> {
    type Output = Self;

    #[inline]
    fn bitor(mut self, rhs: Self) -> Self::Output {
        self.union_with(&rhs);
        self
    }
}

impl<B: Block> BitXorAssign<&Self> for DynBitset<B> {
    #[inline]
    fn bitxor_assign(&mut self, rhs: &Self) {
        self.symmetric_difference_with(rhs);
    }
}

impl<B: Block> BitXorAssign for DynBitset<B> {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.symmetric_difference_with(&rhs);
    }
}

impl<B: Block> BitXor for &DynBitset<B> {
    type Output = DynBitset<B>;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result.symmetric_difference_with(rhs);
        result
    }
}

impl<B: Block> BitXor for DynBitset<B> {
    type Output = Self;

    #[inline]
    fn bitxor(mut self, rhs: Self) -> Self::Output {
        self.symmetric_difference_with(&rhs);
        self
    }
}

impl<B: Block> SubAssign<&Self> for DynBitset<B> {
    /// Set difference: clears every bit that is set in `rhs`.
    #[inline]
    fn sub_assign(&mut self, rhs: &Self) {
        self.difference_with(rhs);
    }
}

impl<B: Block> SubAssign for DynBitset<B> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.difference_with(&rhs);
    }
}

impl<B: Block> Sub for &DynBitset<B> {
    type Output = DynBitset<B>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        let mut result = self.clone();
        result.difference_with(rhs);
        result
    }
}

impl<B: Block> Sub for DynBitset<B> {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: Self) -> Self::Output {
        self.difference_with(&rhs);
        self
    }
}

impl<B: Block> Not for DynBitset<B> {
    type Output = Self;

    /// Returns the complement: every bit flipped, same length.
    ///
    /// # Examples
    ///
    /// ```
    /// use dyn_bitset::DynBitset;
    ///
    /// let bits: DynBitset = "0101".parse().unwrap();
    /// assert_eq!((!bits).to_string(), "1010");
    /// ```
    #[inline]
    fn not(mut self) -> Self::Output {
        self.flip_all();
        self
    }
}

impl<B: Block> Not for &DynBitset<B> {
    type Output = DynBitset<B>;

    #[inline]
    fn not(self) -> Self::Output {
        !self.clone()
    }
}

// ============================================================================
// Shift operator implementations
// ============================================================================

impl<B: Block> ShlAssign<usize> for DynBitset<B> {
    /// Shifts toward the most significant end; see
    /// [`shift_left`](DynBitset::shift_left).
    #[inline]
    fn shl_assign(&mut self, n: usize) {
        self.shift_left(n);
    }
}

impl<B: Block> Shl<usize> for DynBitset<B> {
    type Output = Self;

    #[inline]
    fn shl(mut self, n: usize) -> Self::Output {
        self.shift_left(n);
        self
    }
}

impl<B: Block> Shl<usize> for &DynBitset<B> {
    type Output = DynBitset<B>;

    #[inline]
    fn shl(self, n: usize) -> Self::Output {
        self.clone() << n
    }
}

impl<B: Block> ShrAssign<usize> for DynBitset<B> {
    /// Shifts toward the least significant end; see
    /// [`shift_right`](DynBitset::shift_right).
    #[inline]
    fn shr_assign(&mut self, n: usize) {
        self.shift_right(n);
    }
}

impl<B: Block> Shr<usize> for DynBitset<B> {
    type Output = Self;

    #[inline]
    fn shr(mut self, n: usize) -> Self::Output {
        self.shift_right(n);
        self
    }
}

impl<B: Block> Shr<usize> for &DynBitset<B> {
    type Output = DynBitset<B>;

    #[inline]
    fn shr(self, n: usize) -> Self::Output {
        self.clone() >> n
    }
}

// ============================================================================
// Integer export
// ============================================================================

macro_rules! impl_try_from_bitset {
    ($($t:ty),* $(,)?) => {$(
        impl<B: Block> TryFrom<&DynBitset<B>> for $t {
            type Error = TryFromBitsetError;

            /// Packs the low bits of the bitset into the integer.
            ///
            /// # Errors
            ///
            /// Fails with [`TryFromBitsetError::Overflow`] if any bit at an
            /// index the target type cannot hold is set.
            fn try_from(bits: &DynBitset<B>) -> Result<Self, Self::Error> {
                let width = <$t>::BITS as usize;
                if let Some(high) = bits.find_first_from(width) {
                    return Err(TryFromBitsetError::Overflow {
                        max_bits: width,
                        required_bits: high + 1,
                    });
                }
                Ok(bits.low_u64() as $t)
            }
        }
    )*};
}

impl_try_from_bitset!(u8, u16, u32, u64);
