//! A dynamically-sized bit vector packed into fixed-width storage blocks.
//!
//! This crate provides [`DynBitset`], a container for an arbitrary,
//! runtime-determined number of bits with bit-level get/set/flip, bulk set
//! algebra (AND, OR, XOR, difference), shifting, counting, and
//! subset/intersection queries. It is the kind of building block bitmap
//! indices, graph coloring, flag vectors and Bloom-filter-like structures
//! are made of.
//!
//! # Features
//!
//! - **Logical length** decoupled from block boundaries: any bit count,
//!   not just multiples of the storage width
//! - **Typed block width**: `DynBitset<u8>` through `DynBitset<u64>`
//!   (default `u64`), chosen at compile time via the [`Block`] trait
//! - **Bulk range operations** that process whole blocks at a time
//! - **Set algebra and shifts** with value semantics matching the bit
//!   string, independent of the block layout
//! - **Serialization support** via serde and rkyv (optional)
//! - **`no_std` support** with `alloc` for embedded systems
//!
//! # Examples
//!
//! ```
//! use dyn_bitset::DynBitset;
//!
//! // Parse from a bit string; the rightmost character is bit 0.
//! let mut bits: DynBitset = "1011".parse().unwrap();
//! assert_eq!(bits.len(), 4);
//! assert_eq!(bits.count_ones(), 3);
//! assert_eq!(u64::try_from(&bits), Ok(11));
//!
//! // Grow, mutate, shift.
//! bits.resize(8, false);
//! bits.set_range(4, 3, true);
//! assert_eq!(bits.to_string(), "01111011");
//! bits <<= 1;
//! assert_eq!(bits.to_string(), "11110110");
//! ```
//!
//! # Invariants
//!
//! The container maintains two invariants after every public mutation: the
//! padding bits of the partial last block are always zero, and the block
//! buffer always holds exactly `ceil(len / width)` blocks. Counting,
//! comparison and hashing all rely on them, which is why mutations that can
//! touch the last block re-zero its padding before returning.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

// Module declarations
mod bitset;
mod block;
mod iter;
mod proxy;
mod set_ops;
mod traits;

#[cfg(feature = "rkyv")]
pub mod rkyv;

#[cfg(feature = "rkyv")]
pub use rkyv::{ArchivedDynBitset, DynBitsetResolver};

#[cfg(feature = "serde")]
mod serde;

// Re-exports
pub use bitset::DynBitset;
pub use block::Block;
pub use iter::{Bits, Blocks, Ones};
pub use proxy::BitMut;
pub use traits::{ParseBitsetError, TryFromBitsetError};
