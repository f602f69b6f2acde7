//! Rkyv implementation for `DynBitset<u64>`.
//!
//! The archived layout is a single word vector: the first word holds the
//! logical bit length, the remaining words are the storage blocks. The
//! archived blocks can be inspected in place without deserializing.

use alloc::vec::Vec;

use rkyv::{
    rancor::Fallible,
    ser::{Allocator, Writer},
    vec::ArchivedVec,
    Archive, Deserialize, Serialize,
};

use crate::DynBitset;

/// The archived version of `DynBitset<u64>`.
pub type ArchivedDynBitset = ArchivedVec<<u64 as Archive>::Archived>;

/// The resolver for `DynBitset<u64>`.
pub type DynBitsetResolver = rkyv::vec::VecResolver;

impl Archive for DynBitset<u64> {
    type Archived = ArchivedDynBitset;
    type Resolver = DynBitsetResolver;

    fn resolve(&self, resolver: Self::Resolver, out: rkyv::Place<Self::Archived>) {
        ArchivedVec::resolve_from_len(self.num_blocks() + 1, resolver, out);
    }
}

impl<S: Fallible + Allocator + Writer + ?Sized> Serialize<S> for DynBitset<u64> {
    fn serialize(&self, serializer: &mut S) -> Result<Self::Resolver, S::Error> {
        let mut words = Vec::with_capacity(self.num_blocks() + 1);
        words.push(self.len() as u64);
        words.extend_from_slice(self.as_raw_slice());
        ArchivedVec::serialize_from_slice(&words, serializer)
    }
}

impl<D: Fallible + ?Sized> Deserialize<DynBitset<u64>, D> for ArchivedDynBitset {
    fn deserialize(&self, _deserializer: &mut D) -> Result<DynBitset<u64>, D::Error> {
        let words = self.as_slice();
        let Some((len, blocks)) = words.split_first() else {
            return Ok(DynBitset::new());
        };
        let len = len.to_native() as usize;
        let mut bits =
            DynBitset::from_blocks(blocks.iter().map(|w| w.to_native()));
        // A malformed length word cannot produce an invalid container: clamp
        // to the bits actually present, then let resize re-zero the padding.
        bits.resize(len.min(bits.len()), false);
        Ok(bits)
    }
}

// ============================================================================
// Tests
// ============================================================================
