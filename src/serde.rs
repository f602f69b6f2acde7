//! Serde implementations for `DynBitset`.
//!
//! The canonical representation is a two-field struct: the logical bit
//! length followed by the block buffer. Deserialization validates both
//! container invariants, rejecting inputs whose block count does not match
//! the length or whose padding bits are non-zero.

use alloc::{string::String, vec::Vec};
use core::{fmt, marker::PhantomData};

use serde::{
    de::{self, MapAccess, SeqAccess, Visitor},
    ser::SerializeStruct,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::{block::Block, DynBitset};

impl<B: Block + Serialize> Serialize for DynBitset<B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("DynBitset", 2)?;
        state.serialize_field("len", &(self.len() as u64))?;
        state.serialize_field("blocks", self.as_raw_slice())?;
        state.end()
    }
}

impl<'de, B: Block + Deserialize<'de>> Deserialize<'de> for DynBitset<B> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BitsetVisitor<B>(PhantomData<B>);

        impl<'de, B: Block + Deserialize<'de>> Visitor<'de> for BitsetVisitor<B> {
            type Value = DynBitset<B>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a bit length and a sequence of blocks")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let len: u64 = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let blocks: Vec<B> = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                DynBitset::from_parts_checked(blocks, len as usize)
                    .map_err(de::Error::custom)
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut len: Option<u64> = None;
                let mut blocks: Option<Vec<B>> = None;
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "len" => len = Some(map.next_value()?),
                        "blocks" => blocks = Some(map.next_value()?),
                        _ => {
                            let _: de::IgnoredAny = map.next_value()?;
                        }
                    }
                }
                let len = len.ok_or_else(|| de::Error::missing_field("len"))?;
                let blocks =
                    blocks.ok_or_else(|| de::Error::missing_field("blocks"))?;
                DynBitset::from_parts_checked(blocks, len as usize)
                    .map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_struct(
            "DynBitset",
            &["len", "blocks"],
            BitsetVisitor(PhantomData),
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
