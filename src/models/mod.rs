use std::str::FromStr;

use crate::error::{FlagError, Result};

/// Serialize a `u8` flags type as its raw bits, keeping unnamed bits on the way back in.
macro_rules! impl_serde_for_bitflags {
    ($name:ident) => {
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_u8(self.bits())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                <u8 as serde::Deserialize>::deserialize(deserializer).map(Self::from_bits_retain)
            }
        }
    };
}

pub mod room;
pub mod user;

pub use room::{Room, RoomStatus};
pub use user::{Role, User};

/// Parse `"A | B | C"` into the union of each label. Blank input is the empty set.
pub(crate) fn parse_label_list<F>(s: &str) -> Result<F>
where
    F: bitflags::Flags + FromStr<Err = FlagError>,
{
    let mut flags = F::empty();
    for part in s.split('|').map(str::trim).filter(|p| !p.is_empty()) {
        flags.insert(part.parse()?);
    }
    Ok(flags)
}
