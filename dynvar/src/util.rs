//! Utilities that aren't part of the core of dynvar, but may be useful in reducing boilerplate.

use crate::ctx::Endian;
use crate::endian::{EndianCodec, EndianInt};
use crate::error::Result;

#[doc(inline)]
pub use crate::{variant_list, variant_map};

macro_rules! endian_wrappers {
    ($($(#[$attr:meta])* $name:ident: $endian:expr,)*) => {$(
        $(#[$attr])*
        #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name<T>(pub T);

        impl<T> $name<T>
        where
            T: EndianInt,
        {
            /// The byte order this wrapper encodes and decodes with.
            pub const ORDER: Endian = $endian;

            /// Encodes the inner value with the given codec.
            pub fn encode(&self, codec: &EndianCodec) -> Vec<u8> {
                codec.encode(self.0, $endian)
            }

            /// Decodes a value from exactly `T::WIDTH` bytes.
            pub fn decode(codec: &EndianCodec, bytes: &[u8]) -> Result<Self> {
                codec.decode(bytes, $endian).map(Self)
            }

            /// Decodes a value from the front of `bytes`, returning the unread remainder too.
            pub fn read<'a>(codec: &EndianCodec, bytes: &'a [u8]) -> Result<(Self, &'a [u8])> {
                codec
                    .read(bytes, $endian)
                    .map(|(value, rest)| (Self(value), rest))
            }
        }

        impl<T> From<T> for $name<T> {
            fn from(value: T) -> Self {
                Self(value)
            }
        }

        impl<T> $name<T> {
            /// Unwraps and returns the inner `T` value.
            pub fn into_inner(self) -> T {
                self.0
            }
        }
    )*}
}

endian_wrappers! {
    /// Little-endian wrapper type for fixed-width integers.
    ///
    /// Carries the byte order in the type, so callers only track the width.
    ///
    /// # Example
    ///
    /// ```
    /// use dynvar::EndianCodec;
    /// use dynvar::ctx::Endian;
    /// use dynvar::util::LittleEndian;
    ///
    /// let codec = EndianCodec::with_host(Endian::Little);
    /// let x: LittleEndian<u32> = 0xdeadbeef.into();
    ///
    /// let bytes = x.encode(&codec);
    /// assert_eq!(bytes, &[0xef, 0xbe, 0xad, 0xde]);
    /// assert_eq!(LittleEndian::<u32>::decode(&codec, &bytes).unwrap(), x);
    /// ```
    LittleEndian: Endian::Little,

    /// Big-endian wrapper type for fixed-width integers.
    ///
    /// Carries the byte order in the type, so callers only track the width.
    ///
    /// # Example
    ///
    /// ```
    /// use dynvar::EndianCodec;
    /// use dynvar::ctx::Endian;
    /// use dynvar::util::BigEndian;
    ///
    /// let codec = EndianCodec::with_host(Endian::Little);
    /// let x: BigEndian<u32> = 0xdeadbeef.into();
    ///
    /// let bytes = x.encode(&codec);
    /// assert_eq!(bytes, &[0xde, 0xad, 0xbe, 0xef]);
    /// assert_eq!(BigEndian::<u32>::decode(&codec, &bytes).unwrap(), x);
    /// ```
    BigEndian: Endian::Big,
}
