//! A dynamically-typed value container and a fixed-width integer byte-order codec.
//!
//! [`Variant`] holds one of a closed set of alternatives: nothing, a boolean, one of eight
//! integer types, one of two float types, a string, a list of variants, a variant-keyed map, or a
//! `u64`-keyed map. Lists and maps nest arbitrarily.
//!
//! [`EndianCodec`] converts 8/16/32/64-bit integers to and from big- or little-endian bytes. It
//! writes no framing, so the caller keeps track of width, signedness and byte order.
//!
//! The two halves are independent of each other.
//!
//! # Example
//!
//! ```
//! use dynvar::{variant_map, EndianCodec, Variant};
//!
//! let mut record = variant_map! {
//!     1u64 => "sensor-7",
//!     2u64 => 21.5f64,
//! };
//! assert!(record.add_to_map(3u64, Variant::from(vec![1u16, 2, 3])));
//! assert_eq!(record.length(), 3);
//!
//! let codec = EndianCodec::new();
//! let bytes = codec.to_little_endian_bytes(record.length() as u16);
//! assert_eq!(codec.from_little_endian_bytes::<u16>(&bytes).unwrap(), 3);
//! ```

#![warn(missing_docs)]

extern crate self as dynvar;

mod convert;
pub mod ctx;
pub mod endian;
mod error;
mod macros;
pub mod util;
pub mod variant;

#[cfg(feature = "derive")]
pub mod derive;

#[cfg(feature = "derive")]
pub use dynvar_derive::IntoVariant;

#[doc(inline)]
pub use self::endian::{EndianCodec, EndianInt};
#[doc(inline)]
pub use self::error::{Error, Result};
#[doc(inline)]
pub use self::variant::{
    IntegerVariantMap, MapEntryKey, MapKey, Variant, VariantList, VariantMap, VariantType,
};
