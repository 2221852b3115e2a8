//! Derive macros.
//!
//! **Note:** The macro itself is not contained in this module; it is at the top level of the
//! crate. This module is used to document it.
//!
//! `#[derive(IntoVariant)]` generates `impl From<T> for Variant` for a struct, so a value of the
//! struct can be passed anywhere a variant is expected (`Variant::from`, `set_value`,
//! `add_to_list`, `add_to_map`). Every field type must itself convert into a `Variant`.
//!
//! - A struct with named fields becomes an `IntegerVariantMap`. Each field is stored under its
//!   position in the declaration, or under the key given by `#[variant(key = "N")]`.
//! - A tuple struct becomes a `List` of its fields, in order.
//! - A unit struct becomes `None`.
//!
//! Enums are rejected; there is no single alternative that every variant of an enum could map to.
//!
//! # Attributes
//!
//! ## Container Attributes
//!
//! - **`crate_path`** - Specify a custom path to the `dynvar` crate, e.g.
//! `#[variant(crate_path = "my_alias")]`.
//!
//! ## Field Attributes
//!
//! - **`key`** - The integer key of a named field, as a string literal. Positions of fields
//! without an explicit key are still counted, so mixing the two can collide; duplicate keys are
//! reported at compile time.
//!
//! - **`skip`** - Leave the field out of the variant. Skipped tuple fields do not take up a list
//! slot.
//!
//! # Example
//!
//! ```
//! use dynvar::{IntoVariant, Variant};
//!
//! #[derive(IntoVariant)]
//! struct Reading {
//!     sensor: String,
//!     #[variant(key = "10")]
//!     celsius: f64,
//!     #[variant(skip)]
//!     #[allow(dead_code)]
//!     scratch: Vec<u8>,
//! }
//!
//! #[derive(IntoVariant)]
//! struct Pair(i32, bool);
//!
//! let reading = Variant::from(Reading {
//!     sensor: "t-1".to_string(),
//!     celsius: 21.5,
//!     scratch: vec![],
//! });
//! let map = reading.get_integer_variant_map();
//! assert_eq!(map.len(), 2);
//! assert_eq!(map[&0u64].get_string(), "t-1");
//! assert_eq!(map[&10u64].get_float64(), 21.5);
//!
//! let pair = Variant::from(Pair(4, true));
//! assert_eq!(pair.get_list()[0].get_int32(), 4);
//! assert!(pair.get_list()[1].get_bool());
//! ```
