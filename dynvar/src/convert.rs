//! Conversions from native values into [`Variant`].
//!
//! Each conversion selects exactly the alternative matching the argument's type; no widening or
//! narrowing happens. These impls also drive [`Variant::set_value`], [`Variant::add_to_list`] and
//! [`Variant::add_to_map`].

use crate::variant::{IntegerVariantMap, Variant, VariantMap};

macro_rules! impl_from_native {
    ($($t:ty => $alt:ident,)*) => {$(
        impl From<$t> for Variant {
            fn from(value: $t) -> Self {
                Self::$alt(value)
            }
        }
    )*}
}

impl_from_native! {
    bool => Bool,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => UInt8,
    u16 => UInt16,
    u32 => UInt32,
    u64 => UInt64,
    f32 => Float32,
    f64 => Float64,
    String => String,
    VariantMap => Map,
    IntegerVariantMap => IntegerVariantMap,
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<&String> for Variant {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl<T> From<Vec<T>> for Variant
where
    T: Into<Variant>,
{
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}
