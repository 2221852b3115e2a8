//! The dynamically-typed value container.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;
use tracing::{debug, trace};

/// Ordered sequence of variants.
pub type VariantList = Vec<Variant>;

/// Variant-keyed map, ordered by the loose variant order (see [`Variant::loose_cmp`]).
pub type VariantMap = BTreeMap<MapKey, Variant>;

/// Map keyed by unsigned 64-bit integers.
pub type IntegerVariantMap = BTreeMap<u64, Variant>;

static EMPTY_LIST: VariantList = Vec::new();
static EMPTY_MAP: VariantMap = BTreeMap::new();
static EMPTY_INTEGER_VARIANT_MAP: IntegerVariantMap = BTreeMap::new();

/// The discriminant of a [`Variant`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantType {
    None,
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    String,
    List,
    Map,
    IntegerVariantMap,
}

impl VariantType {
    /// Fixed human-readable name of the alternative.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Bool => "Bool",
            Self::Int8 => "Int8",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::UInt8 => "UInt8",
            Self::UInt16 => "UInt16",
            Self::UInt32 => "UInt32",
            Self::UInt64 => "UInt64",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::String => "String",
            Self::List => "List",
            Self::Map => "Map",
            Self::IntegerVariantMap => "IntegerVariantMap",
        }
    }
}

impl fmt::Display for VariantType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value that holds exactly one of a fixed set of alternatives.
///
/// A default-constructed variant is [`Variant::None`]. Scalar getters never fail: asking for an
/// alternative that is not active yields `false` or zero. Aggregates grow through
/// [`Variant::add_to_list`] and [`Variant::add_to_map`], which promote a `None` variant on first
/// use and refuse to touch any other alternative.
///
/// Equality and ordering are deliberately loose and do not form a total order:
///
/// - `==` holds only between equal discriminants, compares floats within machine epsilon, and is
///   always `false` for lists and maps, even identical ones.
/// - `<` compares numbers by value and everything else by length. A number compared against a
///   string compares the number to the string's length.
/// - `partial_cmp` follows `<`, but reports `None` for pairs that tie under `<` without being
///   `==`, so `a <= b && b <= a` still implies `a == b`.
///
/// # Example
///
/// ```
/// use dynvar::Variant;
///
/// let mut list = Variant::default();
/// assert!(list.add_to_list(7i32));
/// assert!(list.add_to_list("seven"));
/// assert!(list.is_list());
/// assert_eq!(list.length(), 2);
///
/// let mut number = Variant::from(7i32);
/// assert!(!number.add_to_list(8i32));
/// assert_eq!(number.get_int32(), 7);
/// ```
#[allow(missing_docs)]
#[derive(Debug, Clone, Default)]
pub enum Variant {
    /// No value.
    #[default]
    None,
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    UInt8(u8),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
    Float32(f32),
    Float64(f64),
    String(String),
    List(VariantList),
    Map(VariantMap),
    IntegerVariantMap(IntegerVariantMap),
}

macro_rules! scalar_accessors {
    ($($alt:ident($t:ty): $is:ident, $get:ident, $set:ident, $default:expr;)*) => {$(
        #[doc = concat!("Whether the active alternative is `", stringify!($alt), "`.")]
        pub fn $is(&self) -> bool {
            matches!(self, Self::$alt(_))
        }

        #[doc = concat!("The `", stringify!($alt), "` payload, or `", stringify!($default), "` for any other alternative.")]
        pub fn $get(&self) -> $t {
            match self {
                Self::$alt(value) => *value,
                _ => $default,
            }
        }

        #[doc = concat!("Switches to `", stringify!($alt), "` holding `value`.")]
        pub fn $set(&mut self, value: $t) {
            *self = Self::$alt(value);
        }
    )*}
}

impl Variant {
    /// The active discriminant.
    pub fn variant_type(&self) -> VariantType {
        match self {
            Self::None => VariantType::None,
            Self::Bool(_) => VariantType::Bool,
            Self::Int8(_) => VariantType::Int8,
            Self::Int16(_) => VariantType::Int16,
            Self::Int32(_) => VariantType::Int32,
            Self::Int64(_) => VariantType::Int64,
            Self::UInt8(_) => VariantType::UInt8,
            Self::UInt16(_) => VariantType::UInt16,
            Self::UInt32(_) => VariantType::UInt32,
            Self::UInt64(_) => VariantType::UInt64,
            Self::Float32(_) => VariantType::Float32,
            Self::Float64(_) => VariantType::Float64,
            Self::String(_) => VariantType::String,
            Self::List(_) => VariantType::List,
            Self::Map(_) => VariantType::Map,
            Self::IntegerVariantMap(_) => VariantType::IntegerVariantMap,
        }
    }

    /// Name of the active alternative, e.g. `"Int32"` or `"IntegerVariantMap"`.
    pub fn variant_type_string(&self) -> &'static str {
        self.variant_type().as_str()
    }

    /// Whether any alternative other than `None` is active.
    pub fn is_valid(&self) -> bool {
        !self.is_none()
    }

    /// Whether the variant holds no value.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Whether the active alternative is one of the eight integers or two floats.
    pub fn is_number(&self) -> bool {
        matches!(
            self,
            Self::Int8(_)
                | Self::Int16(_)
                | Self::Int32(_)
                | Self::Int64(_)
                | Self::UInt8(_)
                | Self::UInt16(_)
                | Self::UInt32(_)
                | Self::UInt64(_)
                | Self::Float32(_)
                | Self::Float64(_)
        )
    }

    /// Whether the active alternative is `String`.
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Whether the active alternative is `List`.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Whether the active alternative is the variant-keyed `Map`.
    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// Whether the active alternative is `IntegerVariantMap`.
    pub fn is_integer_variant_map(&self) -> bool {
        matches!(self, Self::IntegerVariantMap(_))
    }

    scalar_accessors! {
        Bool(bool): is_bool, get_bool, set_bool, false;
        Int8(i8): is_int8, get_int8, set_int8, 0;
        Int16(i16): is_int16, get_int16, set_int16, 0;
        Int32(i32): is_int32, get_int32, set_int32, 0;
        Int64(i64): is_int64, get_int64, set_int64, 0;
        UInt8(u8): is_uint8, get_uint8, set_uint8, 0;
        UInt16(u16): is_uint16, get_uint16, set_uint16, 0;
        UInt32(u32): is_uint32, get_uint32, set_uint32, 0;
        UInt64(u64): is_uint64, get_uint64, set_uint64, 0;
        Float32(f32): is_float32, get_float32, set_float32, 0.0;
        Float64(f64): is_float64, get_float64, set_float64, 0.0;
    }

    /// The active number widened to `i128`, or 0 for non-numeric alternatives.
    ///
    /// Floats are truncated toward zero and saturate at the bounds of `i128`; NaN becomes 0.
    pub fn get_number(&self) -> i128 {
        match *self {
            Self::Int8(value) => value.into(),
            Self::Int16(value) => value.into(),
            Self::Int32(value) => value.into(),
            Self::Int64(value) => value.into(),
            Self::UInt8(value) => value.into(),
            Self::UInt16(value) => value.into(),
            Self::UInt32(value) => value.into(),
            Self::UInt64(value) => value.into(),
            Self::Float32(value) => value as i128,
            Self::Float64(value) => value as i128,
            _ => 0,
        }
    }

    /// Byte length of a string, element count of a list or map, 0 for anything else.
    pub fn length(&self) -> usize {
        match self {
            Self::String(value) => value.len(),
            Self::List(list) => list.len(),
            Self::Map(map) => map.len(),
            Self::IntegerVariantMap(map) => map.len(),
            _ => 0,
        }
    }

    /// Byte length of the string, or 0 if the variant is not a string.
    pub fn string_length(&self) -> usize {
        self.as_str().map_or(0, str::len)
    }

    /// Element count of the list, or 0 if the variant is not a list.
    pub fn list_length(&self) -> usize {
        self.as_list().map_or(0, |list| list.len())
    }

    /// Entry count of the variant-keyed map, or 0 if the variant is not one.
    pub fn map_length(&self) -> usize {
        self.as_map().map_or(0, BTreeMap::len)
    }

    /// Entry count of the integer-keyed map, or 0 if the variant is not one.
    pub fn integer_variant_map_length(&self) -> usize {
        self.as_integer_variant_map().map_or(0, BTreeMap::len)
    }

    /// The string payload; empty when another alternative is active.
    pub fn get_string(&self) -> &str {
        self.as_str().unwrap_or_default()
    }

    /// The list payload; empty when another alternative is active.
    pub fn get_list(&self) -> &VariantList {
        self.as_list().unwrap_or(&EMPTY_LIST)
    }

    /// The variant-keyed map payload; empty when another alternative is active.
    pub fn get_map(&self) -> &VariantMap {
        self.as_map().unwrap_or(&EMPTY_MAP)
    }

    /// The integer-keyed map payload; empty when another alternative is active.
    pub fn get_integer_variant_map(&self) -> &IntegerVariantMap {
        self.as_integer_variant_map()
            .unwrap_or(&EMPTY_INTEGER_VARIANT_MAP)
    }

    /// The string payload, if that is the active alternative.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// The list payload, if that is the active alternative.
    pub fn as_list(&self) -> Option<&VariantList> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// Mutable access to the list payload, if that is the active alternative.
    pub fn as_list_mut(&mut self) -> Option<&mut VariantList> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// The variant-keyed map payload, if that is the active alternative.
    pub fn as_map(&self) -> Option<&VariantMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Mutable access to the variant-keyed map payload, if that is the active alternative.
    pub fn as_map_mut(&mut self) -> Option<&mut VariantMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// The integer-keyed map payload, if that is the active alternative.
    pub fn as_integer_variant_map(&self) -> Option<&IntegerVariantMap> {
        match self {
            Self::IntegerVariantMap(map) => Some(map),
            _ => None,
        }
    }

    /// Mutable access to the integer-keyed map payload, if that is the active
    /// alternative.
    pub fn as_integer_variant_map_mut(&mut self) -> Option<&mut IntegerVariantMap> {
        match self {
            Self::IntegerVariantMap(map) => Some(map),
            _ => None,
        }
    }

    /// Switches to `String` holding `value`.
    pub fn set_string<S: Into<String>>(&mut self, value: S) {
        *self = Self::String(value.into());
    }

    /// Switches to `List` holding `value`.
    pub fn set_list(&mut self, value: VariantList) {
        *self = Self::List(value);
    }

    /// Switches to `Map` holding `value`.
    pub fn set_map(&mut self, value: VariantMap) {
        *self = Self::Map(value);
    }

    /// Switches to `IntegerVariantMap` holding `value`.
    pub fn set_integer_variant_map(&mut self, value: IntegerVariantMap) {
        *self = Self::IntegerVariantMap(value);
    }

    /// Replaces the payload with `value`; the alternative follows from the argument's type.
    ///
    /// ```
    /// use dynvar::{Variant, VariantType};
    ///
    /// let mut v = Variant::default();
    /// v.set_value(3u16);
    /// assert_eq!(v.variant_type(), VariantType::UInt16);
    /// v.set_value("three");
    /// assert_eq!(v.get_string(), "three");
    /// ```
    pub fn set_value<T: Into<Variant>>(&mut self, value: T) {
        *self = value.into();
    }

    /// Drops any payload and resets the variant to `None`.
    pub fn make_invalid(&mut self) {
        trace!(from = self.variant_type_string(), "variant reset");
        *self = Self::None;
    }

    /// Moves the payload out, leaving `None` behind.
    pub fn take(&mut self) -> Variant {
        trace!(kind = self.variant_type_string(), "variant moved out");
        std::mem::take(self)
    }

    /// Makes sure the list can hold at least `capacity` elements in total without reallocating.
    /// Does nothing unless the variant is a list.
    pub fn reserve_list(&mut self, capacity: usize) {
        if let Self::List(list) = self {
            list.reserve(capacity.saturating_sub(list.len()));
        }
    }

    /// Appends `value` to the list, promoting `None` to an empty list first.
    ///
    /// Returns `false`, leaving the variant untouched, when another alternative is active.
    pub fn add_to_list<T: Into<Variant>>(&mut self, value: T) -> bool {
        if self.is_none() {
            trace!("promoting None to List");
            *self = Self::List(VariantList::new());
        }
        match self {
            Self::List(list) => {
                list.push(value.into());
                true
            }
            other => {
                debug!(kind = other.variant_type_string(), "add_to_list rejected");
                false
            }
        }
    }

    /// Inserts `value` under `key`, promoting `None` to the map alternative the key selects.
    ///
    /// A `u64` key targets `IntegerVariantMap`; a variant (or string) key targets `Map`. An
    /// existing key keeps its first value. Returns `false`, leaving the variant untouched, when
    /// any other alternative is active.
    pub fn add_to_map<K: MapEntryKey, V: Into<Variant>>(&mut self, key: K, value: V) -> bool {
        key.add_to(self, value.into())
    }

    /// Empties the list, keeping the `List` alternative. Does nothing for other alternatives.
    pub fn clear_list(&mut self) {
        if let Self::List(list) = self {
            list.clear();
        }
    }

    /// Empties the variant-keyed map, keeping the `Map` alternative.
    pub fn clear_map(&mut self) {
        if let Self::Map(map) = self {
            map.clear();
        }
    }

    /// Empties the integer-keyed map, keeping the `IntegerVariantMap` alternative.
    pub fn clear_integer_variant_map(&mut self) {
        if let Self::IntegerVariantMap(map) = self {
            map.clear();
        }
    }

    /// The loose "less than": numbers by value, everything else by [`Variant::length`].
    ///
    /// Which rule applies depends on `self` alone.
    pub fn less_than(&self, other: &Variant) -> bool {
        if self.is_number() {
            self.get_number() < other.get_number()
        } else {
            self.length() < other.length()
        }
    }

    /// Three-way form of [`Variant::less_than`]; `Equal` when neither side is less.
    pub fn loose_cmp(&self, other: &Variant) -> Ordering {
        if self.less_than(other) {
            Ordering::Less
        } else if other.less_than(self) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl PartialEq for Variant {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int8(a), Self::Int8(b)) => a == b,
            (Self::Int16(a), Self::Int16(b)) => a == b,
            (Self::Int32(a), Self::Int32(b)) => a == b,
            (Self::Int64(a), Self::Int64(b)) => a == b,
            (Self::UInt8(a), Self::UInt8(b)) => a == b,
            (Self::UInt16(a), Self::UInt16(b)) => a == b,
            (Self::UInt32(a), Self::UInt32(b)) => a == b,
            (Self::UInt64(a), Self::UInt64(b)) => a == b,
            (Self::Float32(a), Self::Float32(b)) => a == b || (a - b).abs() <= f32::EPSILON,
            (Self::Float64(a), Self::Float64(b)) => a == b || (a - b).abs() <= f64::EPSILON,
            (Self::String(a), Self::String(b)) => a == b,
            // Lists and maps never compare equal.
            _ => false,
        }
    }
}

impl PartialOrd for Variant {
    /// `None` when neither side is less but the two are not equal, such as two lists of the same
    /// length or two different strings of the same length.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.loose_cmp(other) {
            Ordering::Equal if self != other => None,
            ordering => Some(ordering),
        }
    }

    fn lt(&self, other: &Self) -> bool {
        self.less_than(other)
    }
}

/// A [`Variant`] used as a [`VariantMap`] key.
///
/// Keys are ordered by [`Variant::loose_cmp`], so two keys are the same key whenever neither is
/// less than the other: `"ab"` and `"cd"` collide, and so do `2` and `2.5`.
#[derive(Debug, Clone, Default)]
pub struct MapKey(Variant);

impl MapKey {
    /// Wraps anything convertible into a variant.
    pub fn new<T: Into<Variant>>(key: T) -> Self {
        Self(key.into())
    }

    /// Unwraps and returns the key variant.
    pub fn into_inner(self) -> Variant {
        self.0
    }
}

impl Deref for MapKey {
    type Target = Variant;

    fn deref(&self) -> &Variant {
        &self.0
    }
}

impl From<Variant> for MapKey {
    fn from(key: Variant) -> Self {
        Self(key)
    }
}

impl PartialEq for MapKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MapKey {}

impl PartialOrd for MapKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MapKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.loose_cmp(&other.0)
    }
}

/// A key type accepted by [`Variant::add_to_map`]; it picks which map alternative is used.
pub trait MapEntryKey {
    /// Inserts `value` under `self` into `target`, promoting `None` as needed.
    fn add_to(self, target: &mut Variant, value: Variant) -> bool;
}

impl MapEntryKey for u64 {
    fn add_to(self, target: &mut Variant, value: Variant) -> bool {
        if target.is_none() {
            trace!("promoting None to IntegerVariantMap");
            *target = Variant::IntegerVariantMap(IntegerVariantMap::new());
        }
        match target {
            Variant::IntegerVariantMap(map) => {
                if map.contains_key(&self) {
                    debug!(key = self, "duplicate map key dropped");
                } else {
                    map.insert(self, value);
                }
                true
            }
            other => {
                debug!(kind = other.variant_type_string(), "add_to_map rejected");
                false
            }
        }
    }
}

impl MapEntryKey for MapKey {
    fn add_to(self, target: &mut Variant, value: Variant) -> bool {
        if target.is_none() {
            trace!("promoting None to Map");
            *target = Variant::Map(VariantMap::new());
        }
        match target {
            Variant::Map(map) => {
                if map.contains_key(&self) {
                    debug!(key = %self.0, "duplicate map key dropped");
                } else {
                    map.insert(self, value);
                }
                true
            }
            other => {
                debug!(kind = other.variant_type_string(), "add_to_map rejected");
                false
            }
        }
    }
}

impl MapEntryKey for Variant {
    fn add_to(self, target: &mut Variant, value: Variant) -> bool {
        MapKey(self).add_to(target, value)
    }
}

impl MapEntryKey for &str {
    fn add_to(self, target: &mut Variant, value: Variant) -> bool {
        MapKey::new(self).add_to(target, value)
    }
}

impl MapEntryKey for String {
    fn add_to(self, target: &mut Variant, value: Variant) -> bool {
        MapKey::new(self).add_to(target, value)
    }
}

/// Renders the payload: scalars as in Rust, strings in double quotes, lists as `[a, b]` and maps
/// as `{k: v}`.
impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Bool(value) => write!(f, "{}", value),
            Self::Int8(value) => write!(f, "{}", value),
            Self::Int16(value) => write!(f, "{}", value),
            Self::Int32(value) => write!(f, "{}", value),
            Self::Int64(value) => write!(f, "{}", value),
            Self::UInt8(value) => write!(f, "{}", value),
            Self::UInt16(value) => write!(f, "{}", value),
            Self::UInt32(value) => write!(f, "{}", value),
            Self::UInt64(value) => write!(f, "{}", value),
            Self::Float32(value) => write!(f, "{:?}", value),
            Self::Float64(value) => write!(f, "{:?}", value),
            Self::String(value) => write!(f, "\"{}\"", value),
            Self::List(list) => {
                f.write_str("[")?;
                for (index, item) in list.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Self::Map(map) => {
                f.write_str("{")?;
                for (index, (key, value)) in map.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key.0, value)?;
                }
                f.write_str("}")
            }
            Self::IntegerVariantMap(map) => {
                f.write_str("{")?;
                for (index, (key, value)) in map.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}
