/// Builds a `List` variant from a comma-separated list of values.
///
/// Every element goes through `Variant::from`, so any native alternative type can be mixed in.
///
/// # Example
///
/// ```
/// use dynvar::variant_list;
///
/// let list = variant_list![1i32, "two", 3.0f64, variant_list![4u8]];
/// assert!(list.is_list());
/// assert_eq!(list.length(), 4);
/// assert_eq!(list.get_list()[3].get_list()[0].get_uint8(), 4);
///
/// let empty = variant_list![];
/// assert!(empty.is_list());
/// ```
#[macro_export]
macro_rules! variant_list {
    ($($value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut __dynvar_list = $crate::Variant::List(::std::vec::Vec::new());
        $(
            __dynvar_list.add_to_list($value);
        )*
        __dynvar_list
    }};
}

/// Builds a map variant from `key => value` pairs.
///
/// The key type picks the alternative: `u64` keys build an `IntegerVariantMap`, variant or string
/// keys build a `Map`. All keys of one invocation must share a single type, so an integer key
/// cannot be mixed with a string key. As with `add_to_map`, the first value given for a key wins.
/// With no pairs the result is `None`, since there is no key to pick an alternative.
///
/// # Example
///
/// ```
/// use dynvar::variant_map;
///
/// let ports = variant_map! {
///     80u64 => "http",
///     443u64 => "https",
///     80u64 => "ignored",
/// };
/// assert!(ports.is_integer_variant_map());
/// assert_eq!(ports.get_integer_variant_map()[&80u64].get_string(), "http");
/// ```
///
/// Mixing key kinds is rejected at compile time:
///
/// ```compile_fail
/// use dynvar::variant_map;
///
/// let mixed = variant_map! {
///     1u64 => "a",
///     "k" => 2i32,
/// };
/// ```
#[macro_export]
macro_rules! variant_map {
    () => {
        $crate::Variant::None
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let __dynvar_keys = [$($key),+];
        let __dynvar_values = [$($crate::Variant::from($value)),+];
        let mut __dynvar_map = $crate::Variant::None;
        for (__dynvar_key, __dynvar_value) in
            ::std::iter::IntoIterator::into_iter(__dynvar_keys).zip(__dynvar_values)
        {
            __dynvar_map.add_to_map(__dynvar_key, __dynvar_value);
        }
        __dynvar_map
    }};
}
