use dynvar::{variant_list, variant_map, MapKey, Variant, VariantType};
use std::cmp::Ordering;

fn kinds() -> Vec<Variant> {
    vec![
        Variant::None,
        Variant::from(true),
        Variant::from(-8i8),
        Variant::from(-16i16),
        Variant::from(-32i32),
        Variant::from(-64i64),
        Variant::from(8u8),
        Variant::from(16u16),
        Variant::from(32u32),
        Variant::from(64u64),
        Variant::from(1.5f32),
        Variant::from(2.5f64),
        Variant::from("text"),
        variant_list![1i32],
        variant_map! { "k" => 1i32 },
        variant_map! { 1u64 => 1i32 },
    ]
}

#[test]
fn test_exactly_one_kind_is_active() {
    for value in kinds() {
        let flags = [
            value.is_none(),
            value.is_bool(),
            value.is_int8(),
            value.is_int16(),
            value.is_int32(),
            value.is_int64(),
            value.is_uint8(),
            value.is_uint16(),
            value.is_uint32(),
            value.is_uint64(),
            value.is_float32(),
            value.is_float64(),
            value.is_string(),
            value.is_list(),
            value.is_map(),
            value.is_integer_variant_map(),
        ];
        assert_eq!(flags.iter().filter(|&&flag| flag).count(), 1, "{:?}", value);
        assert_eq!(value.is_valid(), !value.is_none());
    }
}

#[test]
fn test_mismatched_getters_return_defaults() {
    let text = Variant::from("text");
    assert_eq!(text.get_int32(), 0);
    assert!(!text.get_bool());
    assert_eq!(text.get_float64(), 0.0);
    assert!(text.get_list().is_empty());
    assert!(text.get_map().is_empty());
    assert!(text.get_integer_variant_map().is_empty());

    let number = Variant::from(7u16);
    assert_eq!(number.get_string(), "");
    // No cross-width conversion.
    assert_eq!(number.get_uint32(), 0);
    assert_eq!(number.get_uint16(), 7);
}

#[test]
fn test_setters_replace_payload() {
    let mut value = variant_list![1i32, 2i32];
    value.set_string("now a string");
    assert_eq!(value.variant_type(), VariantType::String);
    assert_eq!(value.get_string(), "now a string");

    value.set_float32(0.25);
    assert_eq!(value.variant_type_string(), "Float32");

    value.set_value(-3i64);
    assert_eq!(value.get_int64(), -3);

    value.make_invalid();
    assert!(value.is_none());
}

#[test]
fn test_promotion() {
    let mut list = Variant::None;
    assert!(list.add_to_list("a"));
    assert!(list.add_to_list(2u8));
    assert_eq!(list.list_length(), 2);

    let mut by_integer = Variant::None;
    assert!(by_integer.add_to_map(7u64, "seven"));
    assert!(by_integer.is_integer_variant_map());

    let mut by_variant = Variant::None;
    assert!(by_variant.add_to_map("name", "value"));
    assert!(by_variant.is_map());

    // Once promoted, the other map kind is refused.
    assert!(!by_integer.add_to_map("name", 1i32));
    assert!(!by_variant.add_to_map(1u64, 1i32));
    assert!(!list.add_to_map(1u64, 1i32));
}

#[test]
fn test_no_promotion_from_scalars() {
    let mut value = Variant::from(5i32);
    assert!(!value.add_to_list(6i32));
    assert!(!value.add_to_map(1u64, 6i32));
    assert!(!value.add_to_map("k", 6i32));
    assert_eq!(value.get_int32(), 5);
}

#[test]
fn test_first_insert_wins() {
    let ports = variant_map! {
        22u64 => "ssh",
        22u64 => "shadowed",
    };
    assert_eq!(ports.integer_variant_map_length(), 1);
    assert_eq!(ports.get_integer_variant_map()[&22u64].get_string(), "ssh");

    let mut names = Variant::None;
    assert!(names.add_to_map("alpha", 1i32));
    // Reported as success even though the value is dropped.
    assert!(names.add_to_map("alpha", 2i32));
    assert_eq!(names.get_map()[&MapKey::new("alpha")].get_int32(), 1);
}

#[test]
fn test_take_leaves_none() {
    let mut source = variant_list!["x", "y"];
    let moved = source.take();
    assert!(source.is_none());
    assert_eq!(moved.list_length(), 2);

    let copy = moved.clone();
    assert_eq!(copy.list_length(), 2);
    assert_eq!(moved.list_length(), 2);
}

#[test]
fn test_clear_and_reserve() {
    let mut list = variant_list![1i32, 2i32, 3i32];
    list.reserve_list(16);
    assert!(list.get_list().capacity() >= 16);
    // The argument is a total capacity, so a smaller request is already satisfied.
    list.reserve_list(2);
    assert_eq!(list.length(), 3);
    assert!(list.get_list().capacity() >= 16);
    list.clear_list();
    assert!(list.is_list());
    assert_eq!(list.length(), 0);

    let mut map = variant_map! { 1u64 => 1i32 };
    map.clear_list();
    map.clear_map();
    assert_eq!(map.length(), 1);
    map.clear_integer_variant_map();
    assert!(map.is_integer_variant_map());
    assert_eq!(map.length(), 0);

    let mut text = Variant::from("abc");
    text.reserve_list(4);
    text.clear_list();
    assert_eq!(text.get_string(), "abc");
}

#[test]
fn test_equality() {
    assert_eq!(Variant::from(3i32), Variant::from(3i32));
    assert_ne!(Variant::from(3i32), Variant::from(3i64));
    assert_ne!(Variant::from(3i32), Variant::from(4i32));
    assert_eq!(Variant::from("a"), Variant::from("a"));
    assert_eq!(Variant::None, Variant::None);
    assert_eq!(Variant::from(0.1f64 + 0.2), Variant::from(0.3f64));
    assert_ne!(Variant::from(f64::NAN), Variant::from(f64::NAN));
    assert_eq!(Variant::from(f64::INFINITY), Variant::from(f64::INFINITY));
    assert_eq!(Variant::from(f32::NEG_INFINITY), Variant::from(f32::NEG_INFINITY));
    assert_ne!(Variant::from(f64::INFINITY), Variant::from(f64::NEG_INFINITY));

    // Aggregates are never equal, not even to themselves.
    let list = variant_list![1i32];
    assert_ne!(list, list.clone());
    let map = variant_map! { 1u64 => 1i32 };
    assert_ne!(map, map.clone());
}

#[test]
fn test_loose_ordering() {
    assert!(Variant::from(-1i8) < Variant::from(1u64));
    assert!(Variant::from(2.9f64) < Variant::from(3u8));
    assert!(Variant::from("ab") < Variant::from("abc"));
    assert!(variant_list![1i32] < variant_list![1i32, 2i32]);

    // Strings of equal length are neither less nor greater.
    let ab = Variant::from("ab");
    let zz = Variant::from("zz");
    assert!(!(ab < zz));
    assert!(!(zz < ab));

    // The left operand picks the rule.
    let number = Variant::from(1i32);
    let text = Variant::from("abcd");
    assert!(!number.less_than(&text));
    assert!(!text.less_than(&Variant::from(5i32)));
    assert!(Variant::from(5i32).less_than(&Variant::from(6u8)));
}

#[test]
fn test_partial_cmp_agrees_with_equality() {
    let list = variant_list![1i32, 2i32];
    let copy = list.clone();
    assert_eq!(list.partial_cmp(&copy), None);
    assert!(!(list <= copy));
    assert!(!(copy <= list));

    let ab = Variant::from("ab");
    let cd = Variant::from("cd");
    assert_ne!(ab, cd);
    assert_eq!(ab.partial_cmp(&cd), None);
    // The loose relation itself still treats them as tied.
    assert_eq!(ab.loose_cmp(&cd), Ordering::Equal);

    let same = Variant::from("ab");
    assert_eq!(ab.partial_cmp(&same), Some(Ordering::Equal));
    assert!(ab <= same && same <= ab);
    assert_eq!(
        Variant::from(1i32).partial_cmp(&Variant::from(2u8)),
        Some(Ordering::Less)
    );
    assert!(Variant::from("abc") > Variant::from("ab"));
}

#[test]
fn test_map_macro_keys_share_one_kind() {
    let names = variant_map! {
        "beta" => 2i32,
        "alpha" => 1i32,
        "gamma" => 3i32,
    };
    assert!(names.is_map());
    // "gamma" ties with "alpha" on length.
    assert_eq!(names.map_length(), 2);
    assert_eq!(names.get_map()[&MapKey::new("beta")].get_int32(), 2);

    let keyed = variant_map! {
        Variant::from(1i32) => "one",
        Variant::from("two") => 2u8,
    };
    assert!(keyed.is_map());

    let ids = variant_map! { 1u64 => "a", 2u64 => "b" };
    assert_eq!(ids.integer_variant_map_length(), 2);

    let empty = variant_map! {};
    assert!(empty.is_none());
}

#[test]
fn test_map_keys_collide_under_loose_order() {
    let mut names = Variant::None;
    assert!(names.add_to_map("ab", 1i32));
    assert!(names.add_to_map("cd", 2i32));
    assert!(names.add_to_map("abc", 3i32));
    assert_eq!(names.map_length(), 2);
    assert_eq!(names.get_map()[&MapKey::new("cd")].get_int32(), 1);

    let mut numbers = Variant::None;
    assert!(numbers.add_to_map(Variant::from(2i32), 1i32));
    assert!(numbers.add_to_map(Variant::from(2.5f64), 2i32));
    assert!(numbers.add_to_map(Variant::from(3u8), 3i32));
    assert_eq!(numbers.map_length(), 2);
    assert_eq!(numbers.get_map()[&MapKey::new(2.9f32)].get_int32(), 1);
}

#[test]
fn test_display() {
    let value = variant_list![1i32, "two", variant_map! { 3u64 => true }, Variant::None];
    assert_eq!(value.to_string(), "[1, \"two\", {3: true}, None]");
}
