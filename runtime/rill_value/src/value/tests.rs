use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_factory_methods() {
    let s = Value::string("hello");
    assert_eq!(s.as_str(), Some("hello"));

    let list = Value::list(vec![Value::int(1), Value::int(2)]);
    assert_eq!(list.as_list().map(<[Value]>::len), Some(2));

    let m = Value::map(HashMap::from([("a".to_string(), Value::int(1))]));
    assert_eq!(m.as_map().map(HashMap::len), Some(1));
}

#[test]
fn test_value_display() {
    assert_eq!(format!("{}", Value::Null), "nil");
    assert_eq!(format!("{}", Value::int(42)), "42");
    assert_eq!(format!("{}", Value::uint(42)), "42");
    assert_eq!(format!("{}", Value::Bool(true)), "true");
    assert_eq!(format!("{}", Value::string("hello")), "hello");
    assert_eq!(format!("{}", Value::bytes(vec![0x0a, 0xff])), "<0aff>");
    assert_eq!(
        format!("{}", Value::list(vec![Value::int(1), Value::string("x")])),
        "[1, x]"
    );
}

#[test]
fn test_float32_widens() {
    assert_eq!(Value::float32(1.0), Value::float(1.0));
}

#[test]
fn test_type_names() {
    assert_eq!(Value::Null.type_name(), "null");
    assert_eq!(Value::int(1).type_name(), "int");
    assert_eq!(Value::uint(1).type_name(), "uint");
    assert_eq!(Value::float(1.0).type_name(), "float");
    assert_eq!(Value::string("").type_name(), "str");
    assert_eq!(Value::bytes(vec![]).type_name(), "bytes");
    assert_eq!(Value::list(vec![]).type_name(), "list");
}

#[test]
fn test_equality_across_representations() {
    // PartialEq routes through the algebra, so commensurate numbers are equal
    assert_eq!(Value::int(1), Value::uint(1));
    assert_eq!(Value::int(1), Value::float(1.0));
    assert_eq!(Value::string("12"), Value::int(12));
    assert_ne!(Value::int(1), Value::int(2));
}

#[test]
fn test_heap_ptr_eq() {
    let a = Value::string("shared");
    let b = a.clone();
    match (&a, &b) {
        (Value::Str(x), Value::Str(y)) => assert!(Heap::ptr_eq(x, y)),
        _ => panic!("expected strings"),
    }
}

#[test]
fn test_date_display_round_trips_through_coercion() {
    let d = Value::date(DateTime::from_timestamp(0, 0).unwrap());
    assert_eq!(format!("{d}"), "1970-01-01 00:00:00 +0000");
}
