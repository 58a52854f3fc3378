use super::*;
use crate::errors::EvalErrorKind;
use pretty_assertions::assert_eq;
use std::collections::HashMap;

#[test]
fn test_to_bool() {
    assert_eq!(to_bool(&Value::Null), Ok(false));
    assert_eq!(to_bool(&Value::Bool(true)), Ok(true));
    assert_eq!(to_bool(&Value::int(0)), Ok(false));
    assert_eq!(to_bool(&Value::int(-7)), Ok(true));
    assert_eq!(to_bool(&Value::float(0.0)), Ok(false));
    assert_eq!(to_bool(&Value::string("true")), Ok(true));
    assert_eq!(to_bool(&Value::string("NO")), Ok(false));
    assert_eq!(to_bool(&Value::string("1")), Ok(true));
    assert_eq!(to_bool(&Value::string("0.0")), Ok(false));

    let err = to_bool(&Value::string("maybe")).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::NotABoolean { .. }));
    assert!(to_bool(&Value::list(vec![])).is_err());
}

#[test]
fn test_to_i64() {
    // Null coerces to zero to satisfy a non-optional return; preserved
    assert_eq!(to_i64(&Value::Null), Ok(0));
    assert_eq!(to_i64(&Value::Bool(true)), Ok(1));
    assert_eq!(to_i64(&Value::int(-5)), Ok(-5));
    assert_eq!(to_i64(&Value::uint(5)), Ok(5));
    // Clamping round-trip
    assert_eq!(to_i64(&Value::uint(u64::MAX)), Ok(i64::MAX));
    // Truncating round-trip
    assert_eq!(to_i64(&Value::float(3.9)), Ok(3));
    assert_eq!(to_i64(&Value::float(-3.9)), Ok(-3));
    assert_eq!(to_i64(&Value::string("12")), Ok(12));
    assert_eq!(to_i64(&Value::string("3.9")), Ok(3));

    assert!(to_i64(&Value::float(f64::NAN)).is_err());
    assert!(to_i64(&Value::string("abc")).is_err());
    assert!(to_i64(&Value::bytes(vec![])).is_err());
}

#[test]
fn test_to_u64() {
    assert_eq!(to_u64(&Value::Null), Ok(0));
    assert_eq!(to_u64(&Value::int(-5)), Ok(0)); // clamped
    assert_eq!(to_u64(&Value::uint(u64::MAX)), Ok(u64::MAX));
    assert_eq!(to_u64(&Value::float(2.7)), Ok(2));
    assert_eq!(to_u64(&Value::string("18446744073709551615")), Ok(u64::MAX));
}

#[test]
fn test_to_f64() {
    assert_eq!(to_f64(&Value::Null), Ok(0.0));
    assert_eq!(to_f64(&Value::int(2)), Ok(2.0));
    assert_eq!(to_f64(&Value::string("2.5")), Ok(2.5));
    assert!(to_f64(&Value::string("abc")).is_err());
}

#[test]
fn test_to_string_value() {
    assert_eq!(to_string_value(&Value::Null), "nil");
    assert_eq!(to_string_value(&Value::int(7)), "7");
    assert_eq!(to_string_value(&Value::string("x")), "x");
}

#[test]
fn test_to_date_from_numbers() {
    let d = to_date(&Value::int(0)).unwrap();
    assert_eq!(d.timestamp(), 0);

    let d = to_date(&Value::float(1.5)).unwrap();
    assert_eq!(d.timestamp(), 1);
    assert_eq!(d.timestamp_subsec_millis(), 500);

    // Negative intervals land before the epoch
    let d = to_date(&Value::float(-0.25)).unwrap();
    assert_eq!(d.timestamp_millis(), -250);
}

#[test]
fn test_to_date_text_format_fallback() {
    // Full timestamp with zone wins first
    let d = to_date(&Value::string("2024-03-01 12:30:00 +0100")).unwrap();
    assert_eq!(d.timestamp(), 1_709_292_600);

    // Then plain timestamp, read as UTC
    let d = to_date(&Value::string("2024-03-01 12:30:00")).unwrap();
    assert_eq!(d.timestamp(), 1_709_296_200);

    // Then date-only, midnight UTC
    let d = to_date(&Value::string("2024-03-01")).unwrap();
    assert_eq!(d.timestamp(), 1_709_251_200);

    // Numeric strings parse as epoch seconds before any text format
    let d = to_date(&Value::string("100")).unwrap();
    assert_eq!(d.timestamp(), 100);

    assert!(to_date(&Value::string("yesterday")).is_err());
}

#[test]
fn test_to_date_from_components() {
    let components = HashMap::from([
        ("year".to_string(), Value::int(2024)),
        ("month".to_string(), Value::int(3)),
        ("day".to_string(), Value::int(1)),
        ("hour".to_string(), Value::int(12)),
    ]);
    let d = to_date(&Value::map(components)).unwrap();
    assert_eq!(d.timestamp(), 1_709_294_400);

    // Missing fields default: month/day to 1, time to midnight
    let year_only = HashMap::from([("year".to_string(), Value::int(1970))]);
    let d = to_date(&Value::map(year_only)).unwrap();
    assert_eq!(d.timestamp(), 0);

    // Year is required
    let empty: HashMap<String, Value> = HashMap::new();
    assert!(to_date(&Value::map(empty)).is_err());
}

#[test]
fn test_to_date_rejects_non_dates() {
    let err = to_date(&Value::Bool(true)).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::NotADate { .. }));
}

#[test]
fn test_to_collection() {
    let list = Value::list(vec![Value::int(1)]);
    assert_eq!(to_collection(&list, false).unwrap(), list);

    let m = Value::map(HashMap::new());
    assert!(to_collection(&m, false).is_ok());

    // Scalars fail unless explicitly forced into a one-element list
    let err = to_collection(&Value::int(1), false).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::NotACollection { .. }));

    let wrapped = to_collection(&Value::int(1), true).unwrap();
    assert_eq!(wrapped, Value::list(vec![Value::int(1)]));
}
