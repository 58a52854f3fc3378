use super::*;
use crate::evaluable::Literal;
use pretty_assertions::assert_eq;
use rill_value::{EvalErrorKind, Value};

fn args_with(name: &str, values: Vec<Value>) -> Arguments {
    Arguments::with_exprs(
        name,
        values.into_iter().map(Literal::shared).collect(),
    )
}

#[test]
fn test_exact_arity_law() {
    for n in 0..4usize {
        let args = args_with("f", vec![Value::int(0); n]);
        for k in 0..4usize {
            assert_eq!(args.check_exact(k).is_ok(), n == k, "n={n} k={k}");
        }
    }
}

#[test]
fn test_at_least_arity_law() {
    for n in 0..4usize {
        let args = args_with("f", vec![Value::int(0); n]);
        for k in 0..4usize {
            assert_eq!(args.check_at_least(k).is_ok(), n >= k, "n={n} k={k}");
        }
    }
}

#[test]
fn test_at_most_arity_law() {
    for n in 0..4usize {
        let args = args_with("f", vec![Value::int(0); n]);
        for m in 0..4usize {
            assert_eq!(args.check_at_most(m).is_ok(), n <= m, "n={n} m={m}");
        }
    }
}

#[test]
fn test_between_arity_law() {
    for n in 0..5usize {
        let args = args_with("f", vec![Value::int(0); n]);
        for k in 0..3usize {
            for m in k..5usize {
                assert_eq!(
                    args.check_between(k, m).is_ok(),
                    (k..=m).contains(&n),
                    "n={n} k={k} m={m}"
                );
            }
        }
    }
}

#[test]
fn test_arity_messages() {
    let empty = args_with("count", vec![]);
    let err = empty.check_exact(1).unwrap_err();
    assert!(err.message.contains("expects 1 argument"));
    assert_eq!(err.message, "count expects 1 argument, got 0");
    assert!(empty.check_at_least(0).is_ok());

    let err = empty.check_at_least(2).unwrap_err();
    assert_eq!(err.message, "count expects at least 2 arguments, got 0");

    let one = args_with("count", vec![Value::int(1); 3]);
    let err = one.check_at_most(1).unwrap_err();
    assert_eq!(err.message, "count expects at most 1 argument, got 3");

    let err = one.check_between(0, 2).unwrap_err();
    assert_eq!(err.message, "count expects between 0 and 2 arguments, got 3");
}

#[test]
fn test_placeholder_name() {
    let args = Arguments::unnamed();
    assert_eq!(args.callable_name(), UNKNOWN_CALLABLE);

    let err = args.check_exact(1).unwrap_err();
    assert_eq!(err.message, "<unknown> expects 1 argument, got 0");
}

#[test]
fn test_indexing_and_iteration() {
    let mut args = Arguments::new("f");
    assert!(args.is_empty());
    args.push(Literal::shared(Value::int(1)));
    args.push(Literal::shared(Value::int(2)));

    assert_eq!(args.len(), 2);
    assert_eq!(args.get(0).unwrap().as_literal(), Some(&Value::int(1)));
    assert!(args.get(2).is_none());

    // Restartable: iterating twice starts over both times
    assert_eq!(args.iter().count(), 2);
    assert_eq!((&args).into_iter().count(), 2);
}

#[test]
fn test_typed_access() {
    let mut ctx = EvalContext::new(Value::Null);
    let args = args_with(
        "f",
        vec![
            Value::string("hello"),
            Value::int(3),
            Value::string("4.5"),
            Value::Bool(true),
            Value::Null,
        ],
    );

    assert_eq!(args.string_at(&mut ctx, 0).unwrap(), "hello");
    assert_eq!(args.int_at(&mut ctx, 1).unwrap(), 3);
    assert_eq!(args.uint_at(&mut ctx, 1).unwrap(), 3);
    assert_eq!(args.float_at(&mut ctx, 2).unwrap(), 4.5);
    assert_eq!(args.int_at(&mut ctx, 2).unwrap(), 4); // truncated
    assert!(args.bool_at(&mut ctx, 3).unwrap());
    assert_eq!(args.string_at(&mut ctx, 4).unwrap(), "nil");
    assert_eq!(args.int_at(&mut ctx, 4).unwrap(), 0); // null coerces to zero

    let err = args.bool_at(&mut ctx, 0).unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::NotABoolean { .. }));
}

#[test]
fn test_date_access() {
    let mut ctx = EvalContext::new(Value::Null);
    let args = args_with("f", vec![Value::string("2024-03-01"), Value::int(100)]);

    assert_eq!(args.date_at(&mut ctx, 0).unwrap().timestamp(), 1_709_251_200);
    assert_eq!(args.date_at(&mut ctx, 1).unwrap().timestamp(), 100);
}

#[test]
fn test_collection_access() {
    let mut ctx = EvalContext::new(Value::Null);
    let args = args_with("f", vec![Value::list(vec![Value::int(1)]), Value::int(7)]);

    assert_eq!(
        args.collection_at(&mut ctx, 0, false).unwrap(),
        Value::list(vec![Value::int(1)])
    );
    assert!(args.collection_at(&mut ctx, 1, false).is_err());
    assert_eq!(
        args.collection_at(&mut ctx, 1, true).unwrap(),
        Value::list(vec![Value::int(7)])
    );
}

#[test]
fn test_missing_index() {
    let mut ctx = EvalContext::new(Value::Null);
    let args = args_with("f", vec![]);
    let err = args.value_at(&mut ctx, 0).unwrap_err();
    assert_eq!(err.message, "f has no argument at index 0");
}

#[test]
fn test_structural_equality() {
    let a = args_with("f", vec![Value::int(1)]);
    let b = args_with("f", vec![Value::float(1.0)]);
    assert_eq!(a, b); // commensurate literals

    let c = args_with("g", vec![Value::int(1)]);
    assert_ne!(a, c); // name differs

    let d = args_with("f", vec![Value::int(2)]);
    assert_ne!(a, d);
}
