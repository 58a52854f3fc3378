use super::*;
use crate::evaluable::Literal;
use rill_value::{EvalErrorKind, Value};

#[test]
fn test_lookup_and_contains() {
    let mut store = SymbolStore::new();
    assert!(store.is_empty());
    store.add_or_replace("x", Literal::shared(Value::int(5)));

    assert!(store.contains("x"));
    assert!(!store.contains("y"));
    assert_eq!(store.len(), 1);

    let found = store.lookup("x").unwrap();
    assert_eq!(found.as_literal(), Some(&Value::int(5)));
    assert!(store.lookup("y").is_none());
}

#[test]
fn test_add_unique_rejects_collision() {
    let mut store = SymbolStore::new();
    store.add_unique("x", Literal::shared(Value::int(5))).unwrap();

    let err = store
        .add_unique("x", Literal::shared(Value::int(6)))
        .unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::AlreadyDefined { .. }));
    assert_eq!(err.message, "symbol already defined: x");

    // The existing entry is untouched
    let found = store.lookup("x").unwrap();
    assert_eq!(found.as_literal(), Some(&Value::int(5)));
}

#[test]
fn test_add_or_replace_always_overwrites() {
    let mut store = SymbolStore::new();
    store.add_or_replace("x", Literal::shared(Value::int(5)));
    store.add_or_replace("x", Literal::shared(Value::int(6)));

    let found = store.lookup("x").unwrap();
    assert_eq!(found.as_literal(), Some(&Value::int(6)));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_enumerate_early_stop() {
    let mut store = SymbolStore::new();
    for name in ["a", "b", "c"] {
        store.add_or_replace(name, Literal::shared(Value::int(1)));
    }

    let mut seen = 0;
    let completed = store.enumerate(|_, _| {
        seen += 1;
        seen < 2
    });
    assert!(!completed);
    assert_eq!(seen, 2);

    let mut all = 0;
    assert!(store.enumerate(|_, _| {
        all += 1;
        true
    }));
    assert_eq!(all, 3);
}

#[test]
fn test_structural_equality() {
    let mut a = SymbolStore::new();
    a.add_or_replace("x", Literal::shared(Value::int(1)));

    let mut b = SymbolStore::new();
    b.add_or_replace("x", Literal::shared(Value::int(1)));
    assert_eq!(a, b);

    // Commensurate literals equate through the algebra
    let mut c = SymbolStore::new();
    c.add_or_replace("x", Literal::shared(Value::float(1.0)));
    assert_eq!(a, c);

    let mut d = SymbolStore::new();
    d.add_or_replace("x", Literal::shared(Value::int(2)));
    assert_ne!(a, d);

    let mut e = SymbolStore::new();
    e.add_or_replace("y", Literal::shared(Value::int(1)));
    assert_ne!(a, e);
}

#[test]
fn test_copied_is_deep() {
    let mut original = SymbolStore::new();
    original.add_or_replace("x", Literal::shared(Value::int(1)));

    let mut copy = original.copied();
    assert_eq!(original, copy);

    // No aliasing: the copied entry is a fresh allocation
    let ours = original.lookup("x").unwrap();
    let theirs = copy.lookup("x").unwrap();
    assert!(!Rc::ptr_eq(&ours, &theirs));

    copy.add_or_replace("x", Literal::shared(Value::int(99)));
    assert_eq!(
        original.lookup("x").unwrap().as_literal(),
        Some(&Value::int(1))
    );
}
