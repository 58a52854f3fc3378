//! Total, non-throwing comparison and equality over heterogeneous values.
//!
//! `compare_values` and `equal_values` never fail: when no capability
//! relates two operands the result is `Incomparable` (or `false`), with a
//! non-fatal `tracing` diagnostic. This totality is what lets the evaluator
//! sort and equate values whose concrete types are not known statically.
//!
//! # Numeric Commensuration
//!
//! Cross-type numeric comparison deliberately avoids 128-bit arithmetic by
//! exploiting one invariant: any magnitude that overflows signed 64 is
//! larger than anything that fits in signed 64. The ladder:
//!
//! 1. Either side floating point → compare as doubles.
//! 2. Both sides signed-64 → compare as signed integers.
//! 3. Left signed-64, right needs unsigned-64 → ascending, unconditionally.
//! 4. Symmetric case → descending, unconditionally.
//! 5. Both sides unsigned-64 → compare as unsigned integers.
//! 6. Neither convertible → incomparable.

use crate::numeric::{as_f64, as_i64, as_u64, is_floating_point};
use crate::value::{CustomRef, Value};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Four-valued comparison result.
///
/// The variant order (ascending < same < descending < incomparable) is part
/// of the contract; sorting algorithms rely on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Comparison {
    /// Left operand sorts before the right.
    Ascending,
    /// Operands are equal under commensuration.
    Same,
    /// Left operand sorts after the right.
    Descending,
    /// No capability relates the operands.
    Incomparable,
}

impl Comparison {
    /// Negate the direction: ascending and descending swap, same and
    /// incomparable are fixed points.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Comparison::Ascending => Comparison::Descending,
            Comparison::Descending => Comparison::Ascending,
            other => other,
        }
    }

    /// Whether the operands were equal.
    #[inline]
    pub fn is_same(self) -> bool {
        matches!(self, Comparison::Same)
    }

    /// Bridge from `std::cmp::Ordering`.
    #[inline]
    pub fn from_ordering(ord: Ordering) -> Self {
        match ord {
            Ordering::Less => Comparison::Ascending,
            Ordering::Equal => Comparison::Same,
            Ordering::Greater => Comparison::Descending,
        }
    }

    /// Bridge to `std::cmp::Ordering`; `None` for `Incomparable`.
    #[inline]
    pub fn into_ordering(self) -> Option<Ordering> {
        match self {
            Comparison::Ascending => Some(Ordering::Less),
            Comparison::Same => Some(Ordering::Equal),
            Comparison::Descending => Some(Ordering::Greater),
            Comparison::Incomparable => None,
        }
    }
}

/// Total ordering comparison over arbitrary values. Never fails.
///
/// Null orders before everything; two nulls are the same. Everything else
/// dispatches on the pair of tags.
pub fn compare_values(a: &Value, b: &Value) -> Comparison {
    match (a, b) {
        (Value::Null, Value::Null) => Comparison::Same,
        (Value::Null, _) => Comparison::Ascending,
        (_, Value::Null) => Comparison::Descending,

        (Value::Str(x), Value::Str(y)) => Comparison::from_ordering(x.cmp(y)),
        (Value::Bytes(x), Value::Bytes(y)) => compare_bytes(x, y),
        (Value::Date(x), Value::Date(y)) => Comparison::from_ordering(x.cmp(y)),
        (Value::List(x), Value::List(y)) => compare_lists(x, y),

        // Maps have no defined order; equality still holds.
        (Value::Map(x), Value::Map(y)) => {
            if maps_equal(x, y) {
                Comparison::Same
            } else {
                Comparison::Incomparable
            }
        }

        (Value::Custom(x), Value::Custom(y)) => compare_custom(x, y),
        (Value::Custom(x), _) => match x.get().as_numeric() {
            Some(n) => compare_values(&n, b),
            None => incomparable_fallback(a, b),
        },
        (_, Value::Custom(y)) => match y.get().as_numeric() {
            Some(n) => compare_values(a, &n),
            None => incomparable_fallback(a, b),
        },

        (Value::Bool(x), Value::Bool(y)) => Comparison::from_ordering(x.cmp(y)),
        // Boolean against a number: the number collapses to its nonzero
        // test and the comparison happens between booleans.
        (Value::Bool(x), _) => match nonzero(b) {
            Some(y) => Comparison::from_ordering(x.cmp(&y)),
            None => incomparable_fallback(a, b),
        },
        (_, Value::Bool(y)) => match nonzero(a) {
            Some(x) => Comparison::from_ordering(x.cmp(y)),
            None => incomparable_fallback(a, b),
        },

        _ => compare_numeric(a, b),
    }
}

/// Equality over arbitrary values. Never fails.
///
/// Two nulls are equal; null never equals a non-null. Custom values use
/// their equality hook when present, falling back to reference identity
/// with a non-fatal diagnostic. Everything else is equal iff the ordering
/// algebra says `Same`, so numerically commensurate values are equal across
/// representations.
pub fn equal_values(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::Custom(x), Value::Custom(y)) => {
            if let Some(eq) = x.get().eq_custom(y.get()) {
                return eq;
            }
            if let Some(cmp) = x.get().cmp_custom(y.get()) {
                return cmp.is_same();
            }
            if let (Some(nx), Some(ny)) = (x.get().as_numeric(), y.get().as_numeric()) {
                return compare_values(&nx, &ny).is_same();
            }
            tracing::debug!(
                left = x.get().type_name(),
                right = y.get().type_name(),
                "no equality capability, falling back to reference identity"
            );
            CustomRef::ptr_eq(x, y)
        }
        _ => compare_values(a, b).is_same(),
    }
}

/// The cross-type numeric ladder (module docs).
fn compare_numeric(a: &Value, b: &Value) -> Comparison {
    if is_floating_point(a) || is_floating_point(b) {
        return match (as_f64(a), as_f64(b)) {
            (Some(x), Some(y)) => x
                .partial_cmp(&y)
                .map_or(Comparison::Incomparable, Comparison::from_ordering),
            _ => incomparable_fallback(a, b),
        };
    }
    match (as_i64(a), as_i64(b)) {
        (Some(x), Some(y)) => Comparison::from_ordering(x.cmp(&y)),
        // Right only fits unsigned: its magnitude exceeds i64::MAX, so the
        // left is necessarily smaller. No 128-bit arithmetic needed.
        (Some(_), None) if as_u64(b).is_some() => Comparison::Ascending,
        (None, Some(_)) if as_u64(a).is_some() => Comparison::Descending,
        (None, None) => match (as_u64(a), as_u64(b)) {
            (Some(x), Some(y)) => Comparison::from_ordering(x.cmp(&y)),
            _ => incomparable_fallback(a, b),
        },
        _ => incomparable_fallback(a, b),
    }
}

/// Byte blobs compare lexicographically over the common-prefix length;
/// equal prefixes with differing lengths sort the shorter one first.
fn compare_bytes(a: &[u8], b: &[u8]) -> Comparison {
    let prefix = a.len().min(b.len());
    match a[..prefix].cmp(&b[..prefix]) {
        Ordering::Equal => Comparison::from_ordering(a.len().cmp(&b.len())),
        ord => Comparison::from_ordering(ord),
    }
}

/// Lists compare elementwise; the first non-`Same` result decides, and an
/// incomparable pair poisons the whole comparison. Equal prefixes fall back
/// to length.
fn compare_lists(a: &[Value], b: &[Value]) -> Comparison {
    for (x, y) in a.iter().zip(b.iter()) {
        match compare_values(x, y) {
            Comparison::Same => {}
            decided => return decided,
        }
    }
    Comparison::from_ordering(a.len().cmp(&b.len()))
}

/// Map equality: same key set, pairwise-equal values.
fn maps_equal(a: &HashMap<String, Value>, b: &HashMap<String, Value>) -> bool {
    a.len() == b.len()
        && a.iter()
            .all(|(key, value)| b.get(key).is_some_and(|other| equal_values(value, other)))
}

fn compare_custom(x: &CustomRef, y: &CustomRef) -> Comparison {
    if let Some(cmp) = x.get().cmp_custom(y.get()) {
        return cmp;
    }
    // Symmetric fallback through the right operand, negated.
    if let Some(cmp) = y.get().cmp_custom(x.get()) {
        return cmp.reversed();
    }
    if let (Some(nx), Some(ny)) = (x.get().as_numeric(), y.get().as_numeric()) {
        return compare_values(&nx, &ny);
    }
    tracing::debug!(
        left = x.get().type_name(),
        right = y.get().type_name(),
        "no ordering capability between custom values"
    );
    Comparison::Incomparable
}

/// The boolean-against-number rule: a numeric operand participates through
/// its nonzero test after signed-64 coercion.
fn nonzero(v: &Value) -> Option<bool> {
    if is_floating_point(v) {
        return as_f64(v).map(|x| x != 0.0);
    }
    as_i64(v)
        .map(|x| x != 0)
        .or_else(|| as_u64(v).map(|x| x != 0))
}

fn incomparable_fallback(a: &Value, b: &Value) -> Comparison {
    tracing::debug!(
        left = a.type_name(),
        right = b.type_name(),
        "no ordering capability between operands"
    );
    Comparison::Incomparable
}
