//! Numeric capability extraction.
//!
//! The comparison algebra never works on concrete numeric types directly;
//! it asks each operand four questions: can you be a signed 64, an unsigned
//! 64, a double, and do you self-report as floating point? This module
//! answers those questions for every `Value` tag.
//!
//! String operands are numeric-comparable only if they fully parse as an
//! integer or float literal. A string "is floating point" iff it contains
//! `.` or `e`/`E` — a syntactic heuristic, not a parse guarantee. A
//! malformed literal like "1e" classifies as floating point, then fails the
//! double parse, and the operand ends up not numeric-comparable at all.
//! This is intentional: downstream behavior stays defined and reproducible.

use crate::errors::{numeric_representation, EvalError};
use crate::value::Value;

/// Whether the operand self-reports as floating point.
pub fn is_floating_point(v: &Value) -> bool {
    match v {
        Value::Float(_) => true,
        Value::Str(s) => is_float_literal(s),
        Value::Custom(c) => c.get().as_numeric().is_some_and(|n| is_floating_point(&n)),
        _ => false,
    }
}

/// Whether the operand supports any numeric capability at all.
pub fn is_numeric(v: &Value) -> bool {
    as_i64(v).is_some() || as_u64(v).is_some() || as_f64(v).is_some()
}

/// Signed-64 extraction. `None` when the value has no signed-64 form, which
/// includes unsigned magnitudes above `i64::MAX`.
pub fn as_i64(v: &Value) -> Option<i64> {
    match v {
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Int(n) => Some(*n),
        Value::UInt(n) => i64::try_from(*n).ok(),
        Value::Str(s) => s.parse::<i64>().ok(),
        Value::Custom(c) => c.get().as_numeric().and_then(|n| as_i64(&n)),
        _ => None,
    }
}

/// Unsigned-64 extraction. `None` for negative values.
pub fn as_u64(v: &Value) -> Option<u64> {
    match v {
        Value::Bool(b) => Some(u64::from(*b)),
        Value::Int(n) => u64::try_from(*n).ok(),
        Value::UInt(n) => Some(*n),
        Value::Str(s) => s.parse::<u64>().ok(),
        Value::Custom(c) => c.get().as_numeric().and_then(|n| as_u64(&n)),
        _ => None,
    }
}

/// Double extraction, used when either operand self-reports floating point.
#[allow(clippy::cast_precision_loss)]
pub fn as_f64(v: &Value) -> Option<f64> {
    match v {
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Int(n) => Some(*n as f64),
        Value::UInt(n) => Some(*n as f64),
        Value::Float(x) => Some(*x),
        Value::Str(s) => s.parse::<f64>().ok(),
        Value::Custom(c) => c.get().as_numeric().and_then(|n| as_f64(&n)),
        _ => None,
    }
}

/// Strict signed-64 extraction; errors with `NumericRepresentation` when the
/// value is numeric but out of range, `NotANumber` otherwise.
pub fn checked_i64(v: &Value) -> Result<i64, EvalError> {
    as_i64(v).ok_or_else(|| {
        if is_numeric(v) {
            numeric_representation(v, "i64")
        } else {
            crate::errors::not_a_number(v)
        }
    })
}

/// Strict unsigned-64 extraction; errors with `NumericRepresentation` when
/// the value is numeric but negative, `NotANumber` otherwise.
pub fn checked_u64(v: &Value) -> Result<u64, EvalError> {
    as_u64(v).ok_or_else(|| {
        if is_numeric(v) {
            numeric_representation(v, "u64")
        } else {
            crate::errors::not_a_number(v)
        }
    })
}

/// Strict double extraction.
pub fn checked_f64(v: &Value) -> Result<f64, EvalError> {
    as_f64(v).ok_or_else(|| crate::errors::not_a_number(v))
}

/// The `.`/`e` floating-point classification heuristic for string literals.
pub(crate) fn is_float_literal(s: &str) -> bool {
    s.contains('.') || s.contains('e') || s.contains('E')
}
