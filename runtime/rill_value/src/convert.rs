//! Shared coercion rules for typed argument access.
//!
//! These are the rules every typed fetch-and-evaluate helper applies after
//! evaluating an argument expression. They are lossy by design where the
//! original behavior was lossy: integer round-trips clamp, float round-trips
//! truncate, and null coerces to zero (see `to_i64`).

use crate::errors::{not_a_boolean, not_a_collection, not_a_date, not_a_number, EvalError};
use crate::numeric::is_float_literal;
use crate::value::Value;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Coerce to a boolean.
///
/// Null is false; numbers pass the nonzero test; strings must be a strict
/// boolean or numeric literal.
pub fn to_bool(v: &Value) -> Result<bool, EvalError> {
    match v {
        Value::Null => Ok(false),
        Value::Bool(b) => Ok(*b),
        Value::Int(n) => Ok(*n != 0),
        Value::UInt(n) => Ok(*n != 0),
        Value::Float(x) => Ok(*x != 0.0),
        Value::Str(s) => parse_bool_literal(s).ok_or_else(|| not_a_boolean(v)),
        _ => Err(not_a_boolean(v)),
    }
}

/// Coerce to a signed 64-bit integer.
///
/// Null yields zero. This satisfies a non-optional return where the argument
/// is genuinely absent, and can mask that absence; the behavior is
/// preserved deliberately. Unsigned round-trips clamp at `i64::MAX`, floats
/// truncate toward zero, strings parse as an integer first and fall back to
/// a truncated float parse.
pub fn to_i64(v: &Value) -> Result<i64, EvalError> {
    match v {
        Value::Null => Ok(0),
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::Int(n) => Ok(*n),
        Value::UInt(n) => Ok(i64::try_from(*n).unwrap_or(i64::MAX)),
        Value::Float(x) => float_to_i64(*x).ok_or_else(|| not_a_number(v)),
        Value::Str(s) => s
            .parse::<i64>()
            .ok()
            .or_else(|| s.parse::<f64>().ok().and_then(float_to_i64))
            .ok_or_else(|| not_a_number(v)),
        _ => Err(not_a_number(v)),
    }
}

/// Coerce to an unsigned 64-bit integer. Symmetric to `to_i64`: negative
/// round-trips clamp at zero.
pub fn to_u64(v: &Value) -> Result<u64, EvalError> {
    match v {
        Value::Null => Ok(0),
        Value::Bool(b) => Ok(u64::from(*b)),
        Value::Int(n) => Ok(u64::try_from(*n).unwrap_or(0)),
        Value::UInt(n) => Ok(*n),
        Value::Float(x) => float_to_u64(*x).ok_or_else(|| not_a_number(v)),
        Value::Str(s) => s
            .parse::<u64>()
            .ok()
            .or_else(|| s.parse::<f64>().ok().and_then(float_to_u64))
            .ok_or_else(|| not_a_number(v)),
        _ => Err(not_a_number(v)),
    }
}

/// Coerce to a double.
#[allow(clippy::cast_precision_loss)]
pub fn to_f64(v: &Value) -> Result<f64, EvalError> {
    match v {
        Value::Null => Ok(0.0),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::Int(n) => Ok(*n as f64),
        Value::UInt(n) => Ok(*n as f64),
        Value::Float(x) => Ok(*x),
        Value::Str(s) => s
            .parse::<f64>()
            .ok()
            .ok_or_else(|| not_a_number(v)),
        _ => Err(not_a_number(v)),
    }
}

/// Coerce to the natural text form. Null becomes the literal "nil".
pub fn to_string_value(v: &Value) -> String {
    v.to_string()
}

/// Coerce to a date.
///
/// Numbers are a time interval in seconds since the Unix epoch. Strings try
/// a numeric parse first, then a fixed ordered list of formats: full
/// timestamp with zone, timestamp, date-only. A map is treated as structured
/// calendar components (`year` required; `month`/`day` default to 1;
/// `hour`/`minute`/`second` to 0).
#[allow(clippy::cast_precision_loss)]
pub fn to_date(v: &Value) -> Result<DateTime<Utc>, EvalError> {
    match v {
        Value::Date(d) => Ok(*d),
        Value::Int(n) => epoch_seconds(*n as f64).ok_or_else(|| not_a_date(v)),
        Value::UInt(n) => epoch_seconds(*n as f64).ok_or_else(|| not_a_date(v)),
        Value::Float(x) => epoch_seconds(*x).ok_or_else(|| not_a_date(v)),
        Value::Str(s) => {
            if let Ok(secs) = s.parse::<f64>() {
                return epoch_seconds(secs).ok_or_else(|| not_a_date(v));
            }
            parse_date_text(s).ok_or_else(|| not_a_date(v))
        }
        Value::Map(components) => {
            let field = |name: &str, default: i64| -> Result<i64, EvalError> {
                components.get(name).map_or(Ok(default), to_i64)
            };
            let year = components.get("year").ok_or_else(|| not_a_date(v))?;
            let year = i32::try_from(to_i64(year)?).map_err(|_| not_a_date(v))?;
            let month = u32::try_from(field("month", 1)?).map_err(|_| not_a_date(v))?;
            let day = u32::try_from(field("day", 1)?).map_err(|_| not_a_date(v))?;
            let hour = u32::try_from(field("hour", 0)?).map_err(|_| not_a_date(v))?;
            let minute = u32::try_from(field("minute", 0)?).map_err(|_| not_a_date(v))?;
            let second = u32::try_from(field("second", 0)?).map_err(|_| not_a_date(v))?;
            NaiveDate::from_ymd_opt(year, month, day)
                .and_then(|d| d.and_hms_opt(hour, minute, second))
                .map(|dt| dt.and_utc())
                .ok_or_else(|| not_a_date(v))
        }
        _ => Err(not_a_date(v)),
    }
}

/// Coerce to the collection capability.
///
/// Lists and maps already satisfy it and pass through. Anything else is
/// wrapped as a one-element list only when `forced` — an implicit wrap
/// would hide type errors at call sites that expect collections.
pub fn to_collection(v: &Value, forced: bool) -> Result<Value, EvalError> {
    match v {
        Value::List(_) | Value::Map(_) => Ok(v.clone()),
        _ if forced => Ok(Value::list(vec![v.clone()])),
        _ => Err(not_a_collection(v)),
    }
}

/// Strict boolean literal parse: boolean words, else integer, else float,
/// each through the nonzero rule.
fn parse_bool_literal(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "yes" | "t" | "y" => Some(true),
        "false" | "no" | "f" | "n" => Some(false),
        _ => {
            if let Ok(n) = s.parse::<i64>() {
                return Some(n != 0);
            }
            if is_float_literal(s) {
                if let Ok(x) = s.parse::<f64>() {
                    return Some(x != 0.0);
                }
            }
            None
        }
    }
}

/// Truncate a double toward zero into `i64`, clamping at the range ends.
/// `None` for NaN.
#[allow(clippy::cast_possible_truncation)]
fn float_to_i64(x: f64) -> Option<i64> {
    if x.is_nan() {
        return None;
    }
    // `as` saturates at the representable range.
    Some(x.trunc() as i64)
}

/// Truncate a double toward zero into `u64`, clamping below at zero.
/// `None` for NaN.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn float_to_u64(x: f64) -> Option<u64> {
    if x.is_nan() {
        return None;
    }
    Some(x.trunc() as u64)
}

/// Seconds since the Unix epoch, fractional part preserved as nanoseconds.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn epoch_seconds(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    let whole = secs.div_euclid(1.0);
    let nanos = (secs.rem_euclid(1.0) * 1_000_000_000.0).round();
    // Rounding can land exactly on the next second.
    let (whole, nanos) = if nanos >= 1_000_000_000.0 {
        (whole + 1.0, 0.0)
    } else {
        (whole, nanos)
    };
    DateTime::from_timestamp(whole as i64, nanos as u32)
}

/// The fixed, ordered fallback list of date-time text formats.
fn parse_date_text(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S %z") {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    None
}

#[cfg(test)]
mod tests;
