//! Runtime values for the Rill evaluation core.
//!
//! # Closed Variant Architecture
//!
//! `Value` is a closed tagged variant: the comparison and coercion
//! algorithms are exhaustive matches over pairs of tags, which makes their
//! totality a compile-time guarantee. External types are projected into the
//! `Custom` variant at the boundary (see `CustomValue`).
//!
//! # Heap Enforcement
//!
//! All heap allocations go through factory methods on `Value`. The `Heap<T>`
//! wrapper has a crate-private constructor, so external code cannot create
//! heap payloads directly:
//!
//! ```text
//! let s = Value::string("hello");      // OK
//! let s = Value::Str(Heap::new(...));  // ERROR: Heap::new is pub(crate)
//! ```

mod custom;
mod heap;

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt;

pub use custom::{CustomRef, CustomValue};
pub use heap::Heap;

/// Runtime value in the Rill evaluation core.
#[derive(Clone, Debug)]
pub enum Value {
    /// Null / absent value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed 64-bit integer.
    Int(i64),
    /// Unsigned 64-bit integer.
    ///
    /// Kept distinct from `Int` so the comparison algebra can apply the
    /// overflow tie-break: any magnitude that needs `u64` is larger than
    /// anything that fits in `i64`.
    UInt(u64),
    /// Double-precision floating-point value.
    Float(f64),
    /// String value.
    Str(Heap<String>),
    /// Byte blob.
    Bytes(Heap<Vec<u8>>),
    /// Calendar date and time (UTC).
    Date(DateTime<Utc>),
    /// Ordered collection of values.
    List(Heap<Vec<Value>>),
    /// Keyed collection with string keys.
    Map(Heap<HashMap<String, Value>>),
    /// Externally-defined value behind the `CustomValue` capability trait.
    Custom(CustomRef),
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    /// Create an integer value.
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create an unsigned integer value.
    #[inline]
    pub fn uint(n: u64) -> Self {
        Value::UInt(n)
    }

    /// Create a floating-point value.
    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    /// Create a floating-point value from an `f32`.
    ///
    /// Single-precision operands are widened at the boundary; the algebra
    /// only ever commensurates doubles.
    #[inline]
    pub fn float32(f: f32) -> Self {
        Value::Float(f64::from(f))
    }

    /// Create a string value.
    ///
    /// ```text
    /// let s = Value::string("hello");
    /// let s2 = Value::string(format!("value: {x}"));
    /// ```
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a byte-blob value.
    #[inline]
    pub fn bytes(data: Vec<u8>) -> Self {
        Value::Bytes(Heap::new(data))
    }

    /// Create a date value.
    #[inline]
    pub fn date(d: DateTime<Utc>) -> Self {
        Value::Date(d)
    }

    /// Create a list value.
    ///
    /// ```text
    /// let empty = Value::list(vec![]);
    /// let nums = Value::list(vec![Value::int(1), Value::int(2)]);
    /// ```
    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Heap::new(items))
    }

    /// Create a map value with string keys.
    #[inline]
    pub fn map(entries: HashMap<String, Value>) -> Self {
        Value::Map(Heap::new(entries))
    }

    /// Project an external type into the value model.
    #[inline]
    pub fn custom(value: impl CustomValue + 'static) -> Self {
        Value::Custom(CustomRef::new(value))
    }
}

// Accessors

impl Value {
    /// Whether this is the null value.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Extract the string contents, if this is a string.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Extract the list items, if this is a list.
    #[inline]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Extract the map entries, if this is a map.
    #[inline]
    pub fn as_map(&self) -> Option<&HashMap<String, Value>> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Short type name for error messages.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Bytes(_) => "bytes",
            Value::Date(_) => "date",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Custom(c) => c.get().type_name(),
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

impl fmt::Display for Value {
    /// Natural text form, as used by string coercion. Null displays as
    /// "nil".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "nil"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::UInt(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{}", &**s),
            Value::Bytes(data) => {
                write!(f, "<")?;
                for byte in data.iter() {
                    write!(f, "{byte:02x}")?;
                }
                write!(f, ">")
            }
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d %H:%M:%S %z")),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
            Value::Custom(c) => write!(f, "{}", c.get().description()),
        }
    }
}

impl PartialEq for Value {
    /// Equality through the comparison algebra: numerically commensurate
    /// values are equal across representations (`Int(1) == Float(1.0)`).
    fn eq(&self, other: &Self) -> bool {
        crate::compare::equal_values(self, other)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::UInt(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

#[cfg(test)]
mod tests;
