#![deny(clippy::arithmetic_side_effects)]
//! Rill Value - value model and comparison algebra for the Rill runtime.
//!
//! This crate provides:
//! - The closed `Value` variant (`Null`, `Bool`, `Int`, `UInt`, `Float`,
//!   `Str`, `Bytes`, `Date`, `List`, `Map`, `Custom`)
//! - The total, non-throwing comparison/equality algebra (`compare_values`,
//!   `equal_values`, `Comparison`)
//! - Shared coercion rules for typed argument access (`convert`)
//! - Evaluation error types (`EvalError`, `EvalResult`)
//!
//! # Architecture
//!
//! The value model is deliberately closed: comparison and coercion are
//! exhaustive matches over pairs of tags, so totality is checked by the
//! compiler rather than guarded by a logged escape hatch at runtime.
//! External types enter through the `CustomValue` capability trait.
//!
//! The core is single-threaded; heap payloads are `Rc`-backed via `Heap<T>`
//! and all allocation goes through `Value::` factory methods.

mod compare;
pub mod convert;
pub mod errors;
pub mod numeric;
mod value;

pub use compare::{compare_values, equal_values, Comparison};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use value::{CustomRef, CustomValue, Heap, Value};

// Re-export error constructors for use by other crates
pub use errors::{
    already_defined, arity_at_least, arity_at_most, arity_between, arity_exact, invalid_input,
    not_a_boolean, not_a_collection, not_a_date, not_a_number, numeric_representation,
    stack_underflow,
};
