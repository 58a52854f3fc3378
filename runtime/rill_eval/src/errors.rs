//! Centralized error constructors for the evaluation core.
//!
//! This module re-exports the error types and factory functions from
//! `rill_value` so embedders have a single import point.

// Re-export EvalError and EvalResult types
pub use rill_value::errors::{EvalError, EvalErrorKind, EvalResult};

// Arity Errors

pub use rill_value::errors::{arity_at_least, arity_at_most, arity_between, arity_exact};

// Registration and Scope Errors

pub use rill_value::errors::{already_defined, stack_underflow};

// Conversion Errors

pub use rill_value::errors::{
    invalid_input, not_a_boolean, not_a_collection, not_a_date, not_a_number,
    numeric_representation,
};
