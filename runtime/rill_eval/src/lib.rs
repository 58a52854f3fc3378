//! Rill Eval - scope and argument binding machinery for the Rill runtime.
//!
//! This crate provides the session layer beneath the expression evaluator:
//! - `SymbolStore`: name→symbol registry with duplicate protection
//! - `StackFrame`: one nesting level (optional store + one arguments list)
//! - `Arguments`: arity checks and typed, coercing argument access
//! - `EvalContext`: the per-evaluation root value and scope stack
//! - `Evaluable`: the capability expression nodes implement
//!
//! # Control Flow
//!
//! A caller evaluates an expression tree by pushing a frame before entering
//! a callable body and popping it on exit. The callable body queries its
//! arguments for count and typed values, which call back into the
//! comparison/coercion algebra in `rill_value`.
//!
//! Everything here is single-threaded and synchronous: nested evaluation is
//! ordinary call-stack recursion plus explicit push/pop of the context's
//! frame stack. The one piece of state that legitimately crosses evaluation
//! boundaries is the root store built by `RootStoreBuilder` — construct it
//! once at startup and share it by reference.

mod arguments;
mod context;
pub mod errors;
mod evaluable;
mod frame;
mod store;

// Re-export value types from rill_value
pub use rill_value::{
    compare_values, equal_values, convert, Comparison, CustomRef, CustomValue, EvalError,
    EvalErrorKind, EvalResult, Heap, Value,
};

pub use arguments::{Arguments, UNKNOWN_CALLABLE};
pub use context::EvalContext;
pub use evaluable::{Evaluable, Literal};
pub use frame::{RootStoreBuilder, StackFrame};
pub use store::SymbolStore;
