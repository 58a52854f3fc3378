//! The capability every expression node must implement.

// Rc is the intentional ownership model for expression nodes: they are
// shared between stores, frames, and argument lists within one evaluation.
#![allow(clippy::disallowed_types)]

use crate::context::EvalContext;
use rill_value::{EvalResult, Value};
use std::fmt;
use std::rc::Rc;

/// An expression-tree node that can produce a value given an evaluation
/// context.
///
/// The core stores, binds, and invokes evaluables but does not define or
/// parse them; functions, operators, constants, and key-path references all
/// live in the embedding evaluator.
pub trait Evaluable: fmt::Debug {
    /// Produce a value, or fail with a typed condition.
    ///
    /// The context carries the root value and the visible scope stack;
    /// nested evaluation re-enters through the same context.
    fn evaluate(&self, ctx: &mut EvalContext) -> EvalResult;

    /// Clone this node into a fresh allocation.
    ///
    /// Store copies duplicate their values through this, so a copied store
    /// never aliases the original's entries.
    fn boxed_clone(&self) -> Rc<dyn Evaluable>;

    /// The constant value of this node, when it has one.
    ///
    /// Structural equality over stores uses this to equate literal entries;
    /// nodes without a constant value compare by reference identity.
    fn as_literal(&self) -> Option<&Value> {
        None
    }
}

/// A literal value lifted into the expression tree.
///
/// Evaluation clones the value and ignores the context.
#[derive(Clone, Debug)]
pub struct Literal(Value);

impl Literal {
    pub fn new(value: impl Into<Value>) -> Self {
        Literal(value.into())
    }

    /// The wrapped value.
    pub fn value(&self) -> &Value {
        &self.0
    }

    /// Convenience: a literal already behind an `Rc`, ready for a store.
    pub fn shared(value: impl Into<Value>) -> Rc<dyn Evaluable> {
        Rc::new(Literal(value.into()))
    }
}

impl Evaluable for Literal {
    fn evaluate(&self, _ctx: &mut EvalContext) -> EvalResult {
        Ok(self.0.clone())
    }

    fn boxed_clone(&self) -> Rc<dyn Evaluable> {
        Rc::new(self.clone())
    }

    fn as_literal(&self) -> Option<&Value> {
        Some(&self.0)
    }
}

/// Entry equality for stores and argument lists: literal entries equate
/// through the comparison algebra, everything else by reference identity.
pub(crate) fn entries_equal(a: &Rc<dyn Evaluable>, b: &Rc<dyn Evaluable>) -> bool {
    if Rc::ptr_eq(a, b) {
        return true;
    }
    match (a.as_literal(), b.as_literal()) {
        (Some(x), Some(y)) => rill_value::equal_values(x, y),
        _ => false,
    }
}
