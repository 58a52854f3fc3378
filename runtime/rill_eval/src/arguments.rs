//! Not-yet-evaluated expressions bound to one call site.

#![allow(clippy::disallowed_types)]

use crate::context::EvalContext;
use crate::evaluable::{entries_equal, Evaluable};
use chrono::{DateTime, Utc};
use rill_value::errors::{
    arity_at_least, arity_at_most, arity_between, arity_exact, invalid_input,
};
use rill_value::{convert, EvalError, EvalResult};
use std::fmt;
use std::rc::Rc;
use std::slice;

/// Placeholder used in error messages when the call site's name is unknown.
pub const UNKNOWN_CALLABLE: &str = "<unknown>";

/// Ordered list of not-yet-evaluated expressions bound to one call.
///
/// The callable's name is captured at construction as a plain owned string
/// and used only to build error text; it degrades to a placeholder when the
/// call site never had one.
#[derive(Clone, Default)]
pub struct Arguments {
    callable: Option<String>,
    exprs: Vec<Rc<dyn Evaluable>>,
}

impl Arguments {
    /// Arguments for a named callable, initially empty.
    pub fn new(callable: impl Into<String>) -> Self {
        Arguments {
            callable: Some(callable.into()),
            exprs: Vec::new(),
        }
    }

    /// Arguments with no recoverable call-site name.
    pub fn unnamed() -> Self {
        Arguments::default()
    }

    /// Arguments for a named callable with its expressions.
    pub fn with_exprs(callable: impl Into<String>, exprs: Vec<Rc<dyn Evaluable>>) -> Self {
        Arguments {
            callable: Some(callable.into()),
            exprs,
        }
    }

    /// The callable's name, or the placeholder.
    pub fn callable_name(&self) -> &str {
        self.callable.as_deref().unwrap_or(UNKNOWN_CALLABLE)
    }

    /// Append an expression.
    pub fn push(&mut self, expr: Rc<dyn Evaluable>) {
        self.exprs.push(expr);
    }

    /// Number of bound expressions.
    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    /// Whether no expressions are bound.
    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    /// The expression at `index`, unevaluated.
    pub fn get(&self, index: usize) -> Option<&Rc<dyn Evaluable>> {
        self.exprs.get(index)
    }

    /// Iterate over the bound expressions. The iterator is finite and
    /// restartable: each call starts from the first expression.
    pub fn iter(&self) -> slice::Iter<'_, Rc<dyn Evaluable>> {
        self.exprs.iter()
    }

    // Arity checks

    /// Succeeds iff exactly `expected` arguments are bound.
    pub fn check_exact(&self, expected: usize) -> Result<(), EvalError> {
        if self.len() == expected {
            Ok(())
        } else {
            Err(arity_exact(self.callable_name(), expected, self.len()))
        }
    }

    /// Succeeds iff at least `expected` arguments are bound.
    pub fn check_at_least(&self, expected: usize) -> Result<(), EvalError> {
        if self.len() >= expected {
            Ok(())
        } else {
            Err(arity_at_least(self.callable_name(), expected, self.len()))
        }
    }

    /// Succeeds iff at most `expected` arguments are bound.
    pub fn check_at_most(&self, expected: usize) -> Result<(), EvalError> {
        if self.len() <= expected {
            Ok(())
        } else {
            Err(arity_at_most(self.callable_name(), expected, self.len()))
        }
    }

    /// Succeeds iff the bound count is within `min..=max`.
    pub fn check_between(&self, min: usize, max: usize) -> Result<(), EvalError> {
        if (min..=max).contains(&self.len()) {
            Ok(())
        } else {
            Err(arity_between(self.callable_name(), min, max, self.len()))
        }
    }

    // Typed fetch-and-evaluate helpers
    //
    // Each evaluates the expression at `index` under the supplied context,
    // then applies the shared coercion rules. The expression handle is
    // cloned out first so evaluation can re-borrow the context mutably.

    /// Evaluate the expression at `index`.
    pub fn value_at(&self, ctx: &mut EvalContext, index: usize) -> EvalResult {
        let expr = self.expr_at(index)?;
        expr.evaluate(ctx)
    }

    /// Evaluate and coerce to a string. Null becomes "nil".
    pub fn string_at(&self, ctx: &mut EvalContext, index: usize) -> Result<String, EvalError> {
        Ok(convert::to_string_value(&self.value_at(ctx, index)?))
    }

    /// Evaluate and coerce to a boolean.
    pub fn bool_at(&self, ctx: &mut EvalContext, index: usize) -> Result<bool, EvalError> {
        convert::to_bool(&self.value_at(ctx, index)?)
    }

    /// Evaluate and coerce to a signed 64-bit integer.
    pub fn int_at(&self, ctx: &mut EvalContext, index: usize) -> Result<i64, EvalError> {
        convert::to_i64(&self.value_at(ctx, index)?)
    }

    /// Evaluate and coerce to an unsigned 64-bit integer.
    pub fn uint_at(&self, ctx: &mut EvalContext, index: usize) -> Result<u64, EvalError> {
        convert::to_u64(&self.value_at(ctx, index)?)
    }

    /// Evaluate and coerce to a double.
    pub fn float_at(&self, ctx: &mut EvalContext, index: usize) -> Result<f64, EvalError> {
        convert::to_f64(&self.value_at(ctx, index)?)
    }

    /// Evaluate and coerce to a date.
    pub fn date_at(
        &self,
        ctx: &mut EvalContext,
        index: usize,
    ) -> Result<DateTime<Utc>, EvalError> {
        convert::to_date(&self.value_at(ctx, index)?)
    }

    /// Evaluate and coerce to a collection. With `forced`, a scalar is
    /// wrapped as a one-element list instead of failing.
    pub fn collection_at(
        &self,
        ctx: &mut EvalContext,
        index: usize,
        forced: bool,
    ) -> EvalResult {
        convert::to_collection(&self.value_at(ctx, index)?, forced)
    }

    fn expr_at(&self, index: usize) -> Result<Rc<dyn Evaluable>, EvalError> {
        self.exprs.get(index).cloned().ok_or_else(|| {
            invalid_input(format!(
                "{} has no argument at index {index}",
                self.callable_name()
            ))
        })
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = &'a Rc<dyn Evaluable>;
    type IntoIter = slice::Iter<'a, Rc<dyn Evaluable>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for Arguments {
    /// Structural equality: same callable name, pairwise entry equality.
    fn eq(&self, other: &Self) -> bool {
        self.callable == other.callable
            && self.exprs.len() == other.exprs.len()
            && self
                .exprs
                .iter()
                .zip(other.exprs.iter())
                .all(|(a, b)| entries_equal(a, b))
    }
}

impl fmt::Debug for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arguments")
            .field("callable", &self.callable_name())
            .field("exprs", &self.exprs)
            .finish()
    }
}

#[cfg(test)]
mod tests;
