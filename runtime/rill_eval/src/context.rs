//! The per-evaluation session object.

#![allow(clippy::disallowed_types)]

use crate::arguments::Arguments;
use crate::evaluable::Evaluable;
use crate::frame::StackFrame;
use crate::store::SymbolStore;
use chrono::{DateTime, Utc};
use rill_value::errors::stack_underflow;
use rill_value::{EvalError, EvalResult, Value};
use std::rc::Rc;

/// Evaluation context: the implicit root value plus the scope stack.
///
/// One context belongs to exactly one logical evaluation. Each nested call
/// pushes exactly one frame before evaluating its body and pops exactly one
/// afterward; the context does not enforce that balance — an unbalanced
/// caller leaks scope for the remainder of the evaluation.
///
/// The optional globals store (the process-wide root store) sits below the
/// stack for lookups and is never popped.
#[derive(Debug)]
pub struct EvalContext {
    root: Value,
    globals: Option<Rc<SymbolStore>>,
    frames: Vec<StackFrame>,
}

impl EvalContext {
    /// A context over a root value with an empty stack.
    pub fn new(root: Value) -> Self {
        EvalContext {
            root,
            globals: None,
            frames: Vec::new(),
        }
    }

    /// A context over a root value with the shared root store visible at
    /// the bottom of every lookup.
    pub fn with_globals(root: Value, globals: Rc<SymbolStore>) -> Self {
        EvalContext {
            root,
            globals: Some(globals),
            frames: Vec::new(),
        }
    }

    /// The implicit root value. Nested evaluation sees it unchanged.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Current stack depth.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    // Stack discipline

    /// Push a frame around the supplied store, or a fresh empty frame when
    /// `None`. Returns the pushed frame for argument binding.
    pub fn push_frame(&mut self, store: Option<SymbolStore>) -> &mut StackFrame {
        let frame = match store {
            Some(store) => StackFrame::with_store(store),
            None => StackFrame::new(),
        };
        self.frames.push(frame);
        // Just pushed, so the stack is non-empty.
        self.frames.last_mut().unwrap_or_else(|| unreachable!())
    }

    /// Pop the current frame. Removal is unchecked at this level: `None` on
    /// an empty stack is the caller's balance bug to notice, not an error
    /// this core raises.
    pub fn pop_frame(&mut self) -> Option<StackFrame> {
        self.frames.pop()
    }

    /// The current (innermost) frame, or `StackUnderflow`.
    pub fn current_frame(&self) -> Result<&StackFrame, EvalError> {
        self.frames
            .last()
            .ok_or_else(|| stack_underflow("current frame access"))
    }

    /// Mutable access to the current frame, or `StackUnderflow`.
    pub fn current_frame_mut(&mut self) -> Result<&mut StackFrame, EvalError> {
        self.frames
            .last_mut()
            .ok_or_else(|| stack_underflow("current frame access"))
    }

    // Symbol visibility

    /// Resolve a name against the visible scope stack, innermost first,
    /// then the globals store.
    pub fn lookup_symbol(&self, name: &str) -> Option<Rc<dyn Evaluable>> {
        for frame in self.frames.iter().rev() {
            if let Some(found) = frame.lookup(name) {
                return Some(found);
            }
        }
        self.globals.as_ref().and_then(|store| store.lookup(name))
    }

    /// Define a symbol in the current frame, failing with `AlreadyDefined`
    /// on collision or `StackUnderflow` with no frame.
    pub fn define_unique(
        &mut self,
        name: impl Into<String>,
        value: Rc<dyn Evaluable>,
    ) -> Result<(), EvalError> {
        self.current_frame_mut()?.define_unique(name, value)
    }

    /// Define or replace a symbol in the current frame, failing only with
    /// `StackUnderflow`.
    pub fn define(
        &mut self,
        name: impl Into<String>,
        value: Rc<dyn Evaluable>,
    ) -> Result<(), EvalError> {
        self.current_frame_mut()?.define(name, value);
        Ok(())
    }

    // Current-frame argument access
    //
    // All of these fail with StackUnderflow when the stack is empty.

    /// The current frame's arguments.
    pub fn arguments(&self) -> Result<&Arguments, EvalError> {
        self.frames
            .last()
            .map(StackFrame::arguments)
            .ok_or_else(|| stack_underflow("argument access"))
    }

    /// The unevaluated expression at `index` in the current frame.
    pub fn argument_at(&self, index: usize) -> Result<Rc<dyn Evaluable>, EvalError> {
        let args = self
            .frames
            .last()
            .map(StackFrame::arguments)
            .ok_or_else(|| stack_underflow("argument access"))?;
        args.get(index).cloned().ok_or_else(|| {
            rill_value::invalid_input(format!(
                "{} has no argument at index {index}",
                args.callable_name()
            ))
        })
    }

    /// The current callable's name, for error text.
    pub fn function_name(&self) -> Result<&str, EvalError> {
        self.frames
            .last()
            .map(|frame| frame.arguments().callable_name())
            .ok_or_else(|| stack_underflow("function name access"))
    }

    // Arity wrappers over the current frame

    pub fn check_arguments_exact(&self, expected: usize) -> Result<(), EvalError> {
        self.arguments()?.check_exact(expected)
    }

    pub fn check_arguments_at_least(&self, expected: usize) -> Result<(), EvalError> {
        self.arguments()?.check_at_least(expected)
    }

    pub fn check_arguments_at_most(&self, expected: usize) -> Result<(), EvalError> {
        self.arguments()?.check_at_most(expected)
    }

    pub fn check_arguments_between(&self, min: usize, max: usize) -> Result<(), EvalError> {
        self.arguments()?.check_between(min, max)
    }

    // Typed wrappers over the current frame
    //
    // Each clones the expression handle out of the top frame, then
    // evaluates it against this same context — nested expressions see the
    // unchanged root value and the full visible scope stack.

    /// Evaluate the current frame's argument at `index`.
    pub fn value_argument_at(&mut self, index: usize) -> EvalResult {
        let expr = self.argument_at(index)?;
        expr.evaluate(self)
    }

    /// Evaluate and coerce to a string.
    pub fn string_argument_at(&mut self, index: usize) -> Result<String, EvalError> {
        Ok(rill_value::convert::to_string_value(
            &self.value_argument_at(index)?,
        ))
    }

    /// Evaluate and coerce to a boolean.
    pub fn bool_argument_at(&mut self, index: usize) -> Result<bool, EvalError> {
        rill_value::convert::to_bool(&self.value_argument_at(index)?)
    }

    /// Evaluate and coerce to a signed 64-bit integer.
    pub fn int_argument_at(&mut self, index: usize) -> Result<i64, EvalError> {
        rill_value::convert::to_i64(&self.value_argument_at(index)?)
    }

    /// Evaluate and coerce to an unsigned 64-bit integer.
    pub fn uint_argument_at(&mut self, index: usize) -> Result<u64, EvalError> {
        rill_value::convert::to_u64(&self.value_argument_at(index)?)
    }

    /// Evaluate and coerce to a double.
    pub fn float_argument_at(&mut self, index: usize) -> Result<f64, EvalError> {
        rill_value::convert::to_f64(&self.value_argument_at(index)?)
    }

    /// Evaluate and coerce to a date.
    pub fn date_argument_at(&mut self, index: usize) -> Result<DateTime<Utc>, EvalError> {
        rill_value::convert::to_date(&self.value_argument_at(index)?)
    }

    /// Evaluate and coerce to a collection, optionally forcing a scalar
    /// into a one-element list.
    pub fn collection_argument_at(&mut self, index: usize, forced: bool) -> EvalResult {
        rill_value::convert::to_collection(&self.value_argument_at(index)?, forced)
    }
}
