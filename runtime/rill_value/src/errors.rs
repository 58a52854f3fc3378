//! Error types for expression evaluation.
//!
//! # Structured Error Categories
//!
//! `EvalErrorKind` provides typed error categories so embedders can match on
//! the failure mode instead of parsing message strings. Factory functions
//! (e.g. `already_defined()`) remain the public API — they populate both
//! `kind` and `message`, and `Display` reproduces the message exactly.
//!
//! Comparison is deliberately absent from this taxonomy: the comparison
//! algebra never fails, it returns `Comparison::Incomparable`.

use crate::value::Value;
use std::fmt;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category for structured diagnostics.
///
/// Each variant carries the data needed to reconstruct the human-readable
/// message, enabling programmatic matching and machine-readable output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Arity
    ArityExact {
        name: String,
        expected: usize,
        got: usize,
    },
    ArityAtLeast {
        name: String,
        expected: usize,
        got: usize,
    },
    ArityAtMost {
        name: String,
        expected: usize,
        got: usize,
    },
    ArityBetween {
        name: String,
        min: usize,
        max: usize,
        got: usize,
    },

    // Registration
    AlreadyDefined {
        name: String,
    },

    // Scope stack
    StackUnderflow {
        operation: String,
    },

    // Conversion
    NotABoolean {
        value: String,
    },
    NotANumber {
        value: String,
    },
    NotADate {
        value: String,
    },
    NotACollection {
        value: String,
    },
    InvalidInput {
        message: String,
    },

    // Numeric representation
    NumericRepresentation {
        value: String,
        target: &'static str,
    },

    /// Catch-all for errors not yet categorized into structured kinds.
    Custom {
        message: String,
    },
}

/// Pluralized "argument"/"arguments" for arity messages.
fn argument_word(count: usize) -> &'static str {
    if count == 1 {
        "argument"
    } else {
        "arguments"
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Arity
            Self::ArityExact {
                name,
                expected,
                got,
            } => write!(
                f,
                "{name} expects {expected} {}, got {got}",
                argument_word(*expected)
            ),
            Self::ArityAtLeast {
                name,
                expected,
                got,
            } => write!(
                f,
                "{name} expects at least {expected} {}, got {got}",
                argument_word(*expected)
            ),
            Self::ArityAtMost {
                name,
                expected,
                got,
            } => write!(
                f,
                "{name} expects at most {expected} {}, got {got}",
                argument_word(*expected)
            ),
            Self::ArityBetween {
                name,
                min,
                max,
                got,
            } => write!(f, "{name} expects between {min} and {max} arguments, got {got}"),

            // Registration
            Self::AlreadyDefined { name } => write!(f, "symbol already defined: {name}"),

            // Scope stack
            Self::StackUnderflow { operation } => {
                write!(f, "{operation} requires a current stack frame, but the stack is empty")
            }

            // Conversion
            Self::NotABoolean { value } => write!(f, "value is not a boolean: {value}"),
            Self::NotANumber { value } => write!(f, "value is not a number: {value}"),
            Self::NotADate { value } => write!(f, "value is not a date: {value}"),
            Self::NotACollection { value } => write!(f, "value is not a collection: {value}"),
            Self::InvalidInput { message } => write!(f, "{message}"),

            // Numeric representation
            Self::NumericRepresentation { value, target } => {
                write!(f, "value {value} is not representable as {target}")
            }

            // Custom
            Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// Evaluation error.
///
/// A failed evaluation surfaces only the innermost error's message; there
/// are no partial results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message.
    ///
    /// For factory-created errors this equals `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    /// Create an error with just a message.
    ///
    /// Uses `Custom` kind. Prefer specific factory functions (e.g.
    /// `already_defined()`) when a structured kind is available.
    pub fn new(message: impl Into<String>) -> Self {
        let msg = message.into();
        Self {
            kind: EvalErrorKind::Custom {
                message: msg.clone(),
            },
            message: msg,
        }
    }

    /// Create an error from a structured kind.
    ///
    /// The message is computed from the kind's `Display` impl.
    pub fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for EvalError {}

// Factory Functions

/// A callable received the wrong number of arguments (exact check).
pub fn arity_exact(name: impl Into<String>, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityExact {
        name: name.into(),
        expected,
        got,
    })
}

/// A callable received too few arguments (at-least check).
pub fn arity_at_least(name: impl Into<String>, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityAtLeast {
        name: name.into(),
        expected,
        got,
    })
}

/// A callable received too many arguments (at-most check).
pub fn arity_at_most(name: impl Into<String>, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityAtMost {
        name: name.into(),
        expected,
        got,
    })
}

/// A callable received an argument count outside its permitted range.
pub fn arity_between(name: impl Into<String>, min: usize, max: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityBetween {
        name: name.into(),
        min,
        max,
        got,
    })
}

/// A symbol was registered twice through the unique-insertion path.
pub fn already_defined(name: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::AlreadyDefined { name: name.into() })
}

/// An operation needed a current stack frame, but the stack is empty.
pub fn stack_underflow(operation: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackUnderflow {
        operation: operation.into(),
    })
}

/// A value could not be coerced to a boolean.
pub fn not_a_boolean(value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotABoolean {
        value: value.to_string(),
    })
}

/// A value could not be coerced to a number.
pub fn not_a_number(value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotANumber {
        value: value.to_string(),
    })
}

/// A value could not be coerced to a date.
pub fn not_a_date(value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotADate {
        value: value.to_string(),
    })
}

/// A value does not satisfy the collection capability.
pub fn not_a_collection(value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotACollection {
        value: value.to_string(),
    })
}

/// Generic invalid-input error naming the problem.
pub fn invalid_input(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidInput {
        message: message.into(),
    })
}

/// A numeric value is out of range for the requested representation.
pub fn numeric_representation(value: &Value, target: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NumericRepresentation {
        value: value.to_string(),
        target,
    })
}
