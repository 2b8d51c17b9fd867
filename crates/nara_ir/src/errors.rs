//! Evaluation error types.
//!
//! `EvalErrorKind` provides typed error categories; `EvalError` carries the
//! kind plus a precomputed human-readable message. Factory functions
//! (e.g. `division_by_zero("/")`) are the public API; they populate both
//! fields, and every message names the operator that detected the failure.
//!
//! Errors are raised at the point of detection and propagate unwound
//! through the recursive evaluation call stack; there is no local recovery
//! inside the evaluator or the builtins.

use std::fmt;

use crate::value::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category for evaluation failures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// A symbol was not bound in any scope up to and including global.
    UnboundSymbol { name: String },
    /// An attempt to redefine, shadow, or delete a reserved global name.
    ReservedSymbol { name: String },
    /// An argument had the wrong variant for the operator.
    TypeMismatch {
        operator: String,
        expected: String,
        got: String,
    },
    /// The operator received the wrong number of arguments.
    ArityMismatch {
        operator: String,
        expected: String,
        got: usize,
    },
    /// `head`/`tail` on an empty string or q-expression.
    EmptyCollection { operator: String },
    /// The head of an s-expression reduced to a non-function.
    NotAFunction { got: String },
    /// Zero divisor in `/` or `%`.
    DivisionByZero { operator: String },
    /// Negative exponent in `^`.
    NegativeExponent,
    /// A checked arithmetic step overflowed `i64`.
    ArithmeticOverflow { operator: String },
    /// Catch-all for builtin-specific precondition failures.
    InvalidArgument { operator: String, message: String },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundSymbol { name } => write!(f, "unbound symbol: {name}"),
            Self::ReservedSymbol { name } => {
                write!(f, "cannot redefine or delete reserved symbol: {name}")
            }
            Self::TypeMismatch {
                operator,
                expected,
                got,
            } => write!(f, "{operator} expects {expected}, got {got}"),
            Self::ArityMismatch {
                operator,
                expected,
                got,
            } => write!(f, "{operator} takes {expected}, got {got}"),
            Self::EmptyCollection { operator } => {
                write!(f, "{operator} on an empty collection")
            }
            Self::NotAFunction { got } => {
                write!(f, "s-expression does not start with a function, got {got}")
            }
            Self::DivisionByZero { operator } => write!(f, "{operator}: division by zero"),
            Self::NegativeExponent => write!(f, "^: negative exponent is not supported"),
            Self::ArithmeticOverflow { operator } => write!(f, "{operator}: integer overflow"),
            Self::InvalidArgument { operator, message } => write!(f, "{operator}: {message}"),
        }
    }
}

/// Evaluation error.
///
/// `message` always equals `kind.to_string()`; it is kept as a field so
/// callers (the REPL boundary in particular) can print without re-running
/// the formatter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable error message.
    pub message: String,
}

impl EvalError {
    /// Create an error from a structured kind.
    ///
    /// Used internally by the factory functions.
    fn from_kind(kind: EvalErrorKind) -> Self {
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

// Factory functions

/// A symbol was absent from every scope.
pub fn unbound_symbol(name: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundSymbol { name: name.into() })
}

/// A reserved global name was the target of a define, shadow, or delete.
pub fn reserved_symbol(name: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ReservedSymbol { name: name.into() })
}

/// An argument had the wrong variant.
pub fn type_mismatch(
    operator: impl Into<String>,
    expected: impl Into<String>,
    got: impl Into<String>,
) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        operator: operator.into(),
        expected: expected.into(),
        got: got.into(),
    })
}

/// Wrong argument count; `expected` is a phrase like `"two arguments"`.
pub fn arity_mismatch(
    operator: impl Into<String>,
    expected: impl Into<String>,
    got: usize,
) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        operator: operator.into(),
        expected: expected.into(),
        got,
    })
}

/// `head`/`tail` on an empty string or q-expression.
pub fn empty_collection(operator: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::EmptyCollection {
        operator: operator.into(),
    })
}

/// The head of an s-expression was not callable.
pub fn not_a_function(got: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAFunction { got: got.into() })
}

/// Zero divisor.
pub fn division_by_zero(operator: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero {
        operator: operator.into(),
    })
}

/// Negative exponent in `^`.
pub fn negative_exponent() -> EvalError {
    EvalError::from_kind(EvalErrorKind::NegativeExponent)
}

/// A checked arithmetic step overflowed.
pub fn arithmetic_overflow(operator: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArithmeticOverflow {
        operator: operator.into(),
    })
}

/// Builtin-specific precondition failure.
pub fn invalid_argument(operator: impl Into<String>, message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidArgument {
        operator: operator.into(),
        message: message.into(),
    })
}
