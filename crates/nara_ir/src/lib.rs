//! Nara IR: value model, environment, and error types for the Nara
//! interpreter.
//!
//! This crate holds everything the evaluator and parser share:
//!
//! - [`Value`]: the closed tagged union over atoms, lists, and functions
//! - [`Number`]: overflow-checked `i64` newtype
//! - [`Heap`]: reference-counted immutable payloads behind `Value` factories
//! - [`Builtin`]: the identifier enum for the primitive catalogue
//! - [`Environment`]/[`Scope`]/[`ScopeRef`]: the chained binding scopes
//! - [`errors`]: the evaluation error taxonomy and its factory functions

pub mod environment;
pub mod errors;
mod heap;
mod scalar;
mod value;

pub use environment::{Environment, Scope, ScopeRef};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use heap::Heap;
pub use scalar::Number;
pub use value::{Builtin, LambdaValue, Value};
