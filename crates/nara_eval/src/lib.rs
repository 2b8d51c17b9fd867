//! Nara Eval: the reduction engine for the Nara interpreter.
//!
//! The evaluator is a single recursive pass over a [`Value`] tree:
//! atoms and data lists are already in normal form, symbols resolve
//! through the [`Environment`], and active lists reduce their children
//! and dispatch on the head (an exhaustive `match` on the [`Builtin`]
//! enum for primitives, closure application with currying for lambdas).
//!
//! [`global_environment`] builds the one process-wide root scope,
//! pre-populated with the reserved constants and the whole builtin
//! catalogue.

mod builtins;
mod evaluate;

#[cfg(test)]
mod tests;

// Re-export the value model so downstream crates only need `nara_eval`.
pub use nara_ir::{
    Builtin, Environment, EvalError, EvalErrorKind, EvalResult, Heap, LambdaValue, Number, Scope,
    ScopeRef, Value,
};

pub use evaluate::evaluate;

/// Construct the process-wide global environment.
///
/// The root scope is created once, pre-populated with the reserved
/// constants (`unit`, `true`, `false`, `nil`, `otherwise`) and every
/// builtin, and lives for the duration of the process. Callers must not
/// construct a second root: every derived environment shares this one.
pub fn global_environment() -> Environment {
    let mut env = Environment::new();

    env.bootstrap_reserved("unit", Value::Unit);
    env.bootstrap_reserved("true", Value::number(1));
    env.bootstrap_reserved("false", Value::number(0));
    env.bootstrap_reserved("nil", Value::nil());
    env.bootstrap_reserved("otherwise", Value::symbol("otherwise"));

    for builtin in Builtin::ALL {
        env.bootstrap_reserved(builtin.name(), Value::Builtin(*builtin));
    }

    env
}
