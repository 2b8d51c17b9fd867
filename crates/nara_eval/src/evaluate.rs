//! The reduction engine.
//!
//! Reduction is a state machine over a value's tag with no intermediate
//! state: one recursive pass per node. Atoms, functions, and data lists
//! are already in normal form; symbols resolve through the environment;
//! active lists reduce children left to right and dispatch on the head.

use nara_ir::errors::{arity_mismatch, not_a_function};
use nara_ir::{Environment, EvalResult, LambdaValue, Scope, ScopeRef, Value};

use crate::builtins;

/// Reduce a value tree to a single value.
///
/// Takes ownership of the input tree; on failure the error propagates
/// unwound through the recursion to the caller, discarding the whole
/// enclosing reduction.
pub fn evaluate(value: Value, env: &mut Environment) -> EvalResult {
    match value {
        // Already in normal form.
        Value::Unit
        | Value::Number(_)
        | Value::Str(_)
        | Value::Builtin(_)
        | Value::Lambda(_) => Ok(value),
        Value::Symbol(name) => env.resolve(name.as_str()),
        // Quoting stops reduction.
        Value::Qexpr(_) => Ok(value),
        Value::Sexpr(cells) => evaluate_sexpr(cells, env),
    }
}

/// The active-list reduction protocol.
fn evaluate_sexpr(cells: Vec<Value>, env: &mut Environment) -> EvalResult {
    let mut reduced = Vec::with_capacity(cells.len());
    for cell in cells {
        reduced.push(evaluate(cell, env)?);
    }

    if reduced.is_empty() {
        return Ok(Value::Unit);
    }
    if reduced.len() == 1 {
        // Parenthesized atoms collapse.
        return Ok(reduced.swap_remove(0));
    }

    let head = reduced.remove(0);
    match head {
        Value::Builtin(builtin) => builtins::dispatch(builtin, reduced, env),
        Value::Lambda(lambda) => apply_lambda(lambda, reduced, env),
        other => Err(not_a_function(other.type_name())),
    }
}

/// Closure application with currying.
///
/// The local scope chains to the closure's captured scope, not the
/// caller's. Supplying fewer arguments than parameters yields a new
/// closure over the remaining names and the extended scope.
pub(crate) fn apply_lambda(
    lambda: LambdaValue,
    mut args: Vec<Value>,
    env: &mut Environment,
) -> EvalResult {
    let expected = lambda.params.len();

    // A zero-parameter closure is invoked as `(f unit)`: the single Unit
    // argument counts as zero.
    if expected == 0 {
        match args.as_slice() {
            [] | [Value::Unit] => args.clear(),
            _ => {
                return Err(arity_mismatch(
                    "lambda function",
                    "one unit argument",
                    args.len(),
                ))
            }
        }
    } else if args.len() > expected {
        let plural = if expected == 1 {
            "argument"
        } else {
            "arguments"
        };
        return Err(arity_mismatch(
            "lambda function",
            format!("{expected} {plural}"),
            args.len(),
        ));
    }

    let given = args.len();
    let local = ScopeRef::new(Scope::with_parent(lambda.env.clone()));
    let mut call_env = env.with_current(local.clone());
    for (param, arg) in lambda.params.iter().zip(args) {
        call_env.define_local(param.as_str(), arg);
    }

    if given == expected {
        evaluate(Value::Sexpr((*lambda.body).clone()), &mut call_env)
    } else {
        // Partial application: the remaining parameters close over the
        // scope that now holds the supplied arguments.
        Ok(Value::Lambda(LambdaValue {
            params: lambda.params[given..].to_vec(),
            body: lambda.body,
            env: local,
        }))
    }
}
