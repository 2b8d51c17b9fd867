//! Control builtins: `if cond case when unless do`.
//!
//! These forms receive their branches as q-expressions, pick one, re-tag
//! it to an s-expression, and reduce it. Selection short-circuits: only
//! the chosen branch body is ever reduced.

use nara_ir::errors::{arity_mismatch, invalid_argument, type_mismatch};
use nara_ir::{Environment, EvalResult, Value};

use crate::evaluate::evaluate;

/// The `otherwise` sentinel: a pair whose condition or case value equals
/// it always matches. The same value is bound, reserved, in the global
/// environment.
fn otherwise() -> Value {
    Value::symbol("otherwise")
}

fn eval_branch(cells: Vec<Value>, env: &mut Environment) -> EvalResult {
    evaluate(Value::Sexpr(cells), env)
}

/// `if`: a number condition and one or two q-expression branches.
///
/// The chosen branch is re-tagged and reduced; a missing else-branch
/// defaults to `nil`, so it reduces to Unit.
pub(crate) fn if_form(args: Vec<Value>, env: &mut Environment) -> EvalResult {
    if args.len() != 2 && args.len() != 3 {
        return Err(arity_mismatch("if", "two or three arguments", args.len()));
    }
    let mut iter = args.into_iter();
    let condition = match iter.next() {
        Some(Value::Number(n)) => n,
        Some(other) => {
            return Err(type_mismatch(
                "if",
                "a number condition",
                other.type_name(),
            ))
        }
        None => return Err(arity_mismatch("if", "two or three arguments", 0)),
    };
    let then_branch = branch_cells("if", iter.next())?;
    let else_branch = match iter.next() {
        Some(value) => branch_cells("if", Some(value))?,
        None => Vec::new(),
    };

    if condition.is_truthy() {
        eval_branch(then_branch, env)
    } else {
        eval_branch(else_branch, env)
    }
}

fn branch_cells(op: &'static str, value: Option<Value>) -> Result<Vec<Value>, nara_ir::EvalError> {
    match value {
        Some(Value::Qexpr(cells)) => Ok(cells),
        Some(other) => Err(type_mismatch(
            op,
            "q-expression branches",
            other.type_name(),
        )),
        None => Ok(Vec::new()),
    }
}

/// `cond`: `{condition {body}}` pairs; the first pair whose condition
/// reduces truthy (or equals `otherwise`) wins. No match yields Unit.
pub(crate) fn cond(args: Vec<Value>, env: &mut Environment) -> EvalResult {
    let pairs = split_pairs("cond", args)?;
    for (condition_expr, body) in pairs {
        let condition = evaluate(condition_expr, env)?;
        let matches = match &condition {
            Value::Number(n) => n.is_truthy(),
            other if *other == otherwise() => true,
            other => {
                return Err(invalid_argument(
                    "cond",
                    format!("condition reduced to {}, not a number", other.type_name()),
                ))
            }
        };
        if matches {
            return eval_branch(body, env);
        }
    }
    Ok(Value::Unit)
}

/// `case`: a scrutinee, then `{value {body}}` pairs; the first pair whose
/// value structurally equals the scrutinee (or equals `otherwise`) wins.
/// No match yields Unit.
pub(crate) fn case(mut args: Vec<Value>, env: &mut Environment) -> EvalResult {
    if args.is_empty() {
        return Err(arity_mismatch("case", "one or more arguments", 0));
    }
    let scrutinee = args.remove(0);
    let pairs = split_pairs("case", args)?;
    for (case_value, body) in pairs {
        if case_value == scrutinee || case_value == otherwise() {
            return eval_branch(body, env);
        }
    }
    Ok(Value::Unit)
}

/// Validate and destructure `{x {body}}` pairs.
///
/// All shapes are checked before any selection happens, so a malformed
/// later pair is an error even when an earlier pair would match.
fn split_pairs(
    op: &'static str,
    args: Vec<Value>,
) -> Result<Vec<(Value, Vec<Value>)>, nara_ir::EvalError> {
    let malformed = || {
        invalid_argument(
            op,
            "each argument is expected to be a {condition {body}} pair",
        )
    };
    let mut pairs = Vec::with_capacity(args.len());
    for arg in args {
        let Value::Qexpr(mut cells) = arg else {
            return Err(malformed());
        };
        if cells.len() != 2 {
            return Err(malformed());
        }
        let Some(Value::Qexpr(body)) = cells.pop() else {
            return Err(malformed());
        };
        let Some(first) = cells.pop() else {
            return Err(malformed());
        };
        pairs.push((first, body));
    }
    Ok(pairs)
}

/// `when`: reduce the body when the condition is truthy, else Unit.
pub(crate) fn when(args: Vec<Value>, env: &mut Environment) -> EvalResult {
    guarded("when", args, env, true)
}

/// `unless`: reduce the body when the condition is falsy, else Unit.
pub(crate) fn unless(args: Vec<Value>, env: &mut Environment) -> EvalResult {
    guarded("unless", args, env, false)
}

fn guarded(
    op: &'static str,
    args: Vec<Value>,
    env: &mut Environment,
    want_truthy: bool,
) -> EvalResult {
    if args.len() != 2 {
        return Err(arity_mismatch(op, "two arguments", args.len()));
    }
    let mut iter = args.into_iter();
    let condition = match iter.next() {
        Some(Value::Number(n)) => n,
        Some(other) => {
            return Err(type_mismatch(op, "a number condition", other.type_name()))
        }
        None => return Err(arity_mismatch(op, "two arguments", 0)),
    };
    let body = branch_cells(op, iter.next())?;
    if condition.is_truthy() == want_truthy {
        eval_branch(body, env)
    } else {
        Ok(Value::Unit)
    }
}

/// `do`: arguments were already reduced left to right; the last one is
/// the result, Unit when there are none.
pub(crate) fn do_form(mut args: Vec<Value>) -> EvalResult {
    Ok(args.pop().unwrap_or(Value::Unit))
}
