//! List and string builtins: `list head tail join len cons eval`.
//!
//! `head`, `tail`, and `len` operate uniformly on strings (character-wise)
//! and q-expressions (element-wise). Quote/unquote is an explicit, cheap
//! re-tagging operation: `list` wraps evaluated arguments into a
//! q-expression, `eval` re-tags a q-expression into an s-expression and
//! hands it back to the evaluator.

use nara_ir::errors::{arity_mismatch, empty_collection, type_mismatch};
use nara_ir::{Environment, EvalResult, Value};

use crate::evaluate::evaluate;

/// `list`: wrap the evaluated arguments into a q-expression.
pub(crate) fn list(args: Vec<Value>) -> EvalResult {
    Ok(Value::Qexpr(args))
}

/// `cons`: prepend a single value to a q-expression.
pub(crate) fn cons(mut args: Vec<Value>) -> EvalResult {
    if args.len() != 2 {
        return Err(arity_mismatch("cons", "two arguments", args.len()));
    }
    let tail = args.pop().unwrap_or(Value::Unit);
    let head = args.pop().unwrap_or(Value::Unit);
    match tail {
        Value::Qexpr(mut cells) => {
            cells.insert(0, head);
            Ok(Value::Qexpr(cells))
        }
        other => Err(type_mismatch(
            "cons",
            "a q-expression as second argument",
            other.type_name(),
        )),
    }
}

/// `eval`: re-tag a q-expression to an s-expression and reduce it.
pub(crate) fn eval_qexpr(mut args: Vec<Value>, env: &mut Environment) -> EvalResult {
    if args.len() != 1 {
        return Err(arity_mismatch("eval", "one argument", args.len()));
    }
    match args.pop().unwrap_or(Value::Unit) {
        Value::Qexpr(cells) => evaluate(Value::Sexpr(cells), env),
        other => Err(type_mismatch("eval", "a q-expression", other.type_name())),
    }
}

/// `head`: the first character of a string, or a singleton q-expression
/// holding the first element.
pub(crate) fn head(mut args: Vec<Value>) -> EvalResult {
    if args.len() != 1 {
        return Err(arity_mismatch("head", "one argument", args.len()));
    }
    match args.pop().unwrap_or(Value::Unit) {
        Value::Str(s) => match s.chars().next() {
            Some(first) => Ok(Value::string(first.to_string())),
            None => Err(empty_collection("head")),
        },
        Value::Qexpr(mut cells) => {
            if cells.is_empty() {
                return Err(empty_collection("head"));
            }
            cells.truncate(1);
            Ok(Value::Qexpr(cells))
        }
        other => Err(type_mismatch(
            "head",
            "a string or q-expression",
            other.type_name(),
        )),
    }
}

/// `tail`: everything after the first character/element.
pub(crate) fn tail(mut args: Vec<Value>) -> EvalResult {
    if args.len() != 1 {
        return Err(arity_mismatch("tail", "one argument", args.len()));
    }
    match args.pop().unwrap_or(Value::Unit) {
        Value::Str(s) => {
            let mut chars = s.chars();
            match chars.next() {
                Some(_) => Ok(Value::string(chars.as_str())),
                None => Err(empty_collection("tail")),
            }
        }
        Value::Qexpr(mut cells) => {
            if cells.is_empty() {
                return Err(empty_collection("tail"));
            }
            cells.remove(0);
            Ok(Value::Qexpr(cells))
        }
        other => Err(type_mismatch(
            "tail",
            "a string or q-expression",
            other.type_name(),
        )),
    }
}

/// `join`: concatenate one or more values of the same kind.
pub(crate) fn join(args: Vec<Value>) -> EvalResult {
    if args.is_empty() {
        return Err(arity_mismatch("join", "one or more arguments", 0));
    }
    let mut iter = args.into_iter();
    match iter.next() {
        Some(Value::Qexpr(mut cells)) => {
            for arg in iter {
                match arg {
                    Value::Qexpr(more) => cells.extend(more),
                    other => {
                        return Err(type_mismatch(
                            "join",
                            "q-expressions",
                            other.type_name(),
                        ))
                    }
                }
            }
            Ok(Value::Qexpr(cells))
        }
        Some(Value::Str(first)) => {
            let mut joined = (*first).clone();
            for arg in iter {
                match arg {
                    Value::Str(more) => joined.push_str(&more),
                    other => return Err(type_mismatch("join", "strings", other.type_name())),
                }
            }
            Ok(Value::string(joined))
        }
        Some(other) => Err(type_mismatch(
            "join",
            "strings or q-expressions",
            other.type_name(),
        )),
        None => Err(arity_mismatch("join", "one or more arguments", 0)),
    }
}

/// `len`: element count of a q-expression, character count of a string.
pub(crate) fn len(args: Vec<Value>) -> EvalResult {
    match args.as_slice() {
        [Value::Qexpr(cells)] => Ok(count(cells.len())),
        [Value::Str(s)] => Ok(count(s.chars().count())),
        [other] => Err(type_mismatch(
            "len",
            "a string or q-expression",
            other.type_name(),
        )),
        _ => Err(arity_mismatch("len", "one argument", args.len())),
    }
}

fn count(n: usize) -> Value {
    // Collections of more than i64::MAX elements cannot exist in memory.
    Value::number(i64::try_from(n).unwrap_or(i64::MAX))
}
