//! Relational and boolean builtins: `== != > >= < <= && || !`.
//!
//! Equality is full structural equality over any two values. Ordering
//! relations take two or more numbers and chain pairwise, short-circuiting
//! to false on the first failing pair. The boolean forms treat numbers as
//! truthy/falsy; their arguments were already evaluated upstream, so no
//! short-circuit obligation exists here.

use nara_ir::errors::arity_mismatch;
use nara_ir::{Builtin, EvalResult, Value};

use super::expect_numbers;

fn bool_value(b: bool) -> Value {
    Value::number(i64::from(b))
}

/// `==`: structural equality over exactly two values of any shape.
pub(crate) fn eq(args: Vec<Value>) -> EvalResult {
    match args.as_slice() {
        [a, b] => Ok(bool_value(a == b)),
        _ => Err(arity_mismatch("==", "two arguments", args.len())),
    }
}

/// `!=`: structural inequality over exactly two values.
pub(crate) fn neq(args: Vec<Value>) -> EvalResult {
    match args.as_slice() {
        [a, b] => Ok(bool_value(a != b)),
        _ => Err(arity_mismatch("!=", "two arguments", args.len())),
    }
}

/// The chained ordering relations.
///
/// `<=` is true less-or-equal; an old snapshot of this interpreter reused
/// the `<` comparator for it, which was a defect.
pub(crate) fn relation(builtin: Builtin, args: Vec<Value>) -> EvalResult {
    let op = builtin.name();
    if args.len() < 2 {
        return Err(arity_mismatch(op, "two or more arguments", args.len()));
    }
    let numbers = expect_numbers(op, &args)?;
    let rel = match builtin {
        Builtin::Gt => |a: i64, b: i64| a > b,
        Builtin::Geq => |a: i64, b: i64| a >= b,
        Builtin::Lt => |a: i64, b: i64| a < b,
        _ => |a: i64, b: i64| a <= b,
    };
    // `all` stops at the first failing pair.
    let holds = numbers.windows(2).all(|w| rel(w[0].raw(), w[1].raw()));
    Ok(bool_value(holds))
}

/// `&&`: all of two or more numbers truthy.
pub(crate) fn and(args: Vec<Value>) -> EvalResult {
    if args.len() < 2 {
        return Err(arity_mismatch("&&", "two or more arguments", args.len()));
    }
    let numbers = expect_numbers("&&", &args)?;
    Ok(bool_value(numbers.iter().all(|n| n.is_truthy())))
}

/// `||`: any of two or more numbers truthy.
pub(crate) fn or(args: Vec<Value>) -> EvalResult {
    if args.len() < 2 {
        return Err(arity_mismatch("||", "two or more arguments", args.len()));
    }
    let numbers = expect_numbers("||", &args)?;
    Ok(bool_value(numbers.iter().any(|n| n.is_truthy())))
}

/// `!`: unary boolean negation.
pub(crate) fn not(args: Vec<Value>) -> EvalResult {
    if args.len() != 1 {
        return Err(arity_mismatch("!", "one argument", args.len()));
    }
    let numbers = expect_numbers("!", &args)?;
    Ok(bool_value(!numbers[0].is_truthy()))
}
