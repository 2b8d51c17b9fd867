//! Arithmetic builtins: `+ - * / % ^`.
//!
//! All of them fold left to right over a number sequence. Unary `+`/`-`
//! are identity/negation. Every intermediate step is checked: overflow is
//! an `ArithmeticOverflow` error, never wraparound.

use nara_ir::errors::{
    arithmetic_overflow, arity_mismatch, division_by_zero, negative_exponent, EvalError,
};
use nara_ir::{EvalResult, Number, Value};

use super::expect_numbers;

/// `+`: unary identity, otherwise checked left fold of addition.
pub(crate) fn add(args: Vec<Value>) -> EvalResult {
    unary_or_fold(
        "+",
        args,
        |n| Some(n),
        |acc, n| acc.checked_add(n).ok_or_else(|| arithmetic_overflow("+")),
    )
}

/// `-`: unary negation, otherwise checked left fold of subtraction.
pub(crate) fn sub(args: Vec<Value>) -> EvalResult {
    unary_or_fold(
        "-",
        args,
        Number::checked_neg,
        |acc, n| acc.checked_sub(n).ok_or_else(|| arithmetic_overflow("-")),
    )
}

/// `*`: checked left fold of multiplication over two or more numbers.
pub(crate) fn mul(args: Vec<Value>) -> EvalResult {
    fold("*", args, |acc, n| {
        acc.checked_mul(n).ok_or_else(|| arithmetic_overflow("*"))
    })
}

/// `/`: checked left fold of truncating division.
pub(crate) fn div(args: Vec<Value>) -> EvalResult {
    fold("/", args, |acc, n| {
        if n.is_zero() {
            return Err(division_by_zero("/"));
        }
        // The one non-zero failure is `i64::MIN / -1`.
        acc.checked_div(n).ok_or_else(|| arithmetic_overflow("/"))
    })
}

/// `%`: checked left fold of remainder.
pub(crate) fn rem(args: Vec<Value>) -> EvalResult {
    fold("%", args, |acc, n| {
        if n.is_zero() {
            return Err(division_by_zero("%"));
        }
        acc.checked_rem(n).ok_or_else(|| arithmetic_overflow("%"))
    })
}

/// `^`: checked left fold of integer exponentiation.
pub(crate) fn pow(args: Vec<Value>) -> EvalResult {
    fold("^", args, checked_pow)
}

/// Exponentiation by repeated squaring, every multiplication checked.
fn checked_pow(base: Number, exponent: Number) -> Result<Number, EvalError> {
    if exponent.raw() < 0 {
        return Err(negative_exponent());
    }
    let mut remaining = exponent.raw();
    let mut square = base;
    let mut acc = Number::ONE;
    while remaining > 0 {
        if remaining % 2 == 1 {
            acc = acc
                .checked_mul(square)
                .ok_or_else(|| arithmetic_overflow("^"))?;
        }
        remaining /= 2;
        if remaining > 0 {
            square = square
                .checked_mul(square)
                .ok_or_else(|| arithmetic_overflow("^"))?;
        }
    }
    Ok(acc)
}

/// One argument applies `unary`; two or more fold `binary` left to right.
fn unary_or_fold(
    op: &'static str,
    args: Vec<Value>,
    unary: impl Fn(Number) -> Option<Number>,
    binary: impl Fn(Number, Number) -> Result<Number, EvalError>,
) -> EvalResult {
    if args.is_empty() {
        return Err(arity_mismatch(op, "one or more arguments", 0));
    }
    let numbers = expect_numbers(op, &args)?;
    if let [only] = numbers.as_slice() {
        let result = unary(*only).ok_or_else(|| arithmetic_overflow(op))?;
        return Ok(Value::Number(result));
    }
    fold_numbers(numbers, binary)
}

/// Two or more arguments, folded left to right.
fn fold(
    op: &'static str,
    args: Vec<Value>,
    binary: impl Fn(Number, Number) -> Result<Number, EvalError>,
) -> EvalResult {
    if args.len() < 2 {
        return Err(arity_mismatch(op, "two or more arguments", args.len()));
    }
    let numbers = expect_numbers(op, &args)?;
    fold_numbers(numbers, binary)
}

fn fold_numbers(
    numbers: Vec<Number>,
    binary: impl Fn(Number, Number) -> Result<Number, EvalError>,
) -> EvalResult {
    let mut iter = numbers.into_iter();
    let Some(mut acc) = iter.next() else {
        return Ok(Value::Unit);
    };
    for n in iter {
        acc = binary(acc, n)?;
    }
    Ok(Value::Number(acc))
}
