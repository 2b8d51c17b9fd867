//! The builtin catalogue.
//!
//! Every builtin receives the already-evaluated argument vector and the
//! calling environment, validates arity and types first (errors name the
//! operator), then computes. Dispatch is one exhaustive `match` on the
//! [`Builtin`] identifier; no registry, no function pointers.

mod arithmetic;
mod binding;
mod collections;
mod compare;
mod control;
mod misc;

use nara_ir::errors::{type_mismatch, EvalError};
use nara_ir::{Builtin, Environment, EvalResult, Number, Value};

/// Dispatch a builtin against its evaluated arguments.
pub(crate) fn dispatch(builtin: Builtin, args: Vec<Value>, env: &mut Environment) -> EvalResult {
    match builtin {
        Builtin::Add => arithmetic::add(args),
        Builtin::Sub => arithmetic::sub(args),
        Builtin::Mul => arithmetic::mul(args),
        Builtin::Div => arithmetic::div(args),
        Builtin::Mod => arithmetic::rem(args),
        Builtin::Pow => arithmetic::pow(args),
        Builtin::Eq => compare::eq(args),
        Builtin::Neq => compare::neq(args),
        Builtin::Gt => compare::relation(Builtin::Gt, args),
        Builtin::Geq => compare::relation(Builtin::Geq, args),
        Builtin::Lt => compare::relation(Builtin::Lt, args),
        Builtin::Leq => compare::relation(Builtin::Leq, args),
        Builtin::And => compare::and(args),
        Builtin::Or => compare::or(args),
        Builtin::Not => compare::not(args),
        Builtin::List => collections::list(args),
        Builtin::Cons => collections::cons(args),
        Builtin::Eval => collections::eval_qexpr(args, env),
        Builtin::Head => collections::head(args),
        Builtin::Tail => collections::tail(args),
        Builtin::Join => collections::join(args),
        Builtin::Len => collections::len(args),
        Builtin::If => control::if_form(args, env),
        Builtin::Cond => control::cond(args, env),
        Builtin::Case => control::case(args, env),
        Builtin::When => control::when(args, env),
        Builtin::Unless => control::unless(args, env),
        Builtin::Do => control::do_form(args),
        Builtin::Lambda => binding::lambda(args, env),
        Builtin::Def => binding::def(args, env),
        Builtin::Defun => binding::defun(args, env),
        Builtin::Del => binding::del(args, env),
        Builtin::Type => misc::type_of(args),
        Builtin::Print => misc::print(args),
        Builtin::Exit => misc::exit(args),
    }
}

/// Check that every argument is a number, in operator `op`'s terms.
fn expect_numbers(op: &'static str, args: &[Value]) -> Result<Vec<Number>, EvalError> {
    args.iter()
        .map(|value| {
            value
                .as_number()
                .ok_or_else(|| type_mismatch(op, "numbers", value.type_name()))
        })
        .collect()
}
