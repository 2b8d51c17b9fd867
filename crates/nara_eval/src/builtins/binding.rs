//! Binding builtins: `lambda def defun del`.
//!
//! `def`, `defun`, and `del` always act on the root scope, no matter how
//! deep the call site is; `lambda` captures the scope it was reduced in.

use nara_ir::errors::{arity_mismatch, invalid_argument, reserved_symbol, type_mismatch};
use nara_ir::{Environment, EvalError, EvalResult, Heap, Scope, ScopeRef, Value};

/// `lambda`: a q-expression of parameter symbols and a q-expression body.
///
/// The closure captures a fresh scope chained onto the current one, so
/// later local bindings at the definition site stay visible to the body.
pub(crate) fn lambda(args: Vec<Value>, env: &mut Environment) -> EvalResult {
    if args.len() != 2 {
        return Err(arity_mismatch("lambda", "two arguments", args.len()));
    }
    let mut iter = args.into_iter();
    let params = param_list("lambda", iter.next(), env)?;
    let body = body_cells("lambda", iter.next())?;
    let captured = ScopeRef::new(Scope::with_parent(env.current_scope()));
    Ok(Value::lambda(params, body, captured))
}

/// `def`: a q-expression of target symbols followed by one value per
/// symbol. Every binding lands in the root scope; yields Unit.
pub(crate) fn def(mut args: Vec<Value>, env: &mut Environment) -> EvalResult {
    if args.len() < 2 {
        return Err(arity_mismatch("def", "two or more arguments", args.len()));
    }
    let targets = symbol_names("def", args.remove(0))?;
    if targets.len() != args.len() {
        return Err(invalid_argument(
            "def",
            format!(
                "{} symbol(s) but {} value(s)",
                targets.len(),
                args.len()
            ),
        ));
    }
    // Validate every target before binding any, so a reserved name in
    // the list cannot leave earlier targets bound.
    check_not_reserved(&targets, env)?;
    for (name, value) in targets.iter().zip(args) {
        env.define_global(name.as_str(), value, false)?;
    }
    Ok(Value::Unit)
}

/// `defun`: `{name params...}` and a body, sugar for `def` of a `lambda`.
pub(crate) fn defun(args: Vec<Value>, env: &mut Environment) -> EvalResult {
    if args.len() != 2 {
        return Err(arity_mismatch("defun", "two arguments", args.len()));
    }
    let mut iter = args.into_iter();
    let mut header = symbol_names("defun", match iter.next() {
        Some(value) => value,
        None => return Err(arity_mismatch("defun", "two arguments", 0)),
    })?;
    if header.is_empty() {
        return Err(invalid_argument(
            "defun",
            "the header needs a function name",
        ));
    }
    let name = header.remove(0);
    if env.is_reserved(name.as_str()) {
        return Err(reserved_symbol(name.as_str()));
    }
    let body = body_cells("defun", iter.next())?;
    check_not_reserved(&header, env)?;
    let captured = ScopeRef::new(Scope::with_parent(env.current_scope()));
    let function = Value::lambda(header, body, captured);
    env.define_global(name.as_str(), function, false)?;
    Ok(Value::Unit)
}

/// `del`: a q-expression of symbols to unbind from the root scope.
pub(crate) fn del(args: Vec<Value>, env: &mut Environment) -> EvalResult {
    let [target] = <[Value; 1]>::try_from(args)
        .map_err(|args| arity_mismatch("del", "one argument", args.len()))?;
    let names = symbol_names("del", target)?;
    if names.is_empty() {
        return Err(invalid_argument("del", "nothing to delete"));
    }
    for name in &names {
        env.delete_global(name.as_str())?;
    }
    Ok(Value::Unit)
}

/// Extract the symbol names out of a q-expression argument.
fn symbol_names(op: &'static str, value: Value) -> Result<Vec<Heap<String>>, EvalError> {
    let cells = match value {
        Value::Qexpr(cells) => cells,
        other => {
            return Err(type_mismatch(
                op,
                "a q-expression of symbols",
                other.type_name(),
            ))
        }
    };
    let mut names = Vec::with_capacity(cells.len());
    for cell in cells {
        match cell {
            Value::Symbol(name) => names.push(name),
            other => return Err(type_mismatch(op, "a symbol", other.type_name())),
        }
    }
    Ok(names)
}

fn param_list(
    op: &'static str,
    value: Option<Value>,
    env: &Environment,
) -> Result<Vec<Heap<String>>, EvalError> {
    let params = match value {
        Some(value) => symbol_names(op, value)?,
        None => return Err(arity_mismatch(op, "two arguments", 0)),
    };
    check_not_reserved(&params, env)?;
    Ok(params)
}

/// Neither parameters nor `def` targets may name a reserved binding.
fn check_not_reserved(names: &[Heap<String>], env: &Environment) -> Result<(), EvalError> {
    for name in names {
        if env.is_reserved(name.as_str()) {
            return Err(reserved_symbol(name.as_str()));
        }
    }
    Ok(())
}

fn body_cells(op: &'static str, value: Option<Value>) -> Result<Vec<Value>, EvalError> {
    match value {
        Some(Value::Qexpr(cells)) => Ok(cells),
        Some(other) => Err(type_mismatch(op, "a q-expression body", other.type_name())),
        None => Err(arity_mismatch(op, "two arguments", 0)),
    }
}
