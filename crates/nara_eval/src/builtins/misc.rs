//! Introspection and side-effecting builtins: `type print exit`.

use nara_ir::errors::{arity_mismatch, invalid_argument, type_mismatch};
use nara_ir::{EvalResult, Value};

/// `type`: the variant name of the single argument, as a string.
pub(crate) fn type_of(args: Vec<Value>) -> EvalResult {
    match args.as_slice() {
        [value] => Ok(Value::string(value.type_name())),
        _ => Err(arity_mismatch("type", "one argument", args.len())),
    }
}

/// `print`: render the arguments space-separated to stdout with a
/// trailing newline, then yield Unit.
pub(crate) fn print(args: Vec<Value>) -> EvalResult {
    let rendered = args
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    println!("{rendered}");
    Ok(Value::Unit)
}

/// `exit`: terminate the process. Unit exits with status 0; a number must
/// fit an `i32` exit status.
pub(crate) fn exit(args: Vec<Value>) -> EvalResult {
    let status = match args.as_slice() {
        [Value::Unit] => 0,
        [Value::Number(n)] => i32::try_from(n.raw()).map_err(|_| {
            invalid_argument("exit", format!("{n} does not fit an exit status"))
        })?,
        [other] => return Err(type_mismatch("exit", "a number or unit", other.type_name())),
        _ => return Err(arity_mismatch("exit", "one argument", args.len())),
    };
    std::process::exit(status);
}
