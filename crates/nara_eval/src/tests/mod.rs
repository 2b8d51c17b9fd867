//! End-to-end tests: source text through the parser and the reducer.
//!
//! `run` reduces a whole source string as one s-expression, the way the
//! REPL treats a line. `run_program` reduces top-level forms in order
//! and yields the last result, the way the file runner does.

use nara_ir::{Environment, EvalResult};

use crate::{evaluate, global_environment};

mod binding_tests;
mod compare_tests;

pub(crate) fn run(source: &str) -> EvalResult {
    let mut env = global_environment();
    run_in(source, &mut env)
}

pub(crate) fn run_in(source: &str, env: &mut Environment) -> EvalResult {
    let form = match nara_parse::parse(source) {
        Ok(form) => form,
        Err(err) => panic!("parse failure in test source: {err}"),
    };
    evaluate(form, env)
}

pub(crate) fn run_program(source: &str) -> EvalResult {
    let forms = match nara_parse::parse_forms(source) {
        Ok(forms) => forms,
        Err(err) => panic!("parse failure in test source: {err}"),
    };
    let mut env = global_environment();
    let mut result = Ok(nara_ir::Value::Unit);
    for form in forms {
        result = evaluate(form, &mut env);
        if result.is_err() {
            return result;
        }
    }
    result
}
