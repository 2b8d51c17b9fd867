//! Driver for the Nara interpreter.
//!
//! Two front doors: [`repl`] reduces one line at a time against a
//! persistent environment, and [`run_file`] reduces a file's top-level
//! forms in order. Both share the single global environment built by
//! [`nara_eval::global_environment`].

use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::Path;

use nara_eval::{evaluate, global_environment, Environment, EvalError, Value};
use nara_parse::ParseError;

/// Anything that can stop the driver: bad syntax, a reduction error, or
/// a file that cannot be read.
#[derive(Debug)]
pub enum DriverError {
    Parse(ParseError),
    Eval(EvalError),
    Io(io::Error),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::Parse(err) => write!(f, "{err}"),
            DriverError::Eval(err) => write!(f, "error: {err}"),
            DriverError::Io(err) => write!(f, "error: {err}"),
        }
    }
}

impl std::error::Error for DriverError {}

impl From<ParseError> for DriverError {
    fn from(err: ParseError) -> Self {
        DriverError::Parse(err)
    }
}

impl From<EvalError> for DriverError {
    fn from(err: EvalError) -> Self {
        DriverError::Eval(err)
    }
}

impl From<io::Error> for DriverError {
    fn from(err: io::Error) -> Self {
        DriverError::Io(err)
    }
}

/// Reduce one source line the way the REPL does: the whole line becomes
/// a single s-expression.
pub fn run_line(source: &str, env: &mut Environment) -> Result<Value, DriverError> {
    let form = nara_parse::parse(source)?;
    Ok(evaluate(form, env)?)
}

/// Reduce a source string form by form, yielding the last result.
///
/// Unlike a REPL line, a file holds many top-level forms; reducing them
/// one at a time keeps `(def ...)` at the top level from turning into
/// an application of its own result.
pub fn run_source(source: &str, env: &mut Environment) -> Result<Value, DriverError> {
    let mut last = Value::Unit;
    for form in nara_parse::parse_forms(source)? {
        last = evaluate(form, env)?;
    }
    Ok(last)
}

/// Run a whole file against a fresh global environment.
pub fn run_file(path: &Path) -> Result<Value, DriverError> {
    let source = std::fs::read_to_string(path)?;
    let mut env = global_environment();
    run_source(&source, &mut env)
}

/// The interactive loop. Errors print and the loop continues; only end
/// of input ends the session.
pub fn repl() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut env = global_environment();

    println!("Nara {}", env!("CARGO_PKG_VERSION"));
    println!("Press Ctrl+D to exit");

    let mut line = String::new();
    loop {
        write!(stdout, "nara> ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }
        if line.trim().is_empty() {
            continue;
        }

        match run_line(&line, &mut env) {
            Ok(value) => println!("{value}"),
            Err(DriverError::Parse(err)) => eprintln!("{}", err.render(&line)),
            Err(err) => eprintln!("{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn run_line_keeps_state_between_lines() {
        let mut env = global_environment();
        assert_eq!(run_line("def {x} 41", &mut env).ok(), Some(Value::Unit));
        assert_eq!(
            run_line("+ x 1", &mut env).ok(),
            Some(Value::number(42))
        );
    }

    #[test]
    fn run_source_reduces_forms_in_order() {
        let mut env = global_environment();
        let result = run_source("(def {x} 2) (def {y} 3) (* x y)", &mut env);
        assert_eq!(result.ok(), Some(Value::number(6)));
    }

    #[test]
    fn run_source_of_nothing_is_unit() {
        let mut env = global_environment();
        assert_eq!(run_source("", &mut env).ok(), Some(Value::Unit));
    }

    #[test]
    fn parse_errors_surface_as_driver_errors() {
        let mut env = global_environment();
        let result = run_source("(+ 1", &mut env);
        assert!(matches!(result, Err(DriverError::Parse(_))));
    }

    #[test]
    fn eval_errors_surface_as_driver_errors() {
        let mut env = global_environment();
        let result = run_source("(/ 1 0)", &mut env);
        assert!(matches!(result, Err(DriverError::Eval(_))));
    }
}
