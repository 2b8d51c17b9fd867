//! Source text to [`nara_ir::Value`] trees.
//!
//! Two entry points: [`parse`] wraps the whole input in a single
//! s-expression, which is what the REPL reduces per line, and
//! [`parse_forms`] yields the top-level forms one by one for running
//! files.

pub mod lexer;
mod reader;

use std::fmt;

use nara_ir::Value;

use crate::reader::Reader;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub offset: usize,
}

impl ParseError {
    pub(crate) fn new(message: impl Into<String>, offset: usize) -> ParseError {
        ParseError {
            message: message.into(),
            offset,
        }
    }

    /// Render the error with the offending line and a caret marker under
    /// the column, for terminal display.
    pub fn render(&self, source: &str) -> String {
        let upto = &source[..self.offset.min(source.len())];
        let line_start = upto.rfind('\n').map_or(0, |i| i + 1);
        let line_number = upto.matches('\n').count() + 1;
        let column = self.offset.saturating_sub(line_start);
        let line = source[line_start..]
            .split('\n')
            .next()
            .unwrap_or_default();
        format!(
            "parse error on line {line_number}: {message}\n  {line}\n  {caret:>width$}",
            message = self.message,
            caret = '^',
            width = column + 1,
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "parse error at byte {}: {}", self.offset, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Parse a whole source string into one s-expression holding every
/// top-level form.
pub fn parse(source: &str) -> Result<Value, ParseError> {
    Ok(Value::Sexpr(parse_forms(source)?))
}

/// Parse a source string into its top-level forms.
pub fn parse_forms(source: &str) -> Result<Vec<Value>, ParseError> {
    let tokens = lexer::tokenize(source)?;
    Reader::new(tokens, source.len()).read_all()
}
