//! Reader: token list to values.
//!
//! `(` opens an s-expression, `{` a q-expression. Atoms that look
//! numeric must be valid `i64` literals; everything else reads as a
//! symbol.

use nara_ir::Value;

use crate::lexer::{SpannedToken, Token};
use crate::ParseError;

pub struct Reader {
    tokens: std::vec::IntoIter<SpannedToken>,
    end: usize,
}

impl Reader {
    pub fn new(tokens: Vec<SpannedToken>, end: usize) -> Reader {
        Reader {
            tokens: tokens.into_iter(),
            end,
        }
    }

    /// Read every top-level form until the tokens run out.
    pub fn read_all(mut self) -> Result<Vec<Value>, ParseError> {
        let mut forms = Vec::new();
        while let Some(token) = self.tokens.next() {
            forms.push(self.read_form(token)?);
        }
        Ok(forms)
    }

    fn read_form(&mut self, token: SpannedToken) -> Result<Value, ParseError> {
        let offset = token.span.start;
        match token.value {
            Token::LParen => Ok(Value::Sexpr(self.read_until(Token::RParen, offset)?)),
            Token::LBrace => Ok(Value::Qexpr(self.read_until(Token::RBrace, offset)?)),
            Token::RParen => Err(ParseError::new("unmatched ')'", offset)),
            Token::RBrace => Err(ParseError::new("unmatched '}'", offset)),
            Token::Str(s) => Ok(Value::string(s)),
            Token::Atom(atom) => classify_atom(&atom, offset),
            // skipped by the lexer
            Token::Comment => Err(ParseError::new("unexpected comment token", offset)),
        }
    }

    /// Collect forms until the matching closer.
    fn read_until(&mut self, closer: Token, open_offset: usize) -> Result<Vec<Value>, ParseError> {
        let mut cells = Vec::new();
        loop {
            let Some(token) = self.tokens.next() else {
                let what = if closer == Token::RParen { "(" } else { "{" };
                return Err(ParseError::new(
                    format!("'{what}' opened at byte {open_offset} is never closed"),
                    self.end,
                ));
            };
            if token.value == closer {
                return Ok(cells);
            }
            cells.push(self.read_form(token)?);
        }
    }
}

/// Digit-led atoms (optionally sign-led) must be whole `i64` literals;
/// anything else is a symbol. `-` alone is the subtraction symbol.
fn classify_atom(atom: &str, offset: usize) -> Result<Value, ParseError> {
    let digits = match atom.strip_prefix(['+', '-']) {
        Some(rest) => rest,
        None => atom,
    };
    let numeric = digits.chars().next().is_some_and(|c| c.is_ascii_digit());
    if !numeric {
        return Ok(Value::symbol(atom));
    }
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::new(
            format!("malformed number literal '{atom}'"),
            offset,
        ));
    }
    match atom.parse::<i64>() {
        Ok(n) => Ok(Value::number(n)),
        Err(_) => Err(ParseError::new(
            format!("number literal '{atom}' does not fit 64 bits"),
            offset,
        )),
    }
}
