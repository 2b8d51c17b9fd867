//! Token stream over Nara source text.
//!
//! Numbers and symbols share one `Atom` token; the reader classifies
//! them, so `-` lexes the same way whether it starts a negative literal
//! or names the subtraction builtin.

use logos::Logos;

use crate::ParseError;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    // Comments run to end of line
    #[regex(r";[^\n]*", logos::skip)]
    Comment,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // String literals, no escape sequences
    #[regex(r#""[^"]*""#, |lex| {
        let s = lex.slice();
        Some(s[1..s.len() - 1].to_string())
    })]
    Str(String),

    // Number or symbol, split apart by the reader
    #[regex(r"[0-9A-Za-z_+\-*/%^=<>&|!]+", |lex| Some(lex.slice().to_string()))]
    Atom(String),
}

#[derive(Debug, Clone)]
pub struct Spanned<T> {
    pub value: T,
    pub span: std::ops::Range<usize>,
}

pub type SpannedToken = Spanned<Token>;

/// Lex the whole source up front; the reader works on the token list.
pub fn tokenize(source: &str) -> Result<Vec<SpannedToken>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => {
                tokens.push(Spanned {
                    value: token,
                    span: lexer.span(),
                });
            }
            Err(()) => {
                let span = lexer.span();
                return Err(ParseError::new(
                    format!("unexpected character '{}'", &source[span.clone()]),
                    span.start,
                ));
            }
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        match tokenize(source) {
            Ok(tokens) => tokens.into_iter().map(|t| t.value).collect(),
            Err(err) => panic!("lex failure: {err}"),
        }
    }

    #[test]
    fn brackets_and_atoms() {
        assert_eq!(
            kinds("(+ 1 {a})"),
            vec![
                Token::LParen,
                Token::Atom("+".to_string()),
                Token::Atom("1".to_string()),
                Token::LBrace,
                Token::Atom("a".to_string()),
                Token::RBrace,
                Token::RParen,
            ]
        );
    }

    #[test]
    fn string_literal_drops_quotes() {
        assert_eq!(kinds(r#""hi there""#), vec![Token::Str("hi there".to_string())]);
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(
            kinds("1 ; the rest is ignored (even brackets)\n2"),
            vec![Token::Atom("1".to_string()), Token::Atom("2".to_string())]
        );
    }

    #[test]
    fn operator_atoms_lex_whole() {
        assert_eq!(
            kinds("<= != &&"),
            vec![
                Token::Atom("<=".to_string()),
                Token::Atom("!=".to_string()),
                Token::Atom("&&".to_string()),
            ]
        );
    }

    #[test]
    fn question_mark_is_outside_the_symbol_alphabet() {
        assert!(tokenize("ready?").is_err());
    }

    #[test]
    fn stray_character_is_an_error() {
        let err = match tokenize("(def {x} #)") {
            Ok(tokens) => panic!("expected an error, got {tokens:?}"),
            Err(err) => err,
        };
        assert_eq!(err.offset, 9);
    }
}
