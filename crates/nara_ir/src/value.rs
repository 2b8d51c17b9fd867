//! Runtime values for the Nara interpreter.
//!
//! `Value` is a closed tagged union over every runtime entity: atoms,
//! lists, and functions. Construction goes through type-directed factory
//! methods; heap payloads (`Heap<T>`) cannot be built outside this crate.
//!
//! Lists own their children exclusively. The one shared structure is the
//! environment captured inside a `Lambda`: partial applications extend it
//! with fresh scopes without invalidating earlier snapshots, so it is a
//! reference-counted `ScopeRef`.

use std::fmt;

use crate::environment::ScopeRef;
use crate::heap::Heap;
use crate::scalar::Number;

/// Identifier for a primitive operation.
///
/// The evaluator dispatches on this enum with an exhaustive `match`; there
/// is no function-pointer registry. Two builtin values are equal iff their
/// identifiers are equal, which coincides with name equality since the
/// mapping to surface spellings is injective.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    // Relations
    Eq,
    Neq,
    Gt,
    Geq,
    Lt,
    Leq,
    // Boolean
    And,
    Or,
    Not,
    // List/string
    List,
    Cons,
    Eval,
    Head,
    Tail,
    Join,
    Len,
    // Control
    If,
    Cond,
    Case,
    When,
    Unless,
    Do,
    // Binding
    Lambda,
    Def,
    Defun,
    Del,
    // Misc
    Type,
    Print,
    Exit,
}

impl Builtin {
    /// Every builtin, in registration order for the global environment.
    pub const ALL: &'static [Builtin] = &[
        Builtin::Add,
        Builtin::Sub,
        Builtin::Mul,
        Builtin::Div,
        Builtin::Mod,
        Builtin::Pow,
        Builtin::Eq,
        Builtin::Neq,
        Builtin::Gt,
        Builtin::Geq,
        Builtin::Lt,
        Builtin::Leq,
        Builtin::And,
        Builtin::Or,
        Builtin::Not,
        Builtin::List,
        Builtin::Cons,
        Builtin::Eval,
        Builtin::Head,
        Builtin::Tail,
        Builtin::Join,
        Builtin::Len,
        Builtin::If,
        Builtin::Cond,
        Builtin::Case,
        Builtin::When,
        Builtin::Unless,
        Builtin::Do,
        Builtin::Lambda,
        Builtin::Def,
        Builtin::Defun,
        Builtin::Del,
        Builtin::Type,
        Builtin::Print,
        Builtin::Exit,
    ];

    /// The surface spelling bound in the global environment.
    pub const fn name(self) -> &'static str {
        match self {
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
            Builtin::Mod => "%",
            Builtin::Pow => "^",
            Builtin::Eq => "==",
            Builtin::Neq => "!=",
            Builtin::Gt => ">",
            Builtin::Geq => ">=",
            Builtin::Lt => "<",
            Builtin::Leq => "<=",
            Builtin::And => "&&",
            Builtin::Or => "||",
            Builtin::Not => "!",
            Builtin::List => "list",
            Builtin::Cons => "cons",
            Builtin::Eval => "eval",
            Builtin::Head => "head",
            Builtin::Tail => "tail",
            Builtin::Join => "join",
            Builtin::Len => "len",
            Builtin::If => "if",
            Builtin::Cond => "cond",
            Builtin::Case => "case",
            Builtin::When => "when",
            Builtin::Unless => "unless",
            Builtin::Do => "do",
            Builtin::Lambda => "lambda",
            Builtin::Def => "def",
            Builtin::Defun => "defun",
            Builtin::Del => "del",
            Builtin::Type => "type",
            Builtin::Print => "print",
            Builtin::Exit => "exit",
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Closure payload: a parameter list, a body, and the captured scope.
///
/// `body` holds the cells of the defining q-expression; calling the
/// closure re-tags them into an s-expression. `env` is the lexical scope
/// in effect at creation, shared between every value that aliases it.
#[derive(Clone)]
pub struct LambdaValue {
    /// Parameter names, symbols only, never reserved.
    pub params: Vec<Heap<String>>,
    /// Body cells, shared between clones of the closure.
    pub body: Heap<Vec<Value>>,
    /// Captured lexical environment.
    pub env: ScopeRef,
}

impl PartialEq for LambdaValue {
    fn eq(&self, other: &Self) -> bool {
        // Closures are equal iff the parameter/body pair matches and the
        // captured environment is the same reference.
        self.params == other.params
            && self.body == other.body
            && ScopeRef::ptr_eq(&self.env, &other.env)
    }
}

impl fmt::Debug for LambdaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The captured scope can be cyclic through its bindings, so Debug
        // stops at the parameter/body pair.
        f.debug_struct("LambdaValue")
            .field("params", &self.params)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

/// Runtime value in the Nara interpreter.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The empty/void result.
    Unit,
    /// Fixed-width signed integer; overflow is a runtime error.
    Number(Number),
    /// Immutable text; `head`/`tail`/`len` are character-wise.
    Str(Heap<String>),
    /// A name used for lookup, or as a literal inside binding forms.
    Symbol(Heap<String>),
    /// A primitive operation.
    Builtin(Builtin),
    /// A closure.
    Lambda(LambdaValue),
    /// Active list: reduced by evaluating the head as a function.
    Sexpr(Vec<Value>),
    /// Data list: literal, inert; never auto-reduced.
    Qexpr(Vec<Value>),
}

// Factory methods (the only way to construct heap payloads)

impl Value {
    /// The empty q-expression, bound as the `nil` constant.
    #[inline]
    pub fn nil() -> Self {
        Value::Qexpr(Vec::new())
    }

    /// Create a number value from a raw `i64`.
    #[inline]
    pub fn number(n: i64) -> Self {
        Value::Number(Number::new(n))
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    /// Create a symbol value.
    #[inline]
    pub fn symbol(s: impl Into<String>) -> Self {
        Value::Symbol(Heap::new(s.into()))
    }

    /// Create a closure value.
    #[inline]
    pub fn lambda(params: Vec<Heap<String>>, body: Vec<Value>, env: ScopeRef) -> Self {
        Value::Lambda(LambdaValue {
            params,
            body: Heap::new(body),
            env,
        })
    }

    /// Intern a parameter name for a closure.
    #[inline]
    pub fn param(name: impl Into<String>) -> Heap<String> {
        Heap::new(name.into())
    }
}

// Inspection

impl Value {
    /// The variant name, as returned by the `type` builtin and used in
    /// error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Unit => "unit",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Builtin(_) => "builtin function",
            Value::Lambda(_) => "lambda function",
            Value::Sexpr(_) => "s-expression",
            Value::Qexpr(_) => "q-expression",
        }
    }

    /// The number payload, if this is a `Number`.
    #[inline]
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The text payload, if this is a `Str`.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The name payload, if this is a `Symbol`.
    #[inline]
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// The cells, if this is a `Qexpr`.
    #[inline]
    pub fn as_qexpr(&self) -> Option<&[Value]> {
        match self {
            Value::Qexpr(cells) => Some(cells),
            _ => None,
        }
    }

    /// True for `Qexpr`.
    #[inline]
    pub const fn is_qexpr(&self) -> bool {
        matches!(self, Value::Qexpr(_))
    }

    /// True for `Symbol`.
    #[inline]
    pub const fn is_symbol(&self) -> bool {
        matches!(self, Value::Symbol(_))
    }
}

fn fmt_cells(f: &mut fmt::Formatter<'_>, cells: &[Value], open: char, close: char) -> fmt::Result {
    write!(f, "{open}")?;
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{cell}")?;
    }
    write!(f, "{close}")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => write!(f, "()"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "\"{s}\""),
            Value::Symbol(s) => write!(f, "{s}"),
            Value::Builtin(b) => write!(f, "<builtin {b}>"),
            Value::Lambda(_) => write!(f, "<lambda>"),
            Value::Sexpr(cells) => fmt_cells(f, cells, '(', ')'),
            Value::Qexpr(cells) => fmt_cells(f, cells, '{', '}'),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::{assert_eq, assert_ne};

    use super::*;
    use crate::environment::{Scope, ScopeRef};

    #[test]
    fn atoms_render_as_literals() {
        assert_eq!(Value::number(-42).to_string(), "-42");
        assert_eq!(Value::symbol("head").to_string(), "head");
        assert_eq!(Value::string("hi").to_string(), "\"hi\"");
        assert_eq!(Value::Unit.to_string(), "()");
    }

    #[test]
    fn lists_render_with_bracket_pairs() {
        let inner = Value::Qexpr(vec![Value::number(1), Value::number(2)]);
        let sexpr = Value::Sexpr(vec![Value::Builtin(Builtin::Head), inner]);
        assert_eq!(sexpr.to_string(), "(<builtin head> {1 2})");
    }

    #[test]
    fn equality_requires_same_tag() {
        assert_ne!(Value::number(0), Value::Unit);
        assert_ne!(Value::symbol("x"), Value::string("x"));
        assert_eq!(
            Value::Qexpr(vec![Value::number(1)]),
            Value::Qexpr(vec![Value::number(1)])
        );
        assert_ne!(
            Value::Qexpr(vec![Value::number(1)]),
            Value::Sexpr(vec![Value::number(1)])
        );
    }

    #[test]
    fn builtins_equal_iff_names_match() {
        assert_eq!(Value::Builtin(Builtin::Add), Value::Builtin(Builtin::Add));
        assert_ne!(Value::Builtin(Builtin::Add), Value::Builtin(Builtin::Sub));
    }

    #[test]
    fn lambdas_compare_captured_scope_by_reference() {
        let scope_a = ScopeRef::new(Scope::new());
        let scope_b = ScopeRef::new(Scope::new());
        let params = vec![Value::param("x")];
        let body = vec![Value::symbol("x")];

        let one = Value::lambda(params.clone(), body.clone(), scope_a.clone());
        let same_scope = Value::lambda(params.clone(), body.clone(), scope_a);
        let other_scope = Value::lambda(params, body, scope_b);

        assert_eq!(one, same_scope);
        assert_ne!(one, other_scope);
    }

    #[test]
    fn type_names() {
        assert_eq!(Value::nil().type_name(), "q-expression");
        assert_eq!(Value::Builtin(Builtin::If).type_name(), "builtin function");
    }
}
