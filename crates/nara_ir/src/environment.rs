//! Environment: chained name-to-value bindings with a distinguished
//! global scope.
//!
//! Lookup walks from the innermost scope outward. Local scopes exist per
//! closure application and hold only parameter bindings; `def` always
//! lands in the root scope no matter which local scope issued it. Only
//! root bindings carry the reserved flag that protects builtins and
//! constants against redefinition and deletion.

// Rc, not Arc: scopes are single-threaded and shared between closures
// that alias the same chain.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::errors::{reserved_symbol, unbound_symbol, EvalError};
use crate::value::Value;

/// A single-threaded, reference-counted handle to a scope.
///
/// Scopes only ever point toward their parent, never back, so the chain
/// itself cannot form a reference cycle. A closure holding the same
/// `ScopeRef` as a later partial application sees the shared bindings.
pub struct ScopeRef(Rc<RefCell<Scope>>);

impl ScopeRef {
    /// Create a new handle wrapping the given scope.
    #[inline]
    pub fn new(scope: Scope) -> Self {
        ScopeRef(Rc::new(RefCell::new(scope)))
    }

    /// Borrow the scope immutably.
    #[inline]
    pub fn borrow(&self) -> Ref<'_, Scope> {
        self.0.borrow()
    }

    /// Borrow the scope mutably.
    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, Scope> {
        self.0.borrow_mut()
    }

    /// Whether two handles alias the same scope.
    ///
    /// This is the identity used by closure equality.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl Clone for ScopeRef {
    #[inline]
    fn clone(&self) -> Self {
        ScopeRef(Rc::clone(&self.0))
    }
}

impl fmt::Debug for ScopeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Bindings can hold closures that point back into this chain, so
        // the handle renders opaquely.
        write!(f, "ScopeRef({:p})", Rc::as_ptr(&self.0))
    }
}

/// A variable binding.
#[derive(Clone, Debug)]
struct Binding {
    /// The bound value.
    value: Value,
    /// Whether this binding is write-protected (builtins and constants).
    reserved: bool,
}

/// A single scope containing bindings and an optional parent.
#[derive(Debug, Default)]
pub struct Scope {
    /// Bindings in this scope (`FxHashMap` for faster hashing with
    /// short string keys).
    bindings: FxHashMap<String, Binding>,
    /// Parent scope, toward the global root.
    parent: Option<ScopeRef>,
}

impl Scope {
    /// Create a new empty scope with no parent.
    pub fn new() -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: None,
        }
    }

    /// Create a new scope chained to a parent.
    pub fn with_parent(parent: ScopeRef) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind a name in this scope, replacing any previous binding.
    #[inline]
    fn define(&mut self, name: &str, value: Value, reserved: bool) {
        self.bindings
            .insert(name.to_owned(), Binding { value, reserved });
    }

    /// Look up a name, walking outward through parents.
    fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(binding) = self.bindings.get(name) {
            return Some(binding.value.clone());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow().lookup(name);
        }
        None
    }

    /// Reserved-flag test against this scope's own bindings only.
    #[inline]
    fn is_reserved(&self, name: &str) -> bool {
        self.bindings.get(name).is_some_and(|b| b.reserved)
    }
}

/// The two-tier binding environment handed to the evaluator.
///
/// `current` is the innermost scope of the active chain; `global` is the
/// root. Exactly one root exists per process: every `Environment` derived
/// for a closure call shares it.
#[derive(Clone, Debug)]
pub struct Environment {
    /// Innermost scope of the active chain.
    current: ScopeRef,
    /// The root scope; the only one with reserved bindings.
    global: ScopeRef,
}

impl Environment {
    /// Create an environment whose current scope is the global root.
    pub fn new() -> Self {
        let global = ScopeRef::new(Scope::new());
        Environment {
            current: global.clone(),
            global,
        }
    }

    /// Derive the environment for a closure call: `scope` becomes the
    /// current scope, the root stays shared.
    #[must_use]
    pub fn with_current(&self, scope: ScopeRef) -> Self {
        Environment {
            current: scope,
            global: self.global.clone(),
        }
    }

    /// The innermost scope, for closure capture.
    #[inline]
    pub fn current_scope(&self) -> ScopeRef {
        self.current.clone()
    }

    /// Read-only chained lookup; fails with `UnboundSymbol` when the name
    /// is absent from every scope up to and including global.
    pub fn resolve(&self, name: &str) -> Result<Value, EvalError> {
        self.current
            .borrow()
            .lookup(name)
            .ok_or_else(|| unbound_symbol(name))
    }

    /// Bind a name in the root scope regardless of the current scope.
    ///
    /// Fails with `ReservedSymbol` if the name already exists there with
    /// the reserved flag set.
    pub fn define_global(
        &mut self,
        name: &str,
        value: Value,
        reserved: bool,
    ) -> Result<(), EvalError> {
        let mut root = self.global.borrow_mut();
        if root.is_reserved(name) {
            return Err(reserved_symbol(name));
        }
        root.define(name, value, reserved);
        Ok(())
    }

    /// Bind a reserved name in the root scope, bypassing the write guard.
    ///
    /// Only the bootstrap that pre-populates the global environment with
    /// constants and builtins uses this; everything after bootstrap goes
    /// through `define_global`.
    pub fn bootstrap_reserved(&mut self, name: &str, value: Value) {
        self.global.borrow_mut().define(name, value, true);
    }

    /// Bind a name in the current scope only (parameter binding).
    pub fn define_local(&mut self, name: &str, value: Value) {
        self.current.borrow_mut().define(name, value, false);
    }

    /// Remove a name from the root scope.
    ///
    /// Fails with `ReservedSymbol` for protected names and `UnboundSymbol`
    /// when the name was never bound there.
    pub fn delete_global(&mut self, name: &str) -> Result<(), EvalError> {
        let mut root = self.global.borrow_mut();
        if root.is_reserved(name) {
            return Err(reserved_symbol(name));
        }
        match root.bindings.remove(name) {
            Some(_) => Ok(()),
            None => Err(unbound_symbol(name)),
        }
    }

    /// Root-scope reserved-flag test, used by the binding forms to forbid
    /// shadowing or redefining builtins and constants.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.global.borrow().is_reserved(name)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
