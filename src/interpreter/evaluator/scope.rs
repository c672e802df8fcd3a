use std::{cell::RefCell, collections::HashMap, rc::Rc};

use tracing::trace;

use crate::{ast::FunctionDef, interpreter::evaluator::core::Context};

/// Shared handle to a scope.
///
/// Scopes are reference counted because a function keeps its defining scope
/// alive for as long as the function itself can still be called.
pub type ScopeRef = Rc<RefCell<Scope>>;

/// One level of the scope chain.
///
/// A scope is created for every block entry and every function activation.
/// Lookups walk from the innermost scope outward through `parent`.
#[derive(Debug, Default)]
pub struct Scope {
    /// Variables bound here. `None` marks a `var x` without initializer.
    pub variables: HashMap<String, Option<i64>>,
    /// Functions declared here.
    pub functions: HashMap<String, Rc<FunctionDef>>,
    /// The enclosing scope, `None` for the global scope.
    pub parent:    Option<ScopeRef>,
}

impl Scope {
    /// Creates an empty global scope.
    #[must_use]
    pub fn root() -> ScopeRef {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates an empty scope nested in `parent`.
    #[must_use]
    pub fn child(parent: &ScopeRef) -> ScopeRef {
        Rc::new(RefCell::new(Self { parent: Some(Rc::clone(parent)),
                                    ..Self::default() }))
    }
}

/// A callable function: its declaration plus the scope it was declared in.
///
/// Free names in the body resolve through `env`, never through the caller's
/// scope chain.
#[derive(Debug, Clone)]
pub struct Closure {
    /// The declaration.
    pub def: Rc<FunctionDef>,
    /// The defining scope.
    pub env: ScopeRef,
}

impl Context<'_> {
    /// Runs `f` with `scope` as the current scope, then restores the previous
    /// one, whether `f` succeeded or not.
    pub(crate) fn with_scope<T>(&mut self, scope: ScopeRef, f: impl FnOnce(&mut Self) -> T) -> T {
        trace!("entering scope");
        let saved = std::mem::replace(&mut self.scope, scope);
        let result = f(self);
        self.scope = saved;
        trace!("leaving scope");
        result
    }

    /// Looks up a variable through the scope chain.
    ///
    /// # Returns
    /// - `None` if the name is not bound anywhere.
    /// - `Some(None)` if it is bound but was never assigned.
    /// - `Some(Some(value))` otherwise.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<Option<i64>> {
        let mut current = Some(Rc::clone(&self.scope));

        while let Some(scope) = current {
            let scope = scope.borrow();
            if let Some(value) = scope.variables.get(name) {
                return Some(*value);
            }
            current = scope.parent.clone();
        }

        None
    }

    /// Returns `true` if the current (innermost) scope binds `name`.
    #[must_use]
    pub fn is_defined_locally(&self, name: &str) -> bool {
        self.scope.borrow().variables.contains_key(name)
    }

    /// Binds `name` in the current scope, replacing nothing.
    pub(crate) fn define_local(&mut self, name: &str, value: Option<i64>) {
        trace!(name, ?value, "binding variable");
        self.scope.borrow_mut().variables.insert(name.to_owned(), value);
    }

    /// Overwrites the nearest binding of `name`.
    ///
    /// Does nothing if no scope binds `name`; callers check with
    /// [`Context::get_variable`] first.
    pub(crate) fn assign_nearest(&mut self, name: &str, value: i64) {
        let mut current = Some(Rc::clone(&self.scope));

        while let Some(scope) = current {
            let mut scope = scope.borrow_mut();
            if let Some(slot) = scope.variables.get_mut(name) {
                *slot = Some(value);
                return;
            }
            current = scope.parent.clone();
        }
    }

    /// Resolves a function through the scope chain.
    ///
    /// The returned closure's `env` is the scope the function was found in,
    /// which is the scope its declaration ran in.
    #[must_use]
    pub fn find_function(&self, name: &str) -> Option<Closure> {
        let mut current = Some(Rc::clone(&self.scope));

        while let Some(scope) = current {
            if let Some(def) = scope.borrow().functions.get(name) {
                return Some(Closure { def: Rc::clone(def),
                                      env: Rc::clone(&scope) });
            }
            current = scope.borrow().parent.clone();
        }

        None
    }
}
