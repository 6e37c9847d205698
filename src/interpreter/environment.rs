use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A shared handle to an environment.
///
/// Environments are aliased freely: every closure defined in a scope holds a
/// handle to that same scope, and call frames chain new scopes onto it.
pub type EnvRef = Rc<RefCell<Environment>>;

/// One scope of name bindings, chained to an optional outer scope.
///
/// Identifier resolution walks the chain outward; `let` always binds in the
/// innermost scope. Scopes only ever grow (the language has no assignment to
/// existing bindings), so sharing them through `Rc` is sound.
#[derive(Debug)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<EnvRef>,
}

impl Environment {
    /// Creates a fresh root environment with no outer scope.
    #[must_use]
    pub fn root() -> EnvRef {
        Rc::new(RefCell::new(Self { store: HashMap::new(), outer: None }))
    }

    /// Creates an empty environment chained to `outer`.
    ///
    /// This is how call frames are made: the outer scope is the called
    /// function's captured environment, never the caller's.
    #[must_use]
    pub fn extend(outer: &EnvRef) -> EnvRef {
        Rc::new(RefCell::new(Self { store: HashMap::new(), outer: Some(Rc::clone(outer)) }))
    }

    /// Looks `name` up in this scope, then outward along the chain.
    ///
    /// The found value is cloned out so no borrow of the environment
    /// outlives the call.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds `name` in this scope. An existing same-scope binding is
    /// silently overwritten.
    pub fn set(&mut self, name: String, value: Value) {
        self.store.insert(name, value);
    }
}
