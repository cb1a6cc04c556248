// ABOUTME: Environment chain: name-to-value frames linked toward a root

use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::trace;

/// One frame of bindings plus a navigational link to the enclosing frame.
/// The parent link is set when a closure is applied, so it lives behind a
/// `RefCell`.
#[derive(Debug)]
pub struct Environment {
    bindings: RefCell<HashMap<String, Value>>,
    parent: RefCell<Option<Rc<Environment>>>,
}

impl Environment {
    /// Creates a new root environment with no parent.
    pub fn new() -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: RefCell::new(None),
        })
    }

    /// Creates a new environment enclosed by `parent`.
    #[allow(dead_code)] // Used by tests in other modules
    pub fn with_parent(parent: Rc<Environment>) -> Rc<Self> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: RefCell::new(Some(parent)),
        })
    }

    /// Defines or replaces a binding in this frame.
    pub fn define(&self, name: String, value: Value) {
        trace!(name = %name, "defining in local frame");
        self.bindings.borrow_mut().insert(name, value);
    }

    /// Defines a binding in the root frame, walking the parent chain.
    pub fn define_global(&self, name: String, value: Value) {
        match &*self.parent.borrow() {
            Some(parent) => parent.define_global(name, value),
            None => self.define(name, value),
        }
    }

    /// Looks a symbol up in this frame and then in enclosing frames. The
    /// returned value is an independent copy; callers may consume it freely.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.borrow().get(name) {
            trace!(name = %name, "found in local frame");
            return Some(value.clone());
        }
        match &*self.parent.borrow() {
            Some(parent) => parent.get(name),
            None => None,
        }
    }

    /// Relinks this frame under a new parent.
    pub fn set_parent(&self, parent: Rc<Environment>) {
        *self.parent.borrow_mut() = Some(parent);
    }

    /// The root frame of the chain this environment belongs to.
    pub fn global(self: &Rc<Self>) -> Rc<Environment> {
        match &*self.parent.borrow() {
            Some(parent) => parent.global(),
            None => Rc::clone(self),
        }
    }

    /// A new frame with the same parent link and copies of all bindings.
    pub fn deep_copy(&self) -> Rc<Environment> {
        Rc::new(Environment {
            bindings: RefCell::new(self.bindings.borrow().clone()),
            parent: RefCell::new(self.parent.borrow().clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::init_test_logging;

    #[test]
    fn define_and_get_in_root_env() {
        init_test_logging();
        let env = Environment::new();
        env.define("x".to_string(), Value::Number(10));
        assert_eq!(env.get("x"), Some(Value::Number(10)));
    }

    #[test]
    fn get_from_outer_env() {
        init_test_logging();
        let outer = Environment::new();
        outer.define("x".to_string(), Value::Number(10));

        let inner = Environment::with_parent(outer.clone());
        assert_eq!(inner.get("x"), Some(Value::Number(10)));
    }

    #[test]
    fn define_in_inner_shadows_outer() {
        init_test_logging();
        let outer = Environment::new();
        outer.define("x".to_string(), Value::Number(10));

        let inner = Environment::with_parent(outer.clone());
        inner.define("x".to_string(), Value::Number(20)); // Shadow

        assert_eq!(inner.get("x"), Some(Value::Number(20)));
        // The outer frame is not affected
        assert_eq!(outer.get("x"), Some(Value::Number(10)));
    }

    #[test]
    fn get_undefined_symbol() {
        init_test_logging();
        let env = Environment::new();
        assert!(env.get("non_existent").is_none());
    }

    #[test]
    fn redefine_in_same_env() {
        init_test_logging();
        let env = Environment::new();
        env.define("x".to_string(), Value::Number(10));
        env.define("x".to_string(), Value::Number(20));
        assert_eq!(env.get("x"), Some(Value::Number(20)));
    }

    #[test]
    fn define_global_walks_to_root() {
        init_test_logging();
        let root = Environment::new();
        let middle = Environment::with_parent(root.clone());
        let leaf = Environment::with_parent(middle.clone());

        leaf.define_global("x".to_string(), Value::Number(1));

        assert_eq!(root.get("x"), Some(Value::Number(1)));
        // Visible from the leaf through the chain, but stored at the root
        assert_eq!(leaf.get("x"), Some(Value::Number(1)));
    }

    #[test]
    fn global_returns_the_root_frame() {
        init_test_logging();
        let root = Environment::new();
        root.define("x".to_string(), Value::Number(1));
        let leaf = Environment::with_parent(Environment::with_parent(root));

        let found = leaf.global();
        assert_eq!(found.get("x"), Some(Value::Number(1)));
    }

    #[test]
    fn lookups_return_independent_copies() {
        init_test_logging();
        let env = Environment::new();
        env.define(
            "xs".to_string(),
            Value::QExpr(vec![Value::Number(1), Value::Number(2)]),
        );

        let mut copy = env.get("xs").unwrap();
        if let Value::QExpr(cells) = &mut copy {
            cells.clear();
        }

        assert_eq!(
            env.get("xs"),
            Some(Value::QExpr(vec![Value::Number(1), Value::Number(2)]))
        );
    }

    #[test]
    fn deep_copy_is_independent() {
        init_test_logging();
        let env = Environment::new();
        env.define("x".to_string(), Value::Number(1));

        let copy = env.deep_copy();
        copy.define("x".to_string(), Value::Number(2));

        assert_eq!(env.get("x"), Some(Value::Number(1)));
        assert_eq!(copy.get("x"), Some(Value::Number(2)));
    }
}
