use std::collections::HashMap;

use crate::value::Value;

/// Lexical scope for `let` bindings.
///
/// Binding never mutates in place: [`Scope::bind`] returns a new scope, so a
/// binding made inside one branch of a constructor cannot leak into sibling
/// subexpressions.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    vars: HashMap<String, Value>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of this scope extended with `name`, shadowing any existing
    /// binding of the same name.
    pub fn bind(&self, name: &str, value: Value) -> Scope {
        let mut vars = self.vars.clone();
        vars.insert(name.to_string(), value);
        Scope { vars }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }
}
