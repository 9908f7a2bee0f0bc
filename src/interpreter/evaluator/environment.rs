use std::collections::HashMap;

use crate::{
    ast::DeclaredType,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// A declared variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    /// Nesting depth of the scope the variable was declared in.
    pub depth:         usize,
    /// The variable name.
    pub name:          String,
    /// The current value. Its type always equals `declared_type`.
    pub value:         Value,
    /// The type fixed at declaration.
    pub declared_type: DeclaredType,
}

/// Stores the variables visible to the running program.
///
/// The environment is a stack of scopes. The bottom scope (depth 0) is the
/// global scope and is never popped. Block statements push a scope on entry
/// and pop it on exit, dropping everything declared inside.
///
/// ## Usage
///
/// ```
/// use camlang::{
///     ast::DeclaredType,
///     interpreter::{evaluator::environment::Environment, value::Value},
/// };
///
/// let mut env = Environment::new();
/// env.declare("x", DeclaredType::Number, 1).unwrap();
///
/// env.push_scope();
/// env.declare("y", DeclaredType::Boolean, 2).unwrap();
/// env.assign("x", Value::Number(3.0), 3).unwrap();
/// env.pop_scope();
///
/// assert_eq!(env.get("x", 4).unwrap(), Value::Number(3.0));
/// assert!(env.get("y", 4).is_err());
/// ```
#[derive(Debug)]
pub struct Environment {
    scope_stack: Vec<HashMap<String, Symbol>>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only the empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scope_stack: vec![HashMap::new()], }
    }

    /// Current nesting depth; 0 at the global scope.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scope_stack.len() - 1
    }

    /// Enters a new innermost scope.
    pub fn push_scope(&mut self) {
        self.scope_stack.push(HashMap::new());
        log::debug!("entered scope depth {}", self.depth());
    }

    /// Leaves the innermost scope, dropping its symbols.
    ///
    /// The global scope is never removed.
    pub fn pop_scope(&mut self) {
        if self.scope_stack.len() > 1 {
            let scope = self.scope_stack.pop();
            log::debug!("left scope depth {}, dropped {} symbols",
                        self.depth() + 1,
                        scope.map_or(0, |s| s.len()));
        }
    }

    /// Declares a variable in the innermost scope.
    ///
    /// Declaring a name that already exists in the innermost scope with the
    /// same type does nothing and keeps its current value. A new variable
    /// starts out holding the default of its type.
    ///
    /// # Panics
    /// Panics if no scope exists, which indicates an internal error.
    ///
    /// # Errors
    /// Returns `TypeRedeclaration` if the innermost scope already declares
    /// `name` with a different type.
    pub fn declare(&mut self,
                   name: &str,
                   declared_type: DeclaredType,
                   line: usize)
                   -> EvalResult<()> {
        let depth = self.depth();
        let scope = self.scope_stack.last_mut().expect("at least global");

        if let Some(existing) = scope.get(name) {
            if existing.declared_type == declared_type {
                return Ok(());
            }
            return Err(RuntimeError::TypeRedeclaration { name: name.to_string(),
                                                         declared: existing.declared_type,
                                                         requested: declared_type,
                                                         line });
        }

        scope.insert(name.to_string(),
                     Symbol { depth,
                              name: name.to_string(),
                              value: Value::default_for(declared_type),
                              declared_type });
        Ok(())
    }

    /// Retrieves a symbol, searching from the innermost scope outward.
    ///
    /// # Returns
    /// The first matching symbol, or `None` if no visible scope declares it.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.scope_stack.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Reads the value of a visible variable.
    ///
    /// # Errors
    /// Returns `UnknownVariable` if no visible scope declares `name`.
    pub fn get(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.lookup(name)
            .map(|symbol| symbol.value)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Assigns a value to the innermost visible variable named `name`.
    ///
    /// # Errors
    /// - `UnknownVariable` if no visible scope declares `name`.
    /// - `TypeMismatch` if the value's type differs from the declared type.
    pub fn assign(&mut self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        let symbol = self.scope_stack
                         .iter_mut()
                         .rev()
                         .find_map(|scope| scope.get_mut(name))
                         .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                                        line })?;

        if symbol.declared_type != value.declared_type() {
            return Err(RuntimeError::TypeMismatch { name: name.to_string(),
                                                    expected: symbol.declared_type,
                                                    found: value.declared_type(),
                                                    line });
        }

        symbol.value = value;
        Ok(())
    }
}
