/// Core evaluation logic and interpreter state.
///
/// Contains the main execution engine, the statement and expression
/// dispatchers, and the sticky halt flag.
pub mod core;

/// Scoped variable storage.
///
/// Holds the stack of scopes with their declared symbols and implements
/// declaration, lookup and assignment.
pub mod environment;

/// Statement execution.
///
/// Implements `if`, `while`, `show`, declarations and assignments.
pub mod statement;

/// Binary operator evaluation logic.
///
/// Handles the logical, equality, relational and arithmetic operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements logical NOT.
pub mod unary;

/// Utility functions for evaluation.
///
/// Evaluates the leaf expressions: literals, variable references and
/// groupings.
pub mod utils;
