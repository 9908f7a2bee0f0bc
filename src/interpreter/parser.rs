/// Core parsing logic and entry points.
///
/// Contains the result type, the program loop and the expression entry point.
pub mod core;

/// Unary and primary expressions.
///
/// Parses `!`, literals, variable references and parenthesized expressions.
pub mod unary;

/// Binary expressions.
///
/// Parses the left-associative operator levels, from logical operators down to
/// multiplication and division.
pub mod binary;

/// Block statements.
///
/// Parses `if ... then ... endif` and `while ... do ... endwhile`, bounding the
/// number of statements a block may hold.
pub mod block;

/// Utility functions for the parser.
///
/// Provides token expectation helpers shared by the grammar productions.
pub mod utils;

/// Statement parsing.
///
/// Dispatches on the leading token to declarations, assignments, `show` and
/// the block statements.
pub mod statement;
