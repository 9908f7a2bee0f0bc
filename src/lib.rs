//! # camlang
//!
//! camlang is an interpreter for CAM, a small imperative teaching language.
//! Source text is scanned into tokens, parsed into a syntax tree and executed
//! directly by a tree-walking evaluator.
//!
//! ```text
//! let n be num;
//! n = 3;
//! while n > 0 do
//!     show n;
//!     n = n - 1;
//! endwhile
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{
    ast::Statement,
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        evaluator::core::Interpreter,
        lexer::TokenStream,
        parser::core::parse_program,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums that represent the
/// syntactic structure of a program as a tree. The AST is built by the parser
/// and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches line numbers to nodes for error reporting.
/// - Renders nodes in the bracketed tree form used by `--tree`.
pub mod ast;
/// Provides error types for lexing, parsing and evaluation.
///
/// Every failure carries the source location where it was detected and a
/// user-facing message.
///
/// # Responsibilities
/// - Defines one error type per phase.
/// - Provides the umbrella `Error` returned by [`run`].
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Provides entry points for each phase.
pub mod interpreter;

pub use interpreter::lexer::tokenize;

/// Parses a token stream into the program's top-level statements.
///
/// # Errors
/// Returns the first `ParseError` encountered.
pub fn parse(tokens: &TokenStream) -> Result<Vec<Statement>, ParseError> {
    parse_program(tokens)
}

/// Executes a parsed program, writing `show` output to `out`.
///
/// # Errors
/// Returns the first `RuntimeError`; statements after it are not executed.
pub fn interpret(program: &[Statement], out: &mut dyn Write) -> Result<(), RuntimeError> {
    Interpreter::new(out).run(program)
}

/// Writes every token of `tokens` on its own line as `{lexeme - KIND}`.
///
/// # Errors
/// Returns the first write failure; nothing more is written after it.
pub fn write_tokens(tokens: &TokenStream, out: &mut dyn Write) -> std::io::Result<()> {
    tokens.iter().try_for_each(|token| writeln!(out, "{token}"))
}

/// Writes every top-level statement of `program` on its own line in the
/// bracketed tree form.
///
/// # Errors
/// Returns the first write failure; nothing more is written after it.
///
/// # Examples
/// ```
/// use camlang::{parse, tokenize, write_tree};
///
/// let program = parse(&tokenize("let x be num; x = 5;").unwrap()).unwrap();
/// let mut out = Vec::new();
/// write_tree(&program, &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(),
///            "(VARDEC {x NUM})\n(VARASSIGN {x <= (LITERAL {5})})\n");
/// ```
pub fn write_tree(program: &[Statement], out: &mut dyn Write) -> std::io::Result<()> {
    program.iter()
           .try_for_each(|statement| writeln!(out, "{statement}"))
}

/// Lexes, parses and executes `source`, writing `show` output to `out`.
///
/// Each phase runs to completion before the next starts, and the first error
/// of any phase ends the run. Output written before a runtime error is kept.
///
/// # Errors
/// Returns the first lexical, syntax or runtime error.
///
/// # Examples
/// ```
/// use camlang::run;
///
/// let mut out = Vec::new();
/// run("let x be num; x = 5; show x;", &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "5.000000\n");
///
/// // Assigning a boolean to a number variable stops the program.
/// let mut out = Vec::new();
/// let res = run("let x be num; x = true; show 1;", &mut out);
/// assert!(res.is_err());
/// assert!(out.is_empty());
/// ```
pub fn run(source: &str, out: &mut dyn Write) -> Result<(), Error> {
    let tokens = tokenize(source)?;
    let program = parse(&tokens)?;
    interpret(&program, out)?;
    Ok(())
}
