use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind, TokenStream},
        parser::{binary::parse_logical, statement::parse_statement, utils::peek},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest nesting the parser accepts.
///
/// Each block, parenthesis, `!` and chained binary operator counts as one
/// level. Syntax trees and the evaluator recurse once per level, so the bound
/// keeps deeply nested input from exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parses a whole program.
///
/// Statements are parsed in order until the end-of-input token is reached.
/// Parsing stops at the first error; no statement after it is attempted.
///
/// Grammar: `program := statement*`
///
/// # Parameters
/// - `stream`: Tokens produced by the lexer.
///
/// # Returns
/// The top-level statements in source order.
///
/// # Example
/// ```
/// use camlang::{
///     ast::Statement,
///     interpreter::{lexer::tokenize, parser::core::parse_program},
/// };
///
/// let tokens = tokenize("let x be num; x = 1 + 2;").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.len(), 2);
/// assert!(matches!(program[1], Statement::Assignment { .. }));
///
/// let tokens = tokenize("show 1").unwrap();
/// assert!(parse_program(&tokens).is_err());
/// ```
pub fn parse_program(stream: &TokenStream) -> ParseResult<Vec<Statement>> {
    let mut tokens = stream.iter().peekable();
    let mut statements = Vec::new();

    while !peek(&mut tokens).is(TokenKind::EndOfInput) {
        statements.push(parse_statement(&mut tokens, 0)?);
    }

    log::debug!("parsed {} top-level statements", statements.len());
    Ok(statements)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, the logical operators, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := logical`
///
/// # Parameters
/// - `tokens`: Token iterator with one token of lookahead.
/// - `depth`: Nesting depth of the enclosing construct.
///
/// # Returns
/// The parsed expression node.
pub(crate) fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                                      depth: usize)
                                      -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_logical(tokens, depth)
}
