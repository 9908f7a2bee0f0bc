use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary, utils::descend},
    },
};

/// Parses one left-associative binary level.
///
/// Repeatedly consumes an operator accepted by `accepts` followed by an
/// operand from `next_level`, folding the results to the left so that
/// `a - b - c` becomes `(a - b) - c`. Every fold deepens the tree by one, so
/// each operator counts as a nesting level.
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: Nesting depth of the enclosing construct.
/// - `next_level`: Parser for the next higher precedence level.
/// - `accepts`: Which operators belong to this level.
fn parse_left_assoc<'a, I>(tokens: &mut Peekable<I>,
                           depth: usize,
                           next_level: fn(&mut Peekable<I>, usize) -> ParseResult<Expr>,
                           accepts: fn(BinaryOperator) -> bool)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = next_level(tokens, depth)?;
    let mut depth = depth;
    while let Some(&token) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token.kind)
          && accepts(op)
    {
        depth = descend(depth, token)?;
        tokens.next();
        let right = next_level(tokens, depth)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line: token.line };
    }
    Ok(left)
}

/// Parses logical expressions.
///
/// Handles `&` and `|`, which share the lowest precedence level.
///
/// The rule is: `logical := equality (("&" | "|") equality)*`
pub(crate) fn parse_logical<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_assoc(tokens, depth, parse_equality, |op| {
        matches!(op, BinaryOperator::And | BinaryOperator::Or)
    })
}

/// Parses equality expressions.
///
/// The rule is: `equality := relational (("==" | "!=") relational)*`
pub(crate) fn parse_equality<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_assoc(tokens, depth, parse_relational, |op| {
        matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
    })
}

/// Parses relational expressions.
///
/// The rule is: `relational := additive (("<" | "<=" | ">" | ">=") additive)*`
pub(crate) fn parse_relational<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_assoc(tokens, depth, parse_additive, |op| {
        matches!(op,
                 BinaryOperator::Less
                 | BinaryOperator::LessEqual
                 | BinaryOperator::Greater
                 | BinaryOperator::GreaterEqual)
    })
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub(crate) fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_assoc(tokens, depth, parse_multiplicative, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    })
}

/// Parses multiplication and division expressions.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
pub(crate) fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                          depth: usize)
                                          -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_assoc(tokens, depth, parse_unary, |op| {
        matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    })
}

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for all tokens that are not binary operators.
///
/// # Example
/// ```
/// use camlang::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Ampersand), Some(BinaryOperator::And));
/// assert_eq!(token_to_binary_operator(TokenKind::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Pipe => Some(BinaryOperator::Or),
        TokenKind::Ampersand => Some(BinaryOperator::And),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
