use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{descend, expect, peek, unexpected},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operator `!` (logical not). Unary operators are
/// right-associative, so `!!x` is parsed as `!(!x)`. There is no unary minus.
///
/// If no unary operator is present, the function delegates to
/// [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := "!" unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Nesting depth of the enclosing construct. Each `!` adds one.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    if let Some(bang) = tokens.next_if(|t| t.is(TokenKind::Bang)) {
        let expr = parse_unary(tokens, descend(depth, bang)?)?;
        Ok(Expr::UnaryOp { op:   UnaryOperator::Not,
                           expr: Box::new(expr),
                           line: bang.line, })
    } else {
        parse_primary(tokens, depth)
    }
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | BOOLEAN
///              | ID
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: Nesting depth of the enclosing construct.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let token = peek(tokens);

    match token.kind {
        TokenKind::Number | TokenKind::Boolean => {
            tokens.next();
            Ok(Expr::Literal { text: token.lexeme.clone(),
                               line: token.line, })
        },
        TokenKind::Identifier => {
            tokens.next();
            Ok(Expr::Variable { name: token.lexeme.clone(),
                                line: token.line, })
        },
        TokenKind::LParen => parse_grouping(tokens, depth),
        _ => Err(unexpected(token, "an expression")),
    }
}

/// Parses a parenthesized expression.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Errors
/// Returns a `ParseError` if the inner expression is malformed, the closing
/// `)` is missing, or the parentheses nest too deeply.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let open = expect(tokens, TokenKind::LParen, "'('")?;
    let expr = parse_expression(tokens, descend(depth, open)?)?;
    expect(tokens, TokenKind::RParen, "')'")?;

    Ok(Expr::Grouping { expr: Box::new(expr),
                        line: open.line, })
}
