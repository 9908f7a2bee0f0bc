use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            statement::parse_statement,
            utils::{descend, expect, peek},
        },
    },
};

/// Largest number of statements a single `if` or `while` body may hold.
///
/// A block that has not met its closing keyword after this many statements is
/// reported as unterminated.
pub const MAX_BLOCK_STATEMENTS: usize = 1024;

/// Parses an `if` statement.
///
/// Syntax:
/// ```text
///     if <condition> then <statement>+ endif
/// ```
///
/// # Errors
/// - `UnexpectedToken` if `then` is missing or the body is empty.
/// - `UnterminatedBlock` if `endif` never arrives.
/// - Propagates any errors from the condition or body statements.
pub(crate) fn parse_if<'a, I>(tokens: &mut Peekable<I>,
                              depth: usize)
                              -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let keyword = expect(tokens, TokenKind::If, "'if'")?;
    let condition = parse_expression(tokens, depth)?;
    expect(tokens, TokenKind::Then, "'then' after if condition")?;
    let body = parse_block_body(tokens, depth, keyword, TokenKind::EndIf)?;

    Ok(Statement::If { condition,
                       body,
                       line: keyword.line })
}

/// Parses a `while` statement.
///
/// Syntax:
/// ```text
///     while <condition> do <statement>+ endwhile
/// ```
///
/// # Errors
/// - `UnexpectedToken` if `do` is missing or the body is empty.
/// - `UnterminatedBlock` if `endwhile` never arrives.
/// - Propagates any errors from the condition or body statements.
pub(crate) fn parse_while<'a, I>(tokens: &mut Peekable<I>,
                                 depth: usize)
                                 -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let keyword = expect(tokens, TokenKind::While, "'while'")?;
    let condition = parse_expression(tokens, depth)?;
    expect(tokens, TokenKind::Do, "'do' after while condition")?;
    let body = parse_block_body(tokens, depth, keyword, TokenKind::EndWhile)?;

    Ok(Statement::While { condition,
                          body,
                          line: keyword.line })
}

/// Parses the statements of a block up to and including its closing keyword.
///
/// At least one statement is required. The loop is bounded by
/// [`MAX_BLOCK_STATEMENTS`], and reaching the end of input before the closer
/// is reported against the opening keyword.
///
/// # Parameters
/// - `tokens`: Token stream positioned after `then` or `do`.
/// - `depth`: Number of blocks enclosing this one.
/// - `opener`: The `if` or `while` token, used for diagnostics.
/// - `closer`: `EndIf` or `EndWhile`.
fn parse_block_body<'a, I>(tokens: &mut Peekable<I>,
                           depth: usize,
                           opener: &Token,
                           closer: TokenKind)
                           -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a Token>
{
    let (opener_name, closer_name) = match closer {
        TokenKind::EndIf => ("if", "endif"),
        _ => ("while", "endwhile"),
    };
    let unterminated = || ParseError::UnterminatedBlock { opener: opener_name,
                                                          closer: closer_name,
                                                          limit:  MAX_BLOCK_STATEMENTS,
                                                          line:   opener.line,
                                                          column: opener.column, };

    let depth = descend(depth, opener)?;
    let mut body = Vec::new();
    loop {
        let next = peek(tokens);

        if next.is(closer) && !body.is_empty() {
            tokens.next();
            return Ok(body);
        }
        if next.is(TokenKind::EndOfInput) || body.len() == MAX_BLOCK_STATEMENTS {
            return Err(unterminated());
        }

        body.push(parse_statement(tokens, depth)?);
    }
}
