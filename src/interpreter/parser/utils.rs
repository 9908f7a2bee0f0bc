use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{MAX_NESTING_DEPTH, ParseResult},
    },
};

/// Builds the error for a token that does not fit the grammar.
///
/// # Parameters
/// - `token`: The token that was found instead.
/// - `expected`: A description of what the grammar required.
#[must_use]
pub fn unexpected(token: &Token, expected: &str) -> ParseError {
    ParseError::UnexpectedToken { expected: expected.to_string(),
                                  found:    token.lexeme.clone(),
                                  line:     token.line,
                                  column:   token.column, }
}

/// Returns the next token without consuming it.
///
/// The parser never consumes the end-of-input token that closes every
/// [`TokenStream`](crate::interpreter::lexer::TokenStream), so a token is
/// always available.
///
/// # Panics
/// Panics if the stream is exhausted, which indicates an internal error.
pub(in crate::interpreter::parser) fn peek<'a, I>(tokens: &mut Peekable<I>) -> &'a Token
    where I: Iterator<Item = &'a Token>
{
    tokens.peek()
          .copied()
          .expect("token stream ends with an unconsumed end-of-input token")
}

/// Enters one more level of nesting at `token`.
///
/// # Returns
/// The depth inside the new level.
///
/// # Errors
/// Returns `NestingTooDeep` if `depth` is already at [`MAX_NESTING_DEPTH`].
pub(in crate::interpreter::parser) fn descend(depth: usize, token: &Token) -> ParseResult<usize> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { limit:  MAX_NESTING_DEPTH,
                                                line:   token.line,
                                                column: token.column, });
    }
    Ok(depth + 1)
}

/// Consumes the next token if it is of the given kind.
///
/// Never consumes the end-of-input token unless it is explicitly asked for.
///
/// # Returns
/// `Some(token)` if it matched and was consumed, otherwise `None`.
pub(in crate::interpreter::parser) fn match_kind<'a, I>(tokens: &mut Peekable<I>,
                                                        kind: TokenKind)
                                                        -> Option<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.next_if(|token| token.is(kind))
}

/// Consumes the next token, requiring it to be of the given kind.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `kind`: The required token kind.
/// - `expected`: Description used in the error message, e.g. `"';'"`.
///
/// # Errors
/// Returns `UnexpectedToken` naming `expected` and the lexeme found.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: TokenKind,
                                                    expected: &str)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    if let Some(token) = match_kind(tokens, kind) {
        return Ok(token);
    }
    Err(unexpected(peek(tokens), expected))
}
