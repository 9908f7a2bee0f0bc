use std::iter::Peekable;

use crate::{
    ast::{DeclaredType, Statement},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::{parse_if, parse_while},
            core::{ParseResult, parse_expression},
            utils::{expect, peek, unexpected},
        },
    },
};

/// Parses a single statement.
///
/// The leading token decides the form:
/// - `let` starts a variable declaration.
/// - an identifier starts an assignment.
/// - `if` and `while` start a block statement.
/// - `show` starts a show statement.
///
/// Any other token is a syntax error.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of a statement.
/// - `depth`: Number of blocks enclosing the statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub(crate) fn parse_statement<'a, I>(tokens: &mut Peekable<I>,
                                     depth: usize)
                                     -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let token = peek(tokens);
    log::trace!("parsing statement at {}:{}", token.line, token.column);

    match token.kind {
        TokenKind::Let => parse_variable_declaration(tokens),
        TokenKind::Identifier => parse_assignment(tokens, depth),
        TokenKind::If => parse_if(tokens, depth),
        TokenKind::While => parse_while(tokens, depth),
        TokenKind::Show => parse_show(tokens, depth),
        _ => Err(unexpected(token, "a statement")),
    }
}

/// Parses a variable declaration statement.
///
/// A declaration has the form `let <identifier> be <type>;` where `<type>` is
/// `num` or `bool`.
///
/// # Errors
/// Returns a `ParseError` if any of the required tokens is missing.
fn parse_variable_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let keyword = expect(tokens, TokenKind::Let, "'let'")?;
    let name = expect(tokens, TokenKind::Identifier, "an identifier")?;
    expect(tokens, TokenKind::Be, "'be'")?;

    let type_token = expect(tokens, TokenKind::TypeName, "a type name ('num' or 'bool')")?;
    let declared_type = DeclaredType::from_name(&type_token.lexeme)
        .ok_or_else(|| unexpected(type_token, "a type name ('num' or 'bool')"))?;

    expect(tokens, TokenKind::Semicolon, "';'")?;

    Ok(Statement::VariableDeclaration { name: name.lexeme.clone(),
                                        declared_type,
                                        line: keyword.line })
}

/// Parses an assignment statement of the form `<identifier> = <expression>;`.
///
/// The identifier must be the current token when this function is entered.
///
/// # Errors
/// Returns a `ParseError` if `=` or `;` is missing, or the expression is
/// malformed.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let name = expect(tokens, TokenKind::Identifier, "an identifier")?;
    expect(tokens, TokenKind::Equals, "'='")?;
    let value = parse_expression(tokens, depth)?;
    expect(tokens, TokenKind::Semicolon, "';'")?;

    Ok(Statement::Assignment { name: name.lexeme.clone(),
                               value,
                               line: name.line })
}

/// Parses a show statement of the form `show <expression>;`.
///
/// # Errors
/// Returns a `ParseError` if the expression is malformed or `;` is missing.
fn parse_show<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    let keyword = expect(tokens, TokenKind::Show, "'show'")?;
    let expr = parse_expression(tokens, depth)?;
    expect(tokens, TokenKind::Semicolon, "';'")?;

    Ok(Statement::Show { expr,
                         line: keyword.line })
}
