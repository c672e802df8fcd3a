use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated, parse_identifier, peek_second_kind,
                    peek_token, unexpected},
        },
    },
};

/// Parses an operand, the tightest-binding form of expression.
///
/// Operands are:
/// - a parenthesized expression,
/// - a function call (an identifier directly followed by `(`),
/// - an integer literal,
/// - an identifier.
///
/// Grammar:
/// ```text
///     operand := "(" expression ")"
///              | ID "(" (expression ("," expression)*)? ")"
///              | INT
///              | ID
/// ```
///
/// # Errors
/// Returns `UnexpectedToken` for anything else.
pub(in crate::interpreter::parser) fn parse_operand<'a, I>(tokens: &mut Peekable<I>)
                                                          -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = peek_token(tokens);

    match token.kind {
        TokenKind::LParen => {
            tokens.next();
            let expr = parse_expression(tokens)?;
            expect(tokens, TokenKind::RParen)?;
            Ok(expr)
        },
        TokenKind::Identifier if peek_second_kind(tokens) == Some(TokenKind::LParen) => {
            parse_call(tokens)
        },
        TokenKind::Integer => {
            tokens.next();
            parse_literal(token)
        },
        TokenKind::Identifier => {
            tokens.next();
            Ok(Expr::Identifier(token.clone()))
        },
        _ => Err(unexpected("expression", token)),
    }
}

/// Parses a function call with its argument list.
fn parse_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let name = parse_identifier(tokens)?;
    expect(tokens, TokenKind::LParen)?;
    let arguments = parse_comma_separated(tokens, parse_expression, TokenKind::RParen)?;

    Ok(Expr::Call { name, arguments })
}

/// Converts an integer token into a literal node.
///
/// # Errors
/// Returns `LiteralTooLarge` if the digits do not fit in an `i64`.
fn parse_literal(token: &Token) -> ParseResult<Expr> {
    let value = token.text
                     .parse::<i64>()
                     .map_err(|_| ParseError::LiteralTooLarge { literal:  token.text.clone(),
                                                                position: token.position(), })?;

    Ok(Expr::Literal { token: token.clone(),
                       value })
}
