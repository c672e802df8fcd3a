use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Returns the next token without consuming it.
///
/// The stream built by [`parse_program`] repeats its end-of-input marker
/// forever, so there always is a next token.
///
/// [`parse_program`]: crate::interpreter::parser::core::parse_program
pub(in crate::interpreter::parser) fn peek_token<'a, I>(tokens: &mut Peekable<I>) -> &'a Token
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(&token) => token,
        None => unreachable!("token stream ended without end-of-input"),
    }
}

/// Returns the kind of the token after the next one, if any.
///
/// This is the parser's single extra token of lookahead.
pub(in crate::interpreter::parser) fn peek_second_kind<'a, I>(tokens: &Peekable<I>)
                                                              -> Option<TokenKind>
    where I: Iterator<Item = &'a Token> + Clone
{
    tokens.clone().nth(1).map(|token| token.kind)
}

/// Builds an `UnexpectedToken` error for `found`.
pub(in crate::interpreter::parser) fn unexpected(expected: impl Into<String>,
                                                 found: &Token)
                                                 -> ParseError {
    ParseError::UnexpectedToken { expected: expected.into(),
                                  found:    found.kind,
                                  position: found.position(), }
}

/// Consumes the next token if it has the given kind.
///
/// # Returns
/// `true` if a token was consumed.
pub(in crate::interpreter::parser) fn eat<'a, I>(tokens: &mut Peekable<I>, kind: TokenKind) -> bool
    where I: Iterator<Item = &'a Token>
{
    tokens.next_if(|token| token.kind == kind).is_some()
}

/// Consumes the next token, which must have the given kind.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `kind`: The required token kind.
///
/// # Returns
/// The consumed token.
///
/// # Errors
/// Returns `UnexpectedToken` if the next token has another kind.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: TokenKind)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    let token = peek_token(tokens);
    if token.kind != kind {
        return Err(unexpected(kind.to_string(), token));
    }
    tokens.next();
    Ok(token)
}

/// Parses a plain identifier and returns its token.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<Token>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::Identifier).cloned()
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by parameter lists and call argument lists. It
/// repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list. The
/// closing token is consumed.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token kind that terminates the list.
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse or an unexpected token is
/// encountered.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: TokenKind)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut items = Vec::new();
    if eat(tokens, closing) {
        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);

        if eat(tokens, TokenKind::Comma) {
            continue;
        }
        if eat(tokens, closing) {
            break;
        }

        let token = peek_token(tokens);
        return Err(unexpected(format!("',' or {closing}"), token));
    }
    Ok(items)
}
