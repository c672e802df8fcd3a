use std::iter::Peekable;

use crate::{
    ast::Block,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{eat, expect, peek_token, unexpected},
        },
    },
};

/// Parses statements until a token of kind `end`, which is not consumed.
///
/// Stray `;` separators between statements are skipped. Used for the
/// top-level program (`end` is end-of-input) and for braced bodies.
///
/// Grammar: `statements := (";"* statement)* ";"*`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the first statement.
/// - `end`: The kind that terminates the sequence.
///
/// # Returns
/// A block containing all parsed statements.
///
/// # Errors
/// Fails on the first statement that does not parse, or if input ends before
/// `end` is found.
pub(in crate::interpreter::parser) fn parse_statements<'a, I>(tokens: &mut Peekable<I>,
                                                              end: TokenKind)
                                                             -> ParseResult<Block>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut statements = Vec::new();

    loop {
        while eat(tokens, TokenKind::Semicolon) {}

        let token = peek_token(tokens);
        if token.kind == end {
            break;
        }
        if token.kind == TokenKind::Eof {
            return Err(unexpected(end.to_string(), token));
        }

        statements.push(parse_statement(tokens)?);
    }

    Ok(Block::new(statements))
}

/// Parses a block delimited by braces.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
///
/// # Returns
/// The block's statements.
pub(in crate::interpreter::parser) fn parse_block<'a, I>(tokens: &mut Peekable<I>)
                                                        -> ParseResult<Block>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::LBrace)?;
    let block = parse_statements(tokens, TokenKind::RBrace)?;
    expect(tokens, TokenKind::RBrace)?;
    Ok(block)
}
