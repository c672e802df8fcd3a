use std::iter::{self, Peekable};

use tracing::debug;

use crate::{
    ast::{Block, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{binary::parse_logical_or, block::parse_statements},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program.
///
/// Comment tokens are filtered out here, so the raw lexer output can be
/// passed in directly. The returned block holds every top-level statement.
/// A missing end-of-input marker is supplied if the slice lacks one, and
/// the marker is repeated so the parser never runs out of tokens.
///
/// Grammar: `program := statement* EOF`
///
/// # Parameters
/// - `tokens`: Tokens as produced by the lexer.
///
/// # Returns
/// The root [`Block`] of the program.
///
/// # Example
/// ```
/// use fimp::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens = tokenize("// comment\nvar a = 1\nprintln(a)").unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.statements.len(), 2);
/// ```
pub fn parse_program(tokens: &[Token]) -> ParseResult<Block> {
    let eof = match tokens.last() {
        Some(last) if last.kind == TokenKind::Eof => last.clone(),
        Some(last) => Token::new(TokenKind::Eof, "", last.position()),
        None => Token::of(TokenKind::Eof, ""),
    };

    let mut stream = tokens.iter()
                           .filter(|token| !matches!(token.kind, TokenKind::Comment | TokenKind::Eof))
                           .chain(iter::repeat(&eof))
                           .peekable();

    let program = parse_statements(&mut stream, TokenKind::Eof)?;
    debug!(statements = program.statements.len(), "parsed program");
    Ok(program)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := logical_or`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// The parsed expression node.
pub(in crate::interpreter::parser) fn parse_expression<'a, I>(tokens: &mut Peekable<I>)
                                                             -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_logical_or(tokens)
}
