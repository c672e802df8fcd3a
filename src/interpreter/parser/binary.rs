use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, operand::parse_operand},
    },
};

/// Maps a token kind to its corresponding binary operator.
///
/// # Returns
/// `Some(BinaryOperator)` if the kind is a binary operator, otherwise `None`.
///
/// # Example
/// ```
/// use fimp::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Percent),
///            Some(BinaryOperator::Mod));
/// assert_eq!(token_to_binary_operator(TokenKind::Assign), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Percent => Some(BinaryOperator::Mod),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        TokenKind::AndAnd => Some(BinaryOperator::And),
        TokenKind::OrOr => Some(BinaryOperator::Or),
        _ => None,
    }
}

/// Parses one precedence level.
///
/// Parses an operand, then at most one operator of this level followed by a
/// second operand. A further operator of the same level is left in the
/// stream, so `a + b + c` is not accepted as one expression.
///
/// Grammar: `level := operand (op operand)?`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `operand`: Parser for the next tighter level.
/// - `operators`: Operators belonging to this level.
///
/// # Returns
/// The operand alone, or an [`Expr::Binary`] joining two operands.
fn parse_level<'a, I>(tokens: &mut Peekable<I>,
                      operand: impl Fn(&mut Peekable<I>) -> ParseResult<Expr>,
                      operators: &[BinaryOperator])
                      -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let left = operand(tokens)?;

    if let Some(token) = tokens.peek().copied()
       && let Some(op) = token_to_binary_operator(token.kind)
       && operators.contains(&op)
    {
        tokens.next();
        let right = operand(tokens)?;

        return Ok(Expr::Binary { op,
                                 token: token.clone(),
                                 left: Box::new(left),
                                 right: Box::new(right) });
    }

    Ok(left)
}

/// Parses logical OR expressions.
///
/// Grammar: `logical_or := logical_and ("||" logical_and)?`
pub(in crate::interpreter::parser) fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>)
                                                             -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_level(tokens, parse_logical_and, &[BinaryOperator::Or])
}

/// Parses logical AND expressions.
///
/// Grammar: `logical_and := equality ("&&" equality)?`
pub(in crate::interpreter::parser) fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_level(tokens, parse_equality, &[BinaryOperator::And])
}

/// Parses equality tests.
///
/// Grammar: `equality := compare (("==" | "!=") compare)?`
pub(in crate::interpreter::parser) fn parse_equality<'a, I>(tokens: &mut Peekable<I>)
                                                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_level(tokens,
                parse_compare,
                &[BinaryOperator::Equal, BinaryOperator::NotEqual])
}

/// Parses relational comparisons.
///
/// Grammar: `compare := additive (("<" | "<=" | ">" | ">=") additive)?`
pub(in crate::interpreter::parser) fn parse_compare<'a, I>(tokens: &mut Peekable<I>)
                                                          -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_level(tokens,
                parse_additive,
                &[BinaryOperator::Less,
                  BinaryOperator::LessEqual,
                  BinaryOperator::Greater,
                  BinaryOperator::GreaterEqual])
}

/// Parses addition and subtraction.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)?`
pub(in crate::interpreter::parser) fn parse_additive<'a, I>(tokens: &mut Peekable<I>)
                                                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_level(tokens,
                parse_multiplicative,
                &[BinaryOperator::Add, BinaryOperator::Sub])
}

/// Parses multiplication, division and remainder.
///
/// Grammar: `multiplicative := operand (("*" | "%" | "/") operand)?`
pub(in crate::interpreter::parser) fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>)
                                                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_level(tokens,
                parse_operand,
                &[BinaryOperator::Mul, BinaryOperator::Mod, BinaryOperator::Div])
}
