use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{FunctionDef, Statement},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{eat, expect, parse_comma_separated, parse_identifier, peek_second_kind,
                    peek_token},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a function declaration (`fun`),
/// - a variable binding (`var`),
/// - a `while` loop,
/// - an `if` statement,
/// - a `return`,
/// - an assignment (an identifier followed by `=`),
/// - an expression used as a statement.
///
/// The leading keyword selects the construct. An identifier needs one extra
/// token of lookahead to tell `x = ...` from an expression starting with `x`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub(in crate::interpreter::parser) fn parse_statement<'a, I>(tokens: &mut Peekable<I>)
                                                            -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    match peek_token(tokens).kind {
        TokenKind::Fun => parse_function(tokens),
        TokenKind::Var => parse_binding(tokens),
        TokenKind::While => parse_while(tokens),
        TokenKind::If => parse_if(tokens),
        TokenKind::Return => parse_return(tokens),
        TokenKind::Identifier if peek_second_kind(tokens) == Some(TokenKind::Assign) => {
            parse_assignment(tokens)
        },
        _ => Ok(Statement::Expression(parse_expression(tokens)?)),
    }
}

/// Parses a function declaration.
///
/// Grammar: `function := "fun" ID "(" (ID ("," ID)*)? ")" block`
///
/// # Errors
/// Returns a `ParseError` if the name, the parameter list or the body is
/// malformed.
fn parse_function<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::Fun)?;
    let name = parse_identifier(tokens)?;

    expect(tokens, TokenKind::LParen)?;
    let params = parse_comma_separated(tokens, parse_identifier, TokenKind::RParen)?;

    let body = parse_block(tokens)?;

    Ok(Statement::Function(Rc::new(FunctionDef { name, params, body })))
}

/// Parses a variable binding, with an optional initializer.
///
/// Grammar: `binding := "var" ID ("=" expression)?`
fn parse_binding<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::Var)?;
    let name = parse_identifier(tokens)?;

    let value = if eat(tokens, TokenKind::Assign) {
        Some(parse_expression(tokens)?)
    } else {
        None
    };

    Ok(Statement::Binding { name, value })
}

/// Parses an assignment to an existing name.
///
/// Grammar: `assignment := ID "=" expression`
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let name = parse_identifier(tokens)?;
    expect(tokens, TokenKind::Assign)?;
    let value = parse_expression(tokens)?;

    Ok(Statement::Assignment { name, value })
}

/// Parses a `while` loop.
///
/// Grammar: `while := "while" "(" expression ")" block`
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::While)?;

    expect(tokens, TokenKind::LParen)?;
    let condition = parse_expression(tokens)?;
    expect(tokens, TokenKind::RParen)?;

    let body = parse_block(tokens)?;

    Ok(Statement::While { condition, body })
}

/// Parses an `if` statement with an optional `else` block.
///
/// Grammar: `if := "if" "(" expression ")" block ("else" block)?`
///
/// There is no `else if`; nest an `if` inside the `else` block instead.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::If)?;

    expect(tokens, TokenKind::LParen)?;
    let condition = parse_expression(tokens)?;
    expect(tokens, TokenKind::RParen)?;

    let then_branch = parse_block(tokens)?;
    let else_branch = if eat(tokens, TokenKind::Else) {
        Some(parse_block(tokens)?)
    } else {
        None
    };

    Ok(Statement::If { condition,
                       then_branch,
                       else_branch })
}

/// Parses a `return` statement.
///
/// Grammar: `return := "return" expression`
fn parse_return<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::Return)?;
    Ok(Statement::Return(parse_expression(tokens)?))
}
