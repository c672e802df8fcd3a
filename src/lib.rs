//! # fimp
//!
//! fimp is a small imperative scripting language written in Rust. It tokenizes,
//! parses, pretty-prints and evaluates programs built from integer variables,
//! `while` and `if`, nested functions that close over their defining scope,
//! and a single `println` built-in.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    ast::Block,
    error::Error,
    interpreter::{
        evaluator::{core::Context, output::OutputSink},
        lexer::Token,
        parser::core::parse_program,
        printer::print_program,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression types that represent the
/// syntactic structure of a program as a tree, together with the [`Visitor`]
/// trait through which the evaluator and the printer consume it.
///
/// # Responsibilities
/// - Defines a closed set of node types for all language constructs.
/// - Keeps name and operator tokens on the nodes for error positions.
/// - Dispatches each node to the matching visitor method.
///
/// [`Visitor`]: ast::Visitor
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Every failure is fatal: the first error stops the run. Each error carries
/// the position of the offending source and can be turned into a
/// [`Diagnostic`](error::Diagnostic) with a caret rendering.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Classifies failures as lexical, syntax or semantic errors.
/// - Renders host-facing diagnostics.
pub mod error;
/// Orchestrates the process of code execution.
///
/// This module ties together lexing, parsing, printing and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, printer and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Tokenizes source text.
///
/// The result ends with one end-of-input token and keeps comment tokens.
///
/// # Example
/// ```
/// use fimp::interpreter::lexer::{Token, TokenKind};
///
/// let tokens = fimp::tokenize("var a = 10 // ten").unwrap();
///
/// assert_eq!(tokens,
///            [Token::of(TokenKind::Var, ""),
///             Token::of(TokenKind::Identifier, "a"),
///             Token::of(TokenKind::Assign, ""),
///             Token::of(TokenKind::Integer, "10"),
///             Token::of(TokenKind::Comment, ""),
///             Token::of(TokenKind::Eof, "")]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    Ok(interpreter::lexer::tokenize(source)?)
}

/// Tokenizes and parses source text into the program's root block.
///
/// # Example
/// ```
/// use fimp::error::ErrorKind;
///
/// assert_eq!(fimp::parse("fun f(a, b) { return a * b }").unwrap().statements.len(),
///            1);
/// assert_eq!(fimp::parse("var a = 1 + 2 + 3").unwrap_err().kind(),
///            ErrorKind::Syntax);
/// ```
pub fn parse(source: &str) -> Result<Block, Error> {
    let tokens = tokenize(source)?;
    Ok(parse_program(&tokens)?)
}

/// Parses source text and prints it back in canonical form.
///
/// Comments and `;` separators are dropped, statements are placed on their
/// own lines and nested blocks are indented by four spaces.
///
/// # Example
/// ```
/// let source = "var a=10; var b=20; if(a>b){println(1)}else{println(0)}";
///
/// assert_eq!(fimp::format_source(source).unwrap(),
///            "var a = 10\n\
///             var b = 20\n\
///             if (a > b) {\n    println(1)\n} else {\n    println(0)\n}");
/// ```
pub fn format_source(source: &str) -> Result<String, Error> {
    Ok(print_program(&parse(source)?))
}

/// Parses and runs a program, sending `println` output to `output`.
///
/// Output produced before a runtime error has already reached the sink.
///
/// # Errors
/// Returns the first lexical, syntax or semantic error.
///
/// # Example
/// ```
/// use fimp::interpreter::evaluator::output::StdoutSink;
///
/// assert!(fimp::run("println(6 * 7)", &mut StdoutSink).is_ok());
/// assert!(fimp::run("x = 1", &mut StdoutSink).is_err());
/// ```
pub fn run(source: &str, output: &mut dyn OutputSink) -> Result<(), Error> {
    let program = parse(source)?;
    debug!(statements = program.statements.len(), "running program");
    Context::new(output).execute(&program)?;
    Ok(())
}

/// Runs a program and returns every line it printed.
///
/// # Errors
/// Returns the first error; no partial output is returned.
///
/// # Examples
/// ```
/// use fimp::get_output;
///
/// let source = "
///     fun foo(n) {
///         fun bar(m) {
///             return m + n
///         }
///         return bar(1)
///     }
///     println(foo(41))
/// ";
/// assert_eq!(get_output(source).unwrap(), ["42"]);
///
/// // Division by zero is a runtime error.
/// assert!(get_output("println(0 / 0)").is_err());
/// ```
pub fn get_output(source: &str) -> Result<Vec<String>, Error> {
    let mut lines: Vec<String> = Vec::new();
    run(source, &mut lines)?;
    Ok(lines)
}
