/// Parser entry points and shared result type.
///
/// Contains the program-level entry point that filters comments and the
/// expression entry point that starts the precedence descent.
pub mod core;

/// Binary operator precedence levels.
///
/// One function per level, from `||` down to the multiplicative operators.
/// Each level combines at most two operands.
pub mod binary;

/// Operand parsing.
///
/// Parenthesized expressions, function calls, integer literals and
/// identifiers.
pub mod operand;

/// Block parsing.
///
/// Parses statement sequences, both braced bodies and the top-level program.
pub mod block;

/// Statement parsing.
///
/// Dispatches on the leading keyword, with one extra token of lookahead to
/// tell assignments from expression statements.
pub mod statement;

/// Utility functions for the parser.
///
/// Token lookahead, expectation checks and comma-separated lists.
pub mod utils;
