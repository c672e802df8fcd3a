/// Lexical errors.
///
/// Raised while tokenizing: unexpected characters, incomplete two-character
/// operators and integer literals with leading zeros.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// tokens, such as unexpected tokens and oversized literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unresolved
/// names, redeclarations, arity mismatches, division by zero and overflow.
pub mod runtime_error;
/// Host-facing diagnostics with caret rendering.
pub mod diagnostic;

use std::fmt;

use thiserror::Error;

pub use diagnostic::Diagnostic;
pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

use crate::interpreter::lexer::Position;

/// The three classes of failure. All are fatal for the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed source characters or literals.
    Lexical,
    /// A token sequence the grammar rejects.
    Syntax,
    /// A violated evaluation rule.
    Semantic,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
                        Self::Lexical => "lexical",
                        Self::Syntax => "syntax",
                        Self::Semantic => "semantic",
                    })
    }
}

/// Any error produced while compiling or running a program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Tokenizing failed.
    #[error("Lexical error at {}: {0}", .0.position())]
    Lex(#[from] LexError),
    /// Parsing failed.
    #[error("Syntax error at {}: {0}", .0.position())]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error("Semantic error at {}: {0}", .0.position())]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Which phase failed.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(_) => ErrorKind::Lexical,
            Self::Parse(_) => ErrorKind::Syntax,
            Self::Runtime(_) => ErrorKind::Semantic,
        }
    }

    /// Where the error occurred.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Lex(e) => e.position(),
            Self::Parse(e) => e.position(),
            Self::Runtime(e) => e.position(),
        }
    }

    /// The error message without kind or position.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Lex(e) => e.to_string(),
            Self::Parse(e) => e.to_string(),
            Self::Runtime(e) => e.to_string(),
        }
    }

    /// Collects kind, message and position into a [`Diagnostic`].
    #[must_use]
    pub fn diagnostic(&self) -> Diagnostic {
        let position = self.position();
        Diagnostic { kind:    self.kind(),
                     message: self.message(),
                     row:     position.row,
                     col:     position.col, }
    }
}
