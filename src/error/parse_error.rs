use thiserror::Error;

use crate::interpreter::lexer::{Position, TokenKind};

/// Represents all errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token the grammar does not allow here.
    #[error("Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// Description of what the grammar allows.
        expected: String,
        /// The kind of token actually found.
        found:    TokenKind,
        /// Where the token starts.
        position: Position,
    },
    /// An integer literal does not fit in a signed 64-bit value.
    #[error("Integer literal '{literal}' is too large.")]
    LiteralTooLarge {
        /// The literal's digits.
        literal:  String,
        /// Where the literal starts.
        position: Position,
    },
}

impl ParseError {
    /// Where the error occurred.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::LiteralTooLarge { position, .. } => *position,
        }
    }
}
