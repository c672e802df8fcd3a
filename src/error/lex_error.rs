use thiserror::Error;

use crate::interpreter::lexer::Position;

/// Represents all errors that can occur while tokenizing source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Found a character that does not start any token.
    #[error("Unexpected character '{found}'.")]
    UnexpectedCharacter {
        /// The offending character.
        found:    char,
        /// Where it was found.
        position: Position,
    },
    /// A `!`, `&` or `|` was not followed by the character completing its
    /// operator.
    #[error("Expected operator '{expected}'.")]
    IncompleteOperator {
        /// The two-character operator that was started.
        expected: &'static str,
        /// Where the operator starts.
        position: Position,
    },
    /// An integer literal longer than one digit started with `0`.
    #[error("Leading zeros are not allowed: '{literal}'.")]
    LeadingZeros {
        /// The rejected literal.
        literal:  String,
        /// Where the literal starts.
        position: Position,
    },
}

impl LexError {
    /// Where the error occurred.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::IncompleteOperator { position, .. }
            | Self::LeadingZeros { position, .. } => *position,
        }
    }
}
