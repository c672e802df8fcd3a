use thiserror::Error;

use crate::interpreter::lexer::Position;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// Tried to read or assign a variable that is not bound in any enclosing
    /// scope.
    #[error("Unknown variable '{name}'.")]
    UnknownVariable {
        /// The name of the variable.
        name:     String,
        /// Where the name was used.
        position: Position,
    },
    /// Called a function that is not declared in any enclosing scope.
    #[error("Unknown function '{name}'.")]
    UnknownFunction {
        /// The name of the function.
        name:     String,
        /// Where the call is.
        position: Position,
    },
    /// Read a variable declared without an initializer before assigning it.
    #[error("Variable '{name}' is used before it is initialized.")]
    UninitializedVariable {
        /// The name of the variable.
        name:     String,
        /// Where the name was read.
        position: Position,
    },
    /// Declared a variable twice in the same scope.
    #[error("Variable '{name}' is already defined in this block.")]
    VariableAlreadyDefined {
        /// The name of the variable.
        name:     String,
        /// Where the second declaration is.
        position: Position,
    },
    /// Declared a function twice in the same scope.
    #[error("Function '{name}' is already defined in this block.")]
    FunctionAlreadyDefined {
        /// The name of the function.
        name:     String,
        /// Where the second declaration is.
        position: Position,
    },
    /// Attempted to declare a function with a built-in's name.
    #[error("Cannot redefine built-in function '{name}'.")]
    BuiltinFunctionRedefinition {
        /// The name of the function.
        name:     String,
        /// Where the declaration is.
        position: Position,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Function '{name}' expects {expected} argument(s), but {found} were supplied.")]
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        found:    usize,
        /// Where the call is.
        position: Position,
    },
    /// An expression that produces no value was used where one is needed.
    #[error("Value missing.")]
    MissingValue {
        /// Where the valueless expression is.
        position: Position,
    },
    /// Attempted division or remainder by zero.
    #[error("Division by zero.")]
    DivisionByZero {
        /// Position of the operator.
        position: Position,
    },
    /// Arithmetic operation overflowed.
    #[error("Integer overflow while trying to compute result.")]
    Overflow {
        /// Position of the operator.
        position: Position,
    },
}

impl RuntimeError {
    /// Where the error occurred.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnknownVariable { position, .. }
            | Self::UnknownFunction { position, .. }
            | Self::UninitializedVariable { position, .. }
            | Self::VariableAlreadyDefined { position, .. }
            | Self::FunctionAlreadyDefined { position, .. }
            | Self::BuiltinFunctionRedefinition { position, .. }
            | Self::ArgumentCountMismatch { position, .. }
            | Self::MissingValue { position }
            | Self::DivisionByZero { position }
            | Self::Overflow { position } => *position,
        }
    }
}
