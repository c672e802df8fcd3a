/// Core evaluation logic and context management.
///
/// Contains the evaluation engine, the runtime context, control-flow results
/// and the [`Visitor`](crate::ast::Visitor) implementation that walks the tree.
pub mod core;

/// Lexical scopes.
///
/// Defines the parent-linked scope chain, name resolution through it, and the
/// closures that pair a function with the scope it was declared in.
pub mod scope;

/// Binary operator evaluation logic.
///
/// Handles checked integer arithmetic, comparisons and the non-short-circuit
/// logical operators.
pub mod binary;

/// Function evaluation.
///
/// Handles declarations, the `println` built-in, and user-defined calls with
/// their activation scopes.
pub mod function;

/// Output sinks.
///
/// The single channel through which programs produce visible output.
pub mod output;
