/// The evaluator module executes the syntax tree.
///
/// The evaluator walks the tree with a chain of lexical scopes, performs
/// integer arithmetic and comparisons, calls functions, and sends `println`
/// output to an injectable sink.
///
/// # Responsibilities
/// - Evaluates statements and expressions through the [`Visitor`] trait.
/// - Resolves names through the scope chain; functions close over the scope
///   they were declared in.
/// - Reports runtime errors such as undefined names or division by zero.
///
/// [`Visitor`]: crate::ast::Visitor
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a keyword, name, integer, operator, delimiter or comment.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, text and
///   position.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the syntax tree from tokens.
///
/// # Responsibilities
/// - Converts tokens into statement and expression nodes.
/// - Validates the grammar, reporting the first error with its position.
pub mod parser;
/// Renders a syntax tree back to canonical source text.
pub mod printer;
