use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    ast::{BinaryOperator, Block, Expr, FunctionDef, Statement, Visitor},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::eval_binary,
            output::OutputSink,
            scope::{Scope, ScopeRef},
        },
        lexer::Token,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// How a statement finished.
///
/// A `return` anywhere inside a function body travels outward as
/// [`Flow::Return`] until the enclosing call consumes it. Blocks and loops
/// stop as soon as they see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Continue with the next statement.
    Normal,
    /// A `return` fired with this value.
    Return(i64),
}

/// Stores the runtime evaluation context.
///
/// Holds the current position in the scope chain and the sink that receives
/// everything the program prints.
///
/// ## Usage
///
/// `Context` is created once per run. [`Context::execute`] walks the program;
/// every visit method reads and updates `scope` as blocks and calls are
/// entered and left.
///
/// # Example
/// ```
/// use fimp::interpreter::evaluator::core::Context;
///
/// let program = fimp::parse("var a = 10; var b = 20; if (a > b) { println(1) } else { println(0) }").unwrap();
///
/// let mut output: Vec<String> = Vec::new();
/// Context::new(&mut output).execute(&program).unwrap();
/// assert_eq!(output, ["0"]);
/// ```
pub struct Context<'a> {
    /// The innermost active scope.
    pub scope:  ScopeRef,
    /// Receives `println` output.
    pub output: &'a mut dyn OutputSink,
}

impl<'a> Context<'a> {
    /// Creates a context with an empty global scope.
    #[must_use]
    pub fn new(output: &'a mut dyn OutputSink) -> Self {
        Self { scope: Scope::root(),
               output }
    }

    /// Executes a whole program.
    ///
    /// The root block runs in a child of the global scope. A top-level
    /// `return` ends the program early; its value is discarded.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised; nothing after it runs.
    pub fn execute(&mut self, program: &Block) -> EvalResult<()> {
        debug!(statements = program.statements.len(), "executing program");
        if let Flow::Return(value) = program.accept(self)? {
            debug!(value, "program returned early");
        }
        Ok(())
    }

    /// Evaluates a subexpression and ensures that it produces a value.
    ///
    /// Operands, arguments, conditions, initializers and return values all
    /// need an integer; only a `println` call yields none.
    ///
    /// # Returns
    /// The evaluated value, or `MissingValue` at the expression's position.
    pub fn eval_child(&mut self, expr: &Expr) -> EvalResult<i64> {
        expr.accept(self)?
            .ok_or(RuntimeError::MissingValue { position: expr.position() })
    }

    /// Runs statements in order in the current scope, stopping at the first
    /// `return`.
    pub(crate) fn execute_statements(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        for statement in statements {
            if let Flow::Return(value) = statement.accept(self)? {
                return Ok(Flow::Return(value));
            }
        }
        Ok(Flow::Normal)
    }
}

impl Visitor for Context<'_> {
    type Stmt = EvalResult<Flow>;
    type Expr = EvalResult<Option<i64>>;

    fn visit_block(&mut self, block: &Block) -> Self::Stmt {
        let scope = Scope::child(&self.scope);
        self.with_scope(scope, |ctx| ctx.execute_statements(&block.statements))
    }

    fn visit_function(&mut self, def: &Rc<FunctionDef>) -> Self::Stmt {
        self.declare_function(def)?;
        Ok(Flow::Normal)
    }

    fn visit_binding(&mut self, name: &Token, value: Option<&Expr>) -> Self::Stmt {
        if self.is_defined_locally(&name.text) {
            return Err(RuntimeError::VariableAlreadyDefined { name:     name.text.clone(),
                                                              position: name.position(), });
        }

        let value = value.map(|expr| self.eval_child(expr)).transpose()?;

        self.define_local(&name.text, value);
        Ok(Flow::Normal)
    }

    fn visit_assignment(&mut self, name: &Token, value: &Expr) -> Self::Stmt {
        if self.get_variable(&name.text).is_none() {
            return Err(RuntimeError::UnknownVariable { name:     name.text.clone(),
                                                       position: name.position(), });
        }

        let value = self.eval_child(value)?;

        self.assign_nearest(&name.text, value);
        Ok(Flow::Normal)
    }

    fn visit_while(&mut self, condition: &Expr, body: &Block) -> Self::Stmt {
        let mut iterations = 0_usize;

        while self.eval_child(condition)? != 0 {
            iterations += 1;
            if let Flow::Return(value) = body.accept(self)? {
                return Ok(Flow::Return(value));
            }
        }

        trace!(iterations, "loop finished");
        Ok(Flow::Normal)
    }

    fn visit_if(&mut self,
                condition: &Expr,
                then_branch: &Block,
                else_branch: Option<&Block>)
                -> Self::Stmt {
        if self.eval_child(condition)? != 0 {
            then_branch.accept(self)
        } else if let Some(block) = else_branch {
            block.accept(self)
        } else {
            Ok(Flow::Normal)
        }
    }

    fn visit_return(&mut self, value: &Expr) -> Self::Stmt {
        Ok(Flow::Return(self.eval_child(value)?))
    }

    fn visit_expression_statement(&mut self, expr: &Expr) -> Self::Stmt {
        expr.accept(self)?;
        Ok(Flow::Normal)
    }

    fn visit_literal(&mut self, _token: &Token, value: i64) -> Self::Expr {
        Ok(Some(value))
    }

    fn visit_identifier(&mut self, name: &Token) -> Self::Expr {
        match self.get_variable(&name.text) {
            Some(Some(value)) => Ok(Some(value)),
            Some(None) => Err(RuntimeError::UninitializedVariable { name:     name.text.clone(),
                                                                    position: name.position(), }),
            None => Err(RuntimeError::UnknownVariable { name:     name.text.clone(),
                                                        position: name.position(), }),
        }
    }

    fn visit_binary(&mut self,
                    op: BinaryOperator,
                    token: &Token,
                    left: &Expr,
                    right: &Expr)
                    -> Self::Expr {
        let left = self.eval_child(left)?;
        let right = self.eval_child(right)?;

        eval_binary(op, left, right, token.position()).map(Some)
    }

    fn visit_call(&mut self, name: &Token, arguments: &[Expr]) -> Self::Expr {
        self.eval_function_call(name, arguments)
    }
}
