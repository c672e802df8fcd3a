use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    ast::{Expr, FunctionDef},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult, Flow},
            scope::Scope,
        },
        lexer::Token,
    },
};

/// Name of the only built-in function.
pub const PRINTLN: &str = "println";

impl Context<'_> {
    /// Registers a function declaration in the current scope.
    ///
    /// # Errors
    /// - `BuiltinFunctionRedefinition` if the name is `println`.
    /// - `FunctionAlreadyDefined` if this scope already declares the name.
    pub(crate) fn declare_function(&mut self, def: &Rc<FunctionDef>) -> EvalResult<()> {
        let name = &def.name;

        if name.text == PRINTLN {
            return Err(RuntimeError::BuiltinFunctionRedefinition { name:     name.text.clone(),
                                                                   position: name.position(), });
        }

        let mut scope = self.scope.borrow_mut();
        if scope.functions.contains_key(&name.text) {
            return Err(RuntimeError::FunctionAlreadyDefined { name:     name.text.clone(),
                                                              position: name.position(), });
        }

        trace!(name = %name.text, params = def.params.len(), "declaring function");
        scope.functions.insert(name.text.clone(), Rc::clone(def));
        Ok(())
    }

    /// Evaluates a function call.
    ///
    /// `println` is checked first and never resolved through scopes.
    /// Otherwise the callee is looked up by name and called.
    ///
    /// # Returns
    /// `None` for `println`, the function's result otherwise.
    pub(crate) fn eval_function_call(&mut self,
                                     name: &Token,
                                     arguments: &[Expr])
                                     -> EvalResult<Option<i64>> {
        if name.text == PRINTLN {
            self.println(arguments)?;
            return Ok(None);
        }

        self.call_user_defined_function(name, arguments).map(Some)
    }

    /// Evaluates every argument left to right and prints them on one line,
    /// separated by single spaces.
    fn println(&mut self, arguments: &[Expr]) -> EvalResult<()> {
        let values = arguments.iter()
                              .map(|arg| self.eval_child(arg).map(|v| v.to_string()))
                              .collect::<EvalResult<Vec<_>>>()?;

        self.output.print_line(&values.join(" "));
        Ok(())
    }

    /// Executes a user-defined function.
    ///
    /// Arguments are evaluated in the caller's scope. The body then runs in a
    /// fresh activation scope whose parent is the function's defining scope,
    /// with each parameter bound to its argument. Parameters and the body's
    /// own declarations share that one scope.
    ///
    /// # Errors
    /// - Unknown function name.
    /// - Wrong number of arguments.
    /// - Duplicate parameter names.
    /// - Anything raised by the arguments or the body.
    ///
    /// # Returns
    /// The value of the first `return` executed, or `0` if none was.
    fn call_user_defined_function(&mut self, name: &Token, arguments: &[Expr]) -> EvalResult<i64> {
        let closure = self.find_function(&name.text)
                          .ok_or_else(|| RuntimeError::UnknownFunction { name:     name.text.clone(),
                                                                         position: name.position(), })?;
        let def = &closure.def;

        if def.params.len() != arguments.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name:     name.text.clone(),
                                                             expected: def.params.len(),
                                                             found:    arguments.len(),
                                                             position: name.position(), });
        }

        let values = arguments.iter()
                              .map(|arg| self.eval_child(arg))
                              .collect::<EvalResult<Vec<_>>>()?;

        debug!(function = %name.text, args = ?values, "calling function");

        let activation = Scope::child(&closure.env);
        let flow = self.with_scope(activation, |ctx| {
                           for (param, value) in def.params.iter().zip(values) {
                               if ctx.is_defined_locally(&param.text) {
                                   return Err(RuntimeError::VariableAlreadyDefined {
                                       name:     param.text.clone(),
                                       position: param.position(),
                                   });
                               }
                               ctx.define_local(&param.text, Some(value));
                           }

                           ctx.execute_statements(&def.body.statements)
                       })?;

        Ok(match flow {
            Flow::Return(value) => value,
            Flow::Normal => 0,
        })
    }
}
