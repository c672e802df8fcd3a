use std::rc::Rc;

use crate::{
    ast::{BinaryOperator, Block, Expr, FunctionDef, Visitor},
    interpreter::lexer::Token,
};

const INDENT: &str = "    ";

/// Renders a syntax tree back into canonical source text.
///
/// Statements go on their own lines, nested blocks are indented by four
/// spaces per level and operators are surrounded by single spaces. Comments
/// and `;` separators are not reproduced. A binary operand is parenthesized
/// when it binds no tighter than its parent, so the output parses back into
/// the same tree.
#[derive(Debug, Default, Clone, Copy)]
pub struct Printer;

/// Prints a whole program.
///
/// # Example
/// ```
/// use fimp::interpreter::printer::print_program;
///
/// let program = fimp::parse("fun foo(n){ fun bar(m){return m+n}; return bar(1)}").unwrap();
///
/// assert_eq!(print_program(&program),
///            "fun foo(n) {\n    fun bar(m) {\n        return m + n\n    }\n    return bar(1)\n}");
/// ```
#[must_use]
pub fn print_program(program: &Block) -> String {
    Printer.statements(program)
}

impl Printer {
    /// Prints the statements of a block, one per line, without braces.
    fn statements(&mut self, block: &Block) -> String {
        block.statements
             .iter()
             .map(|statement| statement.accept(self))
             .collect::<Vec<_>>()
             .join("\n")
    }

    /// Prints one binary operand, adding parentheses where the tree shape
    /// would otherwise be lost.
    fn operand(&mut self, parent: BinaryOperator, expr: &Expr) -> String {
        let text = expr.accept(self);
        match expr {
            Expr::Binary { op, .. } if op.precedence() <= parent.precedence() => format!("({text})"),
            _ => text,
        }
    }
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{INDENT}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl Visitor for Printer {
    type Stmt = String;
    type Expr = String;

    fn visit_block(&mut self, block: &Block) -> Self::Stmt {
        if block.statements.is_empty() {
            return "{}".to_string();
        }
        format!("{{\n{}\n}}", indent(&self.statements(block)))
    }

    fn visit_function(&mut self, def: &Rc<FunctionDef>) -> Self::Stmt {
        let params = def.params
                        .iter()
                        .map(|param| param.text.as_str())
                        .collect::<Vec<_>>()
                        .join(", ");

        format!("fun {}({params}) {}", def.name.text, self.visit_block(&def.body))
    }

    fn visit_binding(&mut self, name: &Token, value: Option<&Expr>) -> Self::Stmt {
        match value {
            Some(expr) => format!("var {} = {}", name.text, expr.accept(self)),
            None => format!("var {}", name.text),
        }
    }

    fn visit_assignment(&mut self, name: &Token, value: &Expr) -> Self::Stmt {
        format!("{} = {}", name.text, value.accept(self))
    }

    fn visit_while(&mut self, condition: &Expr, body: &Block) -> Self::Stmt {
        format!("while ({}) {}", condition.accept(self), body.accept(self))
    }

    fn visit_if(&mut self,
                condition: &Expr,
                then_branch: &Block,
                else_branch: Option<&Block>)
                -> Self::Stmt {
        let head = format!("if ({}) {}", condition.accept(self), then_branch.accept(self));

        match else_branch {
            Some(block) => format!("{head} else {}", block.accept(self)),
            None => head,
        }
    }

    fn visit_return(&mut self, value: &Expr) -> Self::Stmt {
        format!("return {}", value.accept(self))
    }

    fn visit_expression_statement(&mut self, expr: &Expr) -> Self::Stmt {
        expr.accept(self)
    }

    fn visit_literal(&mut self, _token: &Token, value: i64) -> Self::Expr {
        value.to_string()
    }

    fn visit_identifier(&mut self, name: &Token) -> Self::Expr {
        name.text.clone()
    }

    fn visit_binary(&mut self,
                    op: BinaryOperator,
                    _token: &Token,
                    left: &Expr,
                    right: &Expr)
                    -> Self::Expr {
        format!("{} {} {}",
                self.operand(op, left),
                op.symbol(),
                self.operand(op, right))
    }

    fn visit_call(&mut self, name: &Token, arguments: &[Expr]) -> Self::Expr {
        let arguments = arguments.iter()
                                 .map(|arg| arg.accept(self))
                                 .collect::<Vec<_>>()
                                 .join(", ");

        format!("{}({arguments})", name.text)
    }
}
