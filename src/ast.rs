use std::rc::Rc;

use crate::interpreter::lexer::{Position, Token};

/// A binary operator.
///
/// Operators are grouped into precedence levels, from `||` (loosest) to the
/// multiplicative operators (tightest). Each level combines at most two
/// operands per occurrence in the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating.
    Div,
    /// `%`, remainder with the sign of the dividend.
    Mod,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `&&`, both sides always evaluated.
    And,
    /// `||`, both sides always evaluated.
    Or,
}

impl BinaryOperator {
    /// The operator's source spelling.
    ///
    /// # Example
    /// ```
    /// use fimp::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::LessEqual.symbol(), "<=");
    /// ```
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::And => "&&",
            Self::Or => "||",
        }
    }

    /// Binding strength of the operator's level; higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Or => 1,
            Self::And => 2,
            Self::Equal | Self::NotEqual => 3,
            Self::Less | Self::LessEqual | Self::Greater | Self::GreaterEqual => 4,
            Self::Add | Self::Sub => 5,
            Self::Mul | Self::Div | Self::Mod => 6,
        }
    }
}

/// An ordered sequence of statements.
///
/// The root of every program and the body of every compound construct.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

impl Block {
    /// Wraps a list of statements.
    #[must_use]
    pub const fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

/// A function declaration: `fun name(params) { body }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    /// The function name token.
    pub name:   Token,
    /// Parameter name tokens, in order.
    pub params: Vec<Token>,
    /// The function body.
    pub body:   Block,
}

/// A statement node.
///
/// Every expression is also a statement; its value is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `fun name(params) { ... }`. Shared so closures can hold it cheaply.
    Function(Rc<FunctionDef>),
    /// `var name` or `var name = value`.
    Binding {
        /// Name being introduced.
        name:  Token,
        /// Optional initializer.
        value: Option<Expr>,
    },
    /// `name = value`, where `name` is already bound.
    Assignment {
        /// Target name.
        name:  Token,
        /// New value.
        value: Expr,
    },
    /// `while (condition) { body }`
    While {
        /// Re-evaluated before each iteration.
        condition: Expr,
        /// Loop body.
        body:      Block,
    },
    /// `if (condition) { then } else { else }`
    If {
        /// Branch selector.
        condition:   Expr,
        /// Taken when the condition is nonzero.
        then_branch: Block,
        /// Taken otherwise, if present.
        else_branch: Option<Block>,
    },
    /// `return value`
    Return(Expr),
    /// An expression evaluated for its effects.
    Expression(Expr),
}

/// An expression node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Literal {
        /// The literal's token.
        token: Token,
        /// Its parsed value.
        value: i64,
    },
    /// A reference to a variable.
    Identifier(Token),
    /// `left op right`
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// The operator token, kept for error positions.
        token: Token,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// `name(arguments)`
    Call {
        /// The callee name token.
        name:      Token,
        /// Argument expressions, in order.
        arguments: Vec<Self>,
    },
}

impl Expr {
    /// Source position of the token that best identifies this expression.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Literal { token, .. } | Self::Identifier(token) | Self::Binary { token, .. } => {
                token.position()
            },
            Self::Call { name, .. } => name.position(),
        }
    }
}

/// A consumer of the syntax tree.
///
/// Each node variant has its own `visit_*` method; [`Block::accept`],
/// [`Statement::accept`] and [`Expr::accept`] select the method for the
/// concrete variant. Statements and expressions may produce different output
/// types.
pub trait Visitor {
    /// What visiting a block or statement produces.
    type Stmt;
    /// What visiting an expression produces.
    type Expr;

    fn visit_block(&mut self, block: &Block) -> Self::Stmt;
    fn visit_function(&mut self, def: &Rc<FunctionDef>) -> Self::Stmt;
    fn visit_binding(&mut self, name: &Token, value: Option<&Expr>) -> Self::Stmt;
    fn visit_assignment(&mut self, name: &Token, value: &Expr) -> Self::Stmt;
    fn visit_while(&mut self, condition: &Expr, body: &Block) -> Self::Stmt;
    fn visit_if(&mut self,
                condition: &Expr,
                then_branch: &Block,
                else_branch: Option<&Block>)
                -> Self::Stmt;
    fn visit_return(&mut self, value: &Expr) -> Self::Stmt;
    fn visit_expression_statement(&mut self, expr: &Expr) -> Self::Stmt;

    fn visit_literal(&mut self, token: &Token, value: i64) -> Self::Expr;
    fn visit_identifier(&mut self, name: &Token) -> Self::Expr;
    fn visit_binary(&mut self,
                    op: BinaryOperator,
                    token: &Token,
                    left: &Expr,
                    right: &Expr)
                    -> Self::Expr;
    fn visit_call(&mut self, name: &Token, arguments: &[Expr]) -> Self::Expr;
}

impl Block {
    /// Dispatches to [`Visitor::visit_block`].
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Stmt {
        visitor.visit_block(self)
    }
}

impl Statement {
    /// Dispatches to the visitor method for this statement's variant.
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Stmt {
        match self {
            Self::Function(def) => visitor.visit_function(def),
            Self::Binding { name, value } => visitor.visit_binding(name, value.as_ref()),
            Self::Assignment { name, value } => visitor.visit_assignment(name, value),
            Self::While { condition, body } => visitor.visit_while(condition, body),
            Self::If { condition,
                       then_branch,
                       else_branch, } => {
                visitor.visit_if(condition, then_branch, else_branch.as_ref())
            },
            Self::Return(value) => visitor.visit_return(value),
            Self::Expression(expr) => visitor.visit_expression_statement(expr),
        }
    }
}

impl Expr {
    /// Dispatches to the visitor method for this expression's variant.
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Expr {
        match self {
            Self::Literal { token, value } => visitor.visit_literal(token, *value),
            Self::Identifier(name) => visitor.visit_identifier(name),
            Self::Binary { op,
                           token,
                           left,
                           right, } => visitor.visit_binary(*op, token, left, right),
            Self::Call { name, arguments } => visitor.visit_call(name, arguments),
        }
    }
}
