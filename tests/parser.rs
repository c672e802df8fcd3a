use fimp::{
    ast::{BinaryOperator, Block, Expr, Statement},
    error::{Error, ErrorKind, ParseError},
    format_source,
    interpreter::{
        lexer::{Position, Token, TokenKind},
        parser::core::parse_program,
    },
    parse,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn ident(name: &str) -> Expr {
    Expr::Identifier(Token::of(TokenKind::Identifier, name))
}

fn literal(value: i64) -> Expr {
    Expr::Literal { token: Token::of(TokenKind::Integer, value.to_string()),
                    value }
}

fn binary(op: BinaryOperator, kind: TokenKind, left: Expr, right: Expr) -> Expr {
    Expr::Binary { op,
                   token: Token::of(kind, ""),
                   left: Box::new(left),
                   right: Box::new(right) }
}

fn single_expression(source: &str) -> Expr {
    let program = parse(source).unwrap();
    match program.statements.as_slice() {
        [Statement::Expression(expr)] => expr.clone(),
        other => panic!("expected one expression statement, got {other:?}"),
    }
}

#[test]
fn prints_if_else_program() {
    let source = "// example 1
var a = 10
var b = 20
if (a > b) {
    println(1)
} else {
    println(0)
}";

    let expected = "var a = 10
var b = 20
if (a > b) {
    println(1)
} else {
    println(0)
}";

    assert_eq!(format_source(source).unwrap(), expected);
}

#[test]
fn prints_fibonacci_program() {
    let source = "// example 2
fun fib(n) {
    if (n <= 1) {
        return 1
    }
    return fib(n - 1) + fib(n - 2)
}

var i = 1
while (i <= 5) {
    println(i, fib(i))
    i = i + 1
}";

    let expected = "fun fib(n) {
    if (n <= 1) {
        return 1
    }
    return fib(n - 1) + fib(n - 2)
}
var i = 1
while (i <= 5) {
    println(i, fib(i))
    i = i + 1
}";

    assert_eq!(format_source(source).unwrap(), expected);
}

#[test]
fn prints_nested_functions() {
    let source = "// example 3
fun foo(n) {
    fun bar(m) {
        return m + n
    }

    return bar(1)
}

println(foo(41)) // prints 42";

    let expected = "fun foo(n) {
    fun bar(m) {
        return m + n
    }
    return bar(1)
}
println(foo(41))";

    assert_eq!(format_source(source).unwrap(), expected);
}

#[test]
fn prints_compact_source_canonically() {
    assert_eq!(format_source("var x;x=(1+2)*3;fun f(){};if(x){}else{while(0){}}").unwrap(),
               "var x\nx = (1 + 2) * 3\nfun f() {}\nif (x) {} else {\n    while (0) {}\n}");
}

#[test]
fn printer_keeps_needed_parentheses_only() {
    assert_eq!(format_source("((a)) + (b * c)").unwrap(), "a + b * c");
    assert_eq!(format_source("(a - b) - c").unwrap(), "(a - b) - c");
    assert_eq!(format_source("a - (b - c)").unwrap(), "a - (b - c)");
    assert_eq!(format_source("(a || b) && c").unwrap(), "(a || b) && c");
}

#[test]
fn empty_program_prints_nothing() {
    assert_eq!(format_source("// nothing here\n;;").unwrap(), "");
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(single_expression("a + b * c"),
               binary(BinaryOperator::Add,
                      TokenKind::Plus,
                      ident("a"),
                      binary(BinaryOperator::Mul, TokenKind::Star, ident("b"), ident("c"))));
}

#[test]
fn comparison_binds_tighter_than_logic() {
    assert_eq!(single_expression("x < 1 || y == 2"),
               binary(BinaryOperator::Or,
                      TokenKind::OrOr,
                      binary(BinaryOperator::Less, TokenKind::Less, ident("x"), literal(1)),
                      binary(BinaryOperator::Equal,
                             TokenKind::EqualEqual,
                             ident("y"),
                             literal(2))));
}

#[test]
fn call_arguments_are_expressions() {
    assert_eq!(single_expression("f(1, g(x), a % b)"),
               Expr::Call { name:      Token::of(TokenKind::Identifier, "f"),
                            arguments: vec![literal(1),
                                            Expr::Call { name:      Token::of(TokenKind::Identifier,
                                                                              "g"),
                                                         arguments: vec![ident("x")], },
                                            binary(BinaryOperator::Mod,
                                                   TokenKind::Percent,
                                                   ident("a"),
                                                   ident("b"))], });
}

#[test]
fn assignment_needs_second_token_lookahead() {
    let program = parse("x = 1\nx == 1\nx").unwrap();

    assert!(matches!(program.statements[0], Statement::Assignment { .. }));
    assert!(matches!(program.statements[1],
                     Statement::Expression(Expr::Binary { op: BinaryOperator::Equal, .. })));
    assert!(matches!(program.statements[2], Statement::Expression(Expr::Identifier(_))));
}

#[test]
fn parses_declarations_and_control_flow() {
    let program = parse("fun f(a, b) { return a } var v var w = 2 while (v) {} if (w) {}").unwrap();

    match program.statements.as_slice() {
        [Statement::Function(def),
         Statement::Binding { value: None, .. },
         Statement::Binding { value: Some(_), .. },
         Statement::While { .. },
         Statement::If { else_branch: None,
                         .. }] => {
            assert_eq!(def.name.text, "f");
            assert_eq!(def.params.len(), 2);
            assert_eq!(def.body, Block::new(vec![Statement::Return(ident("a"))]));
        },
        other => panic!("unexpected statements {other:?}"),
    }
}

#[test]
fn chained_same_level_operators_are_rejected() {
    for source in ["1 + 2 + 3", "a * b / c", "var a = 3 - 2 - 1", "if (a == b == c) {}"] {
        let error = parse(source).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Syntax, "for {source:?}");
    }
}

#[test]
fn reports_unexpected_token_with_position() {
    assert_eq!(parse("var a = 1\nwhile a {}").unwrap_err(),
               Error::Parse(ParseError::UnexpectedToken { expected: "'('".to_string(),
                                                          found:    TokenKind::Identifier,
                                                          position: Position::new(1, 6), }));
}

#[test]
fn unclosed_block_reports_end_of_input() {
    let error = parse("fun f() {\n  return 1\n").unwrap_err();

    assert_eq!(error.message(), "Expected '}', found end of input.");
    assert_eq!(error.position(), Position::new(2, 0));
}

#[test]
fn token_slice_without_eof_ends_at_last_token() {
    let tokens = fimp::tokenize("while (1) {").unwrap();
    let error = parse_program(&tokens[..tokens.len() - 1]).unwrap_err();

    assert_eq!(error,
               ParseError::UnexpectedToken { expected: "'}'".to_string(),
                                             found:    TokenKind::Eof,
                                             position: Position::new(0, 10), });
}

#[test]
fn rejects_oversized_literal() {
    assert!(matches!(parse("println(123456789012345678901234567890)"),
                     Err(Error::Parse(ParseError::LiteralTooLarge { .. }))));
}

#[test]
fn renders_syntax_diagnostic() {
    let source = "var a = 1\nvar = 2";
    let error = parse(source).unwrap_err();

    assert_eq!(error.diagnostic().render(source),
               "2:5 syntax error: Expected identifier, found '='.\nvar = 2\n~~~~^");
}

fn expression() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![(0_u32..1000).prop_map(|n| n.to_string()),
                           "[a-e]".prop_map(String::from)];

    leaf.prop_recursive(4, 24, 3, |inner| {
            let op = prop::sample::select(vec!["+", "-", "*", "/", "%", "<", "<=", ">", ">=",
                                               "==", "!=", "&&", "||"]);
            prop_oneof![(inner.clone(), op, inner.clone()).prop_map(|(l, op, r)| {
                                                                  format!("({l}) {op} ({r})")
                                                              }),
                        prop::collection::vec(inner, 0..3).prop_map(|args| {
                                                              format!("f({})", args.join(", "))
                                                          })]
        })
}

fn program() -> impl Strategy<Value = String> {
    let statement = prop_oneof![expression().prop_map(|e| format!("var v = {e}")),
                                expression().prop_map(|e| format!("v = {e}")),
                                expression().prop_map(|e| format!("while ({e}) {{ println({e}) }}")),
                                expression().prop_map(|e| {
                                                format!("if ({e}) {{ return {e} }} else {{}}")
                                            }),
                                expression().prop_map(|e| format!("fun g(p, q) {{ return {e} }}"))];

    prop::collection::vec(statement, 0..5).prop_map(|statements| statements.join("\n"))
}

proptest! {
    #[test]
    fn printed_program_is_a_fixed_point(source in program()) {
        let printed = format_source(&source).unwrap();

        prop_assert_eq!(format_source(&printed).unwrap(), printed.clone());
        prop_assert_eq!(parse(&printed).unwrap(), parse(&source).unwrap());
    }
}
