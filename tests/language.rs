use std::{fs, path::Path};

use fimp::{
    error::{Error, ErrorKind, RuntimeError},
    get_output,
    interpreter::lexer::Position,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn golden_programs_produce_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "fun"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = read_expected(&path.with_extension("out"));

        count += 1;
        match get_output(&source) {
            Ok(lines) => assert_eq!(lines, expected, "output of {path:?}"),
            Err(e) => panic!("Program {path:?} failed:\n{}", e.diagnostic().render(&source)),
        }
    }

    assert!(count > 0, "No programs found in tests/programs");
}

fn read_expected(path: &Path) -> Vec<String> {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
                            .lines()
                            .map(str::to_owned)
                            .collect()
}

fn assert_output(src: &str, expected: &[&str]) {
    match get_output(src) {
        Ok(lines) => assert_eq!(lines, expected),
        Err(e) => panic!("Script failed: {}", e.diagnostic().render(src)),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) -> Error {
    match get_output(src) {
        Ok(lines) => panic!("Script succeeded but was expected to fail, printed {lines:?}"),
        Err(e) => {
            assert_eq!(e.kind(), kind, "unexpected error: {e}");
            e
        },
    }
}

#[test]
fn example_script_file() {
    let script = fs::read_to_string("tests/example.fun").expect("missing file");
    assert_output(&script, &["1 1", "2 2", "3 3", "4 5", "5 8", "42", "0"]);
}

#[test]
fn if_else_picks_branch() {
    assert_output("var a=10; var b=20; if(a>b){println(1)}else{println(0)}", &["0"]);
    assert_output("var a=30; var b=20; if(a>b){println(1)}else{println(0)}", &["1"]);
    assert_output("if (0) { println(1) } println(2)", &["2"]);
}

#[test]
fn recursive_fibonacci() {
    let src = r"
        // example 2
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
        }
    ";
    assert_output(src, &["1 1", "2 2", "3 3", "4 5", "5 8"]);
}

#[test]
fn nested_function_closes_over_parameter() {
    assert_output("fun foo(n){fun bar(m){return m+n}; return bar(1)}; println(foo(41))",
                  &["42"]);
}

#[test]
fn function_returns_zero_by_default() {
    assert_output("fun foo(){} ; println(foo())", &["0"]);
    assert_output("fun foo(){ 5 } ; println(foo())", &["0"]);
}

#[test]
fn inner_block_variables_shadow_outer_ones() {
    assert_output("var i=0; if(0==0){var i=1; println(i)}; println(i)", &["1", "0"]);
}

#[test]
fn scope_is_created_on_definition_not_evaluation() {
    let src = r"
        var i = 1

        fun f() {
            println(i)
        }

        fun g() {
            var i = 2
            fun h() {
               println(i)
            }

            f() // prints 1
            h() // prints 2
        }

        g()
    ";
    assert_output(src, &["1", "2"]);
}

#[test]
fn functions_resolve_at_call_time() {
    let src = r"
        fun f() {
            println(1)
            g()
        }

        fun g() {
            println(2)
        }

        f()
    ";
    assert_output(src, &["1", "2"]);
}

#[test]
fn inner_function_shadows_outer_one() {
    let src = r"
        var i = 1

        fun h() {
            println(i, 4)
        }

        fun g() {
            var i = 2
            fun h() {
               println(i, 9)
            }

            h()
        }

        g()
        h()
    ";
    assert_output(src, &["2 9", "1 4"]);
}

#[test]
fn assignment_updates_nearest_binding() {
    assert_output("var x = 1; if (1) { x = 2 }; println(x)", &["2"]);
    assert_output("var x = 1; fun set() { x = 5 }; set(); println(x)", &["5"]);
    assert_output("var x = 1; if (1) { var x = 3; x = 4 }; println(x)", &["1"]);
}

#[test]
fn return_leaves_loops_and_blocks() {
    let src = r"
        fun first_square_at_least(n) {
            var i = 0
            while (1) {
                if (i * i >= n) {
                    return i
                }
                i = i + 1
            }
        }
        println(first_square_at_least(10))
    ";
    assert_output(src, &["4"]);
}

#[test]
fn top_level_return_stops_program() {
    assert_output("println(1); return 0; println(2)", &["1"]);
}

#[test]
fn arithmetic_truncates_toward_zero() {
    assert_output("println(7 / 2, 0 - 7 / 2, 7 % 3, (0 - 7) % 3)", &["3 -3 1 -1"]);
    assert_output("println((2 + 3) * 4, 2 + 3 * 4)", &["20 14"]);
}

#[test]
fn comparisons_and_logic_yield_one_or_zero() {
    assert_output("println(1 < 2, 2 <= 2, 3 > 4, 3 >= 4, 5 == 5, 5 != 5)",
                  &["1 1 0 0 1 0"]);
    assert_output("println(2 && 3, 2 && 0, 0 || 7, 0 || 0)", &["1 0 1 0"]);
}

#[test]
fn logical_operators_evaluate_both_sides() {
    assert_output("fun side() { println(9); return 1 }; println(0 && side())",
                  &["9", "0"]);
    assert_output("fun side() { println(9); return 1 }; println(1 || side())",
                  &["9", "1"]);
}

#[test]
fn println_joins_arguments_with_spaces() {
    assert_output("println()", &[""]);
    assert_output("println(1, 2, 3)", &["1 2 3"]);
}

#[test]
fn uninitialized_variable_can_be_assigned() {
    assert_output("var a; a = 5; println(a)", &["5"]);
}

#[test]
fn output_before_error_reaches_sink() {
    let mut lines: Vec<String> = Vec::new();
    let result = fimp::run("println(1); println(1 / 0); println(2)", &mut lines);

    assert!(matches!(result, Err(Error::Runtime(RuntimeError::DivisionByZero { .. }))));
    assert_eq!(lines, ["1"]);
}

#[test]
fn variable_redefinition_is_error() {
    let e = assert_failure("var a = 1\nvar a = 2", ErrorKind::Semantic);
    assert!(matches!(e, Error::Runtime(RuntimeError::VariableAlreadyDefined { .. })));
    assert_eq!(e.position(), Position::new(1, 4));
}

#[test]
fn assignment_to_undeclared_name_is_error() {
    let e = assert_failure("x = 1", ErrorKind::Semantic);
    assert!(matches!(e, Error::Runtime(RuntimeError::UnknownVariable { .. })));
}

#[test]
fn division_by_zero_is_error() {
    let e = assert_failure("println(0 / 0)", ErrorKind::Semantic);
    assert!(matches!(e, Error::Runtime(RuntimeError::DivisionByZero { .. })));
    assert_failure("println(1 % 0)", ErrorKind::Semantic);
}

#[test]
fn leading_zeros_are_lexical_error() {
    assert_failure("var a = 007", ErrorKind::Lexical);
}

#[test]
fn single_ampersand_is_lexical_error() {
    assert_failure("println(1 & 1)", ErrorKind::Lexical);
    assert_failure("println(1 | 1)", ErrorKind::Lexical);
    assert_failure("println(!1)", ErrorKind::Lexical);
    assert_failure("var a = 1 # 2", ErrorKind::Lexical);
}

#[test]
fn same_level_operator_chain_is_syntax_error() {
    assert_failure("var a = 3 - 2 - 1", ErrorKind::Syntax);
    assert_failure("println(1 < 2 < 3)", ErrorKind::Syntax);
    assert_output("var a = (3 - 2) - 1; println(a)", &["0"]);
}

#[test]
fn malformed_statements_are_syntax_errors() {
    assert_failure("if (1) println(1)", ErrorKind::Syntax);
    assert_failure("fun f(a b) {}", ErrorKind::Syntax);
    assert_failure("println(1, )", ErrorKind::Syntax);
    assert_failure("while (1) {", ErrorKind::Syntax);
    assert_failure("}", ErrorKind::Syntax);
    assert_failure("var = 1", ErrorKind::Syntax);
    assert_failure("var a = 99999999999999999999", ErrorKind::Syntax);
}

#[test]
fn unknown_names_are_errors() {
    let e = assert_failure("println(y)", ErrorKind::Semantic);
    assert!(matches!(e, Error::Runtime(RuntimeError::UnknownVariable { .. })));

    let e = assert_failure("f()", ErrorKind::Semantic);
    assert!(matches!(e, Error::Runtime(RuntimeError::UnknownFunction { .. })));

    let e = assert_failure("if (1) { fun f() { return 1 } } println(f())", ErrorKind::Semantic);
    assert!(matches!(e, Error::Runtime(RuntimeError::UnknownFunction { .. })));
}

#[test]
fn uninitialized_read_is_error() {
    let e = assert_failure("var a; println(a)", ErrorKind::Semantic);
    assert!(matches!(e, Error::Runtime(RuntimeError::UninitializedVariable { .. })));
}

#[test]
fn argument_count_mismatch_is_error() {
    let e = assert_failure("fun f(a, b) { return a + b }; f(1)", ErrorKind::Semantic);
    assert_eq!(e.message(),
               "Function 'f' expects 2 argument(s), but 1 were supplied.");
}

#[test]
fn function_redefinition_is_error() {
    let e = assert_failure("fun f() {} fun f() {}", ErrorKind::Semantic);
    assert!(matches!(e, Error::Runtime(RuntimeError::FunctionAlreadyDefined { .. })));
    assert_output("fun f() { return 1 } if (1) { fun f() { return 2 } println(f()) } println(f())",
                  &["2", "1"]);
}

#[test]
fn println_cannot_be_redefined() {
    let e = assert_failure("fun println(x) { return x }", ErrorKind::Semantic);
    assert!(matches!(e, Error::Runtime(RuntimeError::BuiltinFunctionRedefinition { .. })));
}

#[test]
fn println_has_no_value() {
    let e = assert_failure("var a = println(1)", ErrorKind::Semantic);
    assert!(matches!(e, Error::Runtime(RuntimeError::MissingValue { .. })));
}

#[test]
fn parameter_and_local_share_scope() {
    let e = assert_failure("fun f(n) { var n = 1 }; f(2)", ErrorKind::Semantic);
    assert!(matches!(e, Error::Runtime(RuntimeError::VariableAlreadyDefined { .. })));
    assert_failure("fun f(n, n) { return n }; f(1, 2)", ErrorKind::Semantic);
    assert_output("fun f(n) { if (1) { var n = 1; println(n) } return n }; println(f(2))",
                  &["1", "2"]);
}

#[test]
fn overflow_is_error() {
    let e = assert_failure("println(9223372036854775807 + 1)", ErrorKind::Semantic);
    assert!(matches!(e, Error::Runtime(RuntimeError::Overflow { .. })));
    assert_output("println(9223372036854775807)", &["9223372036854775807"]);
}

#[test]
fn binding_initializer_cannot_see_itself() {
    let e = assert_failure("var a = a + 1", ErrorKind::Semantic);
    assert!(matches!(e, Error::Runtime(RuntimeError::UnknownVariable { .. })));
    assert_output("var a = 1; if (1) { var a = a + 1; println(a) }", &["2"]);
}

#[test]
fn unicode_whitespace_separates_tokens() {
    assert_output("var a = 1\u{0B}println(a)", &["1"]);
    assert_output("var a = 2\u{A0}println(a)", &["2"]);
}

#[test]
fn assignment_checks_target_before_value() {
    let e = assert_failure("x = 1 / 0", ErrorKind::Semantic);
    assert!(matches!(e, Error::Runtime(RuntimeError::UnknownVariable { .. })));
}
