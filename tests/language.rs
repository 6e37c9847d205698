use std::fs;

use tamarin::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::Evaluator,
        lexer::Lexer,
        parser::core::Parser,
        value::core::Value,
    },
};
use walkdir::WalkDir;

fn run(source: &str) -> Result<Option<Value>, RuntimeError> {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();
    assert!(parser.errors().is_empty(),
            "parse errors in {source:?}: {:?}",
            parser.errors());

    let mut sink = Vec::new();
    Evaluator::new(&mut sink).eval_program(&program, &Environment::root())
}

fn eval(source: &str) -> Value {
    run(source).expect("evaluation failed").expect("program had no result")
}

fn assert_result(source: &str, expected: &str) {
    assert_eq!(eval(source).to_string(), expected, "source: {source}");
}

fn assert_error(source: &str, expected: &str) {
    match run(source) {
        Err(error) => assert_eq!(error.to_string(), expected, "source: {source}"),
        Ok(value) => panic!("expected error {expected:?}, got {value:?} for {source}"),
    }
}

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_code_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run(&code) {
                panic!("Example {} in {:?} failed:\n{}\nError: {}", i + 1, path, code, e);
            }
        }
    }

    assert!(count > 0, "No code examples found in book/src");
}

fn extract_code_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```tamarin") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

#[test]
fn integer_expressions() {
    assert_result("5", "5");
    assert_result("-10", "-10");
    assert_result("5 + 5 + 5 + 5 - 10", "10");
    assert_result("2 * 2 * 2 * 2 * 2", "32");
    assert_result("5 * 2 + 10", "20");
    assert_result("5 + 2 * 10", "25");
    assert_result("(5 + 10 * 2 + 15 / 3) * 2 + -10", "50");
}

#[test]
fn division_truncates_toward_zero() {
    assert_result("7 / 2", "3");
    assert_result("-7 / 2", "-3");
}

#[test]
fn arithmetic_wraps_on_overflow() {
    assert_result("9223372036854775807 + 1", "-9223372036854775808");
    assert_result("-9223372036854775807 - 2", "9223372036854775807");
}

#[test]
fn boolean_expressions() {
    assert_result("true", "true");
    assert_result("false", "false");
    assert_result("1 < 2", "true");
    assert_result("1 > 2", "false");
    assert_result("1 == 1", "true");
    assert_result("1 != 1", "false");
    assert_result("true == true", "true");
    assert_result("true != false", "true");
    assert_result("(1 < 2) == true", "true");
    assert_result("(1 > 2) == true", "false");
}

#[test]
fn bang_operator() {
    assert_result("!true", "false");
    assert_result("!false", "true");
    assert_result("!5", "false");
    assert_result("!0", "false");
    assert_result("!!true", "true");
    assert_result("let nothing = if (false) { 1 }; !nothing", "true");
}

#[test]
fn string_expressions() {
    assert_result(r#""Hello World!""#, "Hello World!");
    assert_result(r#""Hello" + " " + "World!""#, "Hello World!");
    assert_result(r#""tab:\tend""#, "tab:\tend");
}

#[test]
fn conditionals() {
    assert_result("if (true) { 10 }", "10");
    assert_result("if (false) { 10 }", "null");
    assert_result("if (1) { 10 }", "10");
    assert_result("if (0) { 10 }", "10");
    assert_result("if (1 < 2) { 10 } else { 20 }", "10");
    assert_result("if (1 > 2) { 10 } else { 20 }", "20");
}

#[test]
fn return_statements() {
    assert_result("return 10;", "10");
    assert_result("return 10; 9;", "10");
    assert_result("return 2 * 5; 9;", "10");
    assert_result("9; return 10; 9;", "10");
    assert_result("if (10 > 1) { if (10 > 1) { return 10; } return 1; }", "10");
}

#[test]
fn return_stops_at_the_function_boundary() {
    assert_result("let foo = fn() { return 10; }; fn() { foo(); 5; }()", "5");
    assert_result("let f = fn(x) { return x; x + 10; }; f(10)", "10");
    assert_result("let f = fn(x) { let result = x + 10; return result; return 10; }; f(10)",
                  "20");
}

#[test]
fn let_statements() {
    assert_result("let a = 5; a;", "5");
    assert_result("let a = 5 * 5; a;", "25");
    assert_result("let a = 5; let b = a; b;", "5");
    assert_result("let a = 5; let b = a; let c = a + b + 5; c;", "15");
}

#[test]
fn let_has_no_observable_value() {
    assert!(run("let a = 5").unwrap().is_none());
    assert!(run("1 + 1; let a = 5").unwrap().is_none());
}

#[test]
fn let_overwrites_same_scope_bindings() {
    assert_result("let a = 5; let a = a + 1; a", "6");
}

#[test]
fn functions_and_calls() {
    assert_result("let identity = fn(x) { x; }; identity(5);", "5");
    assert_result("let double = fn(x) { x * 2; }; double(5);", "10");
    assert_result("let add = fn(x, y) { x + y }; add(5, 5)", "10");
    assert_result("fn(x) { x + 2; }(2)", "4");
}

#[test]
fn function_arity_is_checked() {
    assert_error("fn(x) { x }(1, 2)",
                 "wrong number of arguments to function. expected=1, got=2");
    assert_error("fn(x, y) { x + y }(1)",
                 "wrong number of arguments to function. expected=2, got=1");
}

#[test]
fn closures_capture_their_definition_environment() {
    assert_result("let newAdder = fn(x) { fn(y) { x + y } }; let addTwo = newAdder(2); addTwo(3)",
                  "5");
    assert_result("let add = fn(a, b) { a + b }; \
                   let apply = fn(a, b, f) { f(a, b) }; \
                   apply(2, 2, add)",
                  "4");
}

#[test]
fn function_bodies_never_see_the_callers_scope() {
    assert_error("let f = fn() { x }; let g = fn() { let x = 5; f() }; g()",
                 "identifier not found: x");
}

#[test]
fn bindings_added_after_definition_are_visible() {
    // The captured environment is shared, not snapshotted.
    assert_result("let f = fn() { g() }; let g = fn() { 7 }; f()", "7");
}

#[test]
fn recursion() {
    assert_result("let fact = fn(n) { if (n < 1) { 1 } else { n * fact(n - 1) } }; fact(5)",
                  "120");
    assert_result("let map = fn(arr, f) { \
                     if (len(arr) == 0) { [] } else { push(map(rest(arr), f), f(first(arr))) } \
                   }; \
                   map([1, 2, 3], fn(x) { x * 2 })",
                  "[6, 4, 2]");
}

#[test]
fn error_propagation() {
    assert_error("5 + true;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN");
    assert_error("-true", "unknown operator: -BOOLEAN");
    assert_error("true + false;", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("if (10 > 1) { true + false; }", "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("if (10 > 1) { if (10 > 1) { return true + false; } return 1; }",
                 "unknown operator: BOOLEAN + BOOLEAN");
    assert_error("foobar", "identifier not found: foobar");
    assert_error("[1, 2 + true, 3]", "type mismatch: INTEGER + BOOLEAN");
    assert_error("len([1])(1)", "not a function: INTEGER");
}

#[test]
fn string_operators_other_than_concat_are_errors() {
    assert_error(r#""Hello" - "World""#, "unknown operator: STRING - STRING");
    assert_error(r#""a" == "a""#, "unknown operator: STRING == STRING");
}

#[test]
fn division_by_zero_is_an_error() {
    assert_error("5 / 0", "division by zero");
    assert_error("let x = 10; x / (5 - 5)", "division by zero");
}

#[test]
fn mixed_type_equality_is_false_not_an_error() {
    assert_result("5 == true", "false");
    assert_result("5 != true", "true");
    assert_result(r#"1 == "1""#, "false");
}

#[test]
fn reference_types_compare_by_identity() {
    assert_result("let a = [1, 2]; a == a", "true");
    assert_result("[1, 2] == [1, 2]", "false");
    assert_result("let f = fn() { 1 }; f == f", "true");
    assert_result("fn() { 1 } == fn() { 1 }", "false");
    assert_result("let n = if (false) { 1 }; let m = if (false) { 2 }; n == m", "true");
}

#[test]
fn array_literals_and_subscripts() {
    assert_result("[1, 2 * 2, 3 + 3]", "[1, 4, 6]");
    assert_result("[1, 2, 3][0]", "1");
    assert_result("[1, 2, 3][1 + 1]", "3");
    assert_result("let i = 0; [1][i]", "1");
    assert_result("let arr = [1, 2, 3]; arr[1]", "2");
    assert_result("[]", "[]");
}

#[test]
fn array_subscript_errors() {
    assert_error("[1, 2, 3][3]", "index out of range: 3. array length: 3");
    assert_error("[1][-1]", "index out of range: -1. array length: 1");
    assert_error(r#"[1]["a"]"#,
                 "non-integer argument to array subscript not supported, got STRING");
    assert_error("5[0]", "subscript operator not supported for type: INTEGER");
}

#[test]
fn hash_literals_and_subscripts() {
    assert_result(r#"{1: "one", true: 2, "k": [1, 2]}["k"]"#, "[1, 2]");
    assert_result(r#"{"one": 1, "two": 2}["two"]"#, "2");
    assert_result(r#"{1: "a"}[1]"#, "a");
    assert_result("{true: 5}[true]", "5");
    assert_result(r#"{"missing": 1}["found"]"#, "null");
    assert_result("{}[0]", "null");
}

#[test]
fn hash_keys_of_different_types_stay_distinct() {
    let source = r#"let h = {1: "int", true: "bool", "1": "string"};"#;
    assert_result(&format!("{source} h[1]"), "int");
    assert_result(&format!("{source} h[true]"), "bool");
    assert_result(&format!("{source} h[\"1\"]"), "string");
}

#[test]
fn hash_errors() {
    assert_error("{1: 2, 1: 3}", "duplicate key: 1");
    assert_error(r#"{"a": 1, "a": 2}"#, "duplicate key: a");
    assert_error("{[1]: 2}", "invalid key type: ARRAY");
    assert_error(r#"{"a": 1}[fn(x) { x }]"#, "invalid key type: FUNCTION");
}

#[test]
fn len_builtin() {
    assert_result(r#"len("")"#, "0");
    assert_result(r#"len("four")"#, "4");
    assert_result(r#"len("hello world")"#, "11");
    assert_result("len([1, 2, 3])", "3");
    assert_result("len([])", "0");
    assert_error("len(1)", "type of 1st argument to `len` not supported, got INTEGER");
    assert_error(r#"len("one", "two")"#, "wrong number of arguments. got=2, want=1");
}

#[test]
fn first_last_rest_builtins() {
    assert_result("first([3])", "3");
    assert_result(r#"first(["string", true])"#, "string");
    assert_result("last([1, 2, 3])", "3");
    assert_result("rest([1, 2, 3])", "[2, 3]");
    assert_result("rest(rest([1, 2, 3]))", "[3]");
    assert_result("rest([1])", "[]");

    assert_error("first([])", "`first` should not be called on empty array");
    assert_error("last([])", "`last` should not be called on empty array");
    assert_error("rest([])", "`rest` should not be called on empty array");
    assert_error("first(5)", "type of 1st argument to `first` not supported, got INTEGER");
    assert_error(r#"last("asd")"#, "type of 1st argument to `last` not supported, got STRING");
    assert_error("rest(true)", "type of 1st argument to `rest` not supported, got BOOLEAN");
    assert_error("first([1], [2])", "wrong number of arguments. got=2, want=1");
}

#[test]
fn push_builtin_is_functional() {
    assert_result("push([], 1)", "[1]");
    assert_result("push([3], 2)", "[3, 2]");
    assert_result("let a = [1]; let b = push(a, 2); b", "[1, 2]");
    assert_result("let a = [1]; let b = push(a, 2); len(a)", "1");

    assert_error("push(5, 1)", "type of 1st argument to `push` not supported, got INTEGER");
    assert_error("push([1])", "wrong number of arguments. got=1, want=2");
    assert_error(r#"push([1], 2, 3)"#, "wrong number of arguments. got=3, want=2");
}

#[test]
fn put_builtin_is_functional() {
    assert_result(r#"put({}, "a", 1)["a"]"#, "1");
    assert_result(r#"put({"a": 1}, "a", 5)["a"]"#, "5");
    assert_result(r#"let h = {"a": 1}; let g = put(h, "b", 2); g["b"]"#, "2");
    assert_result(r#"let h = {"a": 1}; let g = put(h, "b", 2); h["b"]"#, "null");

    assert_error(r#"put([], "a", 1)"#,
                 "type of 1st argument to `put` not supported, got ARRAY");
    assert_error("put({}, [1], 2)", "type of 2nd argument to `put` not supported, got ARRAY");
    assert_error("put({}, 1)", "wrong number of arguments. got=2, want=3");
}

#[test]
fn puts_writes_inspect_forms_and_yields_null() {
    let mut parser = Parser::new(Lexer::new(r#"puts("hello", 42, [1, 2], {true: 1})"#));
    let program = parser.parse_program();
    assert!(parser.errors().is_empty());

    let mut sink = Vec::new();
    let result = Evaluator::new(&mut sink).eval_program(&program, &Environment::root())
                                          .expect("evaluation failed");

    assert_eq!(String::from_utf8(sink).unwrap(), "hello\n42\n[1, 2]\n{true: 1}\n");
    assert!(matches!(result, Some(Value::Null)));
}

#[test]
fn builtins_can_be_shadowed() {
    assert_result("let len = 5; len", "5");
}

#[test]
fn interpret_reports_parser_errors() {
    let mut out = Vec::new();
    tamarin::interpret("let x 5;", &mut out).unwrap();

    let output = String::from_utf8(out).unwrap();
    assert!(output.starts_with("Parser errors:\n\texpected next token to be =, got INT instead"),
            "unexpected output: {output}");
}

#[test]
fn interpret_prints_results_and_runtime_errors() {
    let mut out = Vec::new();
    tamarin::interpret("let add = fn(x, y) { x + y }; add(5, 5)", &mut out).unwrap();
    assert_eq!(out, b"10\n");

    let mut out = Vec::new();
    tamarin::interpret("len(1)", &mut out).unwrap();
    assert_eq!(out, b"type of 1st argument to `len` not supported, got INTEGER\n");

    let mut out = Vec::new();
    tamarin::interpret("let x = 5", &mut out).unwrap();
    assert_eq!(out, b"");
}

#[test]
fn repl_persists_bindings_across_lines() {
    let mut input = std::io::Cursor::new("let x = 40\nx + 2\n");
    let mut out = Vec::new();
    tamarin::repl::start(&mut input, &mut out).unwrap();

    let output = String::from_utf8(out).unwrap();
    assert_eq!(output, ">> >> 42\n>> ");
}

#[test]
fn repl_recovers_from_parse_errors() {
    let mut input = std::io::Cursor::new("let x 5\nlet y = 2; y\n");
    let mut out = Vec::new();
    tamarin::repl::start(&mut input, &mut out).unwrap();

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("Yikes! Watch what you type!\n parser errors:\n"),
            "unexpected output: {output}");
    assert!(output.contains("\texpected next token to be =, got INT instead"),
            "unexpected output: {output}");
    assert!(output.ends_with("2\n>> "), "unexpected output: {output}");
}
