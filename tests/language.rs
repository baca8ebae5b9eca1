use std::fs::{self};

use bigdecimal::BigDecimal;
use currenscript::{
    error::{Error, RuntimeError},
    interpreter::{
        evaluator::function::core::MAX_CALL_DEPTH,
        value::{core::Value, currency::Currency},
    },
    run_with_output,
};
use walkdir::WalkDir;

const CONFIG: &str = "PLN EUR USD;\
                      PLN 1.0 0.23 0.35\
                      EUR 4.55 1.0 1.21\
                      USD 4.2 0.92 1.0";

fn get_result(src: &str) -> Result<Option<Value>, Error> {
    run_with_output(CONFIG, src, Vec::new())
}

fn assert_success(src: &str) -> Option<Value> {
    get_result(src).unwrap_or_else(|e| panic!("Script failed: {e}"))
}

fn assert_failure(src: &str) -> Error {
    match get_result(src) {
        Ok(value) => panic!("Script succeeded with {value:?} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn program_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/programs").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| e.path().extension().is_some_and(|ext| ext == "cur"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let header = content.lines().next().unwrap_or_default();
        count += 1;

        if let Some(expected) = header.strip_prefix("# expect-error:") {
            let expected = expected.trim();
            match get_result(&content) {
                Ok(value) => panic!("{path:?} succeeded with {value:?}, expected error: {expected}"),
                Err(e) => assert!(e.to_string().contains(expected),
                                  "{path:?} failed with '{e}', expected it to contain '{expected}'"),
            }
        } else if let Some(expected) = header.strip_prefix("# expect:") {
            let rendered = match get_result(&content) {
                Ok(value) => value.map(|v| v.to_string()).unwrap_or_default(),
                Err(e) => panic!("{path:?} failed: {e}"),
            };
            assert_eq!(rendered, expected.trim(), "unexpected result of {path:?}");
        } else {
            panic!("{path:?} has no expectation header");
        }
    }

    assert!(count > 0, "No programs found in tests/programs");
}

#[test]
fn addition_of_literals() {
    assert_eq!(assert_success("int main() { return 3 + 5; }"), Some(Value::Integer(8)));
}

#[test]
fn arithmetic_precedence_and_parentheses() {
    assert_eq!(assert_success("int main() { return 2 + 3 * 4; }"), Some(Value::Integer(14)));
    assert_eq!(assert_success("int main() { return (2 + 3) * 4; }"), Some(Value::Integer(20)));
    assert_eq!(assert_success("int main() { return 10 - 4 - 3; }"), Some(Value::Integer(3)));
    assert_eq!(assert_success("int main() { return 7 / 2; }"), Some(Value::Integer(3)));
    assert_eq!(assert_success("float main() { return 3 * 0.5; }"), Some(Value::Float(1.5)));
}

#[test]
fn negated_currency() {
    let result = assert_success("PLN main() {\
                                 PLN money = 1200.0 as PLN;\
                                 money = -money;\
                                 return money;\
                                 }");
    let Some(Value::Currency(currency)) = result else {
        panic!("expected a currency, got {result:?}");
    };
    assert_eq!(currency, Currency::new(BigDecimal::from(-1200), "PLN"));
}

#[test]
fn logical_conditions() {
    let cases = [("2 < 1 || 2 == 2", true),
                 ("2 < 1 || 2 != 2", false),
                 ("2 > 1 && 2 == 2", true),
                 ("2 > 1 && 2 != 2", false),
                 ("!(2 != 3)", false)];

    for (condition, expected) in cases {
        let src = format!("bool main() {{ if ({condition}) {{ return true; }} else {{ return false; }} }}");
        assert_eq!(assert_success(&src), Some(Value::Bool(expected)), "condition: {condition}");
    }
}

#[test]
fn logical_operators_short_circuit() {
    // The right operand would fail with an unknown variable if evaluated.
    assert_eq!(assert_success("bool main() { return true || missing; }"), Some(Value::Bool(true)));
    assert_eq!(assert_success("bool main() { return false && missing; }"),
               Some(Value::Bool(false)));
}

#[test]
fn missing_main_function() {
    let e = assert_failure("bool myFunc() { return true; }");
    assert_eq!(e.category(), "RuntimeError");
    assert!(e.to_string().contains("main"));
}

#[test]
fn undefined_function_call() {
    let e = assert_failure("bool main() { return myFunc(); }");
    assert!(matches!(e, Error::Runtime(RuntimeError::MissingFunction { ref name }) if name == "myFunc"));
}

#[test]
fn assignment_to_unknown_variable() {
    let e = assert_failure("bool main() { myVal = 3; }");
    assert!(e.to_string().contains("myVal"));
}

#[test]
fn cast_without_exchange_rate() {
    let config = "PLN EUR USD;\
                  PLN 1.0 0.23 0.35\
                  EUR 4.55 1.0 1.21";
    let src = "bool main() { USD myValUSD = 3 as USD; PLN myValPLN = myValUSD as PLN; return true; }";

    let e = run_with_output(config, src, Vec::new()).unwrap_err();
    assert!(matches!(e,
                     Error::Runtime(RuntimeError::MissingExchangeRate { ref from, ref to })
                     if from == "USD" && to == "PLN"));
    assert!(e.to_string().contains("USD"));
    assert!(e.to_string().contains("PLN"));
}

#[test]
fn same_currency_cast_is_identity() {
    let result = assert_success("PLN main() { PLN money = 5 as PLN; return money as PLN; }");
    assert_eq!(result, Some(Value::Currency(Currency::new(BigDecimal::from(5), "PLN"))));
}

#[test]
fn user_functions_shadow_builtins() {
    assert_eq!(assert_success("string typeof(x) { return \"mine\"; } string main() { return typeof(1); }"),
               Some(Value::from("mine")));
}

#[test]
fn argument_types_are_checked() {
    let e = assert_failure("int twice(int n) { return n * 2; } int main() { return twice(1.5); }");
    assert!(matches!(e, Error::Runtime(RuntimeError::TypeMismatch { .. })));
}

#[test]
fn void_call_used_as_value() {
    let e = assert_failure("void nothing() { } int main() { int x = nothing(); return x; }");
    assert!(matches!(e, Error::Runtime(RuntimeError::MissingValue { ref function }) if function == "nothing"));
}

#[test]
fn condition_must_be_bool() {
    let e = assert_failure("int main() { if (1) { return 1; } return 0; }");
    assert!(e.to_string().contains("bool"));
}

#[test]
fn print_writes_in_evaluation_order() {
    let mut out = Vec::new();
    let src = "void main() { int i = 0; while (i < 3) { print(i); i = i + 1; } print(2.0 as PLN); }";

    let result = run_with_output(CONFIG, src, &mut out).unwrap();

    assert_eq!(result, None);
    assert_eq!(String::from_utf8(out).unwrap(), "0\n1\n2\n2 PLN\n");
}

#[test]
fn error_categories() {
    assert_eq!(assert_failure("int main() { return \"open; }").category(), "LexError");
    assert_eq!(assert_failure("int main() { return 1 }").category(), "ParseError");
    assert_eq!(assert_failure("int main() { return 1 / 0; }").category(), "RuntimeError");
    assert_eq!(run_with_output("PLN PLN;", "int main() { return 1; }", Vec::new()).unwrap_err()
                                                                              .category(),
               "ConfigError");
}

#[test]
fn floats_render_without_exponents() {
    assert_eq!(assert_success("string main() { return 10000000000000000.0 as string; }"),
               Some(Value::String("10000000000000000.0".into())));
    assert_eq!(assert_success("float main() { return 0.00001; }").map(|v| v.to_string()),
               Some("0.00001".into()));
    assert_eq!(assert_success("float main() { return 1200.0; }").map(|v| v.to_string()),
               Some("1200.0".into()));
    assert_eq!(assert_success("float main() { return -2.5 * 2; }").map(|v| v.to_string()),
               Some("-5.0".into()));
}

#[test]
fn float_literal_beyond_integer_range() {
    assert_eq!(assert_success("float main() { return 99999999999999999999.5; }"),
               Some(Value::Float(99_999_999_999_999_999_999.5)));
}

#[test]
fn deep_recursion_is_a_runtime_error() {
    let src = "int sum(int n) { if (n == 0) { return 0; } return n + sum(n - 1); }\
               int main() { return sum(limit); }";

    // run on a large stack so the call limit is reached before the thread overflows
    let run = move |limit: usize| {
        let src = src.replace("limit", &limit.to_string());
        std::thread::Builder::new().stack_size(256 * 1024 * 1024)
                                   .spawn(move || get_result(&src))
                                   .unwrap()
                                   .join()
                                   .unwrap()
    };

    let depth = MAX_CALL_DEPTH - 10;
    let expected = i64::try_from(depth * (depth + 1) / 2).unwrap();
    assert_eq!(run(depth).unwrap(), Some(Value::Integer(expected)));

    match run(MAX_CALL_DEPTH * 5) {
        Err(Error::Runtime(RuntimeError::CallDepthExceeded { function, limit })) => {
            assert_eq!(function, "sum");
            assert_eq!(limit, MAX_CALL_DEPTH);
        },
        other => panic!("expected the call depth to be exceeded, got {other:?}"),
    }
}
