use std::fs::{self};

use numtext::{
    decimal::{Decimal, PrecisionContext, RoundingMode},
    error::{ArithmeticError, EvalError, SyntaxError},
    evaluate, evaluate_boolean,
    interpreter::{bindings::Bindings, core::Interpreter},
};
use walkdir::WalkDir;

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

        for (i, block) in extract_dsl_blocks(&content).into_iter().enumerate() {
            for statement in block.lines().filter(|l| !l.trim().is_empty()) {
                count += 1;
                match evaluate_boolean(statement) {
                    Ok(true) => {},
                    Ok(false) => {
                        panic!("Example {} in {:?} does not hold:\n{statement}", i + 1, path)
                    },
                    Err(e) => panic!("Example {} in {:?} failed:\n{}\nError: {:?}",
                                     i + 1,
                                     path,
                                     statement,
                                     e),
                }
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```numtext") {
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

fn assert_holds(statement: &str) {
    match evaluate_boolean(statement) {
        Ok(true) => {},
        Ok(false) => panic!("Statement does not hold: {statement}"),
        Err(e) => panic!("Statement failed: {statement}\nError: {e}"),
    }
}

fn assert_value(text: &str, expected: &str) {
    let expected: Decimal = expected.parse().unwrap();
    match evaluate(text) {
        Ok(value) => assert_eq!(value, expected, "{text}"),
        Err(e) => panic!("Expression failed: {text}\nError: {e}"),
    }
}

fn syntax_error(text: &str) -> SyntaxError {
    match evaluate(text) {
        Err(EvalError::Syntax(e)) => e,
        other => panic!("Expected a syntax error for {text}, got {other:?}"),
    }
}

fn arithmetic_error(text: &str) -> ArithmeticError {
    match evaluate(text) {
        Err(EvalError::Arithmetic(e)) => e,
        other => panic!("Expected an arithmetic error for {text}, got {other:?}"),
    }
}

#[test]
fn precedence_and_associativity() {
    assert_value("2+3*4", "14");
    assert_value("(2+3)*4", "20");
    assert_value("2^3^2", "512");
    assert_value("10-4-3", "3");
    assert_value("100/10/5", "2");
    assert_value("-2^2", "-4");
    assert_value("2*-3", "-6");
    assert_value(" 1 +  2 ", "3");
}

#[test]
fn numbers() {
    assert_value(".5+7.", "7.5");
    assert_value("0.10", "0.1");
    assert_value("10/4", "2.5");
    assert_value("123456789012345678901234567890+1", "123456789012345678901234567891");
}

#[test]
fn percent_operators() {
    assert_value("50%200", "100");
    assert_value("50%%7", "1");
    assert_value("-7%%3", "-1");
    assert_value("7.5%%2", "1.5");
    assert!(matches!(arithmetic_error("5%%0"), ArithmeticError::DivisionByZero));
}

#[test]
fn division_rounds_to_the_context() {
    let ctx = PrecisionContext::new(10, RoundingMode::HalfEven).unwrap();
    let interpreter = Interpreter::new(ctx);
    assert_eq!(interpreter.evaluate("10/3").unwrap().to_string(), "3.333333333");
    assert_eq!(interpreter.evaluate("2/3").unwrap().to_string(), "0.6666666667");

    let ctx = PrecisionContext::new(10, RoundingMode::Down).unwrap();
    let interpreter = Interpreter::new(ctx);
    assert_eq!(interpreter.evaluate("2/3").unwrap().to_string(), "0.6666666666");
}

#[test]
fn constants_and_unary_functions() {
    assert_value("sqrt(16)", "4");
    assert_value("sqrt16", "4");
    assert_value("sin0", "0");
    assert_value("abs(-3)", "3");
    assert_value("factorial(5)", "120");
    assert_value("gamma(5)", "24");
    assert_value("exp(0)", "1");
    assert_value("exponent(1234)", "3");
    assert_value("mantissa(1234)", "1.234");
    assert_value("ceiling(2.1)", "3");
    assert_value("floor(-2.1)", "-3");
    assert_value("round(2.5)", "3");
    assert_value("pi()*0", "0");
    assert_holds("abs(pi - 3.14159265358979) < 0.00000000000001");
    assert_holds("abs(e - 2.71828182845905) < 0.00000000000001");
    assert_holds("abs(sin(pi/6) - 0.5) < 0.000000000001");
    assert_holds("abs(cos(pi) + 1) < 0.000000000001");
    assert_holds("abs(deg(pi) - 180) < 0.000000000001");
    assert_holds("abs(logE(e) - 1) < 0.000000000001");
}

#[test]
fn multi_argument_functions() {
    assert_value("pow(2, 10)", "1024");
    assert_value("log(2, 8)", "3");
    assert_value("root(27, 3)", "3");
    assert_value("roundTo(3.14159, 2)", "3.14");
    assert_value("sum(1,2,3)", "6");
    assert_value("average(2,4)", "3");
    assert_value("max(3,9,2)", "9");
    assert_value("min(3,9,2)", "2");
    assert_value("multiply(2,3,4)", "24");
    assert_value("reduce(10,3,2)", "5");
    assert_value("divide(100,5,2)", "10");
    assert_value("sum(7)", "7");
}

#[test]
fn conditionals() {
    assert_value("if(5>3,1,0)", "1");
    assert_value("if(5<3,1,0)", "0");
    assert_value("if(1=1&2=2,10,20)", "10");
    assert_value("nif(5>3,1,0)", "0");
    assert_value("if((1+2)>2,1,0)", "1");
    assert_value("if(!(1=2),1,0)", "1");
    assert_value("if(1=2|2=2,1,0)", "1");
    assert_value("if(1=1&,10,20)", "10");
    assert_value("if(3,1,0)", "1");
    assert_value("if(0,1,0)", "0");
    assert_value("if(1=1, 5, 1/0)", "5");
}

#[test]
fn untaken_branches_are_read_but_not_computed() {
    assert_value("nif(1=1, sqrt(-1), 7)", "7");
    assert_value("if(1=2, logE(0), 7)", "7");
    assert!(matches!(arithmetic_error("if(1=1, 1/0, 7)"), ArithmeticError::DivisionByZero));

    assert!(matches!(syntax_error("if(1=1, 5, foo(1))"),
                     SyntaxError::UnknownIdentifier { ref name, .. } if name == "foo"));
    assert!(syntax_error("if(1=1, 5, pow 2)").is_arity_error());
}

#[test]
fn boolean_statements() {
    assert_holds("2 < 3");
    assert_holds("3 > 2");
    assert_holds("2 <= 2");
    assert_holds("3 >= 3");
    assert_holds("2 != 3");
    assert_holds("2 = 2.0");
    assert_holds("!(2 = 3)");
    assert_holds("(1=1 & 2=2) | 1=2");
    assert!(!evaluate_boolean("1=2 & 2=2").unwrap());
}

#[test]
fn substitution() {
    let interpreter = Interpreter::default();
    let bindings = Bindings::new().with("x", 41)
                                  .with("xy", 2)
                                  .with("n", -5)
                                  .with_positional([10, 20, 30]);

    let eval = |text: &str| interpreter.evaluate_with(text, &bindings).unwrap();
    assert_eq!(eval("$x+1"), 42.into());
    assert_eq!(eval("$xy+$x"), 43.into());
    assert_eq!(eval("2-$n"), 7.into());
    assert_eq!(eval("$(0)+$(1)"), 30.into());
    assert_eq!(eval("$(1+1)"), 30.into());
}

#[test]
fn unresolved_placeholders_are_errors() {
    let interpreter = Interpreter::default();
    let bindings = Bindings::new().with_positional([1, 2]);

    let e = interpreter.evaluate_with("$y+1", &bindings).unwrap_err();
    assert!(matches!(e, EvalError::Syntax(SyntaxError::UnresolvedPlaceholder { .. })));

    let e = interpreter.evaluate_with("$(5)", &bindings).unwrap_err();
    assert!(matches!(e, EvalError::Syntax(SyntaxError::InvalidPlaceholderIndex { .. })));
}

#[test]
fn unknown_identifier_is_error() {
    let e = syntax_error("foo(1)");
    assert!(matches!(e, SyntaxError::UnknownIdentifier { ref name, .. } if name == "foo"));
    assert_eq!(e.position(), 0);
}

#[test]
fn wrong_function_arity_is_error() {
    assert!(syntax_error("if1").is_arity_error());
    assert!(syntax_error("pow 2").is_arity_error());
    assert!(syntax_error("sum").is_arity_error());
    assert!(matches!(syntax_error("pow(1 2)"), SyntaxError::MissingComma { .. }));
}

#[test]
fn malformed_text_is_error() {
    assert!(matches!(syntax_error("pow(1,2"), SyntaxError::UnmatchedParenthesis { .. }));
    assert!(matches!(syntax_error("(1+2"), SyntaxError::UnmatchedParenthesis { .. }));
    assert!(matches!(syntax_error("1+2)"), SyntaxError::UnmatchedParenthesis { .. }));
    assert!(matches!(syntax_error("1 2"), SyntaxError::TrailingText { position: 2, .. }));
    assert!(matches!(syntax_error("1+"), SyntaxError::UnexpectedEnd { .. }));
    assert!(matches!(syntax_error("1+#"), SyntaxError::UnexpectedCharacter { found: '#', .. }));
    assert!(matches!(syntax_error("if(1!2,1,0)"), SyntaxError::ExpectedEquals { .. }));
    assert!(matches!(syntax_error(""), SyntaxError::UnexpectedEnd { .. }));
}

#[test]
fn undefined_operations_are_errors() {
    assert!(matches!(arithmetic_error("1/0"), ArithmeticError::DivisionByZero));
    assert!(matches!(arithmetic_error("sqrt(-1)"), ArithmeticError::Undefined { .. }));
    assert!(matches!(arithmetic_error("logE(0)"), ArithmeticError::Undefined { .. }));
    assert!(matches!(arithmetic_error("if(1/0>1,1,2)"), ArithmeticError::DivisionByZero));
}

#[test]
fn huge_angles_are_errors() {
    assert!(matches!(arithmetic_error("sin(10^3000)"), ArithmeticError::ExponentTooLarge));
    assert!(matches!(arithmetic_error("cos(-10^3000)"), ArithmeticError::ExponentTooLarge));
    assert_holds("abs(sin(10^30)) <= 1");
}

#[test]
fn high_degree_roots() {
    assert_holds("abs(root(2, 100000) - pow(2, 0.00001)) < 0.000000000000000000000000000001");
    assert_holds("abs(root(2, 65) - pow(2, 1 / 65)) < 0.000000000000000000000000000001");
    assert_value("root(-32, 5)", "-2");
    assert_holds("root(1, 1000000) = 1");
}

#[test]
fn nesting_is_limited() {
    let interpreter = Interpreter::default().with_max_depth(8);
    assert!(interpreter.evaluate("((((1))))").is_ok());

    let deep = format!("{}1{}", "(".repeat(20), ")".repeat(20));
    assert!(matches!(interpreter.evaluate(&deep),
                     Err(EvalError::Syntax(SyntaxError::NestingTooDeep { limit: 8, .. }))));
    assert!(matches!(interpreter.evaluate(&"-".repeat(20)),
                     Err(EvalError::Syntax(SyntaxError::NestingTooDeep { .. }))));
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.numtext").unwrap();
    for statement in contents.lines().filter(|l| !l.trim().is_empty()) {
        assert_holds(statement);
    }
}
