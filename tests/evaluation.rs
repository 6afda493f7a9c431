use std::thread;

use reckon::{
    Options, evaluate, evaluate_with,
    error::{Error, ErrorKind, ParseError, RuntimeError},
    interpreter::parser::core::MAX_NESTING,
    parse,
    util::format::Normalization,
};

fn assert_value(src: &str, expected: i64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "{src}"),
        Err(e) => panic!("{src} failed: {e}"),
    }
}

fn assert_kind(src: &str, expected: ErrorKind) {
    match evaluate(src) {
        Ok(value) => panic!("{src} evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), expected, "{src}: {e}"),
    }
}

#[test]
fn reference_scenarios() {
    assert_value("2+2", 4);
    assert_value("2*(4-5)", -2);
    assert_value("4^7-12^3", 14656);
    assert_value("3^4+6*((9+12/6)*(24/2^3-1))", 213);
    assert_value("10/3", 3);
    assert_value("10%3", 1);
    assert_kind("5/0", ErrorKind::DivisionByZero);
    assert_kind("(1+2", ErrorKind::MalformedExpression);
}

#[test]
fn whitespace_is_insignificant() {
    assert_value("  3 ^ 4 + 6 * ( ( 9 + 12 / 6 ) * ( 24 / 2 ^ 3 - 1 ) )  ", 213);
    assert_value("1\t+\n2", 3);
}

#[test]
fn operators_group_left_to_right_within_a_tier() {
    assert_value("20-5-3", 12);
    assert_value("64/4/2", 8);
    assert_value("100%7%3", 2);
    assert_value("2^2^3", 64);
    assert_value("20/5*2", 8);
}

#[test]
fn parentheses_override_precedence() {
    assert_value("(2+3)*4", 20);
    assert_value("2*(3+4)^2", 98);
    assert_value("(20-5)-(3-1)", 13);
}

#[test]
fn empty_input_is_malformed() {
    assert!(matches!(evaluate(""), Err(Error::Parse(ParseError::EmptyExpression))));
    assert!(matches!(evaluate("   "), Err(Error::Parse(ParseError::EmptyExpression))));
}

#[test]
fn parse_errors_report_columns() {
    assert!(matches!(evaluate("(1+2"),
                     Err(Error::Parse(ParseError::ExpectedClosingParen { column: 1 }))));
    assert!(matches!(evaluate("1+"),
                     Err(Error::Parse(ParseError::UnexpectedEndOfInput { column: 3 }))));
    assert!(matches!(evaluate("2 * x"),
                     Err(Error::Parse(ParseError::UnexpectedToken { column: 5, .. }))));
    assert!(matches!(evaluate("99999999999999999999+1"),
                     Err(Error::Parse(ParseError::LiteralTooLarge { column: 1 }))));

    match evaluate("1 + 2 3") {
        Err(Error::Parse(ParseError::UnexpectedTrailingTokens { token, column })) => {
            assert_eq!(token, "3");
            assert_eq!(column, 7);
        },
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn runtime_errors_report_the_failing_operator() {
    assert!(matches!(evaluate("1 + 5/0"),
                     Err(Error::Runtime(RuntimeError::DivisionByZero { column: 6 }))));
    assert!(matches!(evaluate("2^-1"),
                     Err(Error::Runtime(RuntimeError::InvalidExponent { exponent: -1,
                                                                        column:   2, }))));
    assert!(matches!(evaluate("9223372036854775807*2"),
                     Err(Error::Runtime(RuntimeError::Overflow { column: 20 }))));
}

#[test]
fn error_messages_are_readable() {
    let err = evaluate("5/0").unwrap_err();
    assert_eq!(err.to_string(), "Error at column 2: Division by zero.");
    assert_eq!(err.kind().to_string(), "division by zero");

    let err = evaluate("(1+2").unwrap_err();
    assert_eq!(err.to_string(),
               "Error at column 1: Expected closing parenthesis ')' but none found.");
}

#[test]
fn overflow_is_an_error_not_a_wrap() {
    assert_kind("9223372036854775807+1", ErrorKind::NumericOverflow);
    assert_kind("-9223372036854775807-2", ErrorKind::NumericOverflow);
    assert_kind("3037000500*3037000500", ErrorKind::NumericOverflow);
    assert_kind("-(-9223372036854775807-1)", ErrorKind::NumericOverflow);
    assert_value("3037000499*3037000499", 9_223_372_030_926_249_001);
}

#[test]
fn nesting_limit() {
    let depth = MAX_NESTING;
    let nested = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_value(&nested, 1);

    let too_deep = format!("{}1{}", "(".repeat(depth + 1), ")".repeat(depth + 1));
    assert!(matches!(evaluate(&too_deep),
                     Err(Error::Parse(ParseError::NestingTooDeep { column })) if column == depth + 1));
}

#[test]
fn deep_nesting_with_operators_evaluates() {
    let depth = MAX_NESTING;
    let source = format!("{}1{}", "(1+".repeat(depth), ")".repeat(depth));
    let expected = i64::try_from(depth).unwrap() + 1;
    assert_value(&source, expected);

    let options = Options { verbose: true,
                            ..Options::default() };
    let evaluation = evaluate_with(&source, &options).unwrap();
    assert_eq!(evaluation.value, expected);
    assert_eq!(evaluation.trace.last(), Some(&expected.to_string()));
}

#[test]
fn long_operator_chains_evaluate() {
    let terms = 100_000;

    let sum = vec!["1"; terms].join("+");
    assert_value(&sum, 100_000);

    let expr = parse(&sum).unwrap();
    assert_eq!(expr.weight(), terms - 1);
    assert_eq!(expr.to_string(), sum);

    assert_value(&vec!["1"; terms].join("-"), -99_998);
    assert_value(&vec!["1"; terms].join("^"), 1);
    assert_value(&vec!["7"; terms].join("%"), 0);
}

#[test]
fn unary_minus_binds_by_position() {
    assert_value("-2^2", 4);
    assert_value("(-2^2)", 4);
    assert_value("2*-3^2", -18);
    assert_value("3--2^2", 7);
    assert_value("2^-0", 1);
    assert_kind("2^-1", ErrorKind::InvalidExponent);
}

#[test]
fn chained_unary_minus_is_rejected() {
    assert!(matches!(evaluate("--3"),
                     Err(Error::Parse(ParseError::UnexpectedToken { column: 2, .. }))));
    assert!(matches!(evaluate("2---3"),
                     Err(Error::Parse(ParseError::UnexpectedToken { column: 4, .. }))));
    assert_value("-(-3)", 3);
    assert_value("2-(-(-3))", -1);
}

#[test]
fn smallest_integer_can_be_written_after_a_minus() {
    assert_value("-9223372036854775808", i64::MIN);
    assert_value("1 + -9223372036854775808", i64::MIN + 1);
    assert!(matches!(evaluate("9223372036854775808"),
                     Err(Error::Parse(ParseError::LiteralTooLarge { column: 1 }))));
    assert!(matches!(evaluate("2*-9223372036854775808^2"),
                     Err(Error::Parse(ParseError::LiteralTooLarge { column: 4 }))));
    assert_kind("-(9223372036854775808)", ErrorKind::MalformedExpression);
}

#[test]
fn evaluation_result_formatting() {
    let options = Options { verbose:       false,
                            normalization: Normalization::Spacing, };
    let evaluation = evaluate_with("3^4+6*((9+12/6)*(24/2^3-1))", &options).unwrap();
    assert_eq!(evaluation.to_string(),
               "3 ^ 4 + 6 * ((9 + 12 / 6) * (24 / 2 ^ 3 - 1)) = 213");
    assert!(evaluation.trace.is_empty());

    let preserve = evaluate_with("1 +2", &Options::default()).unwrap();
    assert_eq!(preserve.to_string(), "1 +2 = 3");
}

#[test]
fn independent_evaluations_run_concurrently() {
    let handles: Vec<_> = (0..8_i64).map(|i| {
                                         thread::spawn(move || {
                                             let source = format!("({i}+1)*{i}-{i}^2");
                                             evaluate(&source).unwrap()
                                         })
                                     })
                                     .collect();

    for (i, handle) in (0_i64..).zip(handles) {
        assert_eq!(handle.join().unwrap(), i);
    }
}
