use reckon::{
    Options, evaluate, evaluate_with,
    ast::BinaryOperator,
    error::ErrorKind,
    interpreter::reduction::{Reducer, Reduction},
    parse,
    util::format::Normalization,
};

fn trace(src: &str) -> Vec<String> {
    let options = Options { verbose:       true,
                            normalization: Normalization::Compact, };
    evaluate_with(src, &options).unwrap_or_else(|e| panic!("{src}: {e}"))
                                .trace
}

#[test]
fn innermost_groups_reduce_first() {
    assert_eq!(trace("3^4+6*((9+12/6)*(24/2^3-1))"),
               ["3^4+6*((9+12/6)*(24/2^3-1))",
                "3^4+6*((9+2)*(24/2^3-1))",
                "3^4+6*(11*(24/2^3-1))",
                "3^4+6*(11*(24/8-1))",
                "3^4+6*(11*(3-1))",
                "3^4+6*(11*2)",
                "3^4+6*22",
                "81+6*22",
                "81+132",
                "213"]);
}

#[test]
fn tiers_reduce_in_precedence_order() {
    assert_eq!(trace("4^7-12^3"), ["4^7-12^3", "16384-12^3", "16384-1728", "14656"]);
    assert_eq!(trace("1+2*3^2"), ["1+2*3^2", "1+2*9", "1+18", "19"]);
    assert_eq!(trace("10-4-3"), ["10-4-3", "6-3", "3"]);
}

#[test]
fn literal_input_has_a_single_state() {
    assert_eq!(trace("42"), ["42"]);
    assert_eq!(trace("-42"), ["-42"]);
}

#[test]
fn negations_fold_into_literals() {
    assert_eq!(trace("-(-3)"), ["-(-3)", "3"]);
    assert_eq!(trace("-(2+3)"), ["-(2+3)", "-5"]);
    assert_eq!(trace("3--2"), ["3--2", "5"]);
}

#[test]
fn negative_bases_of_powers_keep_their_parentheses() {
    assert_eq!(trace("3*(0-2)^2"), ["3*(0-2)^2", "3*(-2)^2", "3*4", "12"]);
    assert_eq!(trace("-2^2"), ["-2^2", "(-2)^2", "4"]);
    assert_eq!(trace("-(0-3)"), ["-(0-3)", "-(-3)", "3"]);
}

#[test]
fn minus_after_an_operator_negates_the_power() {
    assert_eq!(trace("2*-3^2"), ["2*-3^2", "2*-9", "-18"]);
    assert_eq!(trace("3--2^2"), ["3--2^2", "3--4", "7"]);
}

#[test]
fn every_state_evaluates_to_the_result() {
    for src in ["3*(0-2)^2",
                "-(0-3)^2",
                "2*-(0-3)^2",
                "3-(0-2)*4",
                "1--2^2*3",
                "(-1)^7+2",
                "-2^2",
                "10%-(4-1)",
                "3^4+6*((9+12/6)*(24/2^3-1))"]
    {
        let value = evaluate(src).unwrap();
        for state in trace(src) {
            assert_eq!(evaluate(&state).unwrap(), value, "{src}: state {state}");
        }
    }
}

#[test]
fn long_chains_reduce_one_link_at_a_time() {
    let terms = 2_000;
    let source = vec!["3"; terms].join("-");
    let mut reducer = Reducer::new(parse(&source).unwrap());

    let mut steps = 0;
    while let Some(reduction) = reducer.step().unwrap() {
        steps += 1;
        assert!(matches!(reduction, Reduction::Operation { op: BinaryOperator::Sub, .. }));
    }
    assert_eq!(steps, terms - 1);
    assert_eq!(reducer.value().unwrap(), evaluate(&source).unwrap());
}

#[test]
fn trace_uses_the_requested_normalization() {
    let options = Options { verbose:       true,
                            normalization: Normalization::Spacing, };
    let evaluation = evaluate_with("2*(4-5)", &options).unwrap();
    assert_eq!(evaluation.trace, ["2 * (4 - 5)", "2 * -1", "-2"]);
    assert_eq!(evaluation.value, -2);
}

#[test]
fn steps_describe_what_was_reduced() {
    let mut reducer = Reducer::new(parse("(7)*2^3").unwrap());

    assert_eq!(reducer.step().unwrap(),
               Some(Reduction::Group { value:  7,
                                       column: 1, }));
    assert_eq!(reducer.step().unwrap(),
               Some(Reduction::Operation { left:   2,
                                           op:     BinaryOperator::Pow,
                                           right:  3,
                                           value:  8,
                                           column: 6, }));
    assert!(matches!(reducer.step().unwrap(),
                     Some(Reduction::Operation { op: BinaryOperator::Mul,
                                                 value: 56,
                                                 .. })));
    assert_eq!(reducer.step().unwrap(), None);
    assert_eq!(reducer.value().unwrap(), 56);
}

#[test]
fn step_count_is_bounded_by_tree_weight() {
    for src in ["3^4+6*((9+12/6)*(24/2^3-1))", "-(-(-(1)))", "1+2+3+4+5", "((((2))))^2"] {
        let expr = parse(src).unwrap();
        let bound = expr.weight();
        let mut reducer = Reducer::new(expr);
        let mut steps = 0;
        while reducer.step().unwrap().is_some() {
            steps += 1;
            assert!(steps <= bound, "{src}: more than {bound} steps");
        }
        assert!(reducer.state().as_literal().is_some(), "{src}");
    }
}

#[test]
fn states_shrink_without_powers() {
    for src in ["2*(4-5)", "99*99-1", "(1+2)*(3+4)%5", "100/7/2"] {
        let states = trace(src);
        for pair in states.windows(2) {
            assert!(pair[1].len() < pair[0].len(), "{src}: {pair:?}");
        }
    }
}

#[test]
fn reducer_agrees_with_direct_evaluation() {
    for src in ["2+2",
                "2*(4-5)",
                "-2^2",
                "7%-3*2",
                "(8/3)^(1+1)",
                "1-2-3-(4-5)",
                "3^4+6*((9+12/6)*(24/2^3-1))"]
    {
        let direct = evaluate(src).unwrap();
        let reduced = Reducer::new(parse(src).unwrap()).value().unwrap();
        assert_eq!(direct, reduced, "{src}");
    }
}

#[test]
fn reduction_errors_surface_without_a_result() {
    let options = Options { verbose: true,
                            ..Options::default() };
    let err = evaluate_with("1+(2/(3-3))", &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DivisionByZero);

    let err = evaluate_with("4*2^(1-2)", &options).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidExponent);
}
