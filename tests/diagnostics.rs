use reckon::{
    Diagnostic, EvaluationContext, evaluate, evaluate_for_plot,
    error::{ParenSide, Span},
};

fn error_of(src: &str) -> Diagnostic {
    let mut context = EvaluationContext::new();
    evaluate(src, &mut context).expect_err("expected an error")
}

fn rejected(src: &str) -> (String, Option<Span>) {
    match error_of(src) {
        Diagnostic::InvalidExpression { message, span } => (message, span),
        other => panic!("{src:?} gave {other:?}"),
    }
}

fn at(position: usize, length: usize) -> Option<Span> {
    Some(Span { position,
                length })
}

fn unclosed(position: usize) -> Diagnostic {
    Diagnostic::UnbalancedParenthesis { position,
                                        side: ParenSide::Open }
}

#[test]
fn empty_input() {
    assert_eq!(error_of(""), Diagnostic::EmptyExpression);
    assert_eq!(error_of("   "), Diagnostic::EmptyExpression);
}

#[test]
fn invalid_character_points_at_the_character() {
    assert_eq!(error_of("2 + $"),
               Diagnostic::InvalidCharacter { position:  4,
                                              character: '$', });
    assert_eq!(error_of("2 = 2 $"),
               Diagnostic::InvalidCharacter { position:  6,
                                              character: '$', });
}

#[test]
fn unclosed_parenthesis_points_at_the_opening() {
    assert_eq!(error_of("(2 + 3"),
               Diagnostic::UnbalancedParenthesis { position: 0,
                                                   side:     ParenSide::Open, });
    assert_eq!(error_of("(2 + (3"),
               Diagnostic::UnbalancedParenthesis { position: 5,
                                                   side:     ParenSide::Open, });
    assert_eq!(error_of("pow(2, 3"),
               Diagnostic::UnbalancedParenthesis { position: 3,
                                                   side:     ParenSide::Open, });

    assert_eq!(error_of("("), unclosed(0));
    assert_eq!(error_of("(2 +"), unclosed(0));
    assert_eq!(error_of("-("), unclosed(1));
    assert_eq!(error_of("sqrt("), unclosed(4));
    assert_eq!(error_of("pow(2,"), unclosed(3));
    assert_eq!(error_of("2 * (3 - (4 *"), unclosed(9));
    assert_eq!(error_of("((1)"), unclosed(0));
}

#[test]
fn unmatched_close_is_reported_where_it_appears() {
    assert_eq!(error_of("2 + 3)"),
               Diagnostic::UnbalancedParenthesis { position: 5,
                                                   side:     ParenSide::Close, });
    assert_eq!(error_of(")"),
               Diagnostic::UnbalancedParenthesis { position: 0,
                                                   side:     ParenSide::Close, });
    assert_eq!(error_of("(1) * 2)"),
               Diagnostic::UnbalancedParenthesis { position: 7,
                                                   side:     ParenSide::Close, });
}

#[test]
fn operator_runs_are_named_in_full() {
    assert_eq!(error_of("2 ** 3"),
               Diagnostic::InvalidOperatorSequence { position: 2,
                                                     text:     "**".to_string(), });
    assert_eq!(error_of("8 // 2"),
               Diagnostic::InvalidOperatorSequence { position: 2,
                                                     text:     "//".to_string(), });
    assert_eq!(error_of("1 +-+ 2"),
               Diagnostic::InvalidOperatorSequence { position: 2,
                                                     text:     "+-+".to_string(), });
    assert_eq!(error_of("--3"),
               Diagnostic::InvalidOperatorSequence { position: 0,
                                                     text:     "--".to_string(), });
}

#[test]
fn a_leading_plus_is_rejected() {
    assert_eq!(rejected("+3"), ("unexpected '+' at position 0".to_string(), at(0, 1)));
    assert_eq!(error_of("+-3"),
               Diagnostic::InvalidOperatorSequence { position: 0,
                                                     text:     "+-".to_string(), });
}

#[test]
fn unknown_function_and_wrong_arity() {
    assert!(matches!(error_of("foo(2)"),
                     Diagnostic::InvalidFunction { position: 0, ref name, .. } if name == "foo"));
    assert!(matches!(error_of("1 + pow(2)"),
                     Diagnostic::InvalidFunction { position: 4, ref name, .. } if name == "pow"));
    assert!(matches!(error_of("sqrt(1, 2)"),
                     Diagnostic::InvalidFunction { position: 0, .. }));
    assert!(matches!(error_of("pi(2)"),
                     Diagnostic::InvalidFunction { position: 0, .. }));
}

#[test]
fn undefined_identifiers() {
    assert_eq!(error_of("y + 1"),
               Diagnostic::UndefinedVariable { position: 0,
                                               name:     "y".to_string(), });
    assert_eq!(error_of("ans"),
               Diagnostic::UndefinedVariable { position: 0,
                                               name:     "ans".to_string(), });
    assert_eq!(error_of("2 * sqrt"),
               Diagnostic::UndefinedVariable { position: 4,
                                               name:     "sqrt".to_string(), });
}

#[test]
fn misplaced_tokens() {
    assert_eq!(rejected("2 3"), ("unexpected '3' at position 2".to_string(), at(2, 1)));
    assert_eq!(rejected("()"), ("unexpected ')' at position 1".to_string(), at(1, 1)));
    assert_eq!(rejected("pow(2 3)"), ("unexpected '3' at position 6".to_string(), at(6, 1)));
    assert_eq!(rejected("2 * 10 20"), ("unexpected '20' at position 7".to_string(), at(7, 2)));
}

#[test]
fn input_ending_outside_parentheses() {
    assert_eq!(rejected("2 *"),
               ("input ends where an operand is expected".to_string(), at(3, 1)));
    assert_eq!(rejected("-"),
               ("input ends where an operand is expected".to_string(), at(1, 1)));
    assert_eq!(rejected("let x"), ("'let' needs '=' and a value".to_string(), at(0, 3)));
    assert_eq!(rejected("let x ="),
               ("input ends where an operand is expected".to_string(), at(7, 1)));
}

#[test]
fn assignment_targets() {
    let invalid = |src: &str, expected: &str| match error_of(src) {
        Diagnostic::InvalidVariableName { name, .. } => assert_eq!(name, expected),
        other => panic!("{src:?} gave {other:?}"),
    };

    invalid("let pi = 3", "pi");
    invalid("let golden = 1", "golden");
    invalid("let sqrt = 1", "sqrt");
    invalid("let ans = 1", "ans");
    invalid("let _x = 1", "_x");
    invalid("let 2x = 1", "2x");
    invalid("let a b = 1", "a b");
    invalid("let = 1", "");
}

#[test]
fn equals_outside_let_is_unexpected() {
    let mut context = EvaluationContext::new();
    evaluate("let x = 1", &mut context).unwrap();
    assert_eq!(evaluate("x = 5", &mut context),
               Err(Diagnostic::invalid_expression_at(Span { position: 2,
                                                            length:   1, },
                                                     "unexpected '=' at position 2")));
    assert_eq!(rejected("let x = 1 = 2"),
               ("unexpected '=' at position 10".to_string(), at(10, 1)));
}

#[test]
fn non_finite_results_are_classified() {
    assert_eq!(error_of("5 / 0"), Diagnostic::DivisionByZero);
    assert_eq!(error_of("-5 / 0"), Diagnostic::DivisionByZero);
    assert_eq!(error_of("sqrt(1 / 0)"), Diagnostic::DivisionByZero);
    assert_eq!(error_of("0 / 0"),
               Diagnostic::invalid_expression("computation produced an invalid result"));
    assert_eq!(error_of("log(0 / 0)"),
               Diagnostic::invalid_expression("computation produced an invalid result"));
}

#[test]
fn domain_guards_explain_themselves() {
    let message = |src: &str| match error_of(src) {
        Diagnostic::InvalidExpression { message, .. } => message,
        other => panic!("{src:?} gave {other:?}"),
    };

    assert!(message("sqrt(-4)").contains("square root"));
    assert!(message("log(0)").contains("logarithm"));
    assert!(message("log10(-1)").contains("logarithm"));
    assert!(message("factorial(21)").contains("at most 20"));
    assert!(message("factorial(-1)").contains("non-negative integer"));
    assert!(message("factorial(1.5)").contains("non-negative integer"));
}

#[test]
fn lexing_fails_before_parsing() {
    assert!(matches!(error_of("(2 + $"), Diagnostic::InvalidCharacter { .. }));
    assert!(matches!(error_of("2 ** é"), Diagnostic::InvalidCharacter { position: 5, .. }));
}

#[test]
fn spans_cover_the_offending_text() {
    assert_eq!(error_of("1 +-+ 2").span(),
               Some(Span { position: 2,
                           length:   3, }));
    assert_eq!(error_of("foo(1)").span(),
               Some(Span { position: 0,
                           length:   3, }));
    assert_eq!(error_of("5 / 0").span(), None);
}

#[test]
fn messages_are_readable() {
    assert_eq!(error_of("2 + $").to_string(), "Invalid character '$' at position 4.");
    assert_eq!(error_of("(2").to_string(),
               "Unbalanced parenthesis at position 0: unclosed '('.");
    assert_eq!(error_of("1 / 0").to_string(), "Division by zero.");
}

#[test]
fn plot_evaluation_never_touches_the_context() {
    let mut context = EvaluationContext::new();
    evaluate("let k = 3", &mut context).unwrap();
    let before = context.clone();

    assert_eq!(evaluate_for_plot("k * 2", &context), Ok(6.0));
    assert!(matches!(evaluate_for_plot("let k = 4", &context),
                     Err(Diagnostic::InvalidExpression { .. })));
    assert_eq!(context, before);
}

#[test]
fn deep_nesting_is_rejected_without_exhausting_the_stack() {
    let depth = 10_000;
    let inputs = [format!("{}1{}", "(".repeat(depth), ")".repeat(depth)),
                  format!("{}1{}", "abs(".repeat(depth), ")".repeat(depth)),
                  format!("{}1", "-(".repeat(depth)),
                  vec!["2"; depth].join(" ^ ")];

    for input in &inputs {
        let (message, span) = rejected(input);
        assert!(message.contains("nesting"), "{message}");
        assert!(span.is_some());
    }
}

#[test]
fn moderate_nesting_still_evaluates() {
    let mut context = EvaluationContext::new();
    let grouped = format!("{}7{}", "(".repeat(60), ")".repeat(60));
    let calls = format!("{}-7{}", "abs(".repeat(60), ")".repeat(60));
    let tower = vec!["1"; 60].join("^");

    assert_eq!(evaluate(&grouped, &mut context), Ok(7.0));
    assert_eq!(evaluate(&calls, &mut context), Ok(7.0));
    assert_eq!(evaluate(&tower, &mut context), Ok(1.0));
}
