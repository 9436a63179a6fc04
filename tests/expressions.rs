use postfixa::{
    error::{ConversionError, EvalError, LexError, ValidationError},
    evaluate,
    pipeline::{
        converter::to_postfix,
        evaluator::evaluate_postfix,
        lexer::{Operator, Token, UnaryMinusPolicy, tokenize, tokenize_with},
        validator::validate,
    },
    postfix,
};

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => assert_eq!(value, expected, "{src} evaluated to {value}"),
        Err(e) => panic!("{src} failed to evaluate: {e}"),
    }
}

fn assert_close(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => {
            assert!((value - expected).abs() < 1e-9,
                    "{src} evaluated to {value}, expected {expected}");
        },
        Err(e) => panic!("{src} failed to evaluate: {e}"),
    }
}

fn assert_postfix(src: &str, expected: &str) {
    match postfix(src) {
        Ok(form) => assert_eq!(form, expected, "postfix form of {src}"),
        Err(e) => panic!("{src} failed to convert: {e}"),
    }
}

fn validation_error_of(src: &str) -> ValidationError {
    let tokens = tokenize(src).expect("tokenization should succeed");
    validate(&tokens).expect_err("validation should fail")
}

#[test]
fn precedence_round_trip() {
    assert_postfix("3+4*2/(1-5)^2^3", "3 4 2 * 1 5 - 2 3 ^ ^ / +");
    assert_close("3+4*2/(1-5)^2^3", 3.000_122_070_312_5);
}

#[test]
fn exponentiation_is_right_associative() {
    assert_postfix("2^3^2", "2 3 2 ^ ^");
    assert_close("2^3^2", 512.0);
}

#[test]
fn additive_operators_are_left_associative() {
    assert_postfix("8-4-2", "8 4 - 2 -");
    assert_value("8-4-2", 2.0);
    assert_value("16/4/2", 2.0);
}

#[test]
fn unary_minus_folds_into_literal() {
    assert_postfix("-3+4", "-3 4 +");
    assert_value("-3+4", 1.0);
    assert_postfix("4*-2", "4 -2 *");
    assert_value("1--5", 6.0);
}

#[test]
fn unary_minus_before_group_synthesizes_zero() {
    assert_postfix("-(3+4)", "0 3 4 + -");
    assert_value("-(3+4)", -7.0);
}

#[test]
fn unary_minus_in_larger_expression() {
    assert_postfix("-3+4*-2/(1--5)^2^3", "-3 4 -2 * 1 -5 - 2 3 ^ ^ / +");
    assert_close("-3+4*-2/(1--5)^2^3", -3.0 + (4.0 * -2.0) / 6.0_f64.powf(8.0));
}

#[test]
fn synthesize_zero_policy() {
    let tokens = tokenize_with("-3+4", UnaryMinusPolicy::SynthesizeZero).unwrap();
    validate(&tokens).unwrap();
    let converted = to_postfix(&tokens).unwrap();
    assert_eq!(postfixa::pipeline::lexer::render(&converted), "0 3 - 4 +");
    assert_eq!(evaluate_postfix(&converted).unwrap(), 1.0);
}

#[test]
fn functions_bind_to_their_group() {
    assert_postfix("SIN(3+4)*COS(2-1)", "3 4 + SIN 2 1 - COS *");
    assert_close("SIN(3+4)*COS(2-1)",
                 7.0_f64.to_radians().sin() * 1.0_f64.to_radians().cos());
}

#[test]
fn trigonometry_is_in_degrees() {
    assert_close("SIN(30)", 0.5);
    assert_close("COS(60)", 0.5);
    assert_close("SIN(90)", 1.0);
}

#[test]
fn exp_and_sqr() {
    assert_value("SQR(9)", 3.0);
    assert_close("EXP(1)", std::f64::consts::E);
    assert_close("EXP(0)+SQR(16)", 5.0);
}

#[test]
fn mismatched_parens_are_rejected() {
    assert!(matches!(validation_error_of("3+4)"),
                     ValidationError::MismatchedParens { position: 3 }));
    assert!(matches!(validation_error_of("(3+4"),
                     ValidationError::MismatchedParens { .. }));
    assert!(matches!(validation_error_of(")3+4("),
                     ValidationError::MismatchedParens { position: 0 }));
}

#[test]
fn converter_detects_stray_open_paren() {
    // Fed directly to the converter, skipping validation, the unclosed
    // group surfaces while draining the operator stack.
    let tokens = tokenize("(3+4").unwrap();
    assert!(matches!(to_postfix(&tokens),
                     Err(ConversionError::MismatchedParens { .. })));
}

#[test]
fn adjacent_operators_are_rejected() {
    assert!(matches!(validation_error_of("3++4"),
                     ValidationError::InvalidOperatorPlacement { position: 1 }));
    assert!(matches!(validation_error_of("3+4**2"),
                     ValidationError::InvalidOperatorPlacement { .. }));
}

#[test]
fn leading_and_trailing_operators_are_rejected() {
    assert!(matches!(validation_error_of("+3"),
                     ValidationError::InvalidOperatorPlacement { position: 0 }));
    assert!(matches!(validation_error_of("3+"),
                     ValidationError::InvalidOperatorPlacement { .. }));
}

#[test]
fn unknown_function_names_are_rejected() {
    match validation_error_of("INVALID(2-1)") {
        ValidationError::InvalidToken { token, position } => {
            assert_eq!(token, "INVALID");
            assert_eq!(position, 0);
        },
        other => panic!("expected InvalidToken, got {other}"),
    }
    // Function names are case-sensitive.
    assert!(matches!(validation_error_of("sin(30)"),
                     ValidationError::InvalidToken { .. }));
}

#[test]
fn function_without_parenthesized_argument_is_rejected() {
    assert!(matches!(validation_error_of("SIN 30"),
                     ValidationError::InvalidFunctionCall { .. }));
    assert!(matches!(validation_error_of("SIN+3"),
                     ValidationError::InvalidFunctionCall { .. }));
}

#[test]
fn malformed_number_is_a_lex_error() {
    assert!(matches!(tokenize("1.2.3"),
                     Err(LexError::InvalidNumber { .. })));
}

#[test]
fn unrecognized_characters_are_dropped() {
    assert_value("3+$4", 7.0);
    assert_value("3 + 4 #", 7.0);
}

#[test]
fn division_by_zero_follows_float_semantics() {
    assert!(evaluate("1/0").unwrap().is_infinite());
    assert!(evaluate("0/0").unwrap().is_nan());
}

#[test]
fn empty_input_has_no_value() {
    assert!(matches!(evaluate(""),
                     Err(postfixa::error::Error::Eval(EvalError::MalformedExpression { remaining: 0 }))));
    assert!(evaluate("   ").is_err());
}

#[test]
fn missing_operand_surfaces_during_evaluation() {
    // "(3+)" is structurally acceptable to the validator; the defect is
    // only observable once the reduced stack runs dry.
    assert!(matches!(evaluate("(3+)"),
                     Err(postfixa::error::Error::Eval(EvalError::InsufficientOperands { .. }))));
}

#[test]
fn evaluator_rejects_non_postfix_tokens() {
    let leftover = vec![Token::Number(1.0), Token::Number(2.0)];
    assert!(matches!(evaluate_postfix(&leftover),
                     Err(EvalError::MalformedExpression { remaining: 2 })));

    let starved = vec![Token::Number(1.0), Token::Operator(Operator::Add)];
    assert!(matches!(evaluate_postfix(&starved),
                     Err(EvalError::InsufficientOperands { position: 1 })));

    let unknown = vec![Token::Identifier("INVALID".to_string())];
    assert!(matches!(evaluate_postfix(&unknown),
                     Err(EvalError::UnknownFunction { .. })));

    let paren = vec![Token::LeftParen];
    assert!(matches!(evaluate_postfix(&paren),
                     Err(EvalError::UnexpectedToken { .. })));
}

#[test]
fn evaluation_is_idempotent() {
    let tokens = tokenize("SIN(3+4)*COS(2-1)").unwrap();
    validate(&tokens).unwrap();
    let converted = to_postfix(&tokens).unwrap();

    let first = evaluate_postfix(&converted).unwrap();
    let second = evaluate_postfix(&converted).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}
