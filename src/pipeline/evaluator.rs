use crate::{
    error::EvalError,
    pipeline::lexer::{Function, Operator, Token},
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a postfix token sequence to a number by stack reduction.
///
/// Tokens are processed left to right against a value stack local to the
/// call. A number is pushed; an operator pops two values (the right operand
/// first, being the more recently pushed) and pushes the result; a function
/// pops one value and pushes the result. After the last token, exactly one
/// value must remain.
///
/// Division by zero is not guarded: it follows IEEE 754 semantics and
/// produces an infinity or NaN result. That is the evaluator's defined
/// behavior, not an error.
///
/// Evaluation is a pure function of its input; re-evaluating the same
/// sequence yields the same value.
///
/// # Errors
/// - [`EvalError::InsufficientOperands`] when an operator or function finds
///   too few values on the stack.
/// - [`EvalError::MalformedExpression`] when the stack does not hold exactly
///   one value at the end.
/// - [`EvalError::UnknownFunction`] when a bare identifier reaches
///   evaluation (possible only for sequences that skipped validation).
/// - [`EvalError::UnexpectedToken`] when a parenthesis appears in postfix
///   input.
///
/// # Example
/// ```
/// use postfixa::pipeline::{converter::to_postfix, evaluator::evaluate_postfix, lexer::tokenize};
///
/// let tokens = tokenize("8-4-2").unwrap();
/// let postfix = to_postfix(&tokens).unwrap();
/// assert_eq!(evaluate_postfix(&postfix).unwrap(), 2.0);
/// ```
pub fn evaluate_postfix(tokens: &[Token]) -> EvalResult<f64> {
    let mut stack: Vec<f64> = Vec::new();

    for (position, token) in tokens.iter().enumerate() {
        match token {
            Token::Number(n) => stack.push(*n),
            Token::Operator(op) => {
                let b = stack.pop()
                             .ok_or(EvalError::InsufficientOperands { position })?;
                let a = stack.pop()
                             .ok_or(EvalError::InsufficientOperands { position })?;
                stack.push(apply_operator(*op, a, b));
            },
            Token::Function(func) => {
                let x = stack.pop()
                             .ok_or(EvalError::InsufficientOperands { position })?;
                stack.push(apply_function(*func, x));
            },
            Token::Identifier(name) => {
                return Err(EvalError::UnknownFunction { name: name.clone(),
                                                        position });
            },
            Token::LeftParen | Token::RightParen => {
                return Err(EvalError::UnexpectedToken { token: token.to_string(),
                                                        position });
            },
        }
    }

    match stack.len() {
        1 => Ok(stack[0]),
        remaining => Err(EvalError::MalformedExpression { remaining }),
    }
}

/// Applies a binary operator to its operands, left operand first.
#[must_use]
pub fn apply_operator(op: Operator, a: f64, b: f64) -> f64 {
    match op {
        Operator::Add => a + b,
        Operator::Sub => a - b,
        Operator::Mul => a * b,
        Operator::Div => a / b,
        Operator::Pow => a.powf(b),
    }
}

/// Applies a unary function to its operand.
///
/// `SIN` and `COS` interpret the operand as an angle in degrees and convert
/// to radians before taking the trigonometric value.
///
/// # Example
/// ```
/// use postfixa::pipeline::{evaluator::apply_function, lexer::Function};
///
/// assert!((apply_function(Function::Sin, 30.0) - 0.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn apply_function(func: Function, x: f64) -> f64 {
    match func {
        Function::Exp => x.exp(),
        Function::Sqr => x.sqrt(),
        Function::Sin => x.to_radians().sin(),
        Function::Cos => x.to_radians().cos(),
    }
}
