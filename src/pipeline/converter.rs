use crate::{
    error::ConversionError,
    pipeline::lexer::{Associativity, Operator, Token},
};

/// Result type used by the converter.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Converts an infix token sequence to postfix with the shunting-yard
/// algorithm.
///
/// The operator stack and output queue live only for the duration of the
/// call. Per token:
/// - A number goes straight to the output.
/// - A function or `(` is pushed onto the operator stack.
/// - A `)` pops operators to the output until the matching `(` is popped and
///   discarded; if a function is then on top, it is popped to the output as
///   well, binding it to the group just closed.
/// - An operator pops higher-binding operators off the stack before being
///   pushed itself (see [`should_pop`] for the tie-break that keeps `^`
///   right-associative).
///
/// Once the input is consumed, the remaining stack drains to the output.
/// Every `(` still on the stack at any point corresponds to an opening
/// parenthesis not yet matched in the input.
///
/// Callers are expected to validate the sequence first; on unvalidated
/// input, mismatched parentheses are still detected here, but other
/// structural defects only surface later, during evaluation.
///
/// # Errors
/// Returns [`ConversionError::MismatchedParens`] when a `)` finds no `(` on
/// the stack, or a stray `(` turns up while draining.
///
/// # Example
/// ```
/// use postfixa::pipeline::{converter::to_postfix, lexer::{render, tokenize}};
///
/// let tokens = tokenize("2^3^2").unwrap();
/// let postfix = to_postfix(&tokens).unwrap();
/// assert_eq!(render(&postfix), "2 3 2 ^ ^");
/// ```
pub fn to_postfix(tokens: &[Token]) -> ConversionResult<Vec<Token>> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for (position, token) in tokens.iter().enumerate() {
        match token {
            Token::Number(_) | Token::Identifier(_) => output.push(token.clone()),
            Token::Function(_) | Token::LeftParen => stack.push(token.clone()),
            Token::RightParen => {
                loop {
                    match stack.pop() {
                        Some(Token::LeftParen) => break,
                        Some(top) => output.push(top),
                        None => {
                            return Err(ConversionError::MismatchedParens { position });
                        },
                    }
                }
                if matches!(stack.last(), Some(Token::Function(_)))
                   && let Some(func) = stack.pop()
                {
                    output.push(func);
                }
            },
            Token::Operator(op) => {
                loop {
                    if let Some(&Token::Operator(top)) = stack.last()
                       && should_pop(*op, top)
                    {
                        stack.pop();
                        output.push(Token::Operator(top));
                        continue;
                    }
                    break;
                }
                stack.push(token.clone());
            },
        }
    }

    while let Some(top) = stack.pop() {
        if top == Token::LeftParen {
            return Err(ConversionError::MismatchedParens { position: tokens.len() });
        }
        output.push(top);
    }

    Ok(output)
}

/// Decides whether the operator on top of the stack must be emitted before
/// `incoming` is pushed.
///
/// A left-associative incoming operator yields to anything of equal or
/// higher precedence; a right-associative one yields only to strictly
/// higher precedence. The strict comparison is what leaves an equal-
/// precedence `^` on the stack, so `2^3^2` groups as `2^(3^2)`.
#[must_use]
pub const fn should_pop(incoming: Operator, top: Operator) -> bool {
    match incoming.associativity() {
        Associativity::Left => top.precedence() >= incoming.precedence(),
        Associativity::Right => top.precedence() > incoming.precedence(),
    }
}
