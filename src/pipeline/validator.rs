use crate::{error::ValidationError, pipeline::lexer::Token};

/// Result type used by the validator.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Checks the structural well-formedness of a token sequence.
///
/// A single linear pass over the tokens, reporting the first defect found.
/// The input is never mutated, and no partial results are produced. The
/// converter must only ever be handed sequences this function has accepted.
///
/// The rules, checked per position:
/// - Parentheses must balance: the running count of open parentheses never
///   goes negative and is zero at the end.
/// - A binary operator may not be the first or last token, and may not be
///   immediately followed by another binary operator.
/// - A function name must be immediately followed by `(`.
/// - A bare identifier (a letter run outside the function set) is invalid.
///
/// # Errors
/// - [`ValidationError::MismatchedParens`] for unbalanced parentheses.
/// - [`ValidationError::InvalidOperatorPlacement`] for a misplaced operator.
/// - [`ValidationError::InvalidFunctionCall`] for a function not followed by
///   `(`.
/// - [`ValidationError::InvalidToken`] for a bare identifier.
///
/// # Example
/// ```
/// use postfixa::pipeline::{lexer::tokenize, validator::validate};
///
/// let tokens = tokenize("SIN(3+4)").unwrap();
/// assert!(validate(&tokens).is_ok());
///
/// let tokens = tokenize("3++4").unwrap();
/// assert!(validate(&tokens).is_err());
/// ```
pub fn validate(tokens: &[Token]) -> ValidationResult<()> {
    let mut open_parens = 0usize;

    for (position, token) in tokens.iter().enumerate() {
        match token {
            Token::LeftParen => open_parens += 1,
            Token::RightParen => {
                if open_parens == 0 {
                    return Err(ValidationError::MismatchedParens { position });
                }
                open_parens -= 1;
            },
            Token::Operator(_) => {
                if position == 0 || position == tokens.len() - 1 {
                    return Err(ValidationError::InvalidOperatorPlacement { position });
                }
                if let Some(Token::Operator(_)) = tokens.get(position + 1) {
                    return Err(ValidationError::InvalidOperatorPlacement { position });
                }
            },
            Token::Function(func) => match tokens.get(position + 1) {
                Some(Token::LeftParen) => {},
                _ => {
                    return Err(ValidationError::InvalidFunctionCall { name: func.name()
                                                                                .to_string(),
                                                                      position });
                },
            },
            Token::Identifier(name) => {
                return Err(ValidationError::InvalidToken { token: name.clone(),
                                                           position });
            },
            Token::Number(_) => {},
        }
    }

    if open_parens != 0 {
        return Err(ValidationError::MismatchedParens { position: tokens.len() });
    }

    Ok(())
}
