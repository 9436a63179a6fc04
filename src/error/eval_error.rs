#[derive(Debug)]
/// Represents the errors that can occur while reducing a postfix sequence.
///
/// Division by zero is deliberately absent: it follows floating-point
/// semantics and yields an infinity or NaN value rather than an error.
pub enum EvalError {
    /// An operator or function found too few values on the stack.
    InsufficientOperands {
        /// The position of the token that could not be applied.
        position: usize,
    },
    /// The value stack did not hold exactly one value after the last token.
    MalformedExpression {
        /// How many values were left on the stack.
        remaining: usize,
    },
    /// A bare identifier reached evaluation.
    UnknownFunction {
        /// The identifier text.
        name:     String,
        /// The position of the identifier token.
        position: usize,
    },
    /// A token with no postfix meaning, such as a parenthesis, was found.
    UnexpectedToken {
        /// The token text.
        token:    String,
        /// The position of the token.
        position: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientOperands { position } => write!(f,
                                                              "Error at token {position}: Not enough operands on the stack."),
            Self::MalformedExpression { remaining } => write!(f,
                                                              "Error: Malformed expression; {remaining} values left on the stack."),
            Self::UnknownFunction { name, position } => {
                write!(f, "Error at token {position}: Unknown function '{name}'.")
            },
            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at token {position}: Unexpected token '{token}'.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
