#[derive(Debug)]
/// Represents the structural defects the validator can report.
///
/// Validation stops at the first defect; `position` is the index of the
/// offending token (or one past the last token, for an opening parenthesis
/// that was never closed).
pub enum ValidationError {
    /// A closing parenthesis had no opener, or an opener was never closed.
    MismatchedParens {
        /// The token position where the imbalance was detected.
        position: usize,
    },
    /// A binary operator was the first or last token, or was immediately
    /// followed by another binary operator.
    InvalidOperatorPlacement {
        /// The token position of the misplaced operator.
        position: usize,
    },
    /// A function name was not immediately followed by `(`.
    InvalidFunctionCall {
        /// The name of the function.
        name:     String,
        /// The token position of the function name.
        position: usize,
    },
    /// A token matched none of the recognized shapes; in practice, a letter
    /// run outside the function set.
    InvalidToken {
        /// The token text.
        token:    String,
        /// The token position.
        position: usize,
    },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MismatchedParens { position } => {
                write!(f, "Error at token {position}: Mismatched parentheses.")
            },
            Self::InvalidOperatorPlacement { position } => {
                write!(f, "Error at token {position}: Operator is misplaced.")
            },
            Self::InvalidFunctionCall { name, position } => write!(f,
                                                                   "Error at token {position}: Function '{name}' must be followed by '('."),
            Self::InvalidToken { token, position } => {
                write!(f, "Error at token {position}: Invalid token '{token}'.")
            },
        }
    }
}

impl std::error::Error for ValidationError {}
