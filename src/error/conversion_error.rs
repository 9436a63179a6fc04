#[derive(Debug)]
/// Represents the errors the infix-to-postfix conversion can raise.
pub enum ConversionError {
    /// A closing parenthesis found no matching opener on the operator
    /// stack, or an opener was still on the stack after all input was
    /// consumed.
    MismatchedParens {
        /// The token position where the mismatch surfaced (one past the
        /// last token when found while draining the stack).
        position: usize,
    },
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MismatchedParens { position } => {
                write!(f, "Error at token {position}: Mismatched parentheses.")
            },
        }
    }
}

impl std::error::Error for ConversionError {}
