#[derive(Debug)]
/// Represents the errors that can occur while scanning expression text.
pub enum LexError {
    /// A digit/decimal-point run did not form a valid number.
    InvalidNumber {
        /// The literal text as it appeared in the source.
        literal:  String,
        /// The byte offset where the literal starts.
        position: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNumber { literal, position } => {
                write!(f, "Error at offset {position}: Invalid number literal '{literal}'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
