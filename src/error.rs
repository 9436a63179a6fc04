/// Lexical errors.
///
/// Defines the errors that can occur while scanning raw expression text into
/// tokens. The scanner is deliberately permissive (unrecognized characters
/// are dropped), so the only defect it reports is a malformed numeric
/// literal.
pub mod lex_error;

/// Structural validation errors.
///
/// Contains the errors raised by the linear well-formedness pass over a
/// token sequence: unbalanced parentheses, misplaced operators, bad function
/// calls, and unrecognized identifiers. Each carries the token position of
/// the first detected defect.
pub mod validation_error;

/// Infix-to-postfix conversion errors.
///
/// Contains the errors the shunting-yard conversion can raise on its own:
/// parenthesis mismatches discovered while matching groups or draining the
/// operator stack.
pub mod conversion_error;

/// Postfix evaluation errors.
///
/// Contains the errors raised while reducing a postfix sequence on the value
/// stack, such as an operator finding too few operands or leftovers on the
/// stack after the last token.
pub mod eval_error;

pub use conversion_error::ConversionError;
pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use validation_error::ValidationError;

/// Represents a failure in any stage of the expression pipeline.
///
/// This is the error type returned by the convenience entry points that
/// chain tokenization, validation, conversion, and evaluation. The pipeline
/// fails fast: the first stage to detect a defect short-circuits the rest,
/// and its error is surfaced here verbatim. All failures are deterministic
/// functions of the input; none are transient.
#[derive(Debug)]
pub enum Error {
    /// The tokenizer rejected the raw text.
    Lex(LexError),
    /// The validator found a structural defect.
    Validation(ValidationError),
    /// The converter found a parenthesis mismatch.
    Conversion(ConversionError),
    /// The evaluator could not reduce the postfix sequence.
    Eval(EvalError),
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<ConversionError> for Error {
    fn from(e: ConversionError) -> Self {
        Self::Conversion(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        Self::Eval(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Validation(e) => write!(f, "{e}"),
            Self::Conversion(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Validation(e) => Some(e),
            Self::Conversion(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
