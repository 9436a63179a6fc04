use logos::Logos;

use crate::error::LexError;

/// Represents a raw lexical token produced by the scanner.
///
/// Raw tokens are positional and context-free: a `-` is always `Minus` here,
/// whether it negates a literal or subtracts. The second tokenization pass
/// ([`tokenize`]) resolves that ambiguity and produces [`Token`]s.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    /// Maximal run of digits and decimal points, such as `42` or `3.14`.
    /// A run that is not a valid number (such as `1.2.3`) fails the callback
    /// and surfaces as [`LexError::InvalidNumber`].
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// Maximal run of ASCII letters; a function name or a bare identifier.
    #[regex(r"[A-Za-z]+", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Parses a numeric literal from the current token slice.
fn parse_number(lex: &logos::Lexer<RawToken>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Represents a fully classified token of an expression.
///
/// Tokens carry their discriminant from construction: an operator is an
/// [`Operator`], a recognized function is a [`Function`], and a letter run
/// that names neither is kept as `Identifier` so the validator can reject it.
/// Later stages never re-classify token text.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /// A numeric literal, possibly negative when the tokenizer folded a
    /// unary minus into it.
    Number(f64),
    /// A binary operator.
    Operator(Operator),
    /// A recognized function name.
    Function(Function),
    /// A letter run that is not in the function set.
    Identifier(String),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Function(func) => write!(f, "{func}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
        }
    }
}

/// Represents a binary operator together with its fixed precedence and
/// associativity.
///
/// The table is immutable and process-wide:
///
/// | Operator | Precedence | Associativity |
/// |----------|------------|---------------|
/// | `+` `-`  | 1          | left          |
/// | `*` `/`  | 2          | left          |
/// | `^`      | 3          | right         |
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl Operator {
    /// Returns the binding strength of the operator. Higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }

    /// Returns the grouping direction used to break ties between operators
    /// of equal precedence. Only exponentiation groups rightward.
    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Pow => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Returns the operator symbol as written in source.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The tie-break direction for operators of equal precedence.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Associativity {
    /// Equal-precedence chains group leftward: `8-4-2` is `(8-4)-2`.
    Left,
    /// Equal-precedence chains group rightward: `2^3^2` is `2^(3^2)`.
    Right,
}

/// Represents a recognized unary function.
///
/// Each function takes exactly one argument, supplied by the parenthesized
/// group that follows its name.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Function {
    /// `EXP` — the natural exponential.
    Exp,
    /// `SQR` — the square root.
    Sqr,
    /// `SIN` — sine of an angle given in degrees.
    Sin,
    /// `COS` — cosine of an angle given in degrees.
    Cos,
}

impl Function {
    /// Looks up a function by its source-level name.
    ///
    /// Names are matched exactly; `sin` is not `SIN` and stays a bare
    /// identifier for the validator to reject.
    ///
    /// # Example
    /// ```
    /// use postfixa::pipeline::lexer::Function;
    ///
    /// assert_eq!(Function::from_name("SIN"), Some(Function::Sin));
    /// assert_eq!(Function::from_name("sin"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "EXP" => Some(Self::Exp),
            "SQR" => Some(Self::Sqr),
            "SIN" => Some(Self::Sin),
            "COS" => Some(Self::Cos),
            _ => None,
        }
    }

    /// Returns the function name as written in source.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exp => "EXP",
            Self::Sqr => "SQR",
            Self::Sin => "SIN",
            Self::Cos => "COS",
        }
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Controls how the tokenizer rewrites a unary minus.
///
/// Both readings are internally consistent; one must be chosen per
/// tokenization. The fold form is canonical.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum UnaryMinusPolicy {
    /// Fold the minus into the following numeric literal: `-3+4` tokenizes
    /// as `Number(-3), Operator(+), Number(4)`. When the operand that
    /// follows is not a numeric literal (such as `-(3+4)`), a zero operand
    /// is synthesized instead so the expression still evaluates.
    #[default]
    FoldIntoLiteral,
    /// Always rewrite the minus as a subtraction from zero: `-3+4`
    /// tokenizes as `Number(0), Operator(-), Number(3), Operator(+),
    /// Number(4)`.
    SynthesizeZero,
}

/// Tokenizes an expression using the canonical unary-minus policy.
///
/// Scans left to right, skipping whitespace. Digit/decimal-point runs become
/// numbers, letter runs become functions or bare identifiers, and operators
/// and parentheses become single tokens. A `-` is unary when and only when
/// it appears at the start of the expression, immediately after another
/// operator, or immediately after `(`; everywhere else it is binary
/// subtraction.
///
/// Characters the scanner does not recognize are silently dropped. This is a
/// documented permissiveness of the lexical stage, not a defect: structural
/// problems are the validator's concern.
///
/// # Errors
/// Returns [`LexError::InvalidNumber`] when a digit/decimal-point run does
/// not form a valid number, such as `1.2.3`.
///
/// # Example
/// ```
/// use postfixa::pipeline::lexer::{Token, tokenize};
///
/// let tokens = tokenize("-3+4").unwrap();
/// assert_eq!(tokens[0], Token::Number(-3.0));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    tokenize_with(source, UnaryMinusPolicy::default())
}

/// Tokenizes an expression under an explicit [`UnaryMinusPolicy`].
///
/// The unary/binary reading of `-` is decided by an explicit expect-operand
/// state: the tokenizer expects an operand at the start of input, after `(`,
/// and after any operator; it expects an operator after a number, an
/// identifier, or `)`.
///
/// # Errors
/// Returns [`LexError::InvalidNumber`] for a malformed numeric literal.
pub fn tokenize_with(source: &str, policy: UnaryMinusPolicy) -> Result<Vec<Token>, LexError> {
    let mut out = Vec::new();
    let mut lexer = RawToken::lexer(source);

    // True when the next token should be an operand; a `-` seen in this
    // state is unary.
    let mut expect_operand = true;
    // Set under the fold policy when a unary minus is waiting for the
    // literal it negates.
    let mut pending_negation = false;

    while let Some(raw) = lexer.next() {
        let Ok(raw) = raw else {
            let slice = lexer.slice();
            if slice.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
                return Err(LexError::InvalidNumber { literal:  slice.to_string(),
                                                     position: lexer.span().start, });
            }
            // Anything else unrecognized is dropped.
            continue;
        };

        match raw {
            RawToken::Number(n) => {
                if pending_negation {
                    pending_negation = false;
                    out.push(Token::Number(-n));
                } else {
                    out.push(Token::Number(n));
                }
                expect_operand = false;
            },
            RawToken::Identifier(name) => {
                flush_pending(&mut pending_negation, &mut out);
                match Function::from_name(&name) {
                    Some(func) => out.push(Token::Function(func)),
                    None => out.push(Token::Identifier(name)),
                }
                expect_operand = false;
            },
            RawToken::Minus if expect_operand => match policy {
                UnaryMinusPolicy::FoldIntoLiteral => {
                    flush_pending(&mut pending_negation, &mut out);
                    pending_negation = true;
                },
                UnaryMinusPolicy::SynthesizeZero => {
                    out.push(Token::Number(0.0));
                    out.push(Token::Operator(Operator::Sub));
                },
            },
            RawToken::Plus | RawToken::Minus | RawToken::Star | RawToken::Slash
            | RawToken::Caret => {
                flush_pending(&mut pending_negation, &mut out);
                let op = match raw {
                    RawToken::Plus => Operator::Add,
                    RawToken::Minus => Operator::Sub,
                    RawToken::Star => Operator::Mul,
                    RawToken::Slash => Operator::Div,
                    RawToken::Caret => Operator::Pow,
                    _ => unreachable!(),
                };
                out.push(Token::Operator(op));
                expect_operand = true;
            },
            RawToken::LParen => {
                flush_pending(&mut pending_negation, &mut out);
                out.push(Token::LeftParen);
                expect_operand = true;
            },
            RawToken::RParen => {
                flush_pending(&mut pending_negation, &mut out);
                out.push(Token::RightParen);
                expect_operand = false;
            },
        }
    }

    // A minus still pending at end of input leaves a trailing operator for
    // the validator to report.
    flush_pending(&mut pending_negation, &mut out);

    Ok(out)
}

/// Downgrades a pending fold into a synthesized `0 -` prefix when the token
/// that follows the unary minus turns out not to be a numeric literal.
fn flush_pending(pending: &mut bool, out: &mut Vec<Token>) {
    if *pending {
        *pending = false;
        out.push(Token::Number(0.0));
        out.push(Token::Operator(Operator::Sub));
    }
}

/// Renders a token sequence as text, tokens joined by single spaces.
///
/// This is the textual postfix form used for display and in test fixtures.
///
/// # Example
/// ```
/// use postfixa::pipeline::lexer::{render, tokenize};
///
/// let tokens = tokenize("3 + 4").unwrap();
/// assert_eq!(render(&tokens), "3 + 4");
/// ```
#[must_use]
pub fn render(tokens: &[Token]) -> String {
    tokens.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}
