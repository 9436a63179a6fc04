/// The lexer module tokenizes raw expression text.
///
/// The lexer scans the input left to right and produces the typed tokens the
/// rest of the pipeline consumes: numbers, operators, functions, bare
/// identifiers, and parentheses. It also resolves the unary-minus ambiguity
/// at scan time, tracking an explicit expect-operand state.
///
/// # Responsibilities
/// - Converts the character stream into typed tokens, skipping whitespace.
/// - Decides whether each `-` is a negation or a subtraction.
/// - Defines the operator precedence table and the recognized function set.
pub mod lexer;

/// The validator module checks token sequences for structural defects.
///
/// The validator makes a single linear pass over a token sequence before it
/// is handed to the converter, confirming parenthesis balance, operator
/// placement, and function-call syntax. It reports the first defect found
/// and nothing after it.
///
/// # Responsibilities
/// - Accepts or rejects a token sequence in O(n), without mutating it.
/// - Names the defect kind and the token position where it was found.
pub mod validator;

/// The converter module turns infix token sequences into postfix.
///
/// The converter runs the shunting-yard algorithm over a validated token
/// sequence, using a call-local operator stack and output queue. Operator
/// precedence and associativity decide emission order; functions bind to the
/// parenthesized group that follows them.
///
/// # Responsibilities
/// - Produces a postfix sequence that needs no parentheses.
/// - Keeps `^` right-associative and `+ - * /` left-associative.
/// - Detects parenthesis mismatches that survive to this stage.
pub mod converter;

/// The evaluator module reduces postfix sequences to numbers.
///
/// The evaluator processes a postfix sequence left to right with a value
/// stack, applying operators to the top two values and functions to the top
/// one. Trigonometric functions interpret their operand in degrees.
///
/// # Responsibilities
/// - Computes the numeric value of a postfix sequence.
/// - Reports underflow of the value stack and leftover operands.
pub mod evaluator;
