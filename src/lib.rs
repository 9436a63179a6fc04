//! # postfixa
//!
//! postfixa converts arithmetic expressions written in infix notation into
//! Reverse Polish Notation (postfix) and evaluates them. It supports the
//! binary operators `+ - * / ^`, unary minus, parentheses, and the functions
//! `EXP`, `SQR`, `SIN`, and `COS` (trigonometry in degrees).
//!
//! The pipeline has four stages, each depending only on the one before it:
//! tokenization, structural validation, shunting-yard conversion, and
//! stack-based evaluation. Every stage is a pure function of its input;
//! there is no shared mutable state, so independent expressions can be
//! processed concurrently without locking.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    pipeline::{converter::to_postfix, evaluator::evaluate_postfix, lexer::render,
               lexer::tokenize, validator::validate},
};

/// Provides the typed error families for every pipeline stage.
///
/// Each stage has its own error enum — lexical, validation, conversion, and
/// evaluation — plus the umbrella [`error::Error`] returned by the
/// convenience entry points. Every error names the defect kind and carries
/// the position where it was detected.
///
/// # Responsibilities
/// - Defines error enums for all failure modes of the pipeline.
/// - Attaches token positions and offending text for diagnostics.
/// - Integrates with the standard error handling traits.
pub mod error;

/// Orchestrates the infix-to-postfix pipeline.
///
/// This module ties together the four stages — lexer, validator, converter,
/// and evaluator — and declares the token types they exchange. Each stage
/// consumes the sequence the previous one produced and yields a fresh one.
///
/// # Responsibilities
/// - Declares the pipeline stages and the `Token` data model.
/// - Keeps each stage independently callable for testing and embedding.
pub mod pipeline;

/// Evaluates an infix expression to a number.
///
/// This is the convenience composition of the whole pipeline: the source is
/// tokenized, validated, converted to postfix, and reduced on the value
/// stack. The first stage to detect a defect short-circuits the rest.
///
/// # Errors
/// Returns the first failing stage's error, wrapped in [`Error`].
///
/// # Examples
/// ```
/// use postfixa::evaluate;
///
/// assert_eq!(evaluate("3+4*2").unwrap(), 11.0);
/// assert_eq!(evaluate("8-4-2").unwrap(), 2.0);
///
/// // Structural defects are reported, not guessed around.
/// assert!(evaluate("3++4").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<f64, Error> {
    let tokens = tokenize(source)?;
    validate(&tokens)?;
    let postfix = to_postfix(&tokens)?;
    Ok(evaluate_postfix(&postfix)?)
}

/// Converts an infix expression to its textual postfix form.
///
/// The source is tokenized, validated, and converted; the resulting tokens
/// are rendered joined by single spaces. Parentheses never survive into the
/// output — precedence and associativity are encoded by token order alone.
///
/// # Errors
/// Returns the first failing stage's error, wrapped in [`Error`].
///
/// # Examples
/// ```
/// use postfixa::postfix;
///
/// assert_eq!(postfix("3+4*2/(1-5)^2^3").unwrap(), "3 4 2 * 1 5 - 2 3 ^ ^ / +");
/// assert_eq!(postfix("SIN(3+4)*COS(2-1)").unwrap(), "3 4 + SIN 2 1 - COS *");
/// ```
pub fn postfix(source: &str) -> Result<String, Error> {
    let tokens = tokenize(source)?;
    validate(&tokens)?;
    let converted = to_postfix(&tokens)?;
    Ok(render(&converted))
}
