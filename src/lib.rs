//! # numtext
//!
//! numtext evaluates arithmetic expressions over arbitrary-precision decimals
//! and converts numbers of any magnitude to and from English numeral words.
//!
//! The interpreter reads expression text in a single pass, with no separate
//! tokenizer or syntax tree, under a caller-supplied precision context. The
//! numeral converter names powers of one thousand beyond "Million" with
//! generated Latin prefixes ("Billion", "Decillion", "Millinillion").

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
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{decimal::core::Decimal, error::EvalResult, interpreter::core::Interpreter};

/// Arbitrary-precision decimal arithmetic.
///
/// This module defines the decimal value type, the precision context every
/// operation is rounded under, and the transcendental functions the
/// interpreter dispatches to.
///
/// # Responsibilities
/// - Represents values exactly as an unscaled integer and a scale.
/// - Rounds results to a number of significant digits with a chosen mode.
/// - Computes roots, logarithms, trigonometric and special functions to the
///   requested precision.
pub mod decimal;
/// Provides unified error types for evaluation and conversion.
///
/// This module defines all errors that can be raised while scanning, parsing
/// or evaluating expressions, and while converting between numbers and words.
/// Syntax errors carry the character position of the failure.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (syntax, arithmetic,
///   conversion).
/// - Unifies the failures of one interpreter call in a single type.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the evaluation of expression text.
///
/// This module ties together the character cursor, placeholder substitution,
/// the recursive-descent parser and the builtin function table. It exposes
/// the public API for evaluating arithmetic expressions and boolean
/// statements.
///
/// # Responsibilities
/// - Scans characters in both directions with backtracking marks.
/// - Substitutes named and positional placeholders.
/// - Parses and evaluates in one pass under a precision context.
pub mod interpreter;
/// Converts between numbers and English numeral words.
///
/// # Responsibilities
/// - Spells integers and fractions of any magnitude.
/// - Reads spelled numbers back, ignoring case.
/// - Generates and caches the names of large powers of one thousand.
/// - Formats numbers as a short numeral plus one magnitude word.
pub mod numeral;

/// Evaluates `text` with the default interpreter.
///
/// # Errors
/// Returns an error if the text is malformed or an operation is undefined.
///
/// # Examples
/// ```
/// use numtext::{decimal::Decimal, evaluate};
///
/// assert_eq!(evaluate("1 + 2 * 3").unwrap(), Decimal::from(7));
/// assert_eq!(evaluate("sqrt(16)").unwrap(), Decimal::from(4));
///
/// // Intentional errors: a division by zero and an unbalanced parenthesis.
/// assert!(evaluate("1/0").is_err());
/// assert!(evaluate("pow(1,2").is_err());
/// ```
pub fn evaluate(text: &str) -> EvalResult<Decimal> {
    Interpreter::default().evaluate(text)
}

/// Evaluates the boolean statement `text` with the default interpreter.
///
/// # Examples
/// ```
/// use numtext::evaluate_boolean;
///
/// assert!(evaluate_boolean("1+1=2 & 3>2").unwrap());
/// assert!(!evaluate_boolean("5<=4").unwrap());
/// ```
pub fn evaluate_boolean(text: &str) -> EvalResult<bool> {
    Interpreter::default().evaluate_boolean(text)
}
