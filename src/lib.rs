//! # shunt
//!
//! shunt evaluates arithmetic expressions supplied as text. It scans the
//! infix input into a token sequence, reorders that sequence into postfix
//! (Reverse Polish) form with an operator-precedence pass, and then either
//! renders the postfix form or reduces it to a single numeric result.

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

use crate::error::Error;

/// Provides unified error types for every pipeline stage.
///
/// This module defines all errors that can be raised while lexing,
/// converting, or evaluating an expression. It standardizes error reporting
/// and carries detailed information about failures, including byte offsets
/// into the source where that is meaningful.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, converter,
///   evaluator).
/// - Classifies every error into one of four kinds (syntax, structural,
///   domain, resource) so callers can map failures to exit codes.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the three stages of expression processing.
///
/// This module ties together the lexer, the infix-to-postfix converter, and
/// the postfix evaluator, along with the runtime value type they share. The
/// stages are strictly pipelined: each consumes its predecessor's output in
/// full before the next begins.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, converter, evaluator, values.
/// - Manages the flow of tokens and errors between stages.
pub mod interpreter;
/// Defines the token data model shared by all stages.
///
/// This module declares the `Token` enum and the closed operator and
/// function enums it carries. Operator precedence, associativity and
/// symbols are data on these enums, fixed at compile time; nothing
/// re-inspects lexemes after the lexer has run.
///
/// # Responsibilities
/// - Defines token, operator and function types with their precedence
///   table.
/// - Renders tokens back into lexemes for the postfix dump.
pub mod token;

/// Runs the full pipeline over one expression and returns the printable
/// result.
///
/// The expression is lexed and reordered into postfix form. With
/// `postfix_notation` set, the postfix sequence itself is rendered, one
/// lexeme per line with a trailing newline. Otherwise the sequence is
/// reduced to a single value, rendered in decimal for an integer result or
/// in normalized scientific notation for a float result.
///
/// # Errors
/// Returns an [`Error`] wrapping the failing stage's error; [`Error::kind`]
/// classifies the failure as syntax, structural, domain or resource.
///
/// # Examples
/// ```
/// use shunt::get_result;
///
/// assert_eq!(get_result("2 + 3 * 4", false).unwrap(), "14");
/// assert_eq!(get_result("1 + 2.5", false).unwrap(), "3.5e0");
///
/// // Postfix mode dumps the reordered expression instead of evaluating.
/// assert_eq!(get_result("3 + 4 * 2", true).unwrap(), "3\n4\n2\n*\n+\n");
///
/// // Example with an intentional error (division by zero).
/// assert!(get_result("5 / 0", false).is_err());
/// ```
pub fn get_result(source: &str, postfix_notation: bool) -> Result<String, Error> {
    let tokens = interpreter::lexer::tokenize(source)?;
    let postfix = interpreter::postfix::convert(tokens)?;

    if postfix_notation {
        return Ok(interpreter::postfix::render(&postfix));
    }

    let value = interpreter::evaluator::core::evaluate(postfix)?;
    Ok(value.render())
}
