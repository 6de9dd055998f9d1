/// Parsing errors.
///
/// Defines all error types that can occur while lexing an expression or
/// reordering it into postfix form. Parse errors include unrecognized
/// characters, malformed numerals, unknown function names, misused
/// operators, and unbalanced parentheses.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while reducing a postfix
/// expression: missing or leftover operands, division by zero, negative
/// exponents, out-of-range shifts, float operands to integer-only
/// operators, and function arguments outside the function's domain.
pub mod eval_error;

pub use eval_error::EvalError;
pub use parse_error::ParseError;

/// The four failure categories surfaced by the pipeline.
///
/// Every error maps to exactly one kind. Callers such as the command-line
/// front end only need the kind to choose an exit code; the error's
/// `Display` output carries the detail.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input text: an unrecognized character, a numeral with two
    /// decimal points, an oversized literal, an unknown function name, or an
    /// operator in an impossible position.
    Syntax,
    /// A well-lexed expression with an impossible shape: unbalanced
    /// parentheses, too few operands, leftover operands, or no operands at
    /// all.
    Structural,
    /// Arithmetic outside the defined domain: division by zero, a negative
    /// exponent, an out-of-range shift amount, a float operand to an
    /// integer-only operator, or a function argument outside the function's
    /// domain.
    Domain,
    /// Failure of an underlying resource, such as input that cannot be read.
    Resource,
}

#[derive(Debug, Clone, PartialEq)]
/// Any failure produced by the expression pipeline.
///
/// Wraps the stage-specific error types so the public entry point returns a
/// single error type regardless of which stage failed.
pub enum Error {
    /// The lexer or the infix-to-postfix conversion failed.
    Parse(ParseError),
    /// The postfix reduction failed.
    Eval(EvalError),
}

impl Error {
    /// Returns the failure category of the underlying error.
    ///
    /// # Example
    /// ```
    /// use shunt::{error::ErrorKind, get_result};
    ///
    /// let error = get_result("5 / 0", false).unwrap_err();
    /// assert_eq!(error.kind(), ErrorKind::Domain);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Eval(e) => e.kind(),
        }
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<EvalError> for Error {
    fn from(error: EvalError) -> Self {
        Self::Eval(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {}
