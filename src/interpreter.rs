/// The lexer module tokenizes an expression for further processing.
///
/// The lexer reads the raw source text and produces an ordered sequence of
/// classified tokens: numerals, operators, function names, and parentheses.
/// This is the first stage of the pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into tokens paired with byte
///   offsets.
/// - Resolves operator and function identity once, at lex time, including
///   the unary-vs-binary split for the sign-like operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The postfix module reorders tokens from infix to postfix form.
///
/// The converter consumes the lexer's token sequence and produces the same
/// tokens in postfix (Reverse Polish) order using the operator-precedence
/// (shunting-yard) reduction. The postfix sequence needs no parentheses or
/// precedence lookup to evaluate.
///
/// # Responsibilities
/// - Streams operands to the output and stages operators by precedence and
///   associativity.
/// - Resolves parenthesized groups and prefix functions.
/// - Reports structural errors such as unbalanced parentheses.
pub mod postfix;
/// The evaluator module reduces a postfix sequence to a single value.
///
/// The evaluator walks the postfix token sequence with an operand stack,
/// applying each operator and function as it arrives. It performs all
/// arithmetic, promotes mixed operands to floating point, and checks every
/// operation's domain.
///
/// # Responsibilities
/// - Reduces postfix token sequences with an operand stack.
/// - Performs wrapping 32-bit integer and 64-bit float arithmetic.
/// - Reports domain errors such as division by zero, and structural errors
///   such as missing operands.
pub mod evaluator;
/// The value module defines the runtime numeral type.
///
/// This module declares the `Value` enum used during evaluation: a 32-bit
/// integer or a 64-bit float, with promotion from integer to float and the
/// rendering used for final results.
///
/// # Responsibilities
/// - Defines the `Value` enum and its two numeral kinds.
/// - Provides lossless promotion to floating point.
/// - Renders results in decimal or normalized scientific notation.
pub mod value;
