/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations: integer arithmetic with
/// wraparound semantics, floating-point arithmetic for the arithmetic
/// family, and the domain checks both share.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the prefix operators: identity, arithmetic negation, and the
/// integer-only bitwise complement.
pub mod unary;

/// Core postfix reduction.
///
/// Contains the operand stack driver that consumes a postfix token
/// sequence and reduces it to a single value.
pub mod core;

/// Built-in function evaluation.
///
/// Applies the fixed set of named functions, coercing the operand to
/// floating point and checking each function's domain.
pub mod function;
