use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::Value},
    token::UnaryOp,
};

/// Applies a prefix operator to a single operand.
///
/// `+` and `-` accept either numeral kind and preserve it; `~` is defined
/// on integers only. Negating `i32::MIN` wraps back to `i32::MIN`, matching
/// the wraparound semantics of the binary integer operators.
///
/// # Parameters
/// - `op`: The prefix operator.
/// - `value`: The operand.
/// - `position`: Byte offset of the operator for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the computed numeral.
///
/// # Example
/// ```
/// use shunt::{interpreter::{evaluator::unary, value::Value}, token::UnaryOp};
///
/// let result = unary::apply(UnaryOp::Complement, Value::Integer(5), 0).unwrap();
/// assert_eq!(result, Value::Integer(-6));
///
/// let result = unary::apply(UnaryOp::Negate, Value::Float(2.5), 0).unwrap();
/// assert_eq!(result, Value::Float(-2.5));
/// ```
pub fn apply(op: UnaryOp, value: Value, position: usize) -> EvalResult<Value> {
    match (op, value) {
        (UnaryOp::Plus, _) => Ok(value),

        (UnaryOp::Negate, Value::Integer(operand)) => Ok(Value::Integer(operand.wrapping_neg())),
        (UnaryOp::Negate, Value::Float(operand)) => Ok(Value::Float(-operand)),

        (UnaryOp::Complement, Value::Integer(operand)) => Ok(Value::Integer(!operand)),
        (UnaryOp::Complement, Value::Float(_)) => {
            Err(EvalError::FloatOperand { operator: op.symbol(),
                                          position })
        },
    }
}
