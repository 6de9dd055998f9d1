use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::Value},
    token::BinaryOp,
};

/// Applies a binary operator to two operands.
///
/// If either operand is floating-point the operation is carried out in
/// floating point, which restricts the operator to the arithmetic family:
/// the bitwise, shift and remainder operators reject float operands. Two
/// integer operands stay in 32-bit integer arithmetic, where `+`, `-`, `*`
/// and `**` wrap modulo 2^32.
///
/// # Parameters
/// - `op`: The binary operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `position`: Byte offset of the operator for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the computed numeral.
///
/// # Example
/// ```
/// use shunt::{interpreter::{evaluator::binary, value::Value}, token::BinaryOp};
///
/// let result = binary::apply(BinaryOp::Mul, Value::Integer(6), Value::Integer(7), 0).unwrap();
/// assert_eq!(result, Value::Integer(42));
///
/// let result = binary::apply(BinaryOp::Add, Value::Integer(1), Value::Float(2.5), 0).unwrap();
/// assert_eq!(result, Value::Float(3.5));
/// ```
pub fn apply(op: BinaryOp, left: Value, right: Value, position: usize) -> EvalResult<Value> {
    match (left, right) {
        (Value::Float(_), _) | (_, Value::Float(_)) => {
            if !op.supports_float() {
                return Err(EvalError::FloatOperand { operator: op.symbol(),
                                                     position });
            }
            apply_float(op, left.as_float(), right.as_float(), position)
        },
        (Value::Integer(a), Value::Integer(b)) => apply_integer(op, a, b, position),
    }
}

/// Evaluates the arithmetic family in floating point.
fn apply_float(op: BinaryOp, left: f64, right: f64, position: usize) -> EvalResult<Value> {
    use BinaryOp::{Add, Div, Mul, Pow, Sub};

    let result = match op {
        Add => left + right,
        Sub => left - right,
        Mul => left * right,
        Div => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero { position });
            }
            left / right
        },
        Pow => left.powf(right),
        _ => unreachable!(),
    };

    Ok(Value::Float(result))
}

/// Evaluates any binary operator on two 32-bit integers.
fn apply_integer(op: BinaryOp, left: i32, right: i32, position: usize) -> EvalResult<Value> {
    use BinaryOp::{Add, BitAnd, BitOr, BitXor, Div, Mul, Pow, Rem, Shl, Shr, Sub};

    let result = match op {
        Add => left.wrapping_add(right),
        Sub => left.wrapping_sub(right),
        Mul => left.wrapping_mul(right),

        Pow => {
            if right < 0 {
                return Err(EvalError::NegativeExponent { position });
            }
            left.wrapping_pow(right.unsigned_abs())
        },

        Div => {
            if right == 0 {
                return Err(EvalError::DivisionByZero { position });
            }
            if left == i32::MIN && right == -1 {
                return Err(EvalError::Overflow { position });
            }
            left / right
        },

        Rem => {
            if right == 0 {
                return Err(EvalError::DivisionByZero { position });
            }
            // i32::MIN % -1 wraps to 0 instead of trapping
            left.wrapping_rem(right)
        },

        Shl => left << shift_amount(right, position)?,
        Shr => left >> shift_amount(right, position)?,

        BitAnd => left & right,
        BitXor => left ^ right,
        BitOr => left | right,
    };

    Ok(Value::Integer(result))
}

/// Validates a shift amount against the 32-bit operand width.
fn shift_amount(amount: i32, position: usize) -> EvalResult<i32> {
    if (0..32).contains(&amount) {
        Ok(amount)
    } else {
        Err(EvalError::ShiftOutOfRange { amount, position })
    }
}
