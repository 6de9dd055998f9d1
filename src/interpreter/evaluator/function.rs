use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, value::Value},
    token::Function,
};

/// Applies a built-in function to its single operand.
///
/// Functions always work in floating point: an integer operand is converted
/// first, and the result is always a float. `sqrt` rejects negative input
/// and `log2` rejects non-positive input; the trigonometric functions
/// accept any argument.
///
/// # Parameters
/// - `function`: The function to apply.
/// - `argument`: The operand.
/// - `position`: Byte offset of the function name for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing the computed float.
///
/// # Example
/// ```
/// use shunt::{interpreter::{evaluator::function, value::Value}, token::Function};
///
/// let result = function::apply(Function::Sqrt, Value::Integer(9), 0).unwrap();
/// assert_eq!(result, Value::Float(3.0));
/// ```
pub fn apply(function: Function, argument: Value, position: usize) -> EvalResult<Value> {
    let x = argument.as_float();

    let result = match function {
        Function::Sqrt => {
            if x < 0.0 {
                return Err(EvalError::NegativeSquareRoot { position });
            }
            x.sqrt()
        },

        Function::Log2 => {
            if x <= 0.0 {
                return Err(EvalError::NonPositiveLogarithm { position });
            }
            x.log2()
        },

        Function::Sin => x.sin(),
        Function::Cos => x.cos(),
        Function::Tan => x.tan(),
    };

    Ok(Value::Float(result))
}
