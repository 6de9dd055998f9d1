use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{binary, function, unary},
        value::Value,
    },
    token::Token,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Reduces a postfix token sequence to a single value.
///
/// Operands are pushed onto a stack; every operator or function pops the
/// operands it needs, applies, and pushes the freshly computed numeral
/// back. A well-formed expression leaves exactly one value behind, which
/// moves to the caller; the stack's remaining bookkeeping is dropped.
///
/// # Errors
/// - [`EvalError::MissingOperand`] when an operator or function has too few
///   staged operands.
/// - [`EvalError::LeftoverOperands`] when the input is exhausted without
///   reducing to exactly one value.
/// - Any domain failure raised by the individual operations.
///
/// # Example
/// ```
/// use shunt::interpreter::{evaluator::core::evaluate, lexer::tokenize, postfix::convert,
///                          value::Value};
///
/// let postfix = convert(tokenize("2 + 3 * 4").unwrap()).unwrap();
/// assert_eq!(evaluate(postfix).unwrap(), Value::Integer(14));
/// ```
pub fn evaluate(postfix: Vec<(Token, usize)>) -> EvalResult<Value> {
    let mut operands: Vec<Value> = Vec::new();

    for (token, position) in postfix {
        match token {
            Token::Integer(value) => operands.push(Value::Integer(value)),
            Token::Float(value) => operands.push(Value::Float(value)),

            Token::Binary(op) => {
                // The right-hand operand was pushed last.
                let right = pop_operand(&mut operands, op.symbol(), position)?;
                let left = pop_operand(&mut operands, op.symbol(), position)?;
                operands.push(binary::apply(op, left, right, position)?);
            },

            Token::Unary(op) => {
                let value = pop_operand(&mut operands, op.symbol(), position)?;
                operands.push(unary::apply(op, value, position)?);
            },

            Token::Function(func) => {
                let argument = pop_operand(&mut operands, func.name(), position)?;
                operands.push(function::apply(func, argument, position)?);
            },

            Token::LParen | Token::RParen => {
                return Err(EvalError::UnexpectedToken { position });
            },
        }
    }

    match operands.as_slice() {
        &[result] => Ok(result),
        leftover => Err(EvalError::LeftoverOperands { count: leftover.len() }),
    }
}

/// Pops the topmost staged operand for `operator`.
fn pop_operand(operands: &mut Vec<Value>,
               operator: &'static str,
               position: usize)
               -> EvalResult<Value> {
    operands.pop()
            .ok_or(EvalError::MissingOperand { operator, position })
}
