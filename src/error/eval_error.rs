use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while reducing a postfix expression
/// to a value.
pub enum EvalError {
    /// An operator or function had too few staged operands.
    MissingOperand {
        /// The operator or function that needed the operand.
        operator: &'static str,
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// The reduction did not leave exactly one value behind.
    LeftoverOperands {
        /// How many values remained on the operand stack.
        count: usize,
    },
    /// A token that cannot appear in postfix order was encountered.
    UnexpectedToken {
        /// Byte offset of the token in the source.
        position: usize,
    },
    /// Attempted division or remainder by zero.
    DivisionByZero {
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// Dividing the minimum representable integer by negative one.
    Overflow {
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// Exponentiation with a negative integer exponent.
    NegativeExponent {
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// A shift amount outside the operand's bit width.
    ShiftOutOfRange {
        /// The shift amount that was requested.
        amount:   i32,
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// An integer-only operator was applied to a floating-point operand.
    FloatOperand {
        /// The operator symbol.
        operator: &'static str,
        /// Byte offset of the operator in the source.
        position: usize,
    },
    /// Square root of a negative number.
    NegativeSquareRoot {
        /// Byte offset of the function name in the source.
        position: usize,
    },
    /// Base-2 logarithm of zero or a negative number.
    NonPositiveLogarithm {
        /// Byte offset of the function name in the source.
        position: usize,
    },
}

impl EvalError {
    /// Returns the failure category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingOperand { .. } | Self::LeftoverOperands { .. } => ErrorKind::Structural,

            Self::UnexpectedToken { .. } => ErrorKind::Syntax,

            Self::DivisionByZero { .. }
            | Self::Overflow { .. }
            | Self::NegativeExponent { .. }
            | Self::ShiftOutOfRange { .. }
            | Self::FloatOperand { .. }
            | Self::NegativeSquareRoot { .. }
            | Self::NonPositiveLogarithm { .. } => ErrorKind::Domain,
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingOperand { operator, position } => write!(f,
                                                                  "Error at offset {position}: Too few operands for '{operator}'."),

            Self::LeftoverOperands { count } => write!(f,
                                                       "Error: Expression reduced to {count} values instead of one."),

            Self::UnexpectedToken { position } => {
                write!(f, "Error at offset {position}: Token cannot appear in postfix order.")
            },

            Self::DivisionByZero { position } => {
                write!(f, "Error at offset {position}: Division by zero.")
            },

            Self::Overflow { position } => write!(f,
                                                  "Error at offset {position}: Integer overflow while trying to compute result."),

            Self::NegativeExponent { position } => {
                write!(f, "Error at offset {position}: Exponent must not be negative.")
            },

            Self::ShiftOutOfRange { amount, position } => write!(f,
                                                                 "Error at offset {position}: Shift amount {amount} is outside the range 0..32."),

            Self::FloatOperand { operator, position } => write!(f,
                                                                "Error at offset {position}: Operator '{operator}' requires integer operands."),

            Self::NegativeSquareRoot { position } => {
                write!(f, "Error at offset {position}: Square root of a negative number.")
            },

            Self::NonPositiveLogarithm { position } => write!(f,
                                                              "Error at offset {position}: Logarithm requires a positive argument."),
        }
    }
}

impl std::error::Error for EvalError {}
