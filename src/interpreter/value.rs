#[derive(Debug, Clone, Copy, PartialEq)]
/// Represents a resolved numeral flowing through the evaluator.
///
/// Every operand is either a 32-bit integer or a 64-bit float; the two
/// kinds never mix inside one value. Mixed-kind operations promote the
/// integer side to floating point first.
pub enum Value {
    /// A 32-bit signed integer.
    Integer(i32),
    /// A 64-bit floating-point number.
    Float(f64),
}

impl Value {
    /// Returns the value as a float. Every 32-bit integer is exactly
    /// representable as an `f64`, so the conversion is lossless.
    #[must_use]
    pub fn as_float(self) -> f64 {
        match self {
            Self::Integer(value) => f64::from(value),
            Self::Float(value) => value,
        }
    }

    /// Renders the final result the way the caller prints it: integers in
    /// decimal, floats in normalized scientific notation.
    ///
    /// # Example
    /// ```
    /// use shunt::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(-14).render(), "-14");
    /// assert_eq!(Value::Float(3.5).render(), "3.5e0");
    /// ```
    #[must_use]
    pub fn render(self) -> String {
        match self {
            Self::Integer(value) => value.to_string(),
            Self::Float(value) => format!("{value:e}"),
        }
    }
}
