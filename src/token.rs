/// Associativity of an operator.
///
/// Used by the infix-to-postfix conversion to decide whether an operator
/// already staged on the operator stack binds before an incoming operator of
/// equal precedence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Assoc {
    /// Left-associative: `a - b - c` groups as `(a - b) - c`.
    Left,
    /// Right-associative: `a ** b ** c` groups as `a ** (b ** c)`.
    Right,
}

/// Represents a binary operator.
///
/// Binary operators cover the arithmetic, shift and bitwise families. Each
/// variant carries its precedence and associativity as data, so the later
/// pipeline stages never re-inspect lexemes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOp {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder (`%`)
    Rem,
    /// Exponentiation (`**`)
    Pow,
    /// Left shift (`<<`)
    Shl,
    /// Right shift (`>>`)
    Shr,
    /// Bitwise and (`&`)
    BitAnd,
    /// Bitwise exclusive or (`^`)
    BitXor,
    /// Bitwise or (`|`)
    BitOr,
}

impl BinaryOp {
    /// Returns the precedence rank of the operator. Lower ranks bind tighter.
    ///
    /// The table is fixed: exponentiation binds tightest among the binary
    /// operators, then the multiplicative family, the additive family, the
    /// shifts, and finally `&`, `^` and `|` in that order.
    ///
    /// # Example
    /// ```
    /// use shunt::token::BinaryOp;
    ///
    /// assert!(BinaryOp::Mul.precedence() < BinaryOp::Add.precedence());
    /// assert!(BinaryOp::Pow.precedence() < BinaryOp::Mul.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Pow => 2,
            Self::Mul | Self::Div | Self::Rem => 3,
            Self::Add | Self::Sub => 4,
            Self::Shl | Self::Shr => 5,
            Self::BitAnd => 6,
            Self::BitXor => 7,
            Self::BitOr => 8,
        }
    }

    /// Returns the associativity of the operator.
    ///
    /// Exponentiation is right-associative; every other binary operator is
    /// left-associative.
    #[must_use]
    pub const fn associativity(self) -> Assoc {
        match self {
            Self::Pow => Assoc::Right,
            _ => Assoc::Left,
        }
    }

    /// Returns the surface symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Pow => "**",
            Self::Shl => "<<",
            Self::Shr => ">>",
            Self::BitAnd => "&",
            Self::BitXor => "^",
            Self::BitOr => "|",
        }
    }

    /// Reports whether the operator is defined on floating-point operands.
    ///
    /// Only the arithmetic family is; the bitwise, shift and remainder
    /// operators require integer operands.
    #[must_use]
    pub const fn supports_float(self) -> bool {
        matches!(self,
                 Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Pow)
    }
}

/// Represents a unary (prefix) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOp {
    /// Identity (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Negate,
    /// Bitwise complement (`~x`). Defined on integers only.
    Complement,
}

impl UnaryOp {
    /// Returns the precedence rank. All prefix operators share rank 1 and
    /// therefore bind tighter than any binary operator.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Negate | Self::Complement => 1,
        }
    }

    /// Returns the associativity. Prefix operators are right-associative, so
    /// `--x` groups as `-(-x)`.
    #[must_use]
    pub const fn associativity(self) -> Assoc {
        match self {
            Self::Plus | Self::Negate | Self::Complement => Assoc::Right,
        }
    }

    /// Returns the surface symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Complement => "~",
        }
    }
}

/// Represents a built-in function.
///
/// Functions are strictly unary-prefix: each one consumes the single operand
/// emitted after it. There is no argument-count marker in the grammar.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Function {
    /// Square root (`sqrt`).
    Sqrt,
    /// Base-2 logarithm (`log2`).
    Log2,
    /// Sine (`sin`).
    Sin,
    /// Cosine (`cos`).
    Cos,
    /// Tangent (`tan`).
    Tan,
}

impl Function {
    /// Looks up a function by its name as written in source.
    ///
    /// Returns `None` for identifiers outside the fixed allow-list.
    ///
    /// # Example
    /// ```
    /// use shunt::token::Function;
    ///
    /// assert_eq!(Function::from_name("sqrt"), Some(Function::Sqrt));
    /// assert_eq!(Function::from_name("cbrt"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sqrt" => Some(Self::Sqrt),
            "log2" => Some(Self::Log2),
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            _ => None,
        }
    }

    /// Returns the name of the function as written in source.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Log2 => "log2",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
        }
    }
}

/// Represents a classified lexical token.
///
/// This is the unit flowing through all three pipeline stages. Operator and
/// function identities are resolved once, at lex time; numerals carry their
/// parsed payloads. Tokens are plain values, so handing one from stage to
/// stage is a move or a cheap copy.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Token {
    /// An integer literal, such as `42`.
    Integer(i32),
    /// A floating-point literal, such as `2.5`.
    Float(f64),
    /// A binary operator, such as the `<<` in `1 << 4`.
    Binary(BinaryOp),
    /// A prefix operator, such as the `-` in `-5`.
    Unary(UnaryOp),
    /// A built-in function name, such as `sqrt`.
    Function(Function),
    /// `(`
    LParen,
    /// `)`
    RParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            // Debug formatting keeps a decimal point on integral floats, so
            // the lexeme re-lexes with the same kind.
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Binary(op) => write!(f, "{}", op.symbol()),
            Self::Unary(op) => write!(f, "{}", op.symbol()),
            Self::Function(function) => write!(f, "{}", function.name()),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
        }
    }
}
