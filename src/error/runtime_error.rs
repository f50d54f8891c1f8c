#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
pub enum ArithmeticError {
    /// Attempted division by a zero-valued right operand.
    DivisionByZero {
        /// Offset of the `/` operator in the source text.
        offset: usize,
    },
    /// A literal or an operation produced a value that is not a finite number.
    Overflow {
        /// Offset of the literal or operator in the source text.
        offset: usize,
    },
}

impl ArithmeticError {
    /// Gets the source offset of the failing literal or operator.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::DivisionByZero { offset } | Self::Overflow { offset } => *offset,
        }
    }
}

impl std::fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { offset } => write!(f, "Division by zero at offset {offset}."),
            Self::Overflow { offset } => write!(f, "Numeric overflow at offset {offset}."),
        }
    }
}

impl std::error::Error for ArithmeticError {}
