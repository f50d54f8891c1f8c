use crate::interpreter::value::Number;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors raised by the semantic checks.
pub enum SemanticError {
    /// Parentheses do not balance.
    UnbalancedParentheses {
        /// Offset of the stray `)` or of the first `(` left unclosed.
        offset: usize,
    },
    /// A `/` is immediately followed by a literal zero.
    DivisionByZeroLiteral {
        /// Offset of the zero literal.
        offset: usize,
    },
    /// The evaluated result lies outside `[-ceiling, ceiling]`.
    MagnitudeExceeded {
        /// The rejected result.
        value:   Number,
        /// The configured ceiling.
        ceiling: f64,
    },
    /// A literal or an intermediate result left the range of finite numbers,
    /// so it lies beyond any ceiling.
    MagnitudeOutOfRange {
        /// Offset of the literal or operator that overflowed.
        offset:  usize,
        /// The configured ceiling.
        ceiling: f64,
    },
}

impl SemanticError {
    /// Gets the source offset the error points at, if it has one.
    ///
    /// The bound check runs on a value rather than on tokens, so
    /// [`SemanticError::MagnitudeExceeded`] carries no offset. An overflow
    /// points at the literal or operator where the value left the finite
    /// range.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::UnbalancedParentheses { offset }
            | Self::DivisionByZeroLiteral { offset }
            | Self::MagnitudeOutOfRange { offset, .. } => Some(*offset),
            Self::MagnitudeExceeded { .. } => None,
        }
    }
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnbalancedParentheses { offset } => {
                write!(f, "Unbalanced parentheses at offset {offset}.")
            },
            Self::DivisionByZeroLiteral { offset } => {
                write!(f, "Division by zero literal at offset {offset}.")
            },
            Self::MagnitudeExceeded { value, ceiling } => write!(f,
                                                                 "Result {value} exceeds allowed magnitude of {ceiling}."),
            Self::MagnitudeOutOfRange { offset, ceiling } => write!(f,
                                                                    "Value at offset {offset} exceeds allowed magnitude of {ceiling}."),
        }
    }
}

impl std::error::Error for SemanticError {}
