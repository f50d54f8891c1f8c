#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token sequence.
pub enum SyntaxError {
    /// The token sequence was empty.
    NothingToParse,
    /// Found a token that cannot start or continue the current rule.
    UnexpectedToken {
        /// The lexeme encountered.
        lexeme:   String,
        /// Offset of the token in the source text.
        offset:   usize,
        /// What the grammar required at this point.
        expected: &'static str,
    },
    /// Reached the end of the token sequence while an operand was required.
    UnexpectedEndOfInput {
        /// What the grammar required at this point.
        expected: &'static str,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Offset of the `(` left open.
        open_offset: usize,
        /// The token found instead, with its offset. `None` at end of input.
        found:       Option<(String, usize)>,
    },
    /// Found extra tokens after a complete expression.
    UnexpectedTrailingTokens {
        /// The first extra lexeme.
        lexeme: String,
        /// Offset of the first extra token.
        offset: usize,
    },
    /// Parentheses were nested deeper than the configured limit.
    NestingTooDeep {
        /// Offset of the `(` that crossed the limit.
        offset: usize,
    },
}

impl SyntaxError {
    /// Gets the source offset the error points at, if it has one.
    ///
    /// ## Example
    /// ```
    /// use reckon::error::SyntaxError;
    ///
    /// let error = SyntaxError::UnexpectedTrailingTokens { lexeme: ")".to_string(),
    ///                                                     offset: 4, };
    ///
    /// assert_eq!(error.offset(), Some(4));
    /// assert_eq!(SyntaxError::NothingToParse.offset(), None);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::NothingToParse | Self::UnexpectedEndOfInput { .. } => None,
            Self::ExpectedClosingParen { open_offset, .. } => Some(*open_offset),
            Self::UnexpectedToken { offset, .. }
            | Self::UnexpectedTrailingTokens { offset, .. }
            | Self::NestingTooDeep { offset, .. } => Some(*offset),
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NothingToParse => write!(f, "Nothing to parse."),

            Self::UnexpectedToken { lexeme,
                                    offset,
                                    expected, } => {
                write!(f, "Expected {expected} at offset {offset}, found '{lexeme}'.")
            },

            Self::UnexpectedEndOfInput { expected } => {
                write!(f, "Unexpected end of input, expected {expected}.")
            },

            Self::ExpectedClosingParen { open_offset,
                                         found: Some((lexeme, offset)), } => write!(f,
                                                                                   "Expected closing parenthesis ')' for '(' at offset {open_offset}, found '{lexeme}' at offset {offset}."),

            Self::ExpectedClosingParen { open_offset,
                                         found: None, } => write!(f,
                                                                  "Expected closing parenthesis ')' for '(' at offset {open_offset} but none found."),

            Self::UnexpectedTrailingTokens { lexeme, offset } => write!(f,
                                                                        "Trailing tokens after expression, starting with '{lexeme}' at offset {offset}."),

            Self::NestingTooDeep { offset } => {
                write!(f, "Parentheses nested too deep at offset {offset}.")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
