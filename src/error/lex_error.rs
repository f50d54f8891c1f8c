#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// No token rule matches at the current scan position.
    UnexpectedCharacter {
        /// The character no rule accepts.
        character: char,
        /// Offset of the character in the source text.
        offset:    usize,
    },
}

impl LexError {
    /// Gets the source offset of the offending character.
    ///
    /// ## Example
    /// ```
    /// use reckon::error::LexError;
    ///
    /// let error = LexError::UnexpectedCharacter { character: '&',
    ///                                             offset:    2, };
    ///
    /// assert_eq!(error.offset(), 2);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { offset, .. } => *offset,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, offset } => {
                write!(f, "Unexpected character '{character}' at offset {offset}.")
            },
        }
    }
}

impl std::error::Error for LexError {}
