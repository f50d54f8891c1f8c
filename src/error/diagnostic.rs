use crate::error::{ArithmeticError, LexError, SemanticError, SyntaxError};

/// The four mutually exclusive failure categories of an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No token rule matched.
    Lexical,
    /// The grammar was violated.
    Syntax,
    /// Evaluation failed.
    Arithmetic,
    /// A structural or bound check rejected the input.
    Semantic,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical => write!(f, "Lexical error"),
            Self::Syntax => write!(f, "Syntax error"),
            Self::Arithmetic => write!(f, "Arithmetic error"),
            Self::Semantic => write!(f, "Semantic error"),
        }
    }
}

/// A terminal, user-facing failure of one analysis.
///
/// Produced by converting whichever phase error stopped the pipeline. It is
/// never a partial result: once a `Diagnostic` exists no later stage runs.
///
/// ## Example
/// ```
/// use reckon::error::{Diagnostic, ErrorKind, LexError};
///
/// let diagnostic = Diagnostic::from(LexError::UnexpectedCharacter { character: '&',
///                                                                   offset:    2, });
///
/// assert_eq!(diagnostic.kind, ErrorKind::Lexical);
/// assert_eq!(diagnostic.offset, Some(2));
/// assert_eq!(diagnostic.to_string(),
///            "Lexical error: Unexpected character '&' at offset 2.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Which stage failed.
    pub kind:    ErrorKind,
    /// Human-readable description of the failure.
    pub message: String,
    /// Offset in the source text the failure points at, when known.
    pub offset:  Option<usize>,
}

impl From<LexError> for Diagnostic {
    fn from(error: LexError) -> Self {
        Self { kind:    ErrorKind::Lexical,
               message: error.to_string(),
               offset:  Some(error.offset()), }
    }
}

impl From<SyntaxError> for Diagnostic {
    fn from(error: SyntaxError) -> Self {
        Self { kind:    ErrorKind::Syntax,
               message: error.to_string(),
               offset:  error.offset(), }
    }
}

impl From<ArithmeticError> for Diagnostic {
    fn from(error: ArithmeticError) -> Self {
        Self { kind:    ErrorKind::Arithmetic,
               message: error.to_string(),
               offset:  Some(error.offset()), }
    }
}

impl From<SemanticError> for Diagnostic {
    fn from(error: SemanticError) -> Self {
        Self { kind:    ErrorKind::Semantic,
               message: error.to_string(),
               offset:  error.offset(), }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Diagnostic {}
