use logos::Logos;

use crate::error::LexError;

/// The closed set of token kinds, doubling as the lexer's rule table.
///
/// Each variant carries the pattern that produces it, in declaration order.
/// No two patterns can start with the same character, so at any position at
/// most one rule matches and the first matching rule in declaration order is
/// always the one chosen. Matches are anchored at the scan cursor; the lexer
/// never searches ahead.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Non-negative integer literal tokens, such as `42` or `007`.
    #[regex(r"[0-9]+")]
    Number,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces and tabs. Matched to advance the cursor, never emitted.
    #[regex(r"[ \t]+", logos::skip)]
    Whitespace,
}

impl TokenKind {
    /// Returns the display name of the kind.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::lexer::TokenKind;
    ///
    /// assert_eq!(TokenKind::Number.name(), "NUMBER");
    /// assert_eq!(TokenKind::Slash.name(), "OP_DIV");
    /// ```
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Number => "NUMBER",
            Self::Plus => "OP_ADD",
            Self::Minus => "OP_SUB",
            Self::Star => "OP_MUL",
            Self::Slash => "OP_DIV",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Whitespace => "WHITESPACE",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified, positioned lexeme.
///
/// `offset` is the byte offset where the match began. Every character the
/// lexer accepts is ASCII, so it is also the character index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// The rule that matched.
    pub kind:   TokenKind,
    /// The exact matched text.
    pub lexeme: String,
    /// Where the match began in the source text.
    pub offset: usize,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.kind, self.lexeme)
    }
}

/// The ordered tokens of one source text.
///
/// Tokens are appended left to right by [`tokenize`] and only read afterwards.
/// The sequence dereferences to a slice, which is what the parser and the
/// structural check consume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TokenSequence(Vec<Token>);

impl TokenSequence {
    fn push(&mut self, token: Token) {
        self.0.push(token);
    }

    /// Iterates over `(kind, lexeme)` pairs, leaving offsets out.
    ///
    /// Two sources that differ only in whitespace yield equal pairs.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::lexer::tokenize;
    ///
    /// let tight = tokenize("5+(6*2)").unwrap();
    /// let spaced = tokenize(" 5 + ( 6 * 2 ) ").unwrap();
    ///
    /// assert!(tight.pairs().eq(spaced.pairs()));
    /// assert_ne!(tight, spaced);
    /// ```
    pub fn pairs(&self) -> impl Iterator<Item = (TokenKind, &str)> {
        self.0.iter().map(|token| (token.kind, token.lexeme.as_str()))
    }
}

impl std::ops::Deref for TokenSequence {
    type Target = [Token];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Converts source text into its token sequence.
///
/// Scans from offset 0 to the end of the text. Whitespace is consumed
/// without producing a token. Empty text yields an empty sequence.
///
/// # Errors
/// Returns [`LexError::UnexpectedCharacter`] for the first character no rule
/// accepts. Scanning stops there; nothing after it is examined.
///
/// # Example
/// ```
/// use reckon::{
///     error::LexError,
///     interpreter::lexer::{TokenKind, tokenize},
/// };
///
/// let tokens = tokenize("12 * (3+4)").unwrap();
/// assert_eq!(tokens.len(), 7);
/// assert_eq!(tokens[0].kind, TokenKind::Number);
/// assert_eq!(tokens[0].lexeme, "12");
/// assert_eq!(tokens[2].offset, 5);
///
/// assert_eq!(tokenize("5 & 3"),
///            Err(LexError::UnexpectedCharacter { character: '&',
///                                                offset:    2, }));
/// ```
pub fn tokenize(source: &str) -> Result<TokenSequence, LexError> {
    let mut tokens = TokenSequence::default();
    let mut lexer = TokenKind::lexer(source);

    while let Some(token) = lexer.next() {
        let offset = lexer.span().start;

        if let Ok(kind) = token {
            tokens.push(Token { kind,
                                lexeme: lexer.slice().to_string(),
                                offset });
        } else {
            let character = source.get(offset..)
                                  .and_then(|rest| rest.chars().next())
                                  .unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(LexError::UnexpectedCharacter { character, offset });
        }
    }

    Ok(tokens)
}
