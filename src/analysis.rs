use crate::{
    ast::Expr,
    interpreter::{lexer::TokenSequence, value::Number},
};

/// A pipeline stage that ran and passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// The text was split into tokens.
    Lexical,
    /// Parentheses balanced and no literal zero divisor was found.
    Structural,
    /// The tokens formed one well-formed expression.
    Syntax,
    /// The expression produced a value.
    Evaluation,
    /// The value lies within the ceiling.
    Bound,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical => write!(f, "Lexical analysis: tokens extracted."),
            Self::Structural => write!(f, "Semantic analysis: no structural errors detected."),
            Self::Syntax => write!(f, "Syntax analysis: expression is well-formed."),
            Self::Evaluation => write!(f, "Evaluation: result computed."),
            Self::Bound => write!(f, "Semantic analysis: result within allowed magnitude."),
        }
    }
}

/// Everything a successful analysis produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// The tokens of the source text, in order.
    pub tokens: TokenSequence,
    /// The parsed expression.
    pub expr:   Expr,
    /// The final value.
    pub value:  Number,
    /// The stages that ran, in the order they ran.
    pub stages: Vec<Stage>,
}
