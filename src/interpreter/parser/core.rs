use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::{Diagnostic, SyntaxError},
    interpreter::{
        evaluator::core::evaluate,
        lexer::Token,
        parser::binary::parse_additive,
        value::Number,
    },
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a complete token sequence into an expression tree.
///
/// The whole sequence must form exactly one expression:
///
/// ```text
///     expression := term (("+" | "-") term)*
///     term       := factor (("*" | "/") factor)*
///     factor     := NUMBER | "(" expression ")"
/// ```
///
/// # Parameters
/// - `tokens`: The tokens to parse, in source order.
/// - `max_nesting`: How deeply parentheses may nest.
///
/// # Errors
/// - `NothingToParse` if `tokens` is empty.
/// - `UnexpectedTrailingTokens` if tokens remain after the expression.
/// - Any error raised while parsing the expression itself.
///
/// # Example
/// ```
/// use reckon::interpreter::{lexer::tokenize, parser::core::parse_tokens};
///
/// let tokens = tokenize("6-3-2").unwrap();
/// let expr = parse_tokens(&tokens, 16).unwrap();
/// assert_eq!(expr.to_string(), "((6 - 3) - 2)");
/// ```
pub fn parse_tokens(tokens: &[Token], max_nesting: usize) -> ParseResult<Expr> {
    if tokens.is_empty() {
        return Err(SyntaxError::NothingToParse);
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, max_nesting)?;

    if let Some(token) = iter.next() {
        return Err(SyntaxError::UnexpectedTrailingTokens { lexeme: token.lexeme.clone(),
                                                           offset: token.offset, });
    }

    Ok(expr)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level and recursively descends through the hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth_left`: How many more parentheses may open before the limit.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth_left: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_additive(tokens, depth_left)
}

/// Parses a token sequence and evaluates it.
///
/// # Errors
/// A [`Diagnostic`] of kind `Syntax` when the grammar is violated, or of kind
/// `Arithmetic` when evaluation fails, for example on division by zero.
///
/// # Example
/// ```
/// use reckon::{
///     error::ErrorKind,
///     interpreter::{lexer::tokenize, parser::core::parse, value::Number},
/// };
///
/// let tokens = tokenize("2+3*4").unwrap();
/// assert_eq!(parse(&tokens, 16), Ok(Number::Integer(14)));
///
/// let tokens = tokenize("5/(2-2)").unwrap();
/// assert_eq!(parse(&tokens, 16).unwrap_err().kind, ErrorKind::Arithmetic);
/// ```
pub fn parse(tokens: &[Token], max_nesting: usize) -> Result<Number, Diagnostic> {
    let expr = parse_tokens(tokens, max_nesting)?;
    Ok(evaluate(&expr)?)
}
