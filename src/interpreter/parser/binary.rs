use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, Operation},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, primary::parse_primary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`. The operands are
/// collected into one chain applied from the left, so `6-3-2` means
/// `(6-3)-2`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with lookahead.
/// - `depth_left`: Remaining nesting budget, passed through to operands.
///
/// # Returns
/// An `Expr::Chain` of the operands, or the single operand when no operator
/// follows it.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth_left: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let first = parse_multiplicative(tokens, depth_left)?;
    let mut rest = Vec::new();
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token.kind)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let offset = token.offset;
            tokens.next();
            let operand = parse_multiplicative(tokens, depth_left)?;
            rest.push(Operation { op,
                                  operand,
                                  offset });
            continue;
        }
        break;
    }
    Ok(Expr::chain(first, rest))
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`, binding tighter than
/// `+` and `-`.
///
/// The rule is: `multiplicative := primary (("*" | "/") primary)*`
///
/// # Parameters
/// - `tokens`: Token stream with lookahead.
/// - `depth_left`: Remaining nesting budget, passed through to operands.
///
/// # Returns
/// An `Expr::Chain` of primary nodes, or the single primary node.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                   depth_left: usize)
                                   -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let first = parse_primary(tokens, depth_left)?;
    let mut rest = Vec::new();
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token.kind)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let offset = token.offset;
            tokens.next();
            let operand = parse_primary(tokens, depth_left)?;
            rest.push(Operation { op,
                                  operand,
                                  offset });
            continue;
        }
        break;
    }
    Ok(Expr::chain(first, rest))
}

/// Maps a token kind to its corresponding binary operator.
///
/// # Parameters
/// - `kind`: Token kind to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the kind is one of `+ - * /`, otherwise `None`.
///
/// # Example
/// ```
/// use reckon::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(TokenKind::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
