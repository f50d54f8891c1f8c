use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, parse_expression},
    },
    util::num::literal_to_number,
};

const EXPECTED_OPERAND: &str = "a number or '('";

/// Parses a primary (atomic) expression.
///
/// The grammar has no unary operators, so `-5` fails here: a `-` can only
/// ever follow a complete operand.
///
/// Grammar:
/// ```text
///     primary := NUMBER
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth_left`: Remaining nesting budget.
///
/// # Returns
/// The parsed primary [`Expr`] or a `SyntaxError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth_left: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let token = tokens.next()
                      .ok_or(SyntaxError::UnexpectedEndOfInput { expected: EXPECTED_OPERAND })?;

    match token.kind {
        TokenKind::Number => parse_literal(token),
        TokenKind::LParen => parse_grouping(tokens, token.offset, depth_left),
        _ => Err(SyntaxError::UnexpectedToken { lexeme:   token.lexeme.clone(),
                                                offset:   token.offset,
                                                expected: EXPECTED_OPERAND, }),
    }
}

/// Converts a `NUMBER` token into a literal node.
///
/// Any run of digits is grammatical. A literal beyond the `f64` range is kept
/// as an infinite real and rejected when it is evaluated.
fn parse_literal(token: &Token) -> ParseResult<Expr> {
    let value = literal_to_number(&token.lexeme).ok_or_else(|| {
                    SyntaxError::UnexpectedToken { lexeme:   token.lexeme.clone(),
                                                   offset:   token.offset,
                                                   expected: EXPECTED_OPERAND, }
                })?;

    Ok(Expr::Literal { value,
                       offset: token.offset })
}

/// Parses the body of a parenthesized expression and its closing `)`.
///
/// Expects the opening parenthesis to have been consumed already. Each group
/// spends one unit of the nesting budget, which bounds recursion depth.
///
/// # Parameters
/// - `tokens`: Token iterator positioned right after `(`.
/// - `open_offset`: Offset of the consumed `(`.
/// - `depth_left`: Remaining nesting budget.
///
/// # Errors
/// - `NestingTooDeep` when the budget is exhausted.
/// - `ExpectedClosingParen` when the inner expression is not followed by `)`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>,
                         open_offset: usize,
                         depth_left: usize)
                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let Some(depth_left) = depth_left.checked_sub(1) else {
        return Err(SyntaxError::NestingTooDeep { offset: open_offset });
    };

    let expr = parse_expression(tokens, depth_left)?;

    match tokens.next() {
        Some(Token { kind: TokenKind::RParen,
                     .. }) => Ok(expr),
        Some(token) => {
            Err(SyntaxError::ExpectedClosingParen { open_offset,
                                                    found: Some((token.lexeme.clone(),
                                                                 token.offset)) })
        },
        None => Err(SyntaxError::ExpectedClosingParen { open_offset,
                                                        found: None }),
    }
}
