use crate::{
    error::SemanticError,
    interpreter::{
        lexer::{Token, TokenKind},
        semantic::SemanticResult,
    },
    util::num::is_zero_literal,
};

/// Runs the structural check over a token sequence.
///
/// Parenthesis balance is verified first. When `zero_divisor_literals` is
/// set, every `/` directly followed by a zero literal is rejected as well.
///
/// Only literal divisors are visible at this stage: `5/(2-2)` passes here
/// and fails during evaluation instead.
///
/// # Errors
/// - `UnbalancedParentheses` from [`check_balance`].
/// - `DivisionByZeroLiteral` from [`check_zero_divisors`].
///
/// # Example
/// ```
/// use reckon::interpreter::{lexer::tokenize, semantic::structure::check_structure};
///
/// assert!(check_structure(&tokenize("(5+3)").unwrap(), true).is_ok());
/// assert!(check_structure(&tokenize("5/0").unwrap(), true).is_err());
/// assert!(check_structure(&tokenize("5/0").unwrap(), false).is_ok());
/// ```
pub fn check_structure(tokens: &[Token], zero_divisor_literals: bool) -> SemanticResult<()> {
    check_balance(tokens)?;

    if zero_divisor_literals {
        check_zero_divisors(tokens)?;
    }

    Ok(())
}

/// Verifies that parentheses balance.
///
/// Scans left to right keeping the offsets of the currently open `(`. A `)`
/// with nothing open fails immediately at its offset; anything still open
/// at the end fails at the offset of the outermost unclosed `(`.
///
/// # Example
/// ```
/// use reckon::{
///     error::SemanticError,
///     interpreter::{lexer::tokenize, semantic::structure::check_balance},
/// };
///
/// assert_eq!(check_balance(&tokenize("5+3)").unwrap()),
///            Err(SemanticError::UnbalancedParentheses { offset: 3 }));
/// assert_eq!(check_balance(&tokenize("((5+3)").unwrap()),
///            Err(SemanticError::UnbalancedParentheses { offset: 0 }));
/// ```
pub fn check_balance(tokens: &[Token]) -> SemanticResult<()> {
    let mut open = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::LParen => open.push(token.offset),
            TokenKind::RParen => {
                if open.pop().is_none() {
                    return Err(SemanticError::UnbalancedParentheses { offset: token.offset });
                }
            },
            _ => {},
        }
    }

    match open.first() {
        Some(&offset) => Err(SemanticError::UnbalancedParentheses { offset }),
        None => Ok(()),
    }
}

/// Rejects any `/` immediately followed by a literal zero such as `0` or `00`.
///
/// # Errors
/// `DivisionByZeroLiteral` pointing at the first zero divisor.
pub fn check_zero_divisors(tokens: &[Token]) -> SemanticResult<()> {
    let divisor = tokens.windows(2)
                        .filter(|pair| pair[0].kind == TokenKind::Slash)
                        .map(|pair| &pair[1])
                        .find(|next| next.kind == TokenKind::Number && is_zero_literal(&next.lexeme));

    match divisor {
        Some(divisor) => Err(SemanticError::DivisionByZeroLiteral { offset: divisor.offset }),
        None => Ok(()),
    }
}
