use crate::{
    ast::{Expr, Operation},
    error::ArithmeticError,
    interpreter::{evaluator::binary::eval_binary, value::Number},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `ArithmeticError` describing the failure.
pub type EvalResult<T> = Result<T, ArithmeticError>;

/// Evaluates an expression tree and returns its value.
///
/// Operands are evaluated left to right, and each operator is applied as
/// soon as its right operand is known, so the first failing operation in
/// reading order is the one reported.
///
/// Recursion follows the nesting of the tree, which only parentheses and
/// changes of precedence deepen. The operations of a chain are applied in a
/// loop, however many there are.
///
/// # Errors
/// Returns an [`ArithmeticError`] on division by zero, or when a literal or
/// an operation leaves the finite range.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     evaluator::core::evaluate,
///     lexer::tokenize,
///     parser::core::parse_tokens,
///     value::Number,
/// };
///
/// let tokens = tokenize("20/4/5").unwrap();
/// let expr = parse_tokens(&tokens, 16).unwrap();
///
/// assert_eq!(evaluate(&expr), Ok(Number::real(1.0)));
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<Number> {
    match expr {
        Expr::Literal { value, offset } => {
            if value.is_finite() {
                Ok(*value)
            } else {
                Err(ArithmeticError::Overflow { offset: *offset })
            }
        },
        Expr::Chain { first, rest } => {
            let mut result = evaluate(first)?;
            for Operation { op, operand, offset } in rest {
                let right = evaluate(operand)?;
                result = eval_binary(*op, result, right, *offset)?;
            }
            Ok(result)
        },
    }
}
