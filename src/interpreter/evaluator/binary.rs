use crate::{
    ast::BinaryOperator,
    error::ArithmeticError,
    interpreter::{evaluator::core::EvalResult, value::Number},
};

/// Evaluates a scalar arithmetic operation.
///
/// Two integer operands stay integral under `+`, `-` and `*`; if the integer
/// result would overflow, the operation is redone on reals. Division is
/// always true division and yields a real. The divisor is checked for zero
/// before every division, whatever expression produced it.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `offset`: Offset of the operator, for error reporting.
///
/// # Errors
/// - `DivisionByZero` if `op` is `Div` and `right` is zero.
/// - `Overflow` if the real result is not finite.
///
/// # Example
/// ```
/// use reckon::{
///     ast::BinaryOperator,
///     error::ArithmeticError,
///     interpreter::{evaluator::binary::eval_binary, value::Number},
/// };
///
/// let sum = eval_binary(BinaryOperator::Add, Number::Integer(2), Number::Integer(3), 1);
/// assert_eq!(sum, Ok(Number::Integer(5)));
///
/// let ratio = eval_binary(BinaryOperator::Div, Number::Integer(7), Number::Integer(2), 1);
/// assert_eq!(ratio, Ok(Number::real(3.5)));
///
/// let zero = eval_binary(BinaryOperator::Div, Number::Integer(7), Number::real(0.0), 4);
/// assert_eq!(zero, Err(ArithmeticError::DivisionByZero { offset: 4 }));
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: Number,
                   right: Number,
                   offset: usize)
                   -> EvalResult<Number> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    if op == Div && right.is_zero() {
        return Err(ArithmeticError::DivisionByZero { offset });
    }

    if let (Number::Integer(a), Number::Integer(b)) = (left, right)
       && let Some(n) = checked_integer_op(op, a, b)
    {
        return Ok(Number::Integer(n));
    }

    let (a, b) = (left.as_real(), right.as_real());
    let value = match op {
        Add => a + b,
        Sub => a - b,
        Mul => a * b,
        Div => a / b,
    };

    if value.is_finite() {
        Ok(Number::real(value))
    } else {
        Err(ArithmeticError::Overflow { offset })
    }
}

/// Applies `op` to two integers, or returns `None` when the result needs a
/// real: on overflow, and always for division.
const fn checked_integer_op(op: BinaryOperator, a: i64, b: i64) -> Option<i64> {
    match op {
        BinaryOperator::Add => a.checked_add(b),
        BinaryOperator::Sub => a.checked_sub(b),
        BinaryOperator::Mul => a.checked_mul(b),
        BinaryOperator::Div => None,
    }
}
