use crate::{
    error::SemanticError,
    interpreter::{semantic::SemanticResult, value::Number},
};

/// Verifies that a result lies within `[-ceiling, ceiling]`.
///
/// The bound is closed: a value whose magnitude equals the ceiling is
/// accepted. The value itself is never clamped or rounded.
///
/// # Errors
/// `MagnitudeExceeded` if `|value| > ceiling`.
///
/// # Example
/// ```
/// use reckon::interpreter::{semantic::bound::check_bound, value::Number};
///
/// assert!(check_bound(Number::Integer(1_000_000), 1_000_000.0).is_ok());
/// assert!(check_bound(Number::Integer(-1_000_000), 1_000_000.0).is_ok());
/// assert!(check_bound(Number::real(1_000_000.5), 1_000_000.0).is_err());
/// ```
pub fn check_bound(value: Number, ceiling: f64) -> SemanticResult<()> {
    if value.magnitude() > ceiling {
        return Err(SemanticError::MagnitudeExceeded { value, ceiling });
    }

    Ok(())
}
