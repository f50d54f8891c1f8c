use crate::interpreter::value::Number;

/// Promotes an `i64` to `f64`.
///
/// Values beyond `2^53` in absolute value round to the nearest representable
/// `f64`.
///
/// ## Example
/// ```
/// use reckon::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(42), 42.0);
/// assert_eq!(i64_to_f64(-9_007_199_254_740_991), -9_007_199_254_740_991.0);
/// assert_eq!(i64_to_f64(i64::MAX), 9_223_372_036_854_775_808.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}

/// Converts a run of ASCII digits into a [`Number`].
///
/// Literals that fit an `i64` stay integers. Larger literals become reals, so
/// `99999999999999999999` is still a number rather than a failure. Past the
/// `f64` range the real is infinite.
///
/// ## Returns
/// - `Some(Number)`: The literal's value.
/// - `None`: If the lexeme is not made of digits.
///
/// ## Example
/// ```
/// use reckon::{interpreter::value::Number, util::num::literal_to_number};
///
/// assert_eq!(literal_to_number("042"), Some(Number::Integer(42)));
/// assert_eq!(literal_to_number("99999999999999999999"),
///            Some(Number::real(1e20)));
/// assert_eq!(literal_to_number(&"9".repeat(400)),
///            Some(Number::real(f64::INFINITY)));
/// assert_eq!(literal_to_number("4x"), None);
/// ```
#[must_use]
pub fn literal_to_number(lexeme: &str) -> Option<Number> {
    if lexeme.is_empty() || !lexeme.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    if let Ok(value) = lexeme.parse::<i64>() {
        return Some(Number::Integer(value));
    }

    lexeme.parse::<f64>().ok().map(Number::real)
}

/// Returns `true` when a digit lexeme denotes zero, such as `0` or `000`.
///
/// ## Example
/// ```
/// use reckon::util::num::is_zero_literal;
///
/// assert!(is_zero_literal("0"));
/// assert!(is_zero_literal("000"));
/// assert!(!is_zero_literal("10"));
/// assert!(!is_zero_literal(""));
/// ```
#[must_use]
pub fn is_zero_literal(lexeme: &str) -> bool {
    !lexeme.is_empty() && lexeme.bytes().all(|b| b == b'0')
}
