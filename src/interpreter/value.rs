use ordered_float::OrderedFloat;

use crate::util::num::i64_to_f64;

/// The numeric result of evaluating an expression.
///
/// Literals produce integers. Addition, subtraction and multiplication keep
/// two integer operands integral and fall back to reals only on overflow.
/// Division always yields a real, so once a division happens the running
/// value may be fractional.
///
/// Reals are wrapped in [`OrderedFloat`] so results can be compared and
/// hashed. Only a literal too large for `f64` is ever infinite, and the
/// evaluator rejects it, so every evaluated result is finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Number {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point value.
    Real(OrderedFloat<f64>),
}

impl Number {
    /// Creates a real number.
    #[must_use]
    pub const fn real(value: f64) -> Self {
        Self::Real(OrderedFloat(value))
    }

    /// Returns the value as an `f64`, promoting integers.
    ///
    /// ## Example
    /// ```
    /// use reckon::interpreter::value::Number;
    ///
    /// assert_eq!(Number::Integer(3).as_real(), 3.0);
    /// assert_eq!(Number::real(0.5).as_real(), 0.5);
    /// ```
    #[must_use]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64(n),
            Self::Real(r) => r.0,
        }
    }

    /// Returns `true` when the value equals zero, including `-0.0`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub const fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r.0 == 0.0,
        }
    }

    /// Returns the absolute value as an `f64`.
    #[must_use]
    pub const fn magnitude(self) -> f64 {
        self.as_real().abs()
    }

    /// Returns `true` unless the value is an infinite or NaN real.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        match self {
            Self::Integer(_) => true,
            Self::Real(r) => r.0.is_finite(),
        }
    }
}

/// Formats integers as written and integral reals with a trailing `.0`, so
/// `20/4/5` shows as `1.0` and stays distinguishable from the integer `1`.
impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) if r.0.fract() == 0.0 && r.0.abs() < 1e16 => write!(f, "{:.1}", r.0),
            Self::Real(r) => write!(f, "{}", r.0),
        }
    }
}
