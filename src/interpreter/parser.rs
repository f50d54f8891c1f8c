/// Parser entry points.
///
/// Holds the top-level parse functions, which reject empty and trailing
/// input, and the optional parse-and-evaluate convenience.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two precedence levels of the grammar as left-associative
/// loops: additive (`+`, `-`) over multiplicative (`*`, `/`).
pub mod binary;

/// Primary expression parsing.
///
/// Parses numbers and parenthesized sub-expressions, and enforces the
/// nesting limit.
pub mod primary;
