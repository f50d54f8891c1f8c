/// Numeric conversion helpers.
///
/// This module provides the conversions shared by the parser, the evaluator
/// and the semantic checks: turning digit lexemes into numbers and promoting
/// integers to floating point.
pub mod num;
