/// Structural checks on the raw token sequence.
///
/// Runs before parsing: parenthesis balance and division by a literal zero.
pub mod structure;

/// Magnitude check on the evaluated result.
///
/// Runs after evaluation and accepts or rejects the value without changing it.
pub mod bound;

/// Result type used by the semantic checks.
pub type SemanticResult<T> = Result<T, crate::error::SemanticError>;
