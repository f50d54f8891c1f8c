/// Core evaluation logic for expression trees.
///
/// Walks an [`Expr`](crate::ast::Expr) and folds it into a single number.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the four arithmetic operators, integer overflow fallback and
/// the division-by-zero check.
pub mod binary;
