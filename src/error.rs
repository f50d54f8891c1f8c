/// Lexical errors.
///
/// Raised by the lexer when no token rule accepts the character under the
/// scan cursor.
pub mod lex_error;
/// Syntax errors.
///
/// Defines every way a token sequence can violate the expression grammar:
/// missing operands, unmatched parentheses, trailing tokens, empty input and
/// excessive nesting.
pub mod parse_error;
/// Arithmetic errors.
///
/// Raised while evaluating a parsed expression, such as division by a
/// zero-valued operand or a result that no longer fits a finite number.
pub mod runtime_error;
/// Semantic errors.
///
/// Raised by the structural check before parsing and by the bound check after
/// evaluation.
pub mod semantic_error;
/// The single reported failure of an analysis.
///
/// Every phase error converts into a [`Diagnostic`] at the pipeline
/// boundary, tagged with its [`ErrorKind`].
pub mod diagnostic;

pub use diagnostic::{Diagnostic, ErrorKind};
pub use lex_error::LexError;
pub use parse_error::SyntaxError;
pub use runtime_error::ArithmeticError;
pub use semantic_error::SemanticError;
