/// The evaluator module computes the value of a parsed expression.
///
/// The evaluator traverses the AST left to right, applies each arithmetic
/// operator as soon as both operands are known, and reports division by zero
/// and numeric overflow.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw source text and produces the ordered sequence of
/// tokens (numbers, operators and parentheses), each with the exact lexeme
/// and source offset. This is the first stage of analysis.
///
/// # Responsibilities
/// - Converts the input text into positioned tokens.
/// - Discards whitespace between tokens.
/// - Reports the first character no rule accepts.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser is a recursive-descent parser with one function per precedence
/// level. It validates the grammar and reports syntax errors with source
/// offsets.
pub mod parser;
/// The semantic module holds the checks that run around the parser.
///
/// # Responsibilities
/// - Rejects unbalanced parentheses and literal zero divisors before parsing.
/// - Rejects results whose magnitude exceeds the configured ceiling.
pub mod semantic;
/// The value module defines the numeric result type.
///
/// Integers and reals are kept apart so that results show whether a division
/// took place, and both are comparable and hashable.
pub mod value;
